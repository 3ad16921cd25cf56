//! Canonical chat replies for renderer tests.
//!
//! Each fixture is a complete assistant reply; streaming tests cut them at
//! arbitrary points.

/// Reply with one order widget between two paragraphs.
pub fn order_reply() -> &'static str {
    concat!(
        "Here is your latest order:\n\n",
        "```ui-widget\n",
        "{\"type\": \"order\", \"order_no\": \"SO-1001\", \"status\": \"shipped\",\n",
        " \"items\": [{\"name\": \"Ceramic Mug\", \"quantity\": 2, \"price\": 12.5}],\n",
        " \"total_amount\": 25, \"currency\": \"USD\"}\n",
        "```\n\n",
        "Anything else I can help with?\n"
    )
}

/// Reply whose widget type nobody renders.
pub fn unknown_widget_reply() -> &'static str {
    concat!(
        "Beaming you up:\n\n",
        "```ui-widget\n",
        "{\"type\": \"teleport\", \"destination\": \"bridge\"}\n",
        "```\n"
    )
}

/// Reply mixing a product list, a logistics card and a broken widget block.
pub fn mixed_reply() -> &'static str {
    concat!(
        "Some picks for you:\n\n",
        "```ui-widget\n",
        "{\"type\": \"product-list\", \"products\": [",
        "{\"title\": \"Kettle\", \"price\": 39},",
        "{\"title\": \"Teapot\", \"price\": \"29.00\"}]}\n",
        "```\n\n",
        "And your parcel:\n\n",
        "```ui-widget\n",
        "{\"type\": \"logistics\", \"carrier\": \"SF\", \"tracking_no\": \"SF123\",\n",
        " \"timeline\": [{\"time\": \"09:00\", \"description\": \"Out for delivery\"}]}\n",
        "```\n\n",
        "```ui-widget\n",
        "{\"type\": \"order\", oops}\n",
        "```\n"
    )
}

/// Reply with an image gallery, a table, a task list and a code block.
pub fn rich_markdown_reply() -> &'static str {
    concat!(
        "## Summary\n\n",
        "![front](https://cdn.example.com/front.png) ",
        "![back](https://cdn.example.com/back.png)\n\n",
        "| Item | Price |\n",
        "|:-----|------:|\n",
        "| Mug | 12.50 |\n\n",
        "- [x] Paid\n",
        "- [ ] Shipped\n\n",
        "```rust\nfn main() {}\n```\n"
    )
}

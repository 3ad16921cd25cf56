use super::helpers::render_for_test;
use crate::render::test_fixtures::order_reply;
use crate::render::{MessageRenderer, RenderCache, RenderedFragment, RenderedMessage};
use crate::widgets::Widget;

#[test]
fn repeated_renders_hit_the_cache() {
    let mut renderer = MessageRenderer::new();
    let first = renderer.render("**hello** world");
    let second = renderer.render("**hello** world");
    assert_eq!(first, second);
    assert_eq!(renderer.stats().renders, 2);
    assert_eq!(renderer.stats().cache_hits, 1);
    assert_eq!(renderer.cache().len(), 1);
}

#[test]
fn cache_evicts_oldest_entry_first() {
    let mut renderer = MessageRenderer::new().with_cache(RenderCache::new(2));
    renderer.render("a");
    renderer.render("b");
    renderer.render("c");
    assert_eq!(renderer.cache().len(), 2);

    renderer.render("c");
    assert_eq!(renderer.stats().cache_hits, 1);
    renderer.render("a");
    assert_eq!(renderer.stats().cache_hits, 1, "oldest entry should be gone");
    assert_eq!(renderer.cache().len(), 2);
}

#[test]
fn zero_capacity_disables_caching() {
    let mut renderer = MessageRenderer::new().with_cache(RenderCache::new(0));
    renderer.render("same");
    renderer.render("same");
    assert_eq!(renderer.stats().cache_hits, 0);
    assert!(renderer.cache().is_empty());
}

#[test]
fn cached_widget_messages_rebuild_fresh_widgets() {
    let mut renderer = MessageRenderer::new();
    let first = renderer.render(order_reply());
    let second = renderer.render(order_reply());
    assert_eq!(renderer.stats().cache_hits, 1);
    assert_eq!(first, second);
    assert_eq!(second.widget_count(), 1);
}

#[test]
fn widget_payload_changes_are_visible_through_the_cache() {
    let mut renderer = MessageRenderer::new();
    let make = |order_no: &str| {
        format!("Your order:\n\n```ui-widget\n{{\"type\":\"order\",\"order_no\":\"{order_no}\"}}\n```\n")
    };
    renderer.render(&make("A-1"));
    let rendered = renderer.render(&make("B-2"));

    // Same surrounding markup, so the second render reuses the cached HTML.
    assert_eq!(renderer.stats().cache_hits, 1);
    let widget = rendered.widgets().next();
    match widget {
        Some(Widget::Order(order)) => assert_eq!(order.order_no, "B-2"),
        other => panic!("expected order widget, got {other:?}"),
    }
}

#[test]
fn placeholders_round_trip_valid_blocks_and_leave_invalid_ones() {
    let valid = |n: usize| format!("```ui-widget\n{{\"type\":\"product\",\"title\":\"P{n}\"}}\n```\n\n");
    let invalid = |n: usize| format!("```ui-widget\n{{\"type\": broken {n}\n```\n\n");
    let text = [valid(0), invalid(0), valid(1), valid(2), invalid(1), "done\n".to_string()].concat();

    let rendered = render_for_test(&text);
    let RenderedMessage::Fragments(fragments) = &rendered else {
        panic!("expected fragments");
    };

    let ids: Vec<&str> = fragments
        .iter()
        .filter_map(|fragment| match fragment {
            RenderedFragment::Widget { id, .. } => Some(id.as_str()),
            RenderedFragment::Html(_) => None,
        })
        .collect();
    assert_eq!(ids, ["widget-0", "widget-1", "widget-2"]);

    let titles: Vec<&str> = rendered
        .widgets()
        .filter_map(|widget| match widget {
            Widget::Product(product) => Some(product.title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, ["P0", "P1", "P2"]);

    let html = rendered.to_html();
    assert_eq!(html.matches(r#"<pre class="md-code-block">"#).count(), 2);
    assert!(html.contains("broken 0") && html.contains("broken 1"));
    assert!(!html.contains("data-widget-id"));
}

use crate::render::escape_html;
use std::sync::OnceLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

/// Class prefix applied to every highlighted token span.
pub const HIGHLIGHT_CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Languages the highlighter is allowed to resolve; everything else is
/// highlighted as plain text.
pub const REGISTERED_LANGUAGES: &[&str] = &[
    "python",
    "bash",
    "javascript",
    "typescript",
    "json",
    "toml",
    "yaml",
    "rust",
    "go",
    "c",
    "cpp",
    "java",
    "kotlin",
    "swift",
    "html",
    "xml",
    "css",
    "sql",
    "markdown",
    "diff",
];

const FALLBACK_THEMES: [&str; 3] = ["InspiredGitHub", "base16-ocean.light", "base16-ocean.dark"];

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

pub fn normalize_lang_hint(s: &str) -> String {
    let t = s.trim().to_ascii_lowercase();
    match t.as_str() {
        "py" | "python" => "python".into(),
        "bash" | "sh" | "zsh" | "shell" => "bash".into(),
        "js" | "javascript" | "jsx" | "mjs" => "javascript".into(),
        "ts" | "tsx" | "typescript" => "typescript".into(),
        "json" => "json".into(),
        "toml" => "toml".into(),
        "yaml" | "yml" => "yaml".into(),
        "rust" | "rs" => "rust".into(),
        "go" | "golang" => "go".into(),
        "c" | "h" => "c".into(),
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "c++" => "cpp".into(),
        "java" => "java".into(),
        "kotlin" | "kt" => "kotlin".into(),
        "swift" => "swift".into(),
        "html" | "htm" | "vue" => "html".into(),
        "xml" | "svg" => "xml".into(),
        "css" | "scss" | "less" => "css".into(),
        "sql" => "sql".into(),
        "md" | "markdown" => "markdown".into(),
        "diff" | "patch" => "diff".into(),
        other => other.into(),
    }
}

pub fn is_registered_language(lang_norm: &str) -> bool {
    REGISTERED_LANGUAGES.contains(&lang_norm)
}

/// Highlight a fenced code block body into classed HTML spans.
///
/// Unregistered languages, and registered ones the bundled syntax set does not
/// ship, are highlighted as plain text. A highlighting failure degrades to the
/// escaped source instead of surfacing an error.
pub fn highlight_code_html(lang_hint: &str, code: &str) -> String {
    let lang_norm = normalize_lang_hint(lang_hint);
    let ps = syntax_set();

    let syntax = if is_registered_language(&lang_norm) {
        ps.find_syntax_by_token(&lang_norm)
    } else {
        None
    }
    .unwrap_or_else(|| ps.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, ps, HIGHLIGHT_CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            debug!(lang = %lang_norm, error = %err, "highlighting failed; using plain text");
            return escape_html(code);
        }
    }
    generator.finalize()
}

/// Stylesheet matching [`HIGHLIGHT_CLASS_STYLE`] for a bundled syntect theme.
///
/// Unknown theme names fall back to the first bundled theme that exists.
pub fn stylesheet_for_theme(theme_name: &str) -> Option<String> {
    let ts = theme_set();
    let theme = ts.themes.get(theme_name).or_else(|| {
        FALLBACK_THEMES
            .iter()
            .find_map(|name| ts.themes.get(*name))
    })?;
    css_for_theme_with_class_style(theme, HIGHLIGHT_CLASS_STYLE).ok()
}

pub fn available_themes() -> Vec<String> {
    let mut names: Vec<String> = theme_set().themes.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lang_hint_maps_common_aliases() {
        assert_eq!(normalize_lang_hint("py"), "python");
        assert_eq!(normalize_lang_hint("JS"), "javascript");
        assert_eq!(normalize_lang_hint("TsX"), "typescript");
        assert_eq!(normalize_lang_hint("yml"), "yaml");
        assert_eq!(normalize_lang_hint("hpp"), "cpp");
        assert_eq!(normalize_lang_hint("rs"), "rust");
        assert_eq!(normalize_lang_hint(" klingon "), "klingon");
    }

    #[test]
    fn javascript_is_highlighted_with_scoped_classes() {
        let html = highlight_code_html("js", "console.log(1)\n");
        assert!(html.contains("hl-source hl-js"), "got: {html}");
        assert!(html.contains("console"));
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let html = highlight_code_html("klingon", "Qapla' <batlh>\n");
        assert!(html.contains("hl-text hl-plain"), "got: {html}");
        assert!(html.contains("&lt;batlh&gt;"));
        assert!(!html.contains("<batlh>"));
    }

    #[test]
    fn registered_language_missing_from_syntax_set_still_renders() {
        let html = highlight_code_html("kotlin", "val x = 1\n");
        assert!(html.contains("val x = 1"));
    }

    #[test]
    fn stylesheet_is_generated_for_known_and_unknown_themes() {
        let css = stylesheet_for_theme("InspiredGitHub").expect("css for bundled theme");
        assert!(css.contains(".hl-"));
        assert!(stylesheet_for_theme("no-such-theme").is_some());
    }

    #[test]
    fn available_themes_are_sorted() {
        let themes = available_themes();
        assert!(themes.contains(&"InspiredGitHub".to_string()));
        let mut sorted = themes.clone();
        sorted.sort();
        assert_eq!(themes, sorted);
    }
}

use std::error::Error;

use crate::core::config::RendererSettings;
use crate::utils::syntax::{available_themes, stylesheet_for_theme};

pub fn run_css(
    settings: &RendererSettings,
    theme: Option<&str>,
    list: bool,
) -> Result<(), Box<dyn Error>> {
    if list {
        for name in available_themes() {
            let marker = if name == settings.syntax_theme { "*" } else { " " };
            println!("{marker} {name}");
        }
        return Ok(());
    }

    let theme = theme.unwrap_or(&settings.syntax_theme);
    match stylesheet_for_theme(theme) {
        Some(css) => {
            print!("{css}");
            Ok(())
        }
        None => Err(format!("no stylesheet available for theme '{theme}'").into()),
    }
}

//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod action;
pub mod config;
pub mod css;
pub mod input;
pub mod render;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::action::run_action;
use crate::cli::config::run_config;
use crate::cli::css::run_css;
use crate::cli::render::{run_preprocess, run_render, run_stream, run_widgets, RenderOptions};
use crate::core::config::{Config, ConfigError};
use crate::core::constants::DEFAULT_STREAM_CHUNK;
use crate::utils::logging;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ", rustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    ")"
);

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Render chat messages with widget blocks to sanitized HTML")]
#[command(
    long_about = "Chatmark renders customer-service chat messages, including partial messages \
still streaming from an AI backend, into sanitized HTML. Fenced widget blocks \
(```ui-widget with a JSON body) become order, logistics, product, product-list and \
price-comparison cards.\n\n\
Input:\n\
  FILE              Message file to read; omit or use '-' for stdin\n\n\
Environment Variables:\n\
  CHATMARK_LOG      Log filter directive (e.g. chatmark=debug); logs go to stderr"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log pipeline activity to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a message to HTML
    Render {
        /// Message file (stdin when omitted or '-')
        file: Option<PathBuf>,
        /// Emit a complete HTML document with the highlight stylesheet inlined
        #[arg(long)]
        standalone: bool,
        /// Disable syntax highlighting for this run
        #[arg(long)]
        no_highlight: bool,
        /// Skip the HTML sanitizer for this run (output is unsafe to embed)
        #[arg(long)]
        no_sanitize: bool,
    },
    /// Print the streaming-safe preprocessed markdown
    Preprocess {
        /// Message file (stdin when omitted or '-')
        file: Option<PathBuf>,
    },
    /// List the widget blocks found in a message as JSON
    Widgets {
        /// Message file (stdin when omitted or '-')
        file: Option<PathBuf>,
    },
    /// Replay a message as a stream of deltas through one renderer
    Stream {
        /// Message file (stdin when omitted or '-')
        file: Option<PathBuf>,
        /// Characters appended per delta
        #[arg(long, default_value_t = DEFAULT_STREAM_CHUNK)]
        chunk: usize,
        /// Full re-renders of the finished message after the stream ends
        #[arg(long, default_value_t = 1)]
        redraws: usize,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Print the stylesheet for highlighted code blocks
    Css {
        /// Theme to use instead of the configured one
        #[arg(long)]
        theme: Option<String>,
        /// List the bundled themes instead
        #[arg(long)]
        list: bool,
    },
    /// Run a widget action string through the action protocol
    Action {
        /// Action string, e.g. url:https://example.com, copy:SF123, msg:hello
        action: String,
        /// JSON object passed along with legacy actions
        #[arg(long)]
        payload: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print every setting with its current value
    Show,
    /// Print the configuration file path
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

/// Where the config file lives, resolved only by commands that read it.
pub(crate) struct ConfigSource {
    explicit: Option<PathBuf>,
}

impl ConfigSource {
    pub(crate) fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    fn path(&self) -> Result<PathBuf, ConfigError> {
        Config::resolve_path(self.explicit.as_deref())
    }

    fn load(&self) -> Result<Config, ConfigError> {
        Config::load_from_path(&self.path()?)
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    run_command(args.command, &ConfigSource::new(args.config))
}

pub(crate) fn run_command(command: Commands, config: &ConfigSource) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Render {
            file,
            standalone,
            no_highlight,
            no_sanitize,
        } => {
            let options = RenderOptions {
                standalone,
                no_highlight,
                no_sanitize,
            };
            run_render(file.as_deref(), &config.load()?.renderer_settings(), options)
        }
        Commands::Preprocess { file } => run_preprocess(file.as_deref()),
        Commands::Widgets { file } => {
            run_widgets(file.as_deref(), &config.load()?.renderer_settings())
        }
        Commands::Stream {
            file,
            chunk,
            redraws,
        } => run_stream(
            file.as_deref(),
            &config.load()?.renderer_settings(),
            chunk,
            redraws,
        ),
        Commands::Config { command } => {
            run_config(&config.path()?, command.unwrap_or(ConfigCommands::Show))
        }
        Commands::Css { theme, list } => {
            run_css(&config.load()?.renderer_settings(), theme.as_deref(), list)
        }
        Commands::Action { action, payload } => run_action(&action, payload.as_deref()),
    }
}

#[cfg(test)]
mod tests;

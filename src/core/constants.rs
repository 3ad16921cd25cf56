//! Shared constants used across the crate

/// Highlight fenced code blocks unless configured otherwise.
pub const DEFAULT_SYNTAX_HIGHLIGHTING: bool = true;

/// Bundled syntect theme used for the highlight stylesheet.
pub const DEFAULT_SYNTAX_THEME: &str = "InspiredGitHub";

pub const DEFAULT_SANITIZE: bool = true;

/// Characters per delta when `chatmark stream` replays a message.
pub const DEFAULT_STREAM_CHUNK: usize = 16;

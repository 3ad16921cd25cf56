pub mod data;
pub mod defaults;
pub mod io;

pub use data::{path_display, Config};
pub use defaults::RendererSettings;
pub use io::ConfigError;

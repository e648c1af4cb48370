//! JSON configuration for the command-line tools.
pub mod sobel;

pub use sobel::{load_config, parse_config, SobelOutputConfig, SobelToolConfig};

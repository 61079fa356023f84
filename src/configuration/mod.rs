mod document;
mod error;
mod settings;
mod text;

pub use document::{BootstrapDocument, CredentialsDocument, StaticIpDocument};
pub use error::ConfigError;
pub use settings::*;
pub use text::{BootstrapText, parse_integer, parse_octets};

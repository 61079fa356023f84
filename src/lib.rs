//! Static-IP station bootstrap settings for WiFi microcontrollers.
//!
//! [`BOOTSTRAP_SETTINGS`] holds the settings compiled into the firmware:
//! credentials, static addressing, channel, join retry budget and a debug
//! flag. They are checked during const evaluation, so a bad octet or an
//! unsupported auth mode fails the build. The same checks run at start-up for
//! settings loaded from JSON with [`BootstrapSettings::from_json`].
//!
//! ```
//! use sta_bootstrap::{BOOTSTRAP_SETTINGS, ConfigKey};
//!
//! for key in ConfigKey::ALL {
//!     let value = BOOTSTRAP_SETTINGS.read(key);
//!     assert_eq!(key.is_sensitive(), value.is_sensitive());
//! }
//! ```
//!
//! Logging goes through `defmt-or-log`; enable either the `defmt` or the `log`
//! feature. The `embassy-net` feature adds a conversion into
//! `embassy_net::StaticConfigV4`.
#![no_std]

mod bootstrap;
pub mod configuration;
#[cfg(all(test, feature = "log"))]
mod test_logging;
mod user_config;

pub use bootstrap::NetworkBootstrap;
pub use configuration::*;
pub use user_config::{BOOTSTRAP_SETTINGS, BOOTSTRAP_TEXT};

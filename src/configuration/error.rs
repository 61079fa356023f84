use core::fmt;

use super::settings::ConfigKey;

/// Authoring defects in a bootstrap configuration.
///
/// None of these can happen once a [`BootstrapSettings`](super::BootstrapSettings)
/// exists; they are reported while building one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    OctetOutOfRange(ConfigKey),
    MalformedAddress(ConfigKey),
    MalformedNumber(ConfigKey),
    NonContiguousNetmask,
    NonPositiveRetryBudget,
    RetryBudgetTooLarge,
    ChannelOutOfRange,
    EmptySsid,
    SsidTooLong,
    MissingSecret,
    UnexpectedSecret,
    InvalidSecretLength,
    UnsupportedAuthMode,
    MalformedDocument,
    BufferTooSmall,
}

impl ConfigError {
    pub const fn error_description(&self) -> &'static str {
        match self {
            ConfigError::OctetOutOfRange(_) => "Address octet outside 0..=255",
            ConfigError::MalformedAddress(_) => "Address is not a dotted quad",
            ConfigError::MalformedNumber(_) => "Value is not a decimal integer",
            ConfigError::NonContiguousNetmask => "Netmask is not contiguous",
            ConfigError::NonPositiveRetryBudget => "Retry budget must be positive",
            ConfigError::RetryBudgetTooLarge => "Retry budget exceeds 65535",
            ConfigError::ChannelOutOfRange => "WiFi channel outside 1..=14",
            ConfigError::EmptySsid => "SSID is empty",
            ConfigError::SsidTooLong => "SSID is longer than 32 bytes",
            ConfigError::MissingSecret => "Auth mode requires a secret",
            ConfigError::UnexpectedSecret => "Open network must not have a secret",
            ConfigError::InvalidSecretLength => "Secret length does not fit the auth mode",
            ConfigError::UnsupportedAuthMode => "Unsupported auth mode",
            ConfigError::MalformedDocument => "Malformed configuration document",
            ConfigError::BufferTooSmall => "Output buffer too small for the document",
        }
    }

    /// The key the defect was found in, where a single key is to blame.
    pub const fn key(&self) -> Option<ConfigKey> {
        match self {
            ConfigError::OctetOutOfRange(key)
            | ConfigError::MalformedAddress(key)
            | ConfigError::MalformedNumber(key) => Some(*key),
            ConfigError::NonContiguousNetmask => Some(ConfigKey::Netmask),
            ConfigError::NonPositiveRetryBudget | ConfigError::RetryBudgetTooLarge => {
                Some(ConfigKey::RetryBudget)
            }
            ConfigError::ChannelOutOfRange => Some(ConfigKey::WifiChannel),
            ConfigError::EmptySsid | ConfigError::SsidTooLong => Some(ConfigKey::Ssid),
            ConfigError::MissingSecret
            | ConfigError::UnexpectedSecret
            | ConfigError::InvalidSecretLength => Some(ConfigKey::Secret),
            ConfigError::UnsupportedAuthMode => Some(ConfigKey::AuthMode),
            ConfigError::MalformedDocument | ConfigError::BufferTooSmall => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{}: {}", key, self.error_description()),
            None => f.write_str(self.error_description()),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<serde_json_core::de::Error> for ConfigError {
    fn from(_: serde_json_core::de::Error) -> Self {
        ConfigError::MalformedDocument
    }
}

impl From<serde_json_core::ser::Error> for ConfigError {
    fn from(_: serde_json_core::ser::Error) -> Self {
        ConfigError::BufferTooSmall
    }
}

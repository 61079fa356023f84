//! Bootstrap settings compiled into the firmware.
//!
//! Set the variables in the environment or in a `.env` file next to
//! `Cargo.toml` (see `.env.example`). Unset variables fall back to the
//! defaults below, and the debug flag is on unless `BOOTSTRAP_DEBUG` turns it
//! off. The placeholder SSID and password have to be replaced for
//! a real deployment; the build prints a warning while they are in use.
//!
//! An invalid value stops the build with the defect named in the error.

use crate::configuration::{
    BootstrapSettings, BootstrapText, ConfigError, ConfigKey, DEFAULT_CHANNEL, DEFAULT_RETRY_BUDGET,
    parse_integer,
};

const DEFAULT_RETRY_BUDGET_TEXT: &str = "30";
const DEFAULT_CHANNEL_TEXT: &str = "6";

const _: () = {
    assert!(matches!(
        parse_integer(DEFAULT_RETRY_BUDGET_TEXT, ConfigKey::RetryBudget),
        Ok(value) if value == DEFAULT_RETRY_BUDGET as i64
    ));
    assert!(matches!(
        parse_integer(DEFAULT_CHANNEL_TEXT, ConfigKey::WifiChannel),
        Ok(value) if value == DEFAULT_CHANNEL as i64
    ));
};

const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) => value,
        None => default,
    }
}

pub const BOOTSTRAP_TEXT: BootstrapText<'static> = BootstrapText {
    debug: cfg!(feature_bootstrap_debug),
    retry_budget: env_or(option_env!("WIFI_JOIN_RETRIES"), DEFAULT_RETRY_BUDGET_TEXT),
    ip: env_or(option_env!("STATIC_IP_ADDRESS"), "192.168.1.4"),
    netmask: env_or(option_env!("STATIC_IP_NETMASK"), "255.255.255.0"),
    gateway: env_or(option_env!("STATIC_IP_GATEWAY"), "192.168.1.51"),
    dns: env_or(option_env!("STATIC_IP_DNS"), "192.168.1.39"),
    channel: env_or(option_env!("WIFI_CHANNEL"), DEFAULT_CHANNEL_TEXT),
    ssid: env_or(option_env!("WIFI_SSID"), "Ziggy999"),
    secret: env_or(option_env!("WIFI_PASSWORD"), "*********"),
    auth_mode: env_or(option_env!("WIFI_AUTH_MODE"), "WPA2-PSK"),
};

/// The settings every consumer reads. Validated during compilation.
pub static BOOTSTRAP_SETTINGS: BootstrapSettings<'static> = match BOOTSTRAP_TEXT.validate() {
    Ok(settings) => settings,
    Err(error) => build_error(error),
};

const fn build_error(error: ConfigError) -> ! {
    match error {
        ConfigError::OctetOutOfRange(_) => {
            panic!("STATIC_IP_*: address octet outside 0..=255")
        }
        ConfigError::MalformedAddress(_) => {
            panic!("STATIC_IP_*: address is not a dotted quad like 192.168.1.4")
        }
        ConfigError::MalformedNumber(_) => {
            panic!("WIFI_JOIN_RETRIES or WIFI_CHANNEL is not a decimal integer")
        }
        ConfigError::NonContiguousNetmask => panic!("STATIC_IP_NETMASK is not contiguous"),
        ConfigError::NonPositiveRetryBudget => panic!("WIFI_JOIN_RETRIES must be positive"),
        ConfigError::RetryBudgetTooLarge => panic!("WIFI_JOIN_RETRIES exceeds 65535"),
        ConfigError::ChannelOutOfRange => panic!("WIFI_CHANNEL outside 1..=14"),
        ConfigError::EmptySsid => panic!("WIFI_SSID is empty"),
        ConfigError::SsidTooLong => panic!("WIFI_SSID is longer than 32 bytes"),
        ConfigError::MissingSecret => panic!("WIFI_PASSWORD is required by WIFI_AUTH_MODE"),
        ConfigError::UnexpectedSecret => panic!("WIFI_PASSWORD must be empty for an open network"),
        ConfigError::InvalidSecretLength => {
            panic!("WIFI_PASSWORD length does not fit WIFI_AUTH_MODE")
        }
        ConfigError::UnsupportedAuthMode => panic!("WIFI_AUTH_MODE is not a supported auth mode"),
        ConfigError::MalformedDocument | ConfigError::BufferTooSmall => {
            panic!("invalid bootstrap settings")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{ConfigKey, ConfigValue};

    #[test]
    fn test_compiled_settings_match_their_text() {
        assert_eq!(BOOTSTRAP_TEXT.validate(), Ok(BOOTSTRAP_SETTINGS));
        assert_eq!(
            BOOTSTRAP_SETTINGS.debug().is_enabled(),
            cfg!(feature_bootstrap_debug)
        );
        assert_eq!(
            BOOTSTRAP_SETTINGS.read(ConfigKey::Ssid),
            ConfigValue::Text(BOOTSTRAP_TEXT.ssid)
        );
    }

    #[test]
    fn test_defaults() {
        if option_env!("BOOTSTRAP_DEBUG").is_none() {
            assert!(BOOTSTRAP_SETTINGS.debug().is_enabled());
        }
        if option_env!("WIFI_CHANNEL").is_none() {
            assert_eq!(BOOTSTRAP_SETTINGS.channel().get(), DEFAULT_CHANNEL);
        }
        if option_env!("WIFI_JOIN_RETRIES").is_none() {
            assert_eq!(
                BOOTSTRAP_SETTINGS.retry_budget().get(),
                DEFAULT_RETRY_BUDGET
            );
        }
        if option_env!("STATIC_IP_ADDRESS").is_none() {
            assert_eq!(
                BOOTSTRAP_SETTINGS.static_ip().ip().octets(),
                [192, 168, 1, 4]
            );
        }
    }
}

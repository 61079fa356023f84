use core::fmt;
use core::net::Ipv4Addr;

use super::network_settings::{DebugFlag, RetryBudget, WiFiChannel};
use super::wifi_settings::{AuthMode, Secret};

/// The closed set of bootstrap configuration keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigKey {
    DebugFlag,
    RetryBudget,
    IpAddress,
    Netmask,
    Gateway,
    Dns,
    WifiChannel,
    Ssid,
    Secret,
    AuthMode,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 10] = [
        ConfigKey::DebugFlag,
        ConfigKey::RetryBudget,
        ConfigKey::IpAddress,
        ConfigKey::Netmask,
        ConfigKey::Gateway,
        ConfigKey::Dns,
        ConfigKey::WifiChannel,
        ConfigKey::Ssid,
        ConfigKey::Secret,
        ConfigKey::AuthMode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConfigKey::DebugFlag => "DebugFlag",
            ConfigKey::RetryBudget => "RetryBudget",
            ConfigKey::IpAddress => "StaticNetworkAddress.ip",
            ConfigKey::Netmask => "StaticNetworkAddress.netmask",
            ConfigKey::Gateway => "StaticNetworkAddress.gateway",
            ConfigKey::Dns => "StaticNetworkAddress.dns",
            ConfigKey::WifiChannel => "WifiChannel",
            ConfigKey::Ssid => "StationCredentials.ssid",
            ConfigKey::Secret => "StationCredentials.secret",
            ConfigKey::AuthMode => "StationCredentials.authMode",
        }
    }

    pub fn from_name(name: &str) -> Option<ConfigKey> {
        ConfigKey::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Values under sensitive keys must be redacted before they are logged.
    pub const fn is_sensitive(self) -> bool {
        matches!(self, ConfigKey::Secret)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value returned by [`BootstrapSettings::read`](super::BootstrapSettings::read).
///
/// Both `Display` and `defmt::Format` render a [`ConfigValue::Secret`] as
/// `<redacted>`, so values can be logged as they come.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigValue<'a> {
    Flag(DebugFlag),
    Budget(RetryBudget),
    Address(Ipv4Addr),
    Channel(WiFiChannel),
    Text(&'a str),
    Secret(Secret<'a>),
    AuthMode(AuthMode),
}

impl ConfigValue<'_> {
    pub const fn is_sensitive(&self) -> bool {
        matches!(self, ConfigValue::Secret(_))
    }
}

impl fmt::Display for ConfigValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Flag(flag) => write!(f, "{}", flag.is_enabled()),
            ConfigValue::Budget(budget) => write!(f, "{}", budget.get()),
            ConfigValue::Address(address) => write!(f, "{}", address),
            ConfigValue::Channel(channel) => write!(f, "{}", channel.get()),
            ConfigValue::Text(text) => f.write_str(text),
            ConfigValue::Secret(_) => f.write_str(Secret::REDACTED),
            ConfigValue::AuthMode(mode) => f.write_str(mode.name()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigValue<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigValue::Flag(flag) => defmt::write!(f, "{}", flag.is_enabled()),
            ConfigValue::Budget(budget) => defmt::write!(f, "{}", budget.get()),
            ConfigValue::Address(address) => {
                let [a, b, c, d] = address.octets();
                defmt::write!(f, "{}.{}.{}.{}", a, b, c, d)
            }
            ConfigValue::Channel(channel) => defmt::write!(f, "{}", channel.get()),
            ConfigValue::Text(text) => defmt::write!(f, "{=str}", text),
            ConfigValue::Secret(_) => defmt::write!(f, "{=str}", Secret::REDACTED),
            ConfigValue::AuthMode(mode) => defmt::write!(f, "{=str}", mode.name()),
        }
    }
}

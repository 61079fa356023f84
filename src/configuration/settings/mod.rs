mod config_key;
mod network_settings;
mod static_ip_config;
mod wifi_settings;

use defmt_or_log as log;

pub use config_key::*;
pub use network_settings::*;
pub use static_ip_config::*;
pub use wifi_settings::*;

/// The complete station bootstrap configuration.
///
/// Built once, either from the build environment
/// ([`BOOTSTRAP_SETTINGS`](crate::BOOTSTRAP_SETTINGS)) or from a validated
/// JSON document, and never mutated afterwards. Every field has already passed
/// its checks, so reading cannot fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootstrapSettings<'a> {
    debug: DebugFlag,
    retry_budget: RetryBudget,
    static_ip: StaticIpConfig,
    channel: WiFiChannel,
    credentials: StationCredentials<'a>,
}

impl<'a> BootstrapSettings<'a> {
    pub const fn new(
        debug: DebugFlag,
        retry_budget: RetryBudget,
        static_ip: StaticIpConfig,
        channel: WiFiChannel,
        credentials: StationCredentials<'a>,
    ) -> Self {
        Self {
            debug,
            retry_budget,
            static_ip,
            channel,
            credentials,
        }
    }

    pub const fn read(&self, key: ConfigKey) -> ConfigValue<'a> {
        match key {
            ConfigKey::DebugFlag => ConfigValue::Flag(self.debug),
            ConfigKey::RetryBudget => ConfigValue::Budget(self.retry_budget),
            ConfigKey::IpAddress => ConfigValue::Address(self.static_ip.ip()),
            ConfigKey::Netmask => ConfigValue::Address(self.static_ip.netmask()),
            ConfigKey::Gateway => ConfigValue::Address(self.static_ip.gateway()),
            ConfigKey::Dns => ConfigValue::Address(self.static_ip.dns()),
            ConfigKey::WifiChannel => ConfigValue::Channel(self.channel),
            ConfigKey::Ssid => ConfigValue::Text(self.credentials.ssid()),
            ConfigKey::Secret => ConfigValue::Secret(self.credentials.secret()),
            ConfigKey::AuthMode => ConfigValue::AuthMode(self.credentials.auth_mode()),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, ConfigValue<'a>)> + '_ {
        ConfigKey::ALL.into_iter().map(|key| (key, self.read(key)))
    }

    pub const fn debug(&self) -> DebugFlag {
        self.debug
    }

    pub const fn retry_budget(&self) -> RetryBudget {
        self.retry_budget
    }

    pub const fn static_ip(&self) -> &StaticIpConfig {
        &self.static_ip
    }

    pub const fn channel(&self) -> WiFiChannel {
        self.channel
    }

    pub const fn credentials(&self) -> &StationCredentials<'a> {
        &self.credentials
    }

    /// Logs the settings. With the debug flag every key is listed, otherwise
    /// a single line. The secret is always redacted.
    pub fn log_summary(&self) {
        if !self.debug.is_enabled() {
            log::info!(
                "Joining {} on channel {} as {}",
                self.credentials.ssid(),
                self.channel.get(),
                self.read(ConfigKey::IpAddress)
            );
            return;
        }

        log::info!("Bootstrap settings:");
        for (key, value) in self.entries() {
            log::info!("  {} = {}", key.name(), value);
        }
    }
}

use core::num::NonZeroU16;

use crate::configuration::ConfigError;

/// Lowest 2.4 GHz channel.
pub const MIN_CHANNEL: u8 = 1;
/// Highest 2.4 GHz channel (14 is only legal in some regions).
pub const MAX_CHANNEL: u8 = 14;
pub const DEFAULT_CHANNEL: u8 = 6;
pub const DEFAULT_RETRY_BUDGET: u16 = 30;

/// Verbosity switch for logging done by the bootstrap consumer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugFlag {
    #[default]
    Disabled,
    Enabled,
}

impl DebugFlag {
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            DebugFlag::Enabled
        } else {
            DebugFlag::Disabled
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, DebugFlag::Enabled)
    }
}

impl From<bool> for DebugFlag {
    fn from(enabled: bool) -> Self {
        DebugFlag::from_enabled(enabled)
    }
}

/// Number of connection-status polls the consumer makes before giving up.
///
/// Carries no interval or backoff: how the attempts are spaced is up to the
/// consumer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryBudget(NonZeroU16);

impl RetryBudget {
    pub const DEFAULT: RetryBudget = match NonZeroU16::new(DEFAULT_RETRY_BUDGET) {
        Some(attempts) => RetryBudget(attempts),
        None => panic!("default retry budget must be positive"),
    };

    pub const fn new(attempts: i64) -> Result<Self, ConfigError> {
        if attempts <= 0 {
            return Err(ConfigError::NonPositiveRetryBudget);
        }
        if attempts > u16::MAX as i64 {
            return Err(ConfigError::RetryBudgetTooLarge);
        }
        match NonZeroU16::new(attempts as u16) {
            Some(attempts) => Ok(RetryBudget(attempts)),
            None => Err(ConfigError::NonPositiveRetryBudget),
        }
    }

    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        RetryBudget::DEFAULT
    }
}

/// 2.4 GHz channel of the access point to join.
///
/// Has to match the channel the access point actually uses; a mismatch shows
/// up as a join failure on the consumer side, not here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiFiChannel(u8);

impl WiFiChannel {
    pub const DEFAULT: WiFiChannel = WiFiChannel(DEFAULT_CHANNEL);

    pub const fn new(channel: i64) -> Result<Self, ConfigError> {
        if channel < MIN_CHANNEL as i64 || channel > MAX_CHANNEL as i64 {
            return Err(ConfigError::ChannelOutOfRange);
        }
        Ok(WiFiChannel(channel as u8))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for WiFiChannel {
    fn default() -> Self {
        WiFiChannel::DEFAULT
    }
}

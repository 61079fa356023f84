//! Bootstrap settings written as text, the way they arrive from the build
//! environment.
//!
//! Everything here is `const fn` so the compile-time settings are checked by
//! const evaluation: an invalid value fails the build instead of surfacing at
//! connection time.

use super::ConfigError;
use super::settings::*;

/// String form of [`BootstrapSettings`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct BootstrapText<'a> {
    pub debug: bool,
    pub retry_budget: &'a str,
    pub ip: &'a str,
    pub netmask: &'a str,
    pub gateway: &'a str,
    pub dns: &'a str,
    pub channel: &'a str,
    pub ssid: &'a str,
    pub secret: &'a str,
    pub auth_mode: &'a str,
}

impl core::fmt::Debug for BootstrapText<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BootstrapText")
            .field("debug", &self.debug)
            .field("retry_budget", &self.retry_budget)
            .field("ip", &self.ip)
            .field("netmask", &self.netmask)
            .field("gateway", &self.gateway)
            .field("dns", &self.dns)
            .field("channel", &self.channel)
            .field("ssid", &self.ssid)
            .field("secret", &Secret::new(self.secret))
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}

/// `?` for `const fn`.
macro_rules! const_try {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(error) => return Err(error),
        }
    };
}

impl<'a> BootstrapText<'a> {
    pub const fn validate(&self) -> Result<BootstrapSettings<'a>, ConfigError> {
        let retry_budget = const_try!(RetryBudget::new(const_try!(parse_integer(
            self.retry_budget,
            ConfigKey::RetryBudget
        ))));
        let static_ip = const_try!(StaticIpConfig::new(
            const_try!(parse_octets(self.ip, ConfigKey::IpAddress)),
            const_try!(parse_octets(self.netmask, ConfigKey::Netmask)),
            const_try!(parse_octets(self.gateway, ConfigKey::Gateway)),
            const_try!(parse_octets(self.dns, ConfigKey::Dns)),
        ));
        let channel = const_try!(WiFiChannel::new(const_try!(parse_integer(
            self.channel,
            ConfigKey::WifiChannel
        ))));
        let auth_mode = const_try!(AuthMode::from_name(self.auth_mode));
        let credentials = const_try!(StationCredentials::new(self.ssid, self.secret, auth_mode));

        Ok(BootstrapSettings::new(
            DebugFlag::from_enabled(self.debug),
            retry_budget,
            static_ip,
            channel,
            credentials,
        ))
    }
}

/// Parses an optionally signed decimal integer. Surrounding ASCII whitespace
/// is ignored.
pub const fn parse_integer(text: &str, key: ConfigKey) -> Result<i64, ConfigError> {
    let (mut i, end) = trim(text.as_bytes());
    let bytes = text.as_bytes();

    let negative = i < end && bytes[i] == b'-';
    if i < end && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }
    if i == end {
        return Err(ConfigError::MalformedNumber(key));
    }

    let mut value: i64 = 0;
    while i < end {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return Err(ConfigError::MalformedNumber(key));
        }
        value = match value.checked_mul(10) {
            Some(value) => value,
            None => return Err(ConfigError::MalformedNumber(key)),
        };
        value = match value.checked_add((digit - b'0') as i64) {
            Some(value) => value,
            None => return Err(ConfigError::MalformedNumber(key)),
        };
        i += 1;
    }

    Ok(if negative { -value } else { value })
}

/// Parses a dotted quad such as `192.168.1.4`.
pub const fn parse_octets(text: &str, key: ConfigKey) -> Result<Octets, ConfigError> {
    let (mut i, end) = trim(text.as_bytes());
    let bytes = text.as_bytes();

    let mut octets = [0u8; 4];
    let mut index = 0;
    while index < 4 {
        let mut value: u16 = 0;
        let mut digits = 0;
        while i < end && bytes[i].is_ascii_digit() {
            value = value * 10 + (bytes[i] - b'0') as u16;
            digits += 1;
            i += 1;
            if digits > 3 {
                return Err(ConfigError::MalformedAddress(key));
            }
        }
        if digits == 0 {
            return Err(ConfigError::MalformedAddress(key));
        }
        if value > u8::MAX as u16 {
            return Err(ConfigError::OctetOutOfRange(key));
        }
        octets[index] = value as u8;
        index += 1;

        if index < 4 {
            if i == end || bytes[i] != b'.' {
                return Err(ConfigError::MalformedAddress(key));
            }
            i += 1;
        }
    }

    if i != end {
        return Err(ConfigError::MalformedAddress(key));
    }
    Ok(octets)
}

const fn trim(bytes: &[u8]) -> (usize, usize) {
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;

    const HOME: BootstrapText<'static> = BootstrapText {
        debug: true,
        retry_budget: "30",
        ip: "192.168.1.4",
        netmask: "255.255.255.0",
        gateway: "192.168.1.51",
        dns: "192.168.1.39",
        channel: "6",
        ssid: "Ziggy999",
        secret: "*********",
        auth_mode: "AUTH_WPA2_PSK",
    };

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("30", ConfigKey::RetryBudget), Ok(30));
        assert_eq!(parse_integer(" 6 ", ConfigKey::WifiChannel), Ok(6));
        assert_eq!(parse_integer("-4", ConfigKey::RetryBudget), Ok(-4));
        assert_eq!(parse_integer("+4", ConfigKey::RetryBudget), Ok(4));
        for bad in ["", " ", "-", "3o", "0x1E", "99999999999999999999"] {
            assert_eq!(
                parse_integer(bad, ConfigKey::RetryBudget),
                Err(ConfigError::MalformedNumber(ConfigKey::RetryBudget)),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(
            parse_octets("192.168.1.4", ConfigKey::IpAddress),
            Ok([192, 168, 1, 4])
        );
        assert_eq!(
            parse_octets(" 0.0.0.0\n", ConfigKey::Dns),
            Ok([0, 0, 0, 0])
        );
        assert_eq!(
            parse_octets("192.168.1.256", ConfigKey::Gateway),
            Err(ConfigError::OctetOutOfRange(ConfigKey::Gateway))
        );
        for bad in [
            "",
            "192.168.1",
            "192.168.1.4.5",
            "192.168..4",
            "192.168.1.4/24",
            "1922.1.1.1",
            "a.b.c.d",
        ] {
            assert_eq!(
                parse_octets(bad, ConfigKey::IpAddress),
                Err(ConfigError::MalformedAddress(ConfigKey::IpAddress)),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_home_network() {
        let settings = HOME.validate().unwrap();
        assert!(settings.debug().is_enabled());
        assert_eq!(settings.retry_budget().get(), 30);
        assert_eq!(settings.static_ip().prefix_len(), 24);
        assert_eq!(settings.channel().get(), 6);
        assert_eq!(settings.credentials().auth_mode(), AuthMode::Wpa2Psk);
    }

    #[test]
    fn test_validate_in_const_context() {
        const SETTINGS: BootstrapSettings<'static> = match HOME.validate() {
            Ok(settings) => settings,
            Err(_) => panic!("invalid settings"),
        };
        assert_eq!(SETTINGS.credentials().ssid(), "Ziggy999");
    }

    #[test]
    fn test_validate_rejects_defects() {
        let mut zero_retries = HOME;
        zero_retries.retry_budget = "0";
        let mut negative_retries = HOME;
        negative_retries.retry_budget = "-3";
        let mut channel_15 = HOME;
        channel_15.channel = "15";
        let mut wpa3 = HOME;
        wpa3.auth_mode = "WPA3";
        let mut no_ssid = HOME;
        no_ssid.ssid = "";
        let mut holey_netmask = HOME;
        holey_netmask.netmask = "255.0.255.0";
        let mut ip_300 = HOME;
        ip_300.ip = "192.168.1.300";

        let cases = [
            (zero_retries, ConfigError::NonPositiveRetryBudget),
            (negative_retries, ConfigError::NonPositiveRetryBudget),
            (channel_15, ConfigError::ChannelOutOfRange),
            (wpa3, ConfigError::UnsupportedAuthMode),
            (no_ssid, ConfigError::EmptySsid),
            (holey_netmask, ConfigError::NonContiguousNetmask),
            (ip_300, ConfigError::OctetOutOfRange(ConfigKey::IpAddress)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.validate(), Err(expected));
        }
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let rendered = std::format!("{:?}", HOME);
        assert!(!rendered.contains("*********"));
        assert!(rendered.contains("Ziggy999"));
    }

    #[test]
    fn test_debug_flag_follows_text() {
        let mut quiet = HOME;
        quiet.debug = false;
        let quiet = quiet.validate().unwrap();
        assert!(!quiet.debug().is_enabled());
    }
}

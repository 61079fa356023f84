use core::fmt;

use crate::configuration::ConfigError;

/// Longest SSID allowed by 802.11.
pub const MAX_SSID_LEN: usize = 32;
/// Shortest and longest WPA passphrase.
pub const MIN_PASSPHRASE_LEN: usize = 8;
pub const MAX_PASSPHRASE_LEN: usize = 63;
/// A raw 256-bit WPA key written as hex.
pub const RAW_PSK_HEX_LEN: usize = 64;

/// Authentication schemes the station can join with.
///
/// The discriminants match the auth mode codes of the usual WiFi SoC SDKs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AuthMode {
    Open = 0,
    Wep = 1,
    WpaPsk = 2,
    Wpa2Psk = 3,
    WpaWpa2Psk = 4,
}

impl AuthMode {
    pub const ALL: [AuthMode; 5] = [
        AuthMode::Open,
        AuthMode::Wep,
        AuthMode::WpaPsk,
        AuthMode::Wpa2Psk,
        AuthMode::WpaWpa2Psk,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AuthMode::Open => "OPEN",
            AuthMode::Wep => "WEP",
            AuthMode::WpaPsk => "WPA-PSK",
            AuthMode::Wpa2Psk => "WPA2-PSK",
            AuthMode::WpaWpa2Psk => "WPA-WPA2-PSK",
        }
    }

    const fn sdk_name(self) -> &'static str {
        match self {
            AuthMode::Open => "AUTH_OPEN",
            AuthMode::Wep => "AUTH_WEP",
            AuthMode::WpaPsk => "AUTH_WPA_PSK",
            AuthMode::Wpa2Psk => "AUTH_WPA2_PSK",
            AuthMode::WpaWpa2Psk => "AUTH_WPA_WPA2_PSK",
        }
    }

    /// Parses `"wpa2-psk"` style names and SDK constants like
    /// `"AUTH_WPA2_PSK"`, ignoring ASCII case.
    pub const fn from_name(name: &str) -> Result<Self, ConfigError> {
        let mut i = 0;
        while i < AuthMode::ALL.len() {
            let mode = AuthMode::ALL[i];
            if eq_ignore_ascii_case(name, mode.name())
                || eq_ignore_ascii_case(name, mode.sdk_name())
            {
                return Ok(mode);
            }
            i += 1;
        }
        Err(ConfigError::UnsupportedAuthMode)
    }

    pub const fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(AuthMode::Open),
            1 => Ok(AuthMode::Wep),
            2 => Ok(AuthMode::WpaPsk),
            3 => Ok(AuthMode::Wpa2Psk),
            4 => Ok(AuthMode::WpaWpa2Psk),
            _ => Err(ConfigError::UnsupportedAuthMode),
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn requires_secret(self) -> bool {
        !matches!(self, AuthMode::Open)
    }

    const fn accepts_secret(self, secret: &str) -> bool {
        let len = secret.len();
        match self {
            AuthMode::Open => len == 0,
            AuthMode::Wep => {
                len == 5 || len == 13 || ((len == 10 || len == 26) && is_hex(secret))
            }
            AuthMode::WpaPsk | AuthMode::Wpa2Psk | AuthMode::WpaWpa2Psk => {
                (len >= MIN_PASSPHRASE_LEN && len <= MAX_PASSPHRASE_LEN)
                    || (len == RAW_PSK_HEX_LEN && is_hex(secret))
            }
        }
    }
}

impl TryFrom<u8> for AuthMode {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        AuthMode::from_code(code)
    }
}

impl core::str::FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AuthMode::from_name(name)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pre-shared key or passphrase.
///
/// Never printed: `Debug` and `defmt::Format` show `<redacted>` and there is
/// no `Display`. Use [`Secret::expose`] to hand the value to the radio driver.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Secret<'a>(&'a str);

impl<'a> Secret<'a> {
    pub const REDACTED: &'static str = "<redacted>";

    pub const fn new(value: &'a str) -> Self {
        Secret(value)
    }

    pub const fn expose(&self) -> &'a str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", Self::REDACTED)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Secret<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Secret({=str})", Self::REDACTED)
    }
}

/// What the station needs to join the access point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationCredentials<'a> {
    ssid: &'a str,
    secret: Secret<'a>,
    auth_mode: AuthMode,
}

impl<'a> StationCredentials<'a> {
    pub const fn new(
        ssid: &'a str,
        secret: &'a str,
        auth_mode: AuthMode,
    ) -> Result<Self, ConfigError> {
        if ssid.is_empty() {
            return Err(ConfigError::EmptySsid);
        }
        if ssid.len() > MAX_SSID_LEN {
            return Err(ConfigError::SsidTooLong);
        }
        if auth_mode.requires_secret() && secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if !auth_mode.requires_secret() && !secret.is_empty() {
            return Err(ConfigError::UnexpectedSecret);
        }
        if !auth_mode.accepts_secret(secret) {
            return Err(ConfigError::InvalidSecretLength);
        }
        Ok(Self {
            ssid,
            secret: Secret::new(secret),
            auth_mode,
        })
    }

    pub const fn ssid(&self) -> &'a str {
        self.ssid
    }

    pub const fn secret(&self) -> Secret<'a> {
        self.secret
    }

    pub const fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }
}

const fn eq_ignore_ascii_case(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::format;
    use std::string::String;

    const RAW_PSK: &str = "00112233445566778899aabbccddeeff00112233445566778899AABBCCDDEEFF";

    fn join<'a>(
        ssid: &'a str,
        secret: &'a str,
        auth_mode: AuthMode,
    ) -> Result<StationCredentials<'a>, ConfigError> {
        StationCredentials::new(ssid, secret, auth_mode)
    }

    #[test]
    fn test_auth_mode_names() {
        assert_eq!(AuthMode::from_name("WPA2-PSK"), Ok(AuthMode::Wpa2Psk));
        assert_eq!(AuthMode::from_name("wpa2-psk"), Ok(AuthMode::Wpa2Psk));
        assert_eq!(AuthMode::from_name("AUTH_WPA2_PSK"), Ok(AuthMode::Wpa2Psk));
        assert_eq!(AuthMode::from_name("open"), Ok(AuthMode::Open));
        assert_eq!("wpa-wpa2-psk".parse::<AuthMode>(), Ok(AuthMode::WpaWpa2Psk));
        for unsupported in ["WPA3-SAE", ""] {
            assert_eq!(
                AuthMode::from_name(unsupported),
                Err(ConfigError::UnsupportedAuthMode)
            );
        }
        for mode in AuthMode::ALL {
            assert_eq!(AuthMode::from_name(mode.name()), Ok(mode));
        }
    }

    #[test]
    fn test_auth_mode_codes() {
        for mode in AuthMode::ALL {
            assert_eq!(AuthMode::try_from(mode.code()), Ok(mode));
        }
        assert_eq!(AuthMode::Wpa2Psk.code(), 3);
        let unknown = AuthMode::try_from(5);
        assert_eq!(unknown, Err(ConfigError::UnsupportedAuthMode));
    }

    #[test]
    fn test_credentials_wpa2() {
        let credentials = join("Ziggy999", "*********", AuthMode::Wpa2Psk).unwrap();
        assert_eq!(credentials.ssid(), "Ziggy999");
        assert_eq!(credentials.secret().expose(), "*********");
        assert_eq!(credentials.auth_mode(), AuthMode::Wpa2Psk);

        assert!(join("net", RAW_PSK, AuthMode::WpaPsk).is_ok());
        assert_eq!(
            join("net", "short", AuthMode::Wpa2Psk),
            Err(ConfigError::InvalidSecretLength)
        );
        assert_eq!(
            join("net", "", AuthMode::Wpa2Psk),
            Err(ConfigError::MissingSecret)
        );
    }

    #[test]
    fn test_credentials_wep_and_open() {
        assert!(join("net", "abcde", AuthMode::Wep).is_ok());
        assert!(join("net", "0123456789", AuthMode::Wep).is_ok());
        assert_eq!(
            join("net", "012345678z", AuthMode::Wep),
            Err(ConfigError::InvalidSecretLength)
        );
        assert!(join("cafe", "", AuthMode::Open).is_ok());
        assert_eq!(
            join("cafe", "password", AuthMode::Open),
            Err(ConfigError::UnexpectedSecret)
        );
    }

    #[test]
    fn test_credentials_ssid_bounds() {
        assert_eq!(
            join("", "password", AuthMode::Wpa2Psk),
            Err(ConfigError::EmptySsid)
        );
        let longest: String = core::iter::repeat_n('x', MAX_SSID_LEN).collect();
        assert!(join(&longest, "password", AuthMode::Wpa2Psk).is_ok());
        let too_long: String = core::iter::repeat_n('x', MAX_SSID_LEN + 1).collect();
        assert_eq!(
            join(&too_long, "password", AuthMode::Wpa2Psk),
            Err(ConfigError::SsidTooLong)
        );
    }

    #[test]
    fn test_secret_is_redacted() {
        let credentials = join("Ziggy999", "hunter22", AuthMode::Wpa2Psk).unwrap();
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("Ziggy999"));
    }
}

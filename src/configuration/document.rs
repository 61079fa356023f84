//! JSON configuration document.
//!
//! ```json
//! {
//!   "debug": true,
//!   "retry_budget": 30,
//!   "static_ip": {
//!     "ip": [192, 168, 1, 4],
//!     "netmask": [255, 255, 255, 0],
//!     "gateway": [192, 168, 1, 51],
//!     "dns": [192, 168, 1, 39]
//!   },
//!   "channel": 6,
//!   "credentials": { "ssid": "Ziggy999", "secret": "*********", "auth_mode": "WPA2-PSK" }
//! }
//! ```
//!
//! Numbers are read wider than they are stored so that out-of-range values are
//! reported against their key instead of as a generic parse failure. Strings
//! are borrowed from the input as written, so a string holding an escape
//! sequence (`\"`, `\\`, `\u0041`) is rejected as
//! [`ConfigError::MalformedDocument`] rather than loaded with its backslashes.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::settings::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaticIpDocument {
    pub ip: [i64; 4],
    pub netmask: [i64; 4],
    pub gateway: [i64; 4],
    pub dns: [i64; 4],
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct CredentialsDocument<'a> {
    pub ssid: &'a str,
    pub secret: &'a str,
    pub auth_mode: &'a str,
}

impl CredentialsDocument<'_> {
    /// A borrowed string still carries its escape sequences; any backslash
    /// means the value differs from what was written.
    fn has_escapes(&self) -> bool {
        [self.ssid, self.secret, self.auth_mode]
            .iter()
            .any(|field| field.contains('\\'))
    }
}

impl core::fmt::Debug for CredentialsDocument<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CredentialsDocument")
            .field("ssid", &self.ssid)
            .field("secret", &Secret::new(self.secret))
            .field("auth_mode", &self.auth_mode)
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BootstrapDocument<'a> {
    #[serde(default)]
    pub debug: bool,
    pub retry_budget: i64,
    pub static_ip: StaticIpDocument,
    pub channel: i64,
    #[serde(borrow)]
    pub credentials: CredentialsDocument<'a>,
}

impl<'a> BootstrapDocument<'a> {
    pub fn from_json(json: &'a str) -> Result<Self, ConfigError> {
        let (document, _) = serde_json_core::from_str::<BootstrapDocument<'a>>(json)?;
        if document.credentials.has_escapes() {
            return Err(ConfigError::MalformedDocument);
        }
        Ok(document)
    }

    /// Serializes into a buffer of `N` bytes. The secret is included.
    ///
    /// A quote or backslash in the SSID or secret is written escaped, which
    /// [`from_json`](Self::from_json) refuses to load.
    pub fn to_json<const N: usize>(&self) -> Result<heapless::String<N>, ConfigError> {
        Ok(serde_json_core::to_string::<_, N>(self)?)
    }

    pub fn validate(&self) -> Result<BootstrapSettings<'a>, ConfigError> {
        let static_ip = StaticIpConfig::new(
            octets(self.static_ip.ip, ConfigKey::IpAddress)?,
            octets(self.static_ip.netmask, ConfigKey::Netmask)?,
            octets(self.static_ip.gateway, ConfigKey::Gateway)?,
            octets(self.static_ip.dns, ConfigKey::Dns)?,
        )?;
        let auth_mode = AuthMode::from_name(self.credentials.auth_mode)?;

        Ok(BootstrapSettings::new(
            DebugFlag::from(self.debug),
            RetryBudget::new(self.retry_budget)?,
            static_ip,
            WiFiChannel::new(self.channel)?,
            StationCredentials::new(self.credentials.ssid, self.credentials.secret, auth_mode)?,
        ))
    }
}

impl<'a> From<&BootstrapSettings<'a>> for BootstrapDocument<'a> {
    fn from(settings: &BootstrapSettings<'a>) -> Self {
        let static_ip = settings.static_ip();
        let credentials = settings.credentials();
        Self {
            debug: settings.debug().is_enabled(),
            retry_budget: settings.retry_budget().get().into(),
            static_ip: StaticIpDocument {
                ip: widen(static_ip.ip().octets()),
                netmask: widen(static_ip.netmask().octets()),
                gateway: widen(static_ip.gateway().octets()),
                dns: widen(static_ip.dns().octets()),
            },
            channel: settings.channel().get().into(),
            credentials: CredentialsDocument {
                ssid: credentials.ssid(),
                secret: credentials.secret().expose(),
                auth_mode: credentials.auth_mode().name(),
            },
        }
    }
}

impl<'a> BootstrapSettings<'a> {
    /// Parses and validates a JSON document; see [`BootstrapDocument`].
    pub fn from_json(json: &'a str) -> Result<Self, ConfigError> {
        BootstrapDocument::from_json(json)?.validate()
    }
}

fn octets(values: [i64; 4], key: ConfigKey) -> Result<Octets, ConfigError> {
    let mut octets = [0u8; 4];
    for (octet, value) in octets.iter_mut().zip(values) {
        *octet = u8::try_from(value).map_err(|_| ConfigError::OctetOutOfRange(key))?;
    }
    Ok(octets)
}

fn widen(octets: Octets) -> [i64; 4] {
    octets.map(i64::from)
}

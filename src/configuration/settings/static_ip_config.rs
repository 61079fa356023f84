use core::net::Ipv4Addr;

use crate::configuration::ConfigError;

/// Four IPv4 octets, most significant first.
pub type Octets = [u8; 4];

/// Static addressing for the station interface.
///
/// Octet ranges are enforced by the type. The only other rule is that the
/// netmask is contiguous; whether the gateway or DNS server sit inside the
/// subnet is left to the consumer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticIpConfig {
    ip: Octets,
    netmask: Octets,
    gateway: Octets,
    dns: Octets,
}

impl StaticIpConfig {
    pub const fn new(
        ip: Octets,
        netmask: Octets,
        gateway: Octets,
        dns: Octets,
    ) -> Result<Self, ConfigError> {
        let mask = u32::from_be_bytes(netmask);
        // A contiguous mask has no zero bit followed by a one bit.
        if mask.leading_ones() + mask.trailing_zeros() != u32::BITS {
            return Err(ConfigError::NonContiguousNetmask);
        }
        Ok(Self {
            ip,
            netmask,
            gateway,
            dns,
        })
    }

    pub const fn ip(&self) -> Ipv4Addr {
        to_addr(self.ip)
    }

    pub const fn netmask(&self) -> Ipv4Addr {
        to_addr(self.netmask)
    }

    pub const fn gateway(&self) -> Ipv4Addr {
        to_addr(self.gateway)
    }

    pub const fn dns(&self) -> Ipv4Addr {
        to_addr(self.dns)
    }

    /// Netmask as a CIDR prefix length, e.g. 24 for `255.255.255.0`.
    pub const fn prefix_len(&self) -> u8 {
        u32::from_be_bytes(self.netmask).leading_ones() as u8
    }
}

const fn to_addr(octets: Octets) -> Ipv4Addr {
    Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3])
}

#[cfg(feature = "embassy-net")]
impl From<&StaticIpConfig> for embassy_net::StaticConfigV4 {
    fn from(static_ip_config: &StaticIpConfig) -> Self {
        let mut dns_servers = heapless::Vec::new();
        // Capacity is at least one, the push cannot fail.
        dns_servers.push(static_ip_config.dns()).ok();

        let ip = static_ip_config.ip();
        let prefix_len = static_ip_config.prefix_len();
        Self {
            address: embassy_net::Ipv4Cidr::new(ip, prefix_len),
            dns_servers,
            gateway: Some(static_ip_config.gateway()),
        }
    }
}

#[cfg(feature = "embassy-net")]
impl From<StaticIpConfig> for embassy_net::StaticConfigV4 {
    fn from(static_ip_config: StaticIpConfig) -> Self {
        embassy_net::StaticConfigV4::from(&static_ip_config)
    }
}

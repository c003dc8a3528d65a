//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for an address with a prefix length, strict
//! dotted-quad parsing, and the mask arithmetic used by the subnet calculator.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Parse a dotted-quad address.
///
/// Exactly four decimal octets in `[0,255]`; no whitespace, signs or prefix.
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    let caps = DOTTED_QUAD
        .captures(text)
        .ok_or_else(|| Error::invalid_address(text, "expected four dot-separated decimal octets"))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let digits = &caps[i + 1];
        let value: u16 = digits
            .parse()
            .map_err(|_| Error::invalid_address(text, format!("invalid octet '{digits}'")))?;
        *octet = u8::try_from(value).map_err(|_| {
            Error::invalid_address(text, format!("octet {} is {value}, above 255", i + 1))
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

pub(crate) fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(Error::range(format!("prefix length /{len} is above /{MAX_LENGTH}")))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use calckit::networking::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(mask as u32)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Returns the IP address following the given subnet.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let subnet_size = 1u64 << (MAX_LENGTH - len);
    let next = u64::from(u32::from(addr) & mask) + subnet_size;
    u32::try_from(next)
        .map(Ipv4Addr::from)
        .map_err(|_| Error::range(format!("no subnet follows {addr}/{len}")))
}

/// Number of usable host addresses in a subnet.
///
/// Network and broadcast addresses are excluded, except for /31 (both
/// addresses usable on a point-to-point link) and /32 (a single host).
pub fn usable_hosts(len: u8) -> Result<u64> {
    check_len(len)?;
    let total = 1u64 << (MAX_LENGTH - len);
    Ok(match len {
        32 => 1,
        31 => 2,
        _ => total - 2,
    })
}

/// First and last usable host of the subnet containing `addr`.
pub fn host_range(addr: Ipv4Addr, len: u8) -> Result<(Ipv4Addr, Ipv4Addr)> {
    let network = u32::from(cut_addr(addr, len)?);
    let broadcast = u32::from(broadcast_addr(addr, len)?);
    if len >= MAX_LENGTH - 1 {
        Ok((Ipv4Addr::from(network), Ipv4Addr::from(broadcast)))
    } else {
        Ok((Ipv4Addr::from(network + 1), Ipv4Addr::from(broadcast - 1)))
    }
}

/// Classful network class of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetworkClass {
    A,
    B,
    C,
    D,
    E,
}

impl NetworkClass {
    pub fn of(addr: Ipv4Addr) -> Self {
        match addr.octets()[0] {
            0..=127 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            _ => NetworkClass::E,
        }
    }

    /// Default prefix length; multicast (D) and reserved (E) have none.
    pub fn default_prefix(self) -> Option<u8> {
        match self {
            NetworkClass::A => Some(8),
            NetworkClass::B => Some(16),
            NetworkClass::C => Some(24),
            NetworkClass::D | NetworkClass::E => None,
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4Cidr {
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Self> {
        check_len(mask)?;
        Ok(Ipv4Cidr { addr, mask })
    }

    /// Parse `a.b.c.d/len`, or a bare `a.b.c.d` with its classful default length.
    pub fn parse_with_class_default(text: &str) -> Result<Self> {
        if text.contains('/') {
            return text.parse();
        }
        let addr = parse_ipv4(text)?;
        let class = NetworkClass::of(addr);
        let mask = class.default_prefix().ok_or_else(|| {
            Error::invalid_address(
                text,
                format!("class {class} address has no default mask, give an explicit /prefix"),
            )
        })?;
        Ok(Ipv4Cidr { addr, mask })
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(get_cidr_mask(self.mask).unwrap_or(u32::MAX))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask).unwrap_or(u32::MAX);
        Ipv4Addr::from(u32::from(self.addr) & mask)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask).unwrap_or(u32::MAX);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// The network this address belongs to, e.g. `10.1.2.3/8` -> `10.0.0.0/8`.
    pub fn network(&self) -> Ipv4Cidr {
        Ipv4Cidr {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl FromStr for Ipv4Cidr {
    type Err = Error;

    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    fn from_str(addr_cidr: &str) -> Result<Self> {
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| Error::invalid_address(addr_cidr, "expected address/prefix"))?;
        let addr = parse_ipv4(addr).map_err(|_| {
            Error::invalid_address(addr_cidr, format!("invalid address '{addr}'"))
        })?;
        let mask: u8 = match mask.parse() {
            Ok(m) if !mask.starts_with('+') && m <= MAX_LENGTH => m,
            _ => {
                return Err(Error::invalid_address(
                    addr_cidr,
                    format!("prefix '{mask}' must be an integer in 0..={MAX_LENGTH}"),
                ))
            }
        };
        Ok(Ipv4Cidr { addr, mask })
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

//! Fixed-length subnetting of a network into a required number of subnets.

use super::ipv4::{
    broadcast_addr, check_len, cut_addr, get_cidr_mask, host_range, ip_after_subnet, usable_hosts,
    Ipv4Cidr, NetworkClass, MAX_LENGTH,
};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// One subnet produced by a [`SubnetCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetRow {
    /// 1-based position within the base network.
    pub index: u64,
    pub network: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub hosts: u64,
}

impl fmt::Display for SubnetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<4} {:<15} {:<15} - {:<15} {:<15} {} hosts",
            self.index, self.network, self.first_host, self.last_host, self.broadcast, self.hosts
        )
    }
}

/// Splits the network of `address` into at least `required_subnets` equal
/// subnets by borrowing host bits.
///
/// The base prefix is the one written after `/`, or the classful default
/// (A /8, B /16, C /24) for a bare address.
///
/// # Examples
/// ```
/// use calckit::networking::SubnetCalculator;
/// let calc = SubnetCalculator::new("192.168.1.1", 5).unwrap();
/// assert_eq!(calc.prefix_len(), 27);
/// assert_eq!(calc.subnet_count(), 8);
/// assert_eq!(calc.hosts_per_subnet(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetCalculator {
    base: Ipv4Cidr,
    required_subnets: u32,
    bits_borrowed: u8,
}

impl SubnetCalculator {
    pub fn new(address: &str, required_subnets: u32) -> Result<Self> {
        let base = Ipv4Cidr::parse_with_class_default(address)?;
        Self::from_cidr(base, required_subnets)
    }

    pub fn from_cidr(base: Ipv4Cidr, required_subnets: u32) -> Result<Self> {
        check_len(base.mask)?;
        if required_subnets == 0 {
            return Err(Error::range("required subnet count must be at least 1"));
        }
        // smallest b with 2^b >= required_subnets
        let bits_borrowed = match required_subnets.checked_next_power_of_two() {
            Some(power) => power.trailing_zeros() as u8,
            None => 32,
        };
        let prefix = base.mask.saturating_add(bits_borrowed);
        if prefix > MAX_LENGTH {
            return Err(Error::range(format!(
                "{required_subnets} subnets of {} need prefix /{prefix}, above /{MAX_LENGTH}",
                base.network()
            )));
        }

        log::debug!(
            "subnetting {base}: {required_subnets} subnets -> borrow {bits_borrowed} bits, /{prefix}"
        );
        Ok(SubnetCalculator {
            base,
            required_subnets,
            bits_borrowed,
        })
    }

    pub fn address(&self) -> Ipv4Addr {
        self.base.addr
    }

    pub fn class(&self) -> NetworkClass {
        NetworkClass::of(self.base.addr)
    }

    /// The network being divided, e.g. `192.168.1.0/24`.
    pub fn base_network(&self) -> Ipv4Cidr {
        self.base.network()
    }

    pub fn required_subnets(&self) -> u32 {
        self.required_subnets
    }

    pub fn bits_borrowed(&self) -> u8 {
        self.bits_borrowed
    }

    /// Prefix length of every subnet.
    pub fn prefix_len(&self) -> u8 {
        self.base.mask + self.bits_borrowed
    }

    pub fn subnet_count(&self) -> u64 {
        1u64 << self.bits_borrowed
    }

    pub fn hosts_per_subnet(&self) -> u64 {
        usable_hosts(self.prefix_len()).unwrap_or(0)
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask_bits())
    }

    fn mask_bits(&self) -> u32 {
        get_cidr_mask(self.prefix_len()).unwrap_or(u32::MAX)
    }

    /// Network address of the subnet containing the given address.
    pub fn network(&self) -> Ipv4Addr {
        cut_addr(self.base.addr, self.prefix_len()).unwrap_or(self.base.addr)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.base.addr, self.prefix_len()).unwrap_or(self.base.addr)
    }

    pub fn first_host(&self) -> Ipv4Addr {
        self.usable_range().0
    }

    pub fn last_host(&self) -> Ipv4Addr {
        self.usable_range().1
    }

    fn usable_range(&self) -> (Ipv4Addr, Ipv4Addr) {
        host_range(self.base.addr, self.prefix_len()).unwrap_or((self.base.addr, self.base.addr))
    }

    /// The `index`-th subnet (1-based) of the base network.
    pub fn subnet(&self, index: u64) -> Result<SubnetRow> {
        let count = self.subnet_count();
        if index == 0 || index > count {
            return Err(Error::range(format!(
                "subnet {index} requested, valid range is 1..={count}"
            )));
        }
        let size = 1u64 << (MAX_LENGTH - self.prefix_len());
        let start = u64::from(u32::from(self.base.lo())) + (index - 1) * size;
        // start + size - 1 never exceeds the base broadcast, so it fits in u32
        self.row(index, Ipv4Addr::from(start as u32))
    }

    fn row(&self, index: u64, network: Ipv4Addr) -> Result<SubnetRow> {
        let prefix = self.prefix_len();
        let (first_host, last_host) = host_range(network, prefix)?;
        Ok(SubnetRow {
            index,
            network,
            first_host,
            last_host,
            broadcast: broadcast_addr(network, prefix)?,
            hosts: usable_hosts(prefix)?,
        })
    }

    /// Every subnet of the base network in address order.
    pub fn subnets(&self) -> impl Iterator<Item = SubnetRow> + '_ {
        let count = self.subnet_count();
        let prefix = self.prefix_len();
        std::iter::successors(self.subnet(1).ok(), move |prev| {
            if prev.index >= count {
                return None;
            }
            let network = ip_after_subnet(prev.network, prefix).ok()?;
            self.row(prev.index + 1, network).ok()
        })
    }

    /// All derived attributes in one serializable value.
    pub fn report(&self) -> SubnetReport {
        SubnetReport {
            address: self.address(),
            class: self.class(),
            base_network: self.base_network(),
            required_subnets: self.required_subnets,
            subnets_created: self.subnet_count(),
            bits_borrowed: self.bits_borrowed,
            prefix_len: self.prefix_len(),
            mask: self.mask(),
            network: self.network(),
            broadcast: self.broadcast(),
            first_host: self.first_host(),
            last_host: self.last_host(),
            usable_hosts: self.hosts_per_subnet(),
        }
    }

    /// Human-readable description of the derived attributes.
    pub fn summary(&self) -> String {
        self.report().to_string()
    }
}

/// Derived attributes of a [`SubnetCalculator`]. The network, broadcast and
/// host range describe the subnet that contains `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    pub address: Ipv4Addr,
    pub class: NetworkClass,
    pub base_network: Ipv4Cidr,
    pub required_subnets: u32,
    pub subnets_created: u64,
    pub bits_borrowed: u8,
    pub prefix_len: u8,
    pub mask: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub usable_hosts: u64,
}

impl SubnetReport {
    /// Labelled values in summary order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Address", self.address.to_string()),
            ("Class", self.class.to_string()),
            ("Base network", self.base_network.to_string()),
            ("Subnets required", self.required_subnets.to_string()),
            ("Subnets created", self.subnets_created.to_string()),
            ("Bits borrowed", self.bits_borrowed.to_string()),
            ("Prefix length", format!("/{}", self.prefix_len)),
            ("Subnet mask", self.mask.to_string()),
            ("Network", self.network.to_string()),
            ("Broadcast", self.broadcast.to_string()),
            ("Host range", format!("{} - {}", self.first_host, self.last_host)),
            ("Usable hosts", self.usable_hosts.to_string()),
        ]
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.fields() {
            writeln!(f, "{:<17} {value}", format!("{label}:"))?;
        }
        Ok(())
    }
}

impl fmt::Display for SubnetCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubnetCalculator({}, {} subnets -> /{})",
            self.base, self.required_subnets, self.prefix_len()
        )
    }
}

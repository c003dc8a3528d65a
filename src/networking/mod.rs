//! IPv4 subnet arithmetic.
//!
//! - [`ipv4`] - address parsing, masks, network/broadcast helpers, [`Ipv4Cidr`]
//! - [`SubnetCalculator`] - divides a network into a required number of subnets

pub mod ipv4;
mod subnet;

pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, host_range, ip_after_subnet, parse_ipv4,
    usable_hosts, Ipv4Cidr, NetworkClass, MAX_LENGTH,
};
pub use subnet::{SubnetCalculator, SubnetReport, SubnetRow};

//! IP network value type shared by both address families.
//!
//! Provides [`IpNetwork`], an immutable address-plus-prefix value, and the
//! [`Family`] tag used for dispatch between IPv4 and IPv6 arithmetic.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;
use crate::format;

/// Address family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// 32-bit IPv4.
    V4,
    /// 128-bit IPv6.
    V6,
}

impl Family {
    /// Bit width of addresses in this family.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

/// An IP address with a CIDR prefix length.
///
/// The stored address keeps its host bits exactly as given, so
/// `"10.0.0.1/24"` round-trips through [`parse`](crate::parse) and
/// `to_string()` unchanged. The canonical network block (host bits
/// cleared) is derived via [`network`](IpNetwork::network),
/// [`first`](IpNetwork::first) and [`last`](IpNetwork::last).
///
/// Values are immutable: every transformation returns a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpNetwork {
    family: Family,
    addr: u128,
    prefix: u8,
}

impl IpNetwork {
    /// Create an [`IpNetwork`] from raw parts, validating the invariants
    /// `addr < 2^family.bits()` and `prefix <= family.bits()`.
    pub fn new(family: Family, addr: u128, prefix: u8) -> Result<Self, Error> {
        if prefix > family.bits() {
            return Err(Error::out_of_range(&format!("/{prefix}")));
        }
        if family == Family::V4 && addr >> 32 != 0 {
            return Err(Error::out_of_range(&format!("{addr:#x}")));
        }
        Ok(IpNetwork {
            family,
            addr,
            prefix,
        })
    }

    /// The address family of this network.
    pub const fn family(&self) -> Family {
        self.family
    }

    /// The raw address value, including any host bits.
    pub const fn addr(&self) -> u128 {
        self.addr
    }

    /// The CIDR prefix length.
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Mask covering the host bits (bits beyond the prefix).
    const fn host_mask(&self) -> u128 {
        let host_bits = self.family.bits() - self.prefix;
        if host_bits == 0 {
            0
        } else {
            u128::MAX >> (128 - host_bits)
        }
    }

    /// First address of the canonical block (host bits cleared).
    pub const fn first(&self) -> u128 {
        self.addr & !self.host_mask()
    }

    /// Last address of the canonical block (host bits set).
    pub const fn last(&self) -> u128 {
        self.first() | self.host_mask()
    }

    /// The canonical network: a new value with all host bits cleared.
    pub const fn network(&self) -> IpNetwork {
        IpNetwork {
            family: self.family,
            addr: self.first(),
            prefix: self.prefix,
        }
    }

    /// Re-prefix the canonical block. Internal helper for the summarizer;
    /// the result always satisfies the type invariants because the
    /// prefix only ever shrinks.
    pub(crate) const fn with_prefix(&self, prefix: u8) -> IpNetwork {
        IpNetwork {
            family: self.family,
            addr: self.addr,
            prefix,
        }
        .network()
    }

    /// True if this is an IPv4 network.
    pub fn is_ipv4(&self) -> bool {
        self.family == Family::V4
    }

    /// True if this is an IPv6 network.
    pub fn is_ipv6(&self) -> bool {
        self.family == Family::V6
    }

    /// True for IPv6 values carrying an IPv4-mapped address: the low 32
    /// bits hold the embedded IPv4 value under the fixed `::ffff:0:0`
    /// high-bit pattern.
    pub fn is_mapped(&self) -> bool {
        self.family == Family::V6 && self.addr >> 32 == 0xffff
    }

    /// Range containment: true when `other` lies entirely inside this
    /// network's canonical block. Networks of different families never
    /// contain each other.
    pub fn contains(&self, other: &IpNetwork) -> bool {
        self.family == other.family && self.first() <= other.first() && other.last() <= self.last()
    }
}

impl Ord for IpNetwork {
    /// Order by family, then by first address ascending, then by prefix
    /// ascending (less-specific blocks first). Raw address is the final
    /// tiebreaker so the ordering stays consistent with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        self.family
            .cmp(&other.family)
            .then_with(|| self.first().cmp(&other.first()))
            .then_with(|| self.prefix.cmp(&other.prefix))
            .then_with(|| self.addr.cmp(&other.addr))
    }
}

impl PartialOrd for IpNetwork {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            format::address_text(self.family, self.addr),
            self.prefix
        )
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::parser::parse(&s).map_err(de::Error::custom)
    }
}

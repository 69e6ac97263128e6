//! Text to [`IpNetwork`] parsing.
//!
//! The grammar follows classic CIDR notation for both families:
//! - IPv4: 1-4 dot-separated decimal octets; missing trailing octets
//!   default to zero, so `"10.0"` means `"10.0.0.0"`. The optional
//!   suffix is `/N`, a dotted netmask, or a `0x` hex netmask.
//! - IPv6: up to 8 colon-separated hextets with at most one `::`
//!   elision; the final hextet position may be a dotted-quad IPv4
//!   literal (IPv4-mapped notation). The optional suffix is `/N`.
//!
//! Any text containing a colon is parsed under the IPv6 grammar,
//! everything else under IPv4.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::error::Error;
use crate::models::{netmask, Family, IpNetwork};

lazy_static! {
    /// Shape of an IPv4 literal: 1-4 decimal octets. Octet range is
    /// checked numerically after the match.
    static ref IPV4_RE: Regex =
        Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){0,3}$").expect("hard-coded pattern");
}

/// Parse CIDR text into an [`IpNetwork`].
///
/// When the prefix suffix is omitted the full bit width of the family is
/// used (a host route).
///
/// # Examples
/// ```
/// use cidr_summary::parse;
/// let net = parse("172.16.10.1/24").unwrap();
/// assert!(net.is_ipv4());
/// assert_eq!(net.to_string(), "172.16.10.1/24");
///
/// assert!(parse("10.0.0.256").is_err());
/// ```
pub fn parse(text: &str) -> Result<IpNetwork, Error> {
    let text = text.trim();
    let (addr_part, suffix) = split_at_slash(text)?;

    if addr_part.contains(':') {
        let addr = parse_ipv6_addr(addr_part)?;
        let prefix = match suffix {
            Some(s) => parse_prefix(s, Family::V6)?,
            None => 128,
        };
        IpNetwork::new(Family::V6, addr, prefix)
    } else {
        let addr = parse_ipv4_addr(addr_part)?;
        let prefix = match suffix {
            Some(s) if s.contains('.') || s.starts_with("0x") => netmask::prefix_from_netmask(s)?,
            Some(s) => parse_prefix(s, Family::V4)?,
            None => 32,
        };
        IpNetwork::new(Family::V4, u128::from(addr), prefix)
    }
}

impl FromStr for IpNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Split `text` into the address part and an optional prefix suffix.
fn split_at_slash(text: &str) -> Result<(&str, Option<&str>), Error> {
    let mut parts = text.split('/');
    let addr = parts.next().unwrap_or("");
    let suffix = parts.next();
    if parts.next().is_some() {
        return Err(Error::invalid_format(text));
    }
    match suffix {
        Some("") => Err(Error::invalid_format(text)),
        _ if addr.is_empty() => Err(Error::invalid_format(text)),
        _ => Ok((addr, suffix)),
    }
}

/// Parse a numeric prefix suffix, enforcing the family's bit width.
fn parse_prefix(text: &str, family: Family) -> Result<u8, Error> {
    let prefix: u8 = text.parse().map_err(|_| Error::invalid_format(text))?;
    if prefix > family.bits() {
        return Err(Error::out_of_range(text));
    }
    Ok(prefix)
}

/// Parse an IPv4 literal (1-4 octets, missing trailing octets default to
/// zero) into its 32-bit value.
pub(crate) fn parse_ipv4_addr(text: &str) -> Result<u32, Error> {
    if !IPV4_RE.is_match(text) {
        return Err(Error::invalid_format(text));
    }
    let mut value: u32 = 0;
    let mut octets: u32 = 0;
    for octet in text.split('.') {
        let n: u32 = octet.parse().map_err(|_| Error::invalid_format(text))?;
        if n > 255 {
            return Err(Error::out_of_range(text));
        }
        value = (value << 8) | n;
        octets += 1;
    }
    Ok(value << (8 * (4 - octets)))
}

/// Parse an IPv6 literal into its 128-bit value.
///
/// Follows the RFC shorthand for IPv4-mapped addresses: when the literal
/// ends in a dotted quad and the top 96 bits come out zero (the
/// `::a.b.c.d` form), the `ffff` group is inserted automatically, so
/// `::13.1.68.3` yields `0xffff_0d01_4403`.
fn parse_ipv6_addr(text: &str) -> Result<u128, Error> {
    let has_dotted_quad = text.contains('.');

    let groups: Vec<u16> = if let Some((left, right)) = text.split_once("::") {
        if right.contains("::") {
            // at most one elision
            return Err(Error::invalid_format(text));
        }
        let left_groups = split_hextets(left, text, false)?;
        let right_groups = split_hextets(right, text, true)?;
        if left_groups.len() + right_groups.len() > 7 {
            // "::" must stand for at least one zero hextet
            return Err(Error::invalid_format(text));
        }
        let mut groups = left_groups;
        groups.resize(8 - right_groups.len(), 0);
        groups.extend(right_groups);
        groups
    } else {
        let groups = split_hextets(text, text, true)?;
        if groups.len() != 8 {
            return Err(Error::invalid_format(text));
        }
        groups
    };

    let mut value: u128 = 0;
    for group in groups {
        value = (value << 16) | u128::from(group);
    }

    if has_dotted_quad && value >> 32 == 0 {
        value |= 0xffff << 32;
    }
    Ok(value)
}

/// Split one side of an IPv6 literal into hextet values. A dotted-quad
/// IPv4 literal is only legal as the final group of the whole address,
/// where it expands into two hextets.
fn split_hextets(part: &str, full: &str, last_may_be_ipv4: bool) -> Result<Vec<u16>, Error> {
    if part.is_empty() {
        return Ok(Vec::new());
    }
    let pieces: Vec<&str> = part.split(':').collect();
    let mut groups = Vec::with_capacity(pieces.len() + 1);
    for (i, piece) in pieces.iter().enumerate() {
        let is_last = i == pieces.len() - 1;
        if piece.contains('.') {
            if !(last_may_be_ipv4 && is_last) {
                return Err(Error::invalid_format(full));
            }
            let embedded = parse_ipv4_addr(piece).map_err(|_| Error::invalid_format(full))?;
            groups.push((embedded >> 16) as u16);
            groups.push((embedded & 0xffff) as u16);
        } else {
            groups.push(parse_hextet(piece, full)?);
        }
    }
    Ok(groups)
}

/// Parse a single 1-4 digit hex group.
fn parse_hextet(piece: &str, full: &str) -> Result<u16, Error> {
    if piece.is_empty() || piece.len() > 8 {
        return Err(Error::invalid_format(full));
    }
    let value = u32::from_str_radix(piece, 16).map_err(|_| Error::invalid_format(full))?;
    if value > 0xffff {
        return Err(Error::out_of_range(full));
    }
    Ok(value as u16)
}

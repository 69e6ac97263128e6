//! Netmask bit-pattern handling.
//!
//! A netmask is a dotted-decimal or `0x`-prefixed hexadecimal encoding of
//! a prefix length: a contiguous run of 1-bits followed by 0-bits.
//! `255.255.255.0` is a valid netmask; `10.0.0.1` is not, even though
//! both parse as IPv4 addresses.

use crate::error::Error;
use crate::parser;

/// Check whether `text` encodes a valid netmask.
///
/// # Examples
/// ```
/// use cidr_summary::is_valid_netmask;
/// assert!(is_valid_netmask("255.255.255.0"));
/// assert!(!is_valid_netmask("10.0.0.1"));
/// ```
pub fn is_valid_netmask(text: &str) -> bool {
    netmask_value(text).map(is_contiguous).unwrap_or(false)
}

/// Convert a netmask string to its prefix length, rejecting
/// non-contiguous bit patterns.
pub(crate) fn prefix_from_netmask(text: &str) -> Result<u8, Error> {
    let value = netmask_value(text).ok_or_else(|| Error::invalid_format(text))?;
    if !is_contiguous(value) {
        return Err(Error::invalid_format(text));
    }
    Ok(value.leading_ones() as u8)
}

/// Parse a dotted-decimal quad or `0x` hex literal as a 32-bit value.
fn netmask_value(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x") {
        return u32::from_str_radix(hex, 16).ok();
    }
    parser::parse_ipv4_addr(text).ok()
}

/// True when the value is 1-bits followed by 0-bits.
fn is_contiguous(value: u32) -> bool {
    let inverted = !value;
    inverted & inverted.wrapping_add(1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_netmasks() {
        assert!(is_valid_netmask("255.255.255.0"));
        assert!(is_valid_netmask("255.255.255.255"));
        assert!(is_valid_netmask("0.0.0.0"));
        assert!(is_valid_netmask("255.128.0.0"));
        assert!(is_valid_netmask("0xffffff00"));
        assert!(is_valid_netmask("0xffffffff"));
    }

    #[test]
    fn test_invalid_netmasks() {
        assert!(!is_valid_netmask("10.0.0.1"), "valid address, not a mask");
        assert!(!is_valid_netmask("255.0.255.0"), "hole in the bit run");
        assert!(!is_valid_netmask("0.255.255.255"), "ones after zeros");
        assert!(!is_valid_netmask("255.255.255.256"));
        assert!(!is_valid_netmask("not-a-mask"));
        assert!(!is_valid_netmask("0xgg"));
    }

    #[test]
    fn test_prefix_from_netmask() {
        assert_eq!(prefix_from_netmask("255.255.255.0").unwrap(), 24);
        assert_eq!(prefix_from_netmask("255.255.0.0").unwrap(), 16);
        assert_eq!(prefix_from_netmask("0.0.0.0").unwrap(), 0);
        assert_eq!(prefix_from_netmask("255.255.255.255").unwrap(), 32);
        assert_eq!(prefix_from_netmask("0xffff0000").unwrap(), 16);
        assert!(prefix_from_netmask("255.0.255.0").is_err());
    }
}

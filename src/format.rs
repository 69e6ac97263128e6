//! Canonical text rendering.
//!
//! IPv4 always renders as the full dotted quad, even when the input used
//! an abbreviated form. IPv6 renders lower-case colon-hex with `::`
//! applied to the single longest run of zero hextets (leftmost run on
//! ties); the all-zero address renders as `::`.

use crate::models::{Family, IpNetwork};

/// Render each network through `to_string()`, preserving order.
pub fn to_string_vec(networks: &[IpNetwork]) -> Vec<String> {
    networks.iter().map(|net| net.to_string()).collect()
}

/// Canonical text of a raw address value for the given family.
pub(crate) fn address_text(family: Family, addr: u128) -> String {
    match family {
        Family::V4 => ipv4_text(addr as u32),
        Family::V6 => ipv6_text(addr),
    }
}

fn ipv4_text(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        addr >> 24,
        (addr >> 16) & 0xff,
        (addr >> 8) & 0xff,
        addr & 0xff
    )
}

fn ipv6_text(addr: u128) -> String {
    let mut groups = [0u16; 8];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = (addr >> (112 - 16 * i)) as u16;
    }

    let (start, len) = longest_zero_run(&groups);
    if len == 0 {
        return join_hex(&groups);
    }
    format!(
        "{}::{}",
        join_hex(&groups[..start]),
        join_hex(&groups[start + len..])
    )
}

/// Longest run of zero hextets as (start, length); leftmost wins ties.
fn longest_zero_run(groups: &[u16; 8]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best.1 {
                best = (run_start, run_len);
            }
        } else {
            run_len = 0;
        }
    }
    best
}

fn join_hex(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|group| format!("{group:x}"))
        .collect::<Vec<String>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_ipv4_full_dotted_quad() {
        assert_eq!(parse("10.0").unwrap().to_string(), "10.0.0.0/32");
        assert_eq!(parse("10.0/8").unwrap().to_string(), "10.0.0.0/8");
        assert_eq!(
            parse("255.255.255.255/32").unwrap().to_string(),
            "255.255.255.255/32"
        );
        assert_eq!(parse("0.0.0.0/0").unwrap().to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_ipv6_compression() {
        assert_eq!(parse("::").unwrap().to_string(), "::/128");
        assert_eq!(parse("::1").unwrap().to_string(), "::1/128");
        assert_eq!(parse("2000:1::/32").unwrap().to_string(), "2000:1::/32");
        assert_eq!(
            parse("2001:db8:0:0:8:800:200c:417a/64").unwrap().to_string(),
            "2001:db8::8:800:200c:417a/64"
        );
        assert_eq!(
            parse("1:2:3:4:5:6:7:8").unwrap().to_string(),
            "1:2:3:4:5:6:7:8/128",
            "no zero run, no elision"
        );
    }

    #[test]
    fn test_ipv6_longest_run_leftmost_tie() {
        // runs of length 2 at groups 1-2 and 5-6; leftmost is elided
        assert_eq!(
            parse("1:0:0:2:3:0:0:4").unwrap().to_string(),
            "1::2:3:0:0:4/128"
        );
        // the longer right-hand run wins
        assert_eq!(
            parse("1:0:0:2:0:0:0:4").unwrap().to_string(),
            "1:0:0:2::4/128"
        );
    }

    #[test]
    fn test_mapped_renders_as_colon_hex() {
        assert_eq!(
            parse("::13.1.68.3").unwrap().to_string(),
            "::ffff:d01:4403/128"
        );
    }

    #[test]
    fn test_to_string_vec_preserves_order() {
        let nets = vec![
            parse("10.0.1.0/24").unwrap(),
            parse("10.0.0.0/24").unwrap(),
        ];
        assert_eq!(to_string_vec(&nets), vec!["10.0.1.0/24", "10.0.0.0/24"]);
        assert!(to_string_vec(&[]).is_empty());
    }
}

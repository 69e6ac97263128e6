//! CIDR block summarization.
//!
//! Merges a collection of same-family networks into the minimal,
//! non-overlapping, ordered set of CIDR-aligned blocks covering exactly
//! the same address space.

use itertools::Itertools;

use crate::error::Error;
use crate::models::{Family, IpNetwork};
use crate::parser::parse;

/// Summarize networks into the minimal covering CIDR set, sorted
/// ascending by first address.
///
/// All inputs must share one address family; mixing IPv4 and IPv6 in a
/// single call returns [`Error::MixedFamily`]. Empty input yields an
/// empty result. Inputs are never mutated: every output network is a
/// newly constructed canonical value.
///
/// # Examples
/// ```
/// use cidr_summary::{parse, summarize, to_string_vec};
/// let nets = vec![
///     parse("10.0.0.0/24").unwrap(),
///     parse("10.0.1.0/24").unwrap(),
/// ];
/// let merged = summarize(&nets).unwrap();
/// assert_eq!(to_string_vec(&merged), vec!["10.0.0.0/23"]);
/// ```
pub fn summarize(networks: &[IpNetwork]) -> Result<Vec<IpNetwork>, Error> {
    let family = match networks.first() {
        Some(net) => net.family(),
        None => return Ok(Vec::new()),
    };
    if networks.iter().any(|net| net.family() != family) {
        return Err(Error::MixedFamily);
    }

    // Canonical blocks, sorted by first address ascending with larger
    // blocks first, exact duplicates dropped.
    let mut blocks: Vec<IpNetwork> = networks.iter().map(|net| net.network()).collect();
    blocks.sort_unstable();
    blocks.dedup();

    // Absorption: a containing block sorts before the blocks it covers,
    // so one left-to-right pass removes every contained block.
    let mut blocks: Vec<IpNetwork> = blocks
        .into_iter()
        .coalesce(|prev, next| {
            if prev.contains(&next) {
                Ok(prev)
            } else {
                Err((prev, next))
            }
        })
        .collect();

    // Buddy-merge passes until a full pass makes no progress. Each pass
    // can at most halve the block count, so the fixed point is reached
    // in O(log maxBlocks) passes.
    loop {
        let before = blocks.len();
        blocks = merge_pass(blocks, family);
        log::debug!("summarize merge pass: {} -> {} blocks", before, blocks.len());
        if blocks.len() == before {
            break;
        }
    }

    blocks.sort_unstable();
    Ok(blocks)
}

/// Parse then summarize. Fails fast on the first malformed input,
/// returning its parse error and no partial result.
///
/// # Examples
/// ```
/// use cidr_summary::{summarize_str, to_string_vec};
/// let merged = summarize_str(["10.1.0.4/24"]).unwrap();
/// assert_eq!(to_string_vec(&merged), vec!["10.1.0.0/24"]);
/// ```
pub fn summarize_str<I, S>(texts: I) -> Result<Vec<IpNetwork>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let networks: Vec<IpNetwork> = texts
        .into_iter()
        .map(|text| parse(text.as_ref()))
        .collect::<Result<_, _>>()?;
    summarize(&networks)
}

/// One left-to-right scan merging adjacent buddy pairs.
fn merge_pass(blocks: Vec<IpNetwork>, family: Family) -> Vec<IpNetwork> {
    let mut merged = Vec::with_capacity(blocks.len());
    let mut iter = blocks.into_iter().peekable();
    while let Some(block) = iter.next() {
        if let Some(next) = iter.peek() {
            if let Some(parent) = buddy_merge(&block, next, family.bits()) {
                merged.push(parent);
                iter.next();
                continue;
            }
        }
        merged.push(block);
    }
    merged
}

/// Merge two canonical blocks into their parent when they are buddies:
/// equal prefix length, numerically adjacent, and the first block
/// aligned to the halved prefix. Returns the parent block of prefix
/// `L-1`, or `None` when the pair is not mergeable.
fn buddy_merge(a: &IpNetwork, b: &IpNetwork, bits: u8) -> Option<IpNetwork> {
    let prefix = a.prefix();
    if prefix == 0 || prefix != b.prefix() {
        return None;
    }
    let shift = bits - prefix;
    let block_index = a.first() >> shift;
    if block_index & 1 != 0 {
        // odd buddy: not aligned to a 2^(bits-(L-1)) boundary
        return None;
    }
    if b.first() >> shift != block_index + 1 {
        // equal-size blocks are adjacent iff their indices are consecutive
        return None;
    }
    Some(a.with_prefix(prefix - 1))
}

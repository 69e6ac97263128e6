//! IP address parsing and CIDR block summarization.
//!
//! A pure representational and algorithmic library: parse IPv4/IPv6
//! CIDR text into immutable [`IpNetwork`] values, query them, and merge
//! arbitrary collections of same-family networks into the minimal,
//! non-overlapping, ordered set of CIDR-aligned blocks covering the same
//! address space. No network traffic is sent or received.
//!
//! ```
//! use cidr_summary::{summarize_str, to_string_vec};
//!
//! let merged = summarize_str(["10.0.0.0/24", "10.0.1.0/24"]).unwrap();
//! assert_eq!(to_string_vec(&merged), vec!["10.0.0.0/23"]);
//! ```

mod error;
mod format;
pub mod models;
mod parser;
pub mod processing;

pub use error::Error;
pub use format::to_string_vec;
pub use models::{is_valid_netmask, Family, IpNetwork};
pub use parser::parse;
pub use processing::{summarize, summarize_str};

/// True when `text` parses as an IPv4 or IPv6 network.
///
/// # Examples
/// ```
/// use cidr_summary::is_valid;
/// assert!(is_valid("10.0"));
/// assert!(!is_valid("10.0.0.256"));
/// ```
pub fn is_valid(text: &str) -> bool {
    parser::parse(text).is_ok()
}

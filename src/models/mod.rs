//! Domain models for address parsing and summarization.
//!
//! This module contains the core data structures used throughout the
//! library:
//! - [`Family`] - address family tag (IPv4 / IPv6)
//! - [`IpNetwork`] - immutable address-plus-prefix value type
//! - [`is_valid_netmask`] - netmask bit-pattern checks

mod address;
pub(crate) mod netmask;

// Re-export public types
pub use address::{Family, IpNetwork};
pub use netmask::is_valid_netmask;

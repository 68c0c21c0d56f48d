//! Domain models for classful subnetting.
//!
//! This module contains the value types the calculator works with:
//! - [`Ipv4Address`] - Parsed dotted-decimal IPv4 address
//! - [`AddressClass`] - Legacy address class (A-E)
//! - [`SubnetPlan`] - Result of a classful subnet calculation

mod address;
mod class;
mod plan;

// Re-export public types
pub use address::{Ipv4Address, OCTET_COUNT};
pub use class::{AddressClass, CLASS_PREFIXES};
pub use plan::SubnetPlan;

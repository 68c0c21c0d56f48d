//! Classful IPv4 subnetting.
//!
//! Converts a dotted-decimal address to binary, classifies it under legacy
//! classful addressing (A-E), gives the default mask of its class and
//! computes classful subnet masks for a requested number of subnets and hosts.
//!
//! ```
//! use classful_subnet::{AddressCalculator, AddressClass};
//!
//! let calc = AddressCalculator::new("192.168.0.0").unwrap();
//! assert_eq!(calc.classify().unwrap(), AddressClass::C);
//! assert_eq!(calc.default_subnet_mask().unwrap(), Some("255.255.255.0"));
//! ```
//!
//! Nothing in the crate installs a logger; diagnostics go through the `log`
//! facade.

pub mod calc;
pub mod error;
pub mod models;
pub mod output;

pub use calc::AddressCalculator;
pub use error::{SubnetError, SubnetResult};
pub use models::{AddressClass, Ipv4Address, SubnetPlan};

//! Error types for classful subnet calculations.

use crate::models::AddressClass;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    /// The first octet matched none of the class prefixes.
    #[error("No address class matches first octet {first_octet:08b}")]
    UnknownClass { first_octet: u8 },
    #[error("Class {class} has no classful network portion")]
    NoClassfulNetwork { class: AddressClass },
    #[error("Count '{name}' must be a positive integer")]
    InvalidCount { name: &'static str },
    /// The requested subnets/hosts do not fit in the class bit budget.
    #[error(
        "Class {class} cannot hold {subnets} subnet(s) of {hosts} host(s): at most {capacity} usable host(s) per subnet"
    )]
    InfeasibleSubnet {
        class: AddressClass,
        subnets: u32,
        hosts: u32,
        capacity: u64,
    },
    #[error("Invalid binary octet '{octet}'")]
    InvalidBinaryOctet { octet: String },
    #[error("Mask length {bits} is too long")]
    MaskTooLong { bits: u8 },
}

pub type SubnetResult<T> = std::result::Result<T, SubnetError>;

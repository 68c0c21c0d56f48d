//! Classful subnet calculations.
//!
//! - [`binary`] - Octet and mask conversions between binary and decimal
//! - [`calculator`] - [`AddressCalculator`] operations over one address

mod binary;
mod calculator;

pub use binary::{
    binary_mask_to_decimal, binary_octet_to_decimal, mask_binary, octet_to_binary, ADDRESS_BITS,
    OCTET_BITS,
};
pub use calculator::{subnet_bits_for, usable_hosts_for, AddressCalculator, RESERVED_HOSTS};

//! Legacy classful address classes.
//!
//! The class of an address is decided by the leading bits of its first octet.
//! [`CLASS_PREFIXES`] lists those bit prefixes in the order they must be
//! checked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classful address class of an IPv4 address.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved / experimental.
    E,
}

/// Leading-bit prefixes of the first octet, shortest first.
///
/// A prefix match is only unambiguous when checked front to back.
pub const CLASS_PREFIXES: [(&str, AddressClass); 5] = [
    ("0", AddressClass::A),
    ("10", AddressClass::B),
    ("110", AddressClass::C),
    ("1110", AddressClass::D),
    ("1111", AddressClass::E),
];

impl AddressClass {
    /// Match the binary form of a first octet against [`CLASS_PREFIXES`].
    ///
    /// Returns `None` when no prefix matches.
    pub fn from_leading_bits(first_octet_binary: &str) -> Option<AddressClass> {
        CLASS_PREFIXES
            .iter()
            .find(|(prefix, _)| first_octet_binary.starts_with(prefix))
            .map(|(_, class)| *class)
    }

    /// The leading bits identifying this class.
    pub fn leading_bits(&self) -> &'static str {
        match self {
            AddressClass::A => "0",
            AddressClass::B => "10",
            AddressClass::C => "110",
            AddressClass::D => "1110",
            AddressClass::E => "1111",
        }
    }

    /// Bits of the classful network portion, `None` for D and E.
    pub fn network_bits(&self) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            AddressClass::D | AddressClass::E => None,
        }
    }

    /// Default subnet mask in dotted decimal, `None` for D and E.
    pub fn default_mask(&self) -> Option<&'static str> {
        match self {
            AddressClass::A => Some("255.0.0.0"),
            AddressClass::B => Some("255.255.0.0"),
            AddressClass::C => Some("255.255.255.0"),
            AddressClass::D | AddressClass::E => None,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{letter}")
    }
}

//! Dotted-decimal IPv4 address value.
//!
//! [`Ipv4Address`] keeps the four parsed octets together with the text it was
//! parsed from, so results can echo the address the way the caller wrote it.

use crate::error::{SubnetError, SubnetResult};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of octets in an IPv4 address.
pub const OCTET_COUNT: usize = 4;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Immutable IPv4 address of four octets.
#[derive(Debug, Clone, Eq)]
pub struct Ipv4Address {
    octets: [u8; OCTET_COUNT],
    text: String,
}

impl Ipv4Address {
    /// Parse a dotted-decimal address such as `"192.168.0.0"`.
    ///
    /// Surrounding whitespace is ignored. Anything other than four decimal
    /// segments in 0-255 is rejected.
    ///
    /// # Examples
    /// ```
    /// use classful_subnet::models::Ipv4Address;
    /// let addr = Ipv4Address::new("10.1.2.3").unwrap();
    /// assert_eq!(addr.octets(), [10, 1, 2, 3]);
    /// assert!(Ipv4Address::new("10.1.2").is_err());
    /// ```
    pub fn new(address: &str) -> SubnetResult<Ipv4Address> {
        let address = address.trim();
        let invalid = |reason: String| SubnetError::InvalidAddress {
            address: address.to_string(),
            reason,
        };

        let segments = address.split('.').count();
        if segments != OCTET_COUNT {
            return Err(invalid(format!(
                "expected {OCTET_COUNT} segments, found {segments}"
            )));
        }

        let caps = DOTTED_QUAD
            .captures(address)
            .ok_or_else(|| invalid("segments must be 1 to 3 decimal digits".to_string()))?;

        let mut octets = [0u8; OCTET_COUNT];
        for (i, octet) in octets.iter_mut().enumerate() {
            let segment = &caps[i + 1];
            *octet = segment
                .parse()
                .map_err(|_| invalid(format!("octet {segment} is out of range 0-255")))?;
        }

        log::trace!("parsed address {address} as {octets:?}");
        Ok(Ipv4Address {
            octets,
            text: address.to_string(),
        })
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    pub fn first_octet(&self) -> u8 {
        self.octets[0]
    }

    /// The address text as given at construction (trimmed).
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Ipv4Address {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::new(s)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address {
            octets: addr.octets(),
            text: addr.to_string(),
        }
    }
}

impl From<&Ipv4Address> for Ipv4Addr {
    fn from(addr: &Ipv4Address) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Equality is by value: "10.0.0.1" and "010.000.000.001" are the same address.
impl PartialEq for Ipv4Address {
    fn eq(&self, other: &Ipv4Address) -> bool {
        self.octets == other.octets
    }
}

impl Hash for Ipv4Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state);
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::new(&s).map_err(de::Error::custom)
    }
}

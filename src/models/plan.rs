//! Classful subnetting result.

use super::AddressClass;
use serde::{Deserialize, Serialize};

/// A classful subnet plan computed for one address.
///
/// `network_bits + subnet_bits + host_bits` is always 32.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    /// Class of the address the plan was computed for.
    pub class: AddressClass,
    /// Classful network portion (8, 16 or 24).
    pub network_bits: u8,
    /// Bits borrowed from the host portion to number the subnets.
    pub subnet_bits: u8,
    /// Bits left for hosts inside each subnet.
    pub host_bits: u8,
    /// Mask as 32 binary digits in dotted octets.
    pub subnet_mask_binary: String,
    /// Mask in dotted decimal.
    pub subnet_mask_decimal: String,
    /// Address with prefix length, e.g. `192.168.0.0/26`.
    pub subnet_mask_short: String,
    /// Number of subnets the subnet bits can number (2^subnet_bits).
    pub subnets_available: u64,
    /// Usable hosts per subnet, excluding network and broadcast addresses.
    pub usable_hosts: u64,
}

impl SubnetPlan {
    /// Total mask length (network + subnet bits).
    pub fn mask_bits(&self) -> u8 {
        self.network_bits + self.subnet_bits
    }
}

impl std::fmt::Display for SubnetPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::output::plan_summary(self))
    }
}

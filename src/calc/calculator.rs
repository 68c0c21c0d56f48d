//! Classful calculations over one IPv4 address.

use super::binary::{binary_mask_to_decimal, mask_binary, octet_to_binary, ADDRESS_BITS};
use crate::error::{SubnetError, SubnetResult};
use crate::models::{AddressClass, Ipv4Address, SubnetPlan};
use itertools::Itertools;

/// Addresses reserved in every subnet (network and broadcast).
pub const RESERVED_HOSTS: u64 = 2;

/// Classful subnetting calculator for one address.
///
/// Holds no state besides the address, every call recomputes from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCalculator {
    address: Ipv4Address,
}

/// Smallest number of bits able to number `count` subnets, i.e. ceil(log2(count)).
pub fn subnet_bits_for(count: u32) -> u8 {
    u64::from(count).next_power_of_two().trailing_zeros() as u8
}

/// Usable hosts in a subnet with `host_bits` host bits.
///
/// Negative or too-small host portions hold no usable hosts.
pub fn usable_hosts_for(host_bits: i32) -> u64 {
    if host_bits < 0 {
        return 0;
    }
    (1u64 << host_bits).saturating_sub(RESERVED_HOSTS)
}

impl AddressCalculator {
    /// Create a calculator for a dotted-decimal address.
    pub fn new(address: &str) -> SubnetResult<AddressCalculator> {
        Ok(AddressCalculator {
            address: Ipv4Address::new(address)?,
        })
    }

    pub fn address(&self) -> &Ipv4Address {
        &self.address
    }

    /// Dotted binary form of the address.
    ///
    /// # Examples
    /// ```
    /// use classful_subnet::AddressCalculator;
    /// let calc = AddressCalculator::new("192.168.0.0").unwrap();
    /// assert_eq!(calc.to_binary(), "11000000.10101000.00000000.00000000");
    /// ```
    pub fn to_binary(&self) -> String {
        self.address
            .octets()
            .iter()
            .map(|octet| octet_to_binary(*octet))
            .join(".")
    }

    /// Classify the address from the leading bits of its first octet.
    pub fn classify(&self) -> SubnetResult<AddressClass> {
        let first_octet = self.address.first_octet();
        AddressClass::from_leading_bits(&octet_to_binary(first_octet))
            .ok_or(SubnetError::UnknownClass { first_octet })
    }

    /// Default subnet mask of the address class, `None` for classes D and E.
    pub fn default_subnet_mask(&self) -> SubnetResult<Option<&'static str>> {
        Ok(self.classify()?.default_mask())
    }

    /// Classful subnet mask able to hold `subnets_count` subnets of
    /// `hosts_count` hosts each.
    ///
    /// # Examples
    /// ```
    /// use classful_subnet::AddressCalculator;
    /// let plan = AddressCalculator::new("192.168.0.0")
    ///     .unwrap()
    ///     .classful_subnet(4, 60)
    ///     .unwrap();
    /// assert_eq!(plan.subnet_mask_decimal, "255.255.255.192");
    /// assert_eq!(plan.subnet_mask_short, "192.168.0.0/26");
    /// ```
    pub fn classful_subnet(
        &self,
        subnets_count: u32,
        hosts_count: u32,
    ) -> SubnetResult<SubnetPlan> {
        if subnets_count == 0 {
            return Err(SubnetError::InvalidCount {
                name: "subnets_count",
            });
        }
        if hosts_count == 0 {
            return Err(SubnetError::InvalidCount {
                name: "hosts_count",
            });
        }

        let class = self.classify()?;
        let network_bits = class
            .network_bits()
            .ok_or(SubnetError::NoClassfulNetwork { class })?;
        let subnet_bits = subnet_bits_for(subnets_count);
        let host_bits =
            i32::from(ADDRESS_BITS) - i32::from(network_bits) - i32::from(subnet_bits);
        let capacity = usable_hosts_for(host_bits);

        log::debug!(
            "classful_subnet({subnets_count}, {hosts_count}) for {addr}: class={class} N={network_bits} S={subnet_bits} H={host_bits} capacity={capacity}",
            addr = self.address
        );

        if capacity < u64::from(hosts_count) {
            log::warn!(
                "{addr}: {subnets_count} subnet(s) of {hosts_count} host(s) do not fit class {class}",
                addr = self.address
            );
            return Err(SubnetError::InfeasibleSubnet {
                class,
                subnets: subnets_count,
                hosts: hosts_count,
                capacity,
            });
        }

        // capacity >= 1 implies 2 <= host_bits <= 24
        let host_bits = host_bits as u8;
        let mask_bits = network_bits + subnet_bits;
        let subnet_mask_binary = mask_binary(mask_bits)?;
        let subnet_mask_decimal = binary_mask_to_decimal(&subnet_mask_binary)?;

        Ok(SubnetPlan {
            class,
            network_bits,
            subnet_bits,
            host_bits,
            subnet_mask_short: format!("{}/{}", self.address, mask_bits),
            subnet_mask_binary,
            subnet_mask_decimal,
            subnets_available: 1u64 << subnet_bits,
            usable_hosts: capacity,
        })
    }
}

impl From<Ipv4Address> for AddressCalculator {
    fn from(address: Ipv4Address) -> Self {
        AddressCalculator { address }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(address: &str) -> AddressCalculator {
        AddressCalculator::new(address).unwrap()
    }

    #[test]
    fn test_subnet_bits_for() {
        assert_eq!(subnet_bits_for(1), 0);
        assert_eq!(subnet_bits_for(2), 1);
        assert_eq!(subnet_bits_for(3), 2);
        assert_eq!(subnet_bits_for(4), 2);
        assert_eq!(subnet_bits_for(5), 3);
        assert_eq!(subnet_bits_for(1024), 10);
        assert_eq!(subnet_bits_for(1025), 11);
        assert_eq!(subnet_bits_for(u32::MAX), 32);
    }

    #[test]
    fn test_usable_hosts_for() {
        assert_eq!(usable_hosts_for(-3), 0);
        assert_eq!(usable_hosts_for(0), 0);
        assert_eq!(usable_hosts_for(1), 0);
        assert_eq!(usable_hosts_for(2), 2);
        assert_eq!(usable_hosts_for(6), 62);
        assert_eq!(usable_hosts_for(24), 16777214);
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(
            calc("192.168.0.0").to_binary(),
            "11000000.10101000.00000000.00000000"
        );
        assert_eq!(
            calc("10.1.255.128").to_binary(),
            "00001010.00000001.11111111.10000000"
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(calc("10.0.0.1").classify().unwrap(), AddressClass::A);
        assert_eq!(calc("127.255.0.1").classify().unwrap(), AddressClass::A);
        assert_eq!(calc("128.0.0.0").classify().unwrap(), AddressClass::B);
        assert_eq!(calc("191.1.0.0").classify().unwrap(), AddressClass::B);
        assert_eq!(calc("192.168.0.0").classify().unwrap(), AddressClass::C);
        assert_eq!(calc("223.0.0.0").classify().unwrap(), AddressClass::C);
        assert_eq!(calc("224.0.0.1").classify().unwrap(), AddressClass::D);
        assert_eq!(calc("239.255.255.255").classify().unwrap(), AddressClass::D);
        assert_eq!(calc("240.0.0.0").classify().unwrap(), AddressClass::E);
        assert_eq!(calc("255.255.255.255").classify().unwrap(), AddressClass::E);
    }

    #[test]
    fn test_default_subnet_mask() {
        assert_eq!(
            calc("10.0.0.0").default_subnet_mask().unwrap(),
            Some("255.0.0.0")
        );
        assert_eq!(
            calc("172.16.0.0").default_subnet_mask().unwrap(),
            Some("255.255.0.0")
        );
        assert_eq!(
            calc("192.168.0.0").default_subnet_mask().unwrap(),
            Some("255.255.255.0")
        );
        assert_eq!(calc("224.0.0.5").default_subnet_mask().unwrap(), None);
        assert_eq!(calc("250.0.0.5").default_subnet_mask().unwrap(), None);
    }

    #[test]
    fn test_classful_subnet_class_c() {
        let plan = calc("192.168.0.0").classful_subnet(4, 60).unwrap();
        assert_eq!(plan.class, AddressClass::C);
        assert_eq!(plan.network_bits, 24);
        assert_eq!(plan.subnet_bits, 2);
        assert_eq!(plan.host_bits, 6);
        assert_eq!(plan.subnet_mask_binary, "11111111.11111111.11111111.11000000");
        assert_eq!(plan.subnet_mask_decimal, "255.255.255.192");
        assert_eq!(plan.subnet_mask_short, "192.168.0.0/26");
        assert_eq!(plan.subnets_available, 4);
        assert_eq!(plan.usable_hosts, 62);
        assert_eq!(plan.mask_bits(), 26);
    }

    #[test]
    fn test_classful_subnet_class_b_and_a() {
        let plan = calc("172.16.0.0").classful_subnet(10, 1000).unwrap();
        assert_eq!(plan.class, AddressClass::B);
        assert_eq!((plan.network_bits, plan.subnet_bits, plan.host_bits), (16, 4, 12));
        assert_eq!(plan.subnet_mask_decimal, "255.255.240.0");
        assert_eq!(plan.subnet_mask_short, "172.16.0.0/20");

        let plan = calc("10.0.0.0").classful_subnet(300, 30000).unwrap();
        assert_eq!(plan.class, AddressClass::A);
        assert_eq!((plan.network_bits, plan.subnet_bits, plan.host_bits), (8, 9, 15));
        assert_eq!(plan.subnet_mask_decimal, "255.255.128.0");
        assert_eq!(plan.usable_hosts, 32766);
    }

    #[test]
    fn test_classful_subnet_exact_capacity() {
        // 2^6 - 2 = 62 hosts is just enough
        assert!(calc("192.168.0.0").classful_subnet(4, 62).is_ok());
        assert!(calc("192.168.0.0").classful_subnet(4, 63).is_err());
    }

    #[test]
    fn test_classful_subnet_infeasible() {
        let err = calc("192.168.0.0").classful_subnet(2, 200).unwrap_err();
        assert_eq!(
            err,
            SubnetError::InfeasibleSubnet {
                class: AddressClass::C,
                subnets: 2,
                hosts: 200,
                capacity: 126,
            }
        );

        // more subnet bits than the host portion has
        let err = calc("192.168.0.0").classful_subnet(1 << 9, 1).unwrap_err();
        assert!(matches!(err, SubnetError::InfeasibleSubnet { capacity: 0, .. }));
        let err = calc("10.0.0.0").classful_subnet(u32::MAX, 1).unwrap_err();
        assert!(matches!(err, SubnetError::InfeasibleSubnet { capacity: 0, .. }));
    }

    #[test]
    fn test_classful_subnet_single_subnet_uses_default_mask() {
        for address in ["10.0.0.0", "172.16.0.0", "192.168.0.0"] {
            let calculator = calc(address);
            let plan = calculator.classful_subnet(1, 2).unwrap();
            assert_eq!(plan.subnet_bits, 0);
            assert_eq!(plan.subnets_available, 1);
            assert_eq!(
                Some(plan.subnet_mask_decimal.as_str()),
                calculator.default_subnet_mask().unwrap()
            );
        }
    }

    #[test]
    fn test_classful_subnet_no_network_for_d_and_e() {
        assert_eq!(
            calc("224.0.0.1").classful_subnet(2, 2),
            Err(SubnetError::NoClassfulNetwork {
                class: AddressClass::D
            })
        );
        assert_eq!(
            calc("240.0.0.1").classful_subnet(2, 2),
            Err(SubnetError::NoClassfulNetwork {
                class: AddressClass::E
            })
        );
    }

    #[test]
    fn test_classful_subnet_zero_counts() {
        assert_eq!(
            calc("192.168.0.0").classful_subnet(0, 10),
            Err(SubnetError::InvalidCount {
                name: "subnets_count"
            })
        );
        assert_eq!(
            calc("192.168.0.0").classful_subnet(4, 0),
            Err(SubnetError::InvalidCount {
                name: "hosts_count"
            })
        );
    }

    #[test]
    fn test_from_address() {
        let address = Ipv4Address::new("192.168.1.1").unwrap();
        let calc = AddressCalculator::from(address.clone());
        assert_eq!(calc.address(), &address);
    }
}

//! Binary/decimal conversions for octets and subnet masks.

use crate::error::{SubnetError, SubnetResult};
use crate::models::OCTET_COUNT;
use itertools::Itertools;

/// Bits in an IPv4 address or mask.
pub const ADDRESS_BITS: u8 = 32;

/// Bits in one octet.
pub const OCTET_BITS: u8 = 8;

/// Convert an octet to 8 binary digits, most significant bit first.
///
/// # Examples
/// ```
/// use classful_subnet::calc::octet_to_binary;
/// assert_eq!(octet_to_binary(168), "10101000");
/// assert_eq!(octet_to_binary(5), "00000101");
/// ```
pub fn octet_to_binary(octet: u8) -> String {
    format!("{octet:08b}")
}

/// Parse 8 binary digits (most significant bit first) into an octet.
pub fn binary_octet_to_decimal(octet: &str) -> SubnetResult<u8> {
    let well_formed =
        octet.len() == OCTET_BITS as usize && octet.chars().all(|c| c == '0' || c == '1');
    if !well_formed {
        return Err(SubnetError::InvalidBinaryOctet {
            octet: octet.to_string(),
        });
    }
    u8::from_str_radix(octet, 2).map_err(|_| SubnetError::InvalidBinaryOctet {
        octet: octet.to_string(),
    })
}

/// Binary mask with the first `bits` bits set, grouped in dotted octets.
///
/// # Examples
/// ```
/// use classful_subnet::calc::mask_binary;
/// assert_eq!(
///     mask_binary(26).unwrap(),
///     "11111111.11111111.11111111.11000000"
/// );
/// ```
pub fn mask_binary(bits: u8) -> SubnetResult<String> {
    if bits > ADDRESS_BITS {
        return Err(SubnetError::MaskTooLong { bits });
    }

    let digits = (0..ADDRESS_BITS).map(|i| if i < bits { '1' } else { '0' });
    let groups = digits.chunks(OCTET_BITS as usize);
    let mask = groups
        .into_iter()
        .map(|group| group.collect::<String>())
        .join(".");

    log::trace!("mask_binary({bits}) = {mask}");
    Ok(mask)
}

/// Convert a dotted binary mask to dotted decimal, one octet at a time.
pub fn binary_mask_to_decimal(mask: &str) -> SubnetResult<String> {
    let octets = mask
        .split('.')
        .map(binary_octet_to_decimal)
        .collect::<SubnetResult<Vec<u8>>>()?;
    if octets.len() != OCTET_COUNT {
        return Err(SubnetError::InvalidBinaryOctet {
            octet: mask.to_string(),
        });
    }
    Ok(octets.iter().join("."))
}

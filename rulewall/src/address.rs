//! Dotted-decimal IPv4 text to and from its big-endian `u32` value.

use std::net::Ipv4Addr;

use crate::error::AddressFormatError;

const OCTETS: usize = 4;

/// Parses `A.B.C.D` where every octet is a decimal number in 0-255.
pub fn parse(text: &str) -> Result<u32, AddressFormatError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != OCTETS {
        return Err(AddressFormatError::WrongOctetCount(parts.len()));
    }

    let mut octets = [0u8; OCTETS];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)?;
    }
    Ok(u32::from_be_bytes(octets))
}

/// Formats any `u32` as dotted-decimal text.
pub fn format(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

fn parse_octet(part: &str) -> Result<u8, AddressFormatError> {
    // `u8::from_str` would also take a leading `+`
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressFormatError::NonNumericOctet(part.to_string()));
    }
    part.parse()
        .map_err(|_| AddressFormatError::OctetOutOfRange(part.to_string()))
}

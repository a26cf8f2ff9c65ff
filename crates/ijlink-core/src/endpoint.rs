//! Printer endpoint helpers

use std::net::Ipv4Addr;

use crate::error::CoreError;

/// Port the printer's call service listens on
pub const DEFAULT_PRINTER_PORT: u16 = 16664;

/// Session URL for a printer
pub fn endpoint_url(ip: Ipv4Addr, port: u16) -> String {
    format!("opc.tcp://{}:{}", ip, port)
}

/// Parse a printer address: dotted IPv4 whose first octet is 1..=255
pub fn parse_printer_ip(input: &str) -> Result<Ipv4Addr, CoreError> {
    let input = input.trim();
    let ip: Ipv4Addr = input
        .parse()
        .map_err(|_| CoreError::InvalidIp(input.to_string()))?;
    if ip.octets()[0] == 0 {
        return Err(CoreError::InvalidIp(input.to_string()));
    }
    Ok(ip)
}

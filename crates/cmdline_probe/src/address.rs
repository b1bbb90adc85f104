use std::net::Ipv4Addr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PortAddress {
    pub address: Ipv4Addr,
    pub port: u16,
}

impl PortAddress {
    pub fn parse(address: &str, port: u16) -> Result<Self, AddressError> {
        let address = address.trim().parse().map_err(|_| AddressError {
            input: address.to_string(),
        })?;
        Ok(Self { address, port })
    }
}

impl std::fmt::Display for PortAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.port {
            0 => write!(f, "{}", self.address),
            port => write!(f, "{}:{}", self.address, port),
        }
    }
}

#[derive(Debug)]
pub struct AddressError {
    input: String,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not an IPv4 address", self.input)
    }
}

impl std::error::Error for AddressError {}

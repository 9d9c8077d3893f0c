use super::Scope;
use crate::error::StackError;
use crate::template::Tag;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IpAddressVersion {
    Ipv4,
    Ipv6,
}

impl IpAddressVersion {
    pub fn label(&self) -> &'static str {
        match self {
            IpAddressVersion::Ipv4 => "IPv4",
            IpAddressVersion::Ipv6 => "IPv6",
        }
    }

    fn accepts(&self, network: &IpNetwork) -> bool {
        match self {
            IpAddressVersion::Ipv4 => network.is_ipv4(),
            IpAddressVersion::Ipv6 => network.is_ipv6(),
        }
    }
}

/// A named list of CIDR blocks (`AWS::WAFv2::IPSet`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSet {
    pub addresses: Vec<String>,
    #[serde(rename = "IPAddressVersion")]
    pub ip_address_version: IpAddressVersion,
    pub scope: Scope,
    pub description: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl IpSet {
    pub fn new(name: impl Into<String>, version: IpAddressVersion, scope: Scope) -> Self {
        Self {
            addresses: Vec::new(),
            ip_address_version: version,
            scope,
            description: String::new(),
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<String>) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    /// Parse every address; each must be explicit CIDR notation of this set's family.
    pub fn networks(&self) -> Result<Vec<IpNetwork>, StackError> {
        self.addresses
            .iter()
            .map(|address| {
                let invalid = || StackError::InvalidAddress {
                    set: self.name.clone(),
                    address: address.clone(),
                    family: self.ip_address_version.label(),
                };
                if !address.contains('/') {
                    return Err(invalid());
                }
                let network = IpNetwork::from_str(address).map_err(|_| invalid())?;
                if !self.ip_address_version.accepts(&network) {
                    return Err(invalid());
                }
                Ok(network)
            })
            .collect()
    }
}

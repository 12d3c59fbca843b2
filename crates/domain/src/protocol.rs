use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// IP protocol version a VLAN interface is exported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum IpProtocol {
    V4,
    V6,
}

impl IpProtocol {
    pub fn version(self) -> u8 {
        match self {
            IpProtocol::V4 => 4,
            IpProtocol::V6 => 6,
        }
    }
}

impl TryFrom<i64> for IpProtocol {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(IpProtocol::V4),
            6 => Ok(IpProtocol::V6),
            other => Err(DomainError::InvalidProtocol(other)),
        }
    }
}

impl From<IpProtocol> for i64 {
    fn from(protocol: IpProtocol) -> Self {
        i64::from(protocol.version())
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv{}", self.version())
    }
}

/// Lifecycle state of a physical switch port attachment, stored as its
/// integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i64)]
pub enum PhysicalInterfaceStatus {
    Connected = 1,
    Disabled = 2,
    NotConnected = 3,
    XConnect = 4,
    Quarantine = 5,
}

impl PhysicalInterfaceStatus {
    /// Exactly one state is ever selected for an export run.
    pub fn for_export(quarantine: bool) -> Self {
        if quarantine {
            PhysicalInterfaceStatus::Quarantine
        } else {
            PhysicalInterfaceStatus::Connected
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disabled => "disabled",
            Self::NotConnected => "not-connected",
            Self::XConnect => "awaiting-xconnect",
            Self::Quarantine => "quarantine",
        }
    }
}

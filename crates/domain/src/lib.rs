//! IXP Export Domain Layer
pub mod config;
pub mod customer;
pub mod errors;
pub mod export_target;
pub mod ixp_interface;
pub mod protocol;
pub mod vlan_interface;
pub mod vlan_interface_detail;
pub mod vlan_member;

pub use config::{CliOverrides, Config, ConfigError};
pub use customer::{CustomerStatus, CustomerType};
pub use errors::DomainError;
pub use export_target::ExportTarget;
pub use ixp_interface::{IxpInterfaceRow, ProtocolDetails};
pub use protocol::{IpProtocol, PhysicalInterfaceStatus};
pub use vlan_interface::{
    ExportedInterfaces, IrrdbFilter, RawInterfaceRow, SanitizedInterfaceRecord,
    DEFAULT_MAX_PREFIXES,
};
pub use vlan_interface_detail::{index_by_id, VlanInterfaceDetail, VlanInterfacesById};
pub use vlan_member::VlanMember;

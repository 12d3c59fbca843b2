mod irrdb_repository;
mod vlan_interface_repository;

pub use irrdb_repository::IrrdbRepository;
pub use vlan_interface_repository::VlanInterfaceRepository;

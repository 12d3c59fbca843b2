mod export_vlan_interfaces;
mod list_customer_vlan_interfaces;
mod list_ixp_interfaces;
mod list_vlan_interface_objects;
mod list_vlan_members;

pub use export_vlan_interfaces::ExportVlanInterfacesUseCase;
pub use list_customer_vlan_interfaces::ListCustomerVlanInterfacesUseCase;
pub use list_ixp_interfaces::ListIxpInterfacesUseCase;
pub use list_vlan_interface_objects::ListVlanInterfaceObjectsUseCase;
pub use list_vlan_members::ListVlanMembersUseCase;

pub mod vlan_interfaces;

pub use vlan_interfaces::{
    ExportVlanInterfacesUseCase, ListCustomerVlanInterfacesUseCase, ListIxpInterfacesUseCase,
    ListVlanInterfaceObjectsUseCase, ListVlanMembersUseCase,
};

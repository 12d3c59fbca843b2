use ixp_export_application::use_cases::{
    ExportVlanInterfacesUseCase, ListCustomerVlanInterfacesUseCase, ListIxpInterfacesUseCase,
    ListVlanInterfaceObjectsUseCase, ListVlanMembersUseCase,
};
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub export_vlan_interfaces: Arc<ExportVlanInterfacesUseCase>,
    pub list_ixp_interfaces: Arc<ListIxpInterfacesUseCase>,
    pub list_vlan_members: Arc<ListVlanMembersUseCase>,
    pub list_customer_vlan_interfaces: Arc<ListCustomerVlanInterfacesUseCase>,
    pub list_vlan_interface_objects: Arc<ListVlanInterfaceObjectsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            export_vlan_interfaces: Arc::new(ExportVlanInterfacesUseCase::new(
                repos.vlan_interface.clone(),
                repos.irrdb.clone(),
            )),
            list_ixp_interfaces: Arc::new(ListIxpInterfacesUseCase::new(
                repos.vlan_interface.clone(),
            )),
            list_vlan_members: Arc::new(ListVlanMembersUseCase::new(
                repos.vlan_interface.clone(),
            )),
            list_customer_vlan_interfaces: Arc::new(ListCustomerVlanInterfacesUseCase::new(
                repos.vlan_interface.clone(),
            )),
            list_vlan_interface_objects: Arc::new(ListVlanInterfaceObjectsUseCase::new(
                repos.vlan_interface.clone(),
            )),
        }
    }
}

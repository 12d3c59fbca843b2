use ixp_export_application::ports::{IrrdbRepository, VlanInterfaceRepository};
use ixp_export_infrastructure::repositories::{
    SqliteIrrdbRepository, SqliteVlanInterfaceRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub vlan_interface: Arc<dyn VlanInterfaceRepository>,
    pub irrdb: Arc<dyn IrrdbRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vlan_interface: Arc::new(SqliteVlanInterfaceRepository::new(pool.clone())),
            irrdb: Arc::new(SqliteIrrdbRepository::new(pool)),
        }
    }
}

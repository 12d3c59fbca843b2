use ixp_export_domain::{
    DomainError, ExportTarget, ExportedInterfaces, IpProtocol, IrrdbFilter,
    PhysicalInterfaceStatus, SanitizedInterfaceRecord,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{IrrdbRepository, VlanInterfaceRepository};

/// Builds the deduplicated set of peering sessions on a VLAN, keyed by
/// address, for route server and route collector configuration.
pub struct ExportVlanInterfacesUseCase {
    vli_repo: Arc<dyn VlanInterfaceRepository>,
    irrdb_repo: Arc<dyn IrrdbRepository>,
}

impl ExportVlanInterfacesUseCase {
    pub fn new(
        vli_repo: Arc<dyn VlanInterfaceRepository>,
        irrdb_repo: Arc<dyn IrrdbRepository>,
    ) -> Self {
        Self {
            vli_repo,
            irrdb_repo,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::InvalidProtocol` - `protocol` is not 4 or 6; raised
    ///   before any query is issued
    /// * Any repository error, unchanged
    ///
    /// When several rows share an address the first one returned by the
    /// repository wins and the rest are dropped without merging, so the
    /// result depends on the repository's row order.
    #[instrument(skip(self, target), fields(export_target = %target))]
    pub async fn execute(
        &self,
        vlan_id: i64,
        protocol: i64,
        target: &ExportTarget,
        quarantine: bool,
    ) -> Result<ExportedInterfaces, DomainError> {
        let protocol = IpProtocol::try_from(protocol)?;
        let status = PhysicalInterfaceStatus::for_export(quarantine);

        let rows = self.vli_repo.rows_for_vlan(vlan_id, protocol, status).await?;
        let fetched = rows.len();

        let mut exported = ExportedInterfaces::with_capacity(fetched);

        for row in rows {
            if !row.enabled {
                debug!(vliid = row.vliid, "Skipping interface: protocol not enabled");
                continue;
            }

            if target.requires_rs_client() && !row.rsclient {
                debug!(vliid = row.vliid, "Skipping interface: not a route server client");
                continue;
            }

            if exported.contains_key(&row.address) {
                debug!(
                    vliid = row.vliid,
                    address = %row.address,
                    "Skipping duplicate row for address"
                );
                continue;
            }

            let irrdb = if row.irrdbfilter {
                Some(self.irrdb_filter(row.cid, protocol).await?)
            } else {
                None
            };

            let address = row.address.clone();
            let mut record = SanitizedInterfaceRecord::from_raw(row, protocol);
            if let Some(filter) = irrdb {
                record = record.with_irrdb_filter(filter);
            }

            exported.insert(address, record);
        }

        info!(
            vlan_id,
            protocol = %protocol,
            export_target = %target,
            status = status.as_str(),
            fetched,
            exported = exported.len(),
            "VLAN interfaces exported"
        );

        Ok(exported)
    }

    async fn irrdb_filter(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<IrrdbFilter, DomainError> {
        let prefixes = self.irrdb_repo.prefixes_for(customer_id, protocol).await?;
        let asns = self.irrdb_repo.asns_for(customer_id, protocol).await?;

        Ok(IrrdbFilter { prefixes, asns })
    }
}

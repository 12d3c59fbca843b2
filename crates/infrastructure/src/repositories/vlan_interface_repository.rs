use async_trait::async_trait;
use ixp_export_application::ports::VlanInterfaceRepository;
use ixp_export_domain::{
    CustomerStatus, CustomerType, DomainError, IpProtocol, IxpInterfaceRow,
    PhysicalInterfaceStatus, ProtocolDetails, RawInterfaceRow, VlanInterfaceDetail, VlanMember,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::{column_opt_u32, column_u32};

pub struct SqliteVlanInterfaceRepository {
    pool: SqlitePool,
}

/// Columns of a `VlanInterfaceDetail`, with `vli`, `vi`, `c`, `v`, `v4addr`
/// and `v6addr` in scope.
const DETAIL_COLUMNS: &str = "vli.id AS vliid, c.id AS cid, c.name AS cname,
    c.shortname AS cshortname, vi.id AS viid,
    v.id AS vlanid, v.name AS vlanname, v.number AS vlannumber,
    vli.ipv4enabled AS ipv4enabled, v4addr.address AS ipv4address,
    vli.ipv6enabled AS ipv6enabled, v6addr.address AS ipv6address,
    vli.maxbgpprefix AS maxbgpprefix, vli.as112client AS as112client,
    vli.rsclient AS rsclient, vli.irrdbfilter AS irrdbfilter";

/// Joins backing `DETAIL_COLUMNS`. Addresses are optional.
const DETAIL_JOINS: &str = "FROM vlaninterface vli
    JOIN virtualinterface vi ON vli.virtualinterfaceid = vi.id
    JOIN cust c ON vi.custid = c.id
    JOIN vlan v ON vli.vlanid = v.id
    LEFT JOIN ipv4address v4addr ON vli.ipv4addressid = v4addr.id
    LEFT JOIN ipv6address v6addr ON vli.ipv6addressid = v6addr.id";

fn code_list(codes: &[i64]) -> String {
    codes
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Active, current and trafficking customers, aliased as `c`.
fn customer_predicates() -> String {
    format!(
        "c.status IN ({active})
         AND c.datejoin <= date('now')
         AND (c.dateleave IS NULL OR c.dateleave < '1970-01-01' OR c.dateleave >= date('now'))
         AND c.type NOT IN ({non_trafficking})",
        active = code_list(&CustomerStatus::active_codes()),
        non_trafficking = code_list(&CustomerType::codes_excluded_by(
            CustomerType::is_trafficking
        )),
    )
}

fn external_predicate() -> String {
    format!(
        "c.type NOT IN ({})",
        code_list(&CustomerType::codes_excluded_by(CustomerType::is_external))
    )
}

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::DatabaseError(e.to_string())
    }
}

fn text(row: &SqliteRow, column: &str) -> Result<Arc<str>, DomainError> {
    let value: String = row
        .try_get(column)
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    Ok(Arc::from(value.as_str()))
}

fn opt_text(row: &SqliteRow, column: &str) -> Result<Option<Arc<str>>, DomainError> {
    let value: Option<String> = row
        .try_get(column)
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    Ok(value.map(|s| Arc::from(s.as_str())))
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
}

impl SqliteVlanInterfaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_raw(row: &SqliteRow) -> Result<RawInterfaceRow, DomainError> {
        Ok(RawInterfaceRow {
            cid: get(row, "cid")?,
            cname: text(row, "cname")?,
            cshortname: text(row, "cshortname")?,
            autsys: column_u32(row, "autsys")?,
            gmaxprefixes: column_opt_u32(row, "gmaxprefixes")?,
            peeringmacro: get(row, "peeringmacro")?,
            peeringmacrov6: get(row, "peeringmacrov6")?,
            vliid: get(row, "vliid")?,
            enabled: get(row, "enabled")?,
            address: get(row, "address")?,
            bgpmd5secret: get(row, "bgpmd5secret")?,
            maxbgpprefix: column_opt_u32(row, "maxbgpprefix")?,
            as112client: get(row, "as112client")?,
            rsclient: get(row, "rsclient")?,
            irrdbfilter: get(row, "irrdbfilter")?,
            location_name: opt_text(row, "location_name")?,
            location_shortname: opt_text(row, "location_shortname")?,
            location_tag: opt_text(row, "location_tag")?,
        })
    }

    fn protocol_details(
        row: &SqliteRow,
        protocol: IpProtocol,
    ) -> Result<ProtocolDetails, DomainError> {
        let p = protocol.version();

        Ok(ProtocolDetails {
            enabled: get(row, &format!("ipv{}enabled", p))?,
            hostname: get(row, &format!("ipv{}hostname", p))?,
            canping: get(row, &format!("ipv{}canping", p))?,
            monitorrcbgp: get(row, &format!("ipv{}monitorrcbgp", p))?,
            bgpmd5secret: get(row, &format!("ipv{}bgpmd5secret", p))?,
            address: get(row, &format!("ipv{}address", p))?,
        })
    }

    fn row_to_ixp_interface(row: &SqliteRow) -> Result<IxpInterfaceRow, DomainError> {
        Ok(IxpInterfaceRow {
            cid: get(row, "cid")?,
            cname: text(row, "cname")?,
            cshortname: text(row, "cshortname")?,
            autsys: column_u32(row, "autsys")?,
            vliid: get(row, "vliid")?,
            ipv4: Self::protocol_details(row, IpProtocol::V4)?,
            ipv6: Self::protocol_details(row, IpProtocol::V6)?,
            maxbgpprefix: column_opt_u32(row, "maxbgpprefix")?,
            as112client: get(row, "as112client")?,
            rsclient: get(row, "rsclient")?,
            switchname: text(row, "switchname")?,
            switchport: text(row, "switchport")?,
            vlannumber: get(row, "vlannumber")?,
            ixpname: text(row, "ixpname")?,
        })
    }

    fn row_to_member(row: &SqliteRow) -> Result<VlanMember, DomainError> {
        Ok(VlanMember {
            cid: get(row, "cid")?,
            cname: text(row, "cname")?,
            cshortname: text(row, "cshortname")?,
            virtual_interface_id: get(row, "viid")?,
            physical_interface_id: get(row, "pid")?,
            vlan_interface_id: get(row, "vliid")?,
            switch_port_id: get(row, "spid")?,
            switch_id: get(row, "swid")?,
        })
    }

    fn row_to_detail(row: &SqliteRow) -> Result<VlanInterfaceDetail, DomainError> {
        Ok(VlanInterfaceDetail {
            id: get(row, "vliid")?,
            cid: get(row, "cid")?,
            cname: text(row, "cname")?,
            cshortname: text(row, "cshortname")?,
            virtual_interface_id: get(row, "viid")?,
            vlan_id: get(row, "vlanid")?,
            vlan_name: text(row, "vlanname")?,
            vlan_number: get(row, "vlannumber")?,
            ipv4enabled: get(row, "ipv4enabled")?,
            ipv4address: get(row, "ipv4address")?,
            ipv6enabled: get(row, "ipv6enabled")?,
            ipv6address: get(row, "ipv6address")?,
            maxbgpprefix: column_opt_u32(row, "maxbgpprefix")?,
            as112client: get(row, "as112client")?,
            rsclient: get(row, "rsclient")?,
            irrdbfilter: get(row, "irrdbfilter")?,
        })
    }
}

#[async_trait]
impl VlanInterfaceRepository for SqliteVlanInterfaceRepository {
    #[instrument(skip(self))]
    async fn rows_for_vlan(
        &self,
        vlan_id: i64,
        protocol: IpProtocol,
        status: PhysicalInterfaceStatus,
    ) -> Result<Vec<RawInterfaceRow>, DomainError> {
        let p = protocol.version();

        let sql = format!(
            "SELECT c.id AS cid, c.name AS cname, c.shortname AS cshortname, c.autsys AS autsys,
                    c.maxprefixes AS gmaxprefixes, c.peeringmacro AS peeringmacro,
                    c.peeringmacrov6 AS peeringmacrov6,
                    vli.id AS vliid, vli.ipv{p}enabled AS enabled, addr.address AS address,
                    vli.ipv{p}bgpmd5secret AS bgpmd5secret, vli.maxbgpprefix AS maxbgpprefix,
                    vli.as112client AS as112client, vli.rsclient AS rsclient,
                    vli.irrdbfilter AS irrdbfilter,
                    l.name AS location_name, l.shortname AS location_shortname, l.tag AS location_tag
             FROM vlaninterface vli
                 JOIN virtualinterface vi ON vli.virtualinterfaceid = vi.id
                 JOIN ipv{p}address addr ON vli.ipv{p}addressid = addr.id
                 JOIN cust c ON vi.custid = c.id
                 JOIN physicalinterface pi ON pi.virtualinterfaceid = vi.id
                 JOIN switchport sp ON pi.switchportid = sp.id
                 JOIN switch s ON sp.switchid = s.id
                 JOIN cabinet cab ON s.cabinetid = cab.id
                 JOIN location l ON cab.locationid = l.id
             WHERE vli.vlanid = ?
                 AND {customers}
                 AND pi.status = ?
             ORDER BY c.autsys ASC, vli.id ASC",
            p = p,
            customers = customer_predicates(),
        );

        let rows = sqlx::query(&sql)
            .bind(vlan_id)
            .bind(status.code())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query VLAN interfaces for protocol"))?;

        debug!(rows = rows.len(), "VLAN interface rows fetched");

        rows.iter().map(Self::row_to_raw).collect()
    }

    #[instrument(skip(self))]
    async fn list_for_ixp(&self, ixp_id: i64) -> Result<Vec<IxpInterfaceRow>, DomainError> {
        let sql = format!(
            "SELECT c.id AS cid, c.name AS cname, c.shortname AS cshortname, c.autsys AS autsys,
                    vli.id AS vliid,
                    vli.ipv4enabled AS ipv4enabled,
                    vli.ipv4hostname AS ipv4hostname,
                    vli.ipv4canping AS ipv4canping,
                    vli.ipv4monitorrcbgp AS ipv4monitorrcbgp,
                    vli.ipv4bgpmd5secret AS ipv4bgpmd5secret,
                    v4addr.address AS ipv4address,
                    vli.ipv6enabled AS ipv6enabled,
                    vli.ipv6hostname AS ipv6hostname,
                    vli.ipv6canping AS ipv6canping,
                    vli.ipv6monitorrcbgp AS ipv6monitorrcbgp,
                    vli.ipv6bgpmd5secret AS ipv6bgpmd5secret,
                    v6addr.address AS ipv6address,
                    vli.maxbgpprefix AS maxbgpprefix,
                    vli.as112client AS as112client,
                    vli.rsclient AS rsclient,
                    s.name AS switchname,
                    sp.name AS switchport,
                    v.number AS vlannumber,
                    ixp.shortname AS ixpname
             FROM vlaninterface vli
                 JOIN virtualinterface vi ON vli.virtualinterfaceid = vi.id
                 JOIN ipv4address v4addr ON vli.ipv4addressid = v4addr.id
                 JOIN ipv6address v6addr ON vli.ipv6addressid = v6addr.id
                 JOIN cust c ON vi.custid = c.id
                 JOIN physicalinterface pi ON pi.virtualinterfaceid = vi.id
                 JOIN switchport sp ON pi.switchportid = sp.id
                 JOIN switch s ON sp.switchid = s.id
                 JOIN vlan v ON vli.vlanid = v.id
                 JOIN infrastructure inf ON v.infrastructureid = inf.id
                 JOIN ixp ON inf.ixp = ixp.id
             WHERE ixp.id = ?
                 AND {customers}
                 AND pi.status = ?
             ORDER BY c.shortname ASC, vli.id ASC",
            customers = customer_predicates(),
        );

        let rows = sqlx::query(&sql)
            .bind(ixp_id)
            .bind(PhysicalInterfaceStatus::Connected.code())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query VLAN interfaces for IXP"))?;

        rows.iter().map(Self::row_to_ixp_interface).collect()
    }

    #[instrument(skip(self))]
    async fn list_members(
        &self,
        vlan_id: i64,
        protocol: Option<IpProtocol>,
        external_only: bool,
    ) -> Result<Vec<VlanMember>, DomainError> {
        let mut sql = format!(
            "SELECT c.id AS cid, c.name AS cname, c.shortname AS cshortname,
                    vi.id AS viid, pi.id AS pid, vli.id AS vliid, sp.id AS spid, sw.id AS swid
             FROM vlaninterface vli
                 JOIN virtualinterface vi ON vli.virtualinterfaceid = vi.id
                 JOIN cust c ON vi.custid = c.id
                 JOIN physicalinterface pi ON pi.virtualinterfaceid = vi.id
                 JOIN switchport sp ON pi.switchportid = sp.id
                 JOIN switch sw ON sp.switchid = sw.id
             WHERE vli.vlanid = ?
                 AND {customers}
                 AND pi.status = ?",
            customers = customer_predicates(),
        );

        if let Some(protocol) = protocol {
            sql.push_str(&format!(" AND vli.ipv{}enabled = 1", protocol.version()));
        }

        if external_only {
            sql.push_str(" AND ");
            sql.push_str(&external_predicate());
        }

        sql.push_str(" ORDER BY c.name ASC");

        let rows = sqlx::query(&sql)
            .bind(vlan_id)
            .bind(PhysicalInterfaceStatus::Connected.code())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query VLAN members"))?;

        rows.iter().map(Self::row_to_member).collect()
    }

    #[instrument(skip(self))]
    async fn list_for_customer(
        &self,
        customer_id: i64,
        ixp_id: Option<i64>,
    ) -> Result<Vec<VlanInterfaceDetail>, DomainError> {
        let sql = match ixp_id {
            Some(_) => format!(
                "SELECT {DETAIL_COLUMNS}
                 {DETAIL_JOINS}
                     JOIN physicalinterface pi ON pi.virtualinterfaceid = vi.id
                     JOIN switchport sp ON pi.switchportid = sp.id
                     JOIN switch sw ON sp.switchid = sw.id
                     JOIN infrastructure inf ON sw.infrastructure = inf.id
                     JOIN ixp ON inf.ixp = ixp.id
                 WHERE c.id = ? AND ixp.id = ?
                 ORDER BY ixp.id ASC, v.number ASC, vli.id ASC"
            ),
            None => format!(
                "SELECT {DETAIL_COLUMNS}
                 {DETAIL_JOINS}
                 WHERE c.id = ?
                 ORDER BY v.number ASC, vli.id ASC"
            ),
        };

        let mut query = sqlx::query(&sql).bind(customer_id);
        if let Some(ixp_id) = ixp_id {
            query = query.bind(ixp_id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query VLAN interfaces for customer"))?;

        debug!(rows = rows.len(), "Customer VLAN interface rows fetched");

        rows.iter().map(Self::row_to_detail).collect()
    }

    #[instrument(skip(self))]
    async fn objects_for_vlan(
        &self,
        vlan_id: i64,
    ) -> Result<Vec<VlanInterfaceDetail>, DomainError> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS}
             {DETAIL_JOINS}
                 JOIN physicalinterface pi ON pi.virtualinterfaceid = vi.id
             WHERE v.id = ?
                 AND {customers}
                 AND {external}
                 AND pi.status = ?
             ORDER BY c.name ASC, vli.id ASC",
            customers = customer_predicates(),
            external = external_predicate(),
        );

        let rows = sqlx::query(&sql)
            .bind(vlan_id)
            .bind(PhysicalInterfaceStatus::Connected.code())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query VLAN interface objects"))?;

        rows.iter().map(Self::row_to_detail).collect()
    }
}

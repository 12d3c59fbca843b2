#![allow(dead_code)]

use ixp_export_domain::{CustomerStatus, CustomerType, PhysicalInterfaceStatus};
use ixp_export_infrastructure::database::MIGRATOR;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn create_test_db() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

pub struct Topology {
    pub ixp_id: i64,
    pub infrastructure_id: i64,
    pub vlan_id: i64,
    pub switch_id: i64,
    pub cabinet_id: i64,
}

impl Topology {
    pub async fn seed(pool: &SqlitePool) -> Self {
        let location_id = insert(
            pool,
            "INSERT INTO location (name, shortname, tag) VALUES ('Example DC1', 'EX-DC1', 'dc1')",
        )
        .await;

        let cabinet_id = sqlx::query("INSERT INTO cabinet (locationid, name) VALUES (?, 'R01')")
            .bind(location_id)
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid();

        let ixp_id = insert(
            pool,
            "INSERT INTO ixp (name, shortname) VALUES ('Example IX', 'EXIX')",
        )
        .await;

        let infrastructure_id = sqlx::query(
            "INSERT INTO infrastructure (ixp, name, shortname) VALUES (?, 'Primary LAN', 'lan1')",
        )
        .bind(ixp_id)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

        let switch_id = sqlx::query(
            "INSERT INTO switch (infrastructure, cabinetid, name) VALUES (?, ?, 'swi1-dc1-1')",
        )
        .bind(infrastructure_id)
        .bind(cabinet_id)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

        let vlan_id = add_vlan(pool, infrastructure_id, 10).await;

        Self {
            ixp_id,
            infrastructure_id,
            vlan_id,
            switch_id,
            cabinet_id,
        }
    }
}

pub struct Exchange {
    pub ixp_id: i64,
    pub infrastructure_id: i64,
    pub switch_id: i64,
}

/// Adds another exchange with one infrastructure and one switch housed in
/// `cabinet_id`.
pub async fn add_exchange(pool: &SqlitePool, cabinet_id: i64, shortname: &str) -> Exchange {
    let ixp_id = sqlx::query("INSERT INTO ixp (name, shortname) VALUES (?, ?)")
        .bind(format!("{} Exchange", shortname))
        .bind(shortname)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    let infrastructure_id =
        sqlx::query("INSERT INTO infrastructure (ixp, name) VALUES (?, 'Secondary LAN')")
            .bind(ixp_id)
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid();

    let switch_id = sqlx::query("INSERT INTO switch (infrastructure, cabinetid, name) VALUES (?, ?, ?)")
        .bind(infrastructure_id)
        .bind(cabinet_id)
        .bind(format!("swi1-{}", shortname))
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    Exchange {
        ixp_id,
        infrastructure_id,
        switch_id,
    }
}

async fn insert(pool: &SqlitePool, sql: &str) -> i64 {
    sqlx::query(sql)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn add_vlan(pool: &SqlitePool, infrastructure_id: i64, number: i64) -> i64 {
    sqlx::query("INSERT INTO vlan (infrastructureid, name, number) VALUES (?, ?, ?)")
        .bind(infrastructure_id)
        .bind(format!("Peering LAN {}", number))
        .bind(number)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn add_customer(
    pool: &SqlitePool,
    shortname: &str,
    autsys: i64,
    cust_type: CustomerType,
    status: CustomerStatus,
) -> i64 {
    sqlx::query(
        "INSERT INTO cust (name, shortname, type, status, autsys, datejoin)
         VALUES (?, ?, ?, ?, ?, '2010-01-01')",
    )
    .bind(format!("{} Networks", shortname))
    .bind(shortname)
    .bind(cust_type.code())
    .bind(status.code())
    .bind(autsys)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn add_full_customer(pool: &SqlitePool, shortname: &str, autsys: i64) -> i64 {
    add_customer(
        pool,
        shortname,
        autsys,
        CustomerType::Full,
        CustomerStatus::Normal,
    )
    .await
}

pub struct VlanInterfaceIds {
    pub virtual_interface_id: i64,
    pub vlan_interface_id: i64,
}

/// Creates a virtual interface with a VLAN interface on `vlan_id`. Each given
/// address is assigned and enabled; the interface is a route server client
/// without IRRDB filtering.
pub async fn add_vlan_interface(
    pool: &SqlitePool,
    vlan_id: i64,
    customer_id: i64,
    ipv4: Option<&str>,
    ipv6: Option<&str>,
) -> VlanInterfaceIds {
    let virtual_interface_id = sqlx::query("INSERT INTO virtualinterface (custid) VALUES (?)")
        .bind(customer_id)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    let v4_id = match ipv4 {
        Some(address) => Some(add_address(pool, "ipv4address", vlan_id, address).await),
        None => None,
    };
    let v6_id = match ipv6 {
        Some(address) => Some(add_address(pool, "ipv6address", vlan_id, address).await),
        None => None,
    };

    let vlan_interface_id = sqlx::query(
        "INSERT INTO vlaninterface
            (virtualinterfaceid, vlanid, ipv4addressid, ipv4enabled, ipv6addressid, ipv6enabled,
             rsclient, irrdbfilter)
         VALUES (?, ?, ?, ?, ?, ?, 1, 0)",
    )
    .bind(virtual_interface_id)
    .bind(vlan_id)
    .bind(v4_id)
    .bind(v4_id.is_some())
    .bind(v6_id)
    .bind(v6_id.is_some())
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid();

    VlanInterfaceIds {
        virtual_interface_id,
        vlan_interface_id,
    }
}

async fn add_address(pool: &SqlitePool, table: &str, vlan_id: i64, address: &str) -> i64 {
    sqlx::query(&format!(
        "INSERT INTO {} (vlanid, address) VALUES (?, ?)",
        table
    ))
    .bind(vlan_id)
    .bind(address)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

/// Adds a switch port and a physical interface in `status` for the virtual
/// interface.
pub async fn add_port(
    pool: &SqlitePool,
    switch_id: i64,
    virtual_interface_id: i64,
    status: PhysicalInterfaceStatus,
) -> i64 {
    let port_id = sqlx::query("INSERT INTO switchport (switchid, name) VALUES (?, ?)")
        .bind(switch_id)
        .bind(format!("Ethernet{}", virtual_interface_id))
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    sqlx::query(
        "INSERT INTO physicalinterface (virtualinterfaceid, switchportid, status, speed)
         VALUES (?, ?, ?, 10000)",
    )
    .bind(virtual_interface_id)
    .bind(port_id)
    .bind(status.code())
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn exec(pool: &SqlitePool, sql: &str) {
    sqlx::query(sql).execute(pool).await.unwrap();
}

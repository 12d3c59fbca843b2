pub mod irrdb_repository;
pub mod vlan_interface_repository;

pub use irrdb_repository::SqliteIrrdbRepository;
pub use vlan_interface_repository::SqliteVlanInterfaceRepository;

use ixp_export_domain::DomainError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

fn column_u32(row: &SqliteRow, column: &str) -> Result<u32, DomainError> {
    let value: i64 = row
        .try_get(column)
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    to_u32(value, column)
}

fn column_opt_u32(row: &SqliteRow, column: &str) -> Result<Option<u32>, DomainError> {
    let value: Option<i64> = row
        .try_get(column)
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    value.map(|v| to_u32(v, column)).transpose()
}

fn to_u32(value: i64, column: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::DatabaseError(format!("Column {} out of range: {}", column, value))
    })
}

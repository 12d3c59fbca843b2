use async_trait::async_trait;
use ixp_export_application::ports::IrrdbRepository;
use ixp_export_domain::{DomainError, IpProtocol};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteIrrdbRepository {
    pool: SqlitePool,
}

impl SqliteIrrdbRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IrrdbRepository for SqliteIrrdbRepository {
    #[instrument(skip(self))]
    async fn prefixes_for(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT prefix FROM irrdb_prefix
             WHERE customer_id = ? AND protocol = ?
             ORDER BY prefix ASC",
        )
        .bind(customer_id)
        .bind(i64::from(protocol.version()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query IRRDB prefixes");
            DomainError::IrrdbLookupFailed(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn asns_for(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<Vec<u32>, DomainError> {
        let asns = sqlx::query_scalar::<_, i64>(
            "SELECT asn FROM irrdb_asn
             WHERE customer_id = ? AND protocol = ?
             ORDER BY asn ASC",
        )
        .bind(customer_id)
        .bind(i64::from(protocol.version()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query IRRDB ASNs");
            DomainError::IrrdbLookupFailed(e.to_string())
        })?;

        asns.into_iter()
            .map(|asn| {
                u32::try_from(asn).map_err(|_| {
                    DomainError::IrrdbLookupFailed(format!("ASN out of range: {}", asn))
                })
            })
            .collect()
    }
}

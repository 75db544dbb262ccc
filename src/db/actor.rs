use crate::db::create::RecordCreate;
use crate::db::models::{
    CategorySpendRow, ConsolidationRows, ContractStatusRow, ExecutiveRows, GeneralSummaryRow,
    RiskRows, SpendAnalyticsRows, SpendTrendRow, TopVendorRow,
};
use crate::db::queries;
use crate::db::schema::SQLITE_INIT;
use crate::error::SpendlensError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use spendlens_schema::SupplierStats;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert or upsert a record and return its row id.
    Create(RecordCreate, RpcReplyPort<Result<i64, SpendlensError>>),

    /// Vendor, transaction and contract counters plus total spend.
    SupplierStats(RpcReplyPort<Result<SupplierStats, SpendlensError>>),

    /// Vendors ranked by total spend, capped at the given row count.
    TopVendors(i64, RpcReplyPort<Result<Vec<TopVendorRow>, SpendlensError>>),

    SpendByCategory(RpcReplyPort<Result<Vec<CategorySpendRow>, SpendlensError>>),

    /// Last 12 award months.
    SpendTrends(RpcReplyPort<Result<Vec<SpendTrendRow>, SpendlensError>>),

    ContractStatus(RpcReplyPort<Result<Vec<ContractStatusRow>, SpendlensError>>),

    Consolidation(RpcReplyPort<Result<ConsolidationRows, SpendlensError>>),

    RiskAssessment(RpcReplyPort<Result<RiskRows, SpendlensError>>),

    Executive(RpcReplyPort<Result<ExecutiveRows, SpendlensError>>),

    SpendAnalytics(RpcReplyPort<Result<SpendAnalyticsRows, SpendlensError>>),

    GeneralSummary(RpcReplyPort<Result<GeneralSummaryRow, SpendlensError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create(&self, create: impl Into<RecordCreate>) -> Result<i64, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::Create, create.into())
            .map_err(|e| SpendlensError::RactorError(format!("DbActor Create RPC failed: {e}")))?
    }

    pub async fn supplier_stats(&self) -> Result<SupplierStats, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::SupplierStats).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor SupplierStats RPC failed: {e}"))
        })?
    }

    pub async fn top_vendors(&self, limit: i64) -> Result<Vec<TopVendorRow>, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::TopVendors, limit).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor TopVendors RPC failed: {e}"))
        })?
    }

    pub async fn spend_by_category(&self) -> Result<Vec<CategorySpendRow>, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::SpendByCategory).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor SpendByCategory RPC failed: {e}"))
        })?
    }

    pub async fn spend_trends(&self) -> Result<Vec<SpendTrendRow>, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::SpendTrends).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor SpendTrends RPC failed: {e}"))
        })?
    }

    pub async fn contract_status(&self) -> Result<Vec<ContractStatusRow>, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::ContractStatus).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor ContractStatus RPC failed: {e}"))
        })?
    }

    pub async fn consolidation(&self) -> Result<ConsolidationRows, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::Consolidation).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor Consolidation RPC failed: {e}"))
        })?
    }

    pub async fn risk_assessment(&self) -> Result<RiskRows, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::RiskAssessment).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor RiskAssessment RPC failed: {e}"))
        })?
    }

    pub async fn executive(&self) -> Result<ExecutiveRows, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::Executive).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor Executive RPC failed: {e}"))
        })?
    }

    pub async fn spend_analytics(&self) -> Result<SpendAnalyticsRows, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::SpendAnalytics).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor SpendAnalytics RPC failed: {e}"))
        })?
    }

    pub async fn general_summary(&self) -> Result<GeneralSummaryRow, SpendlensError> {
        ractor::call!(self.actor, DbActorMessage::GeneralSummary).map_err(|e| {
            SpendlensError::RactorError(format!("DbActor GeneralSummary RPC failed: {e}"))
        })?
    }

    /// Stop the actor and wait for it to close the pool.
    pub async fn shutdown(&self) -> Result<(), SpendlensError> {
        self.actor
            .stop_and_wait(Some("shutdown".to_string()), Some(SHUTDOWN_TIMEOUT))
            .await
            .map_err(|e| SpendlensError::RactorError(format!("DbActor shutdown failed: {e}")))
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("Connected to the SQLite database.");
        Ok(DbActorState { pool })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.pool.close().await;
        info!("Database connection closed.");
        Ok(())
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbActorMessage::Create(create, reply) => {
                let _ = reply.send(queries::create_record(pool, create).await);
            }
            DbActorMessage::SupplierStats(reply) => {
                let _ = reply.send(queries::supplier_stats(pool).await);
            }
            DbActorMessage::TopVendors(limit, reply) => {
                let _ = reply.send(queries::top_vendors(pool, limit).await);
            }
            DbActorMessage::SpendByCategory(reply) => {
                let _ = reply.send(queries::spend_by_category(pool).await);
            }
            DbActorMessage::SpendTrends(reply) => {
                let _ = reply.send(queries::spend_trends(pool).await);
            }
            DbActorMessage::ContractStatus(reply) => {
                let _ = reply.send(queries::contract_status(pool).await);
            }
            DbActorMessage::Consolidation(reply) => {
                let _ = reply.send(queries::consolidation(pool).await);
            }
            DbActorMessage::RiskAssessment(reply) => {
                let _ = reply.send(queries::risk_assessment(pool).await);
            }
            DbActorMessage::Executive(reply) => {
                let _ = reply.send(queries::executive(pool).await);
            }
            DbActorMessage::SpendAnalytics(reply) => {
                let _ = reply.send(queries::spend_analytics(pool).await);
            }
            DbActorMessage::GeneralSummary(reply) => {
                let _ = reply.send(queries::general_summary(pool).await);
            }
        }
        Ok(())
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), SpendlensError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

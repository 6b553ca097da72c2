use std::sync::Arc;

use async_trait::async_trait;
use notice_core::proto::transaction_manager::{TransactionBody, TransactionManager};
use notice_core::repository::error::DataLayerError;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, ExecResult,
    QueryResult, Statement, TransactionTrait,
};

use crate::mapper::to_data_layer_error;

tokio::task_local! {
    static CURRENT_TRANSACTION: Arc<DatabaseTransaction>;
}

/// Database access shared by all repositories.
///
/// Statements issued through [`TransactionManagerImpl::tx`] run inside the transaction opened by
/// [`TransactionManager::transaction`] on the current task, or directly on the
/// connection pool when there is none.
#[derive(Clone)]
pub struct TransactionManagerImpl {
    db: DatabaseConnection,
}

impl TransactionManagerImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) fn tx(&self) -> CurrentConnection<'_> {
        match CURRENT_TRANSACTION.try_with(Arc::clone) {
            Ok(transaction) => CurrentConnection::Transaction(transaction),
            Err(_) => CurrentConnection::Connection(&self.db),
        }
    }
}

pub(crate) enum CurrentConnection<'a> {
    Transaction(Arc<DatabaseTransaction>),
    Connection(&'a DatabaseConnection),
}

#[async_trait]
impl ConnectionTrait for CurrentConnection<'_> {
    fn get_database_backend(&self) -> DbBackend {
        match self {
            Self::Transaction(transaction) => transaction.get_database_backend(),
            Self::Connection(connection) => connection.get_database_backend(),
        }
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        match self {
            Self::Transaction(transaction) => transaction.execute(stmt).await,
            Self::Connection(connection) => connection.execute(stmt).await,
        }
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        match self {
            Self::Transaction(transaction) => transaction.execute_unprepared(sql).await,
            Self::Connection(connection) => connection.execute_unprepared(sql).await,
        }
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        match self {
            Self::Transaction(transaction) => transaction.query_one(stmt).await,
            Self::Connection(connection) => connection.query_one(stmt).await,
        }
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        match self {
            Self::Transaction(transaction) => transaction.query_all(stmt).await,
            Self::Connection(connection) => connection.query_all(stmt).await,
        }
    }
}

#[async_trait]
impl TransactionManager for TransactionManagerImpl {
    async fn transaction(
        &self,
        body: TransactionBody<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        // nested calls join the outer transaction
        if CURRENT_TRANSACTION.try_with(|_| ()).is_ok() {
            return Ok(body.await);
        }

        let transaction = self.db.begin().await.map_err(to_data_layer_error)?;
        let transaction = Arc::new(transaction);

        let result = CURRENT_TRANSACTION
            .scope(transaction.clone(), body)
            .await;

        let transaction = Arc::into_inner(transaction).ok_or_else(|| {
            DataLayerError::TransactionError("Transaction still referenced after scope".to_owned())
        })?;

        match &result {
            Ok(()) => transaction.commit().await.map_err(to_data_layer_error)?,
            Err(error) => {
                tracing::debug!("Rolling back transaction: {error}");
                transaction.rollback().await.map_err(to_data_layer_error)?
            }
        }

        Ok(result)
    }
}

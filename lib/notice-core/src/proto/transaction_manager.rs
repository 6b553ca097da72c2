use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::repository::error::DataLayerError;

/// Unit of work handed to a [`TransactionManager`], its error is carried type-erased
pub type TransactionBody<'a> = BoxFuture<'a, Result<(), anyhow::Error>>;

#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Runs `body` inside a transaction, committed if the body succeeds and rolled back otherwise.
    /// Calls made while a transaction is already open on the current task join it.
    async fn transaction(
        &self,
        body: TransactionBody<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError>;
}

impl<'a> dyn TransactionManager + 'a {
    /// Typed wrapper over [`TransactionManager::transaction`]: the outer error reports a failure
    /// of the transaction itself, the inner one whatever `body` returned.
    pub async fn tx<T, E>(
        &self,
        body: impl Future<Output = Result<T, E>> + Send + 'a,
    ) -> Result<Result<T, E>, DataLayerError>
    where
        T: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut output = None;
        let erased = async {
            output = Some(body.await?);
            Ok::<_, anyhow::Error>(())
        }
        .boxed();

        if let Err(error) = self.transaction(erased).await? {
            return error
                .downcast::<E>()
                .map(Err)
                .map_err(|error| {
                    DataLayerError::TransactionError(format!("Unexpected body error: {error}"))
                });
        }

        output.map(Ok).ok_or_else(|| {
            DataLayerError::TransactionError("Transaction body produced no value".to_owned())
        })
    }
}

/// Runs the body directly on the caller, for unit tests
pub struct NoTransactionManager;

#[async_trait]
impl TransactionManager for NoTransactionManager {
    async fn transaction(
        &self,
        body: TransactionBody<'async_trait>,
    ) -> Result<Result<(), anyhow::Error>, DataLayerError> {
        Ok(body.await)
    }
}

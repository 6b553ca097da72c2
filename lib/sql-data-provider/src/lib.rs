use std::sync::Arc;
use std::time::Duration;

use member::MemberProvider;
use migration::{Migrator, MigratorTrait};
use notice::NoticeProvider;
use notice_core::proto::transaction_manager::TransactionManager;
use notice_core::repository::DataRepository;
use notice_core::repository::member_repository::MemberRepository;
use notice_core::repository::notice_repository::NoticeRepository;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use transaction_context::TransactionManagerImpl;

mod common;
mod entity;
mod mapper;
mod member;
mod notice;
pub mod transaction_context;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    // used by tests to seed and inspect data directly
    #[allow(unused)]
    db: DatabaseConnection,
    notice_repository: Arc<dyn NoticeRepository>,
    member_repository: Arc<dyn MemberRepository>,
    transaction_manager: Arc<TransactionManagerImpl>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        let transaction_manager = TransactionManagerImpl::new(db.clone());

        let notice_repository = Arc::new(NoticeProvider {
            db: transaction_manager.clone(),
        });
        let member_repository = Arc::new(MemberProvider {
            db: transaction_manager.clone(),
        });

        Self {
            db,
            notice_repository,
            member_repository,
            transaction_manager: Arc::new(transaction_manager),
        }
    }
}

/// Connects to the database, optionally bringing the schema up to date
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DbConn, DbErr> {
    let database_url = database_url.into();
    let in_memory = database_url.contains(":memory:");

    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // every pooled connection would otherwise see its own empty in-memory database
    if in_memory {
        options.max_connections(1).min_connections(1);
    }

    let db = sea_orm::Database::connect(options).await?;

    if run_migrations {
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_notice_repository(&self) -> Arc<dyn NoticeRepository> {
        self.notice_repository.clone()
    }

    fn get_member_repository(&self) -> Arc<dyn MemberRepository> {
        self.member_repository.clone()
    }

    fn get_transaction_manager(&self) -> Arc<dyn TransactionManager> {
        self.transaction_manager.clone()
    }
}

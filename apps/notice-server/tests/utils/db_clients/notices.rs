use std::sync::Arc;

use notice_core::model::notice::{CreateNoticeRequest, Notice};
use notice_core::repository::notice_repository::NoticeRepository;
use shared_types::{MemberId, NoticeId};
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{NoticeParams, insert_notice};

pub struct NoticesDB {
    repository: Arc<dyn NoticeRepository>,
    db: DbConn,
}

impl NoticesDB {
    pub fn new(repository: Arc<dyn NoticeRepository>, db: DbConn) -> Self {
        Self { repository, db }
    }

    pub async fn create(&self, title: &str, is_fixed: bool) -> Notice {
        self.repository
            .create_notice(CreateNoticeRequest {
                member_id: MemberId::from(1),
                title: title.to_owned(),
                content: format!("{title} content"),
                is_fixed,
            })
            .await
            .unwrap()
    }

    /// Inserts with explicit author and timestamp
    pub async fn insert(&self, params: NoticeParams<'_>) -> Notice {
        let id = insert_notice(&self.db, params).await.unwrap();
        self.get(id).await.unwrap()
    }

    pub async fn get(&self, id: NoticeId) -> Option<Notice> {
        self.repository.get_notice(&id).await.unwrap()
    }

    pub async fn exists(&self, id: NoticeId) -> bool {
        self.repository.notice_exists(&id).await.unwrap()
    }
}

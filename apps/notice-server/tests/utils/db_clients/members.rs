use std::sync::Arc;

use notice_core::model::member::Member;
use notice_core::repository::member_repository::MemberRepository;
use shared_types::MemberId;
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::insert_member;

pub struct MembersDB {
    repository: Arc<dyn MemberRepository>,
    db: DbConn,
}

impl MembersDB {
    pub fn new(repository: Arc<dyn MemberRepository>, db: DbConn) -> Self {
        Self { repository, db }
    }

    pub async fn create(&self, id: i64, name: &str) -> Member {
        let id = insert_member(&self.db, MemberId::from(id), name)
            .await
            .unwrap();

        self.repository.get_member(&id).await.unwrap().unwrap()
    }
}

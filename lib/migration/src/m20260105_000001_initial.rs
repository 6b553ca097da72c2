use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

const NOTICE_LISTING_INDEX: &str = "index-Notice-IsFixed-CreatedDate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Member::MemberNo)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Member::MemberName).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notice::NoticeNo)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notice::MemberNo).big_integer().not_null())
                    .col(ColumnDef::new(Notice::NoticeTitle).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Notice::NoticeContent)
                            .large_text(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notice::IsFixed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notice::CreatedAt)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(NOTICE_LISTING_INDEX)
                    .table(Notice::Table)
                    .col(Notice::IsFixed)
                    .col(Notice::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Notice {
    Table,
    NoticeNo,
    MemberNo,
    NoticeTitle,
    NoticeContent,
    IsFixed,
    CreatedAt,
}

#[derive(Iden)]
pub enum Member {
    Table,
    MemberNo,
    MemberName,
}

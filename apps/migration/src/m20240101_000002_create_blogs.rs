use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::sea_query::ColumnType;

use crate::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::BlogId).string().not_null().unique_key())
                    .col(ColumnDef::new(Blogs::Title).string().not_null())
                    .col(ColumnDef::new(Blogs::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Blogs::Banner).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Blogs::Content)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust(r#"'{"blocks": []}'::jsonb"#)),
                    )
                    .col(
                        ColumnDef::new(Blogs::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(ColumnDef::new(Blogs::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Blogs::Draft).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Blogs::TotalLikes)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::TotalComments)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::TotalReads)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::TotalParentComments)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blogs_author")
                            .from(Blogs::Table, Blogs::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_author_id")
                    .table(Blogs::Table)
                    .col(Blogs::AuthorId)
                    .to_owned(),
            )
            .await?;

        // Feed listings filter on draft and sort on publish time.
        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_draft_published_at")
                    .table(Blogs::Table)
                    .col(Blogs::Draft)
                    .col(Blogs::PublishedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    BlogId,
    Title,
    Description,
    Banner,
    Content,
    Tags,
    AuthorId,
    Draft,
    TotalLikes,
    TotalComments,
    TotalReads,
    TotalParentComments,
    PublishedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::ForumId).uuid().not_null())
                    // NULL for topics started by guests.
                    .col(ColumnDef::new(Topics::MemberId).uuid())
                    .col(ColumnDef::new(Topics::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Topics::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Topics::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    // Count of non-deleted posts, kept in step by the
                    // repository as posts come and go.
                    .col(
                        ColumnDef::new(Topics::NumPosts)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    // Filled once the opening post lands; FKs to posts
                    // are added by the posts migration.
                    .col(ColumnDef::new(Topics::FirstPostId).uuid())
                    .col(ColumnDef::new(Topics::LastPostId).uuid())
                    .col(ColumnDef::new(Topics::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_forum_id")
                            .from(Topics::Table, Topics::ForumId)
                            .to(Forums::Table, Forums::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_member_id")
                            .from(Topics::Table, Topics::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Forum pages list live topics, most recently active first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_forum_active
                ON topics (forum_id, updated_at DESC)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        // Slug lookups exclude soft-deleted topics.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_slug_active
                ON topics (slug)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger (reuse same function pattern)
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_topics_updated_at ON topics")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_forum_active;
                DROP INDEX IF EXISTS idx_topics_slug_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    ForumId,
    MemberId,
    Title,
    Slug,
    Views,
    NumPosts,
    FirstPostId,
    LastPostId,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Forums {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
}

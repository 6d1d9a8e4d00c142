use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create posts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Posts::TopicId).uuid().not_null())
                    // NULL for guest posts.
                    .col(ColumnDef::new(Posts::MemberId).uuid())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    // Set while the post is soft-deleted.
                    .col(ColumnDef::new(Posts::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_topic_id")
                            .from(Posts::Table, Posts::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_member_id")
                            .from(Posts::Table, Posts::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Marker FKs back from topics, now that posts exists
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE topics
                ADD CONSTRAINT fk_topics_first_post_id
                FOREIGN KEY (first_post_id) REFERENCES posts (id)
                ON DELETE SET NULL;

                ALTER TABLE topics
                ADD CONSTRAINT fk_topics_last_post_id
                FOREIGN KEY (last_post_id) REFERENCES posts (id)
                ON DELETE SET NULL;
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Reply order within a topic.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_topic_created
                ON posts (topic_id, created_at, id);
                "#,
            )
            .await?;

        // Active-post walks (pagination, last-post recomputation).
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_topic_active
                ON posts (topic_id, created_at, id)
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
                CREATE TRIGGER update_posts_updated_at
                BEFORE UPDATE ON posts
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_posts_updated_at ON posts")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE topics DROP CONSTRAINT IF EXISTS fk_topics_first_post_id;
                ALTER TABLE topics DROP CONSTRAINT IF EXISTS fk_topics_last_post_id;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_posts_topic_created;
                DROP INDEX IF EXISTS idx_posts_topic_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    TopicId,
    MemberId,
    Content,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
}

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    FromQueryResult, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::topics::application::ports::outgoing::{
    NewPost, PostAdded, PostRepository, PostRepositoryError,
};

use super::sea_orm_entity::posts::{ActiveModel as PostActiveModel, Model as PostModel};

#[derive(Debug, Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool, PostRepositoryError> {
        #[derive(FromQueryResult)]
        struct ExistsResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let result = ExistsResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT id FROM posts WHERE id = $1"#,
            [post_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.is_some())
    }
}

#[derive(FromQueryResult)]
struct TopicCountResult {
    num_posts: i64,
}

#[derive(FromQueryResult)]
struct TopicIdResult {
    topic_id: Uuid,
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn add_to_topic(&self, data: NewPost) -> Result<PostAdded, PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let active = PostActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            member_id: Set(data.author.map(Into::into)),
            content: Set(data.content),
            deleted_at: Set(None),
            ..Default::default()
        };

        let inserted: PostModel = active
            .insert(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        // Counter, tail marker and (for the opening post) head marker
        // move together with the insert or not at all.
        let counted = TopicCountResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE topics
               SET num_posts = num_posts + 1,
                   last_post_id = $2,
                   first_post_id = COALESCE(first_post_id, $2),
                   updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING num_posts"#,
            [data.topic_id.into(), inserted.id.into()],
        ))
        .one(&txn)
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let Some(counted) = counted else {
            txn.rollback()
                .await
                .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;
            return Err(PostRepositoryError::NotFound);
        };

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(PostAdded {
            post_id: inserted.id,
            topic_num_posts: counted.num_posts,
        })
    }

    async fn edit_content(&self, post_id: Uuid, content: &str) -> Result<(), PostRepositoryError> {
        let active = PostActiveModel {
            id: Set(post_id),
            content: Set(content.to_string()),
            ..Default::default()
        };

        active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PostRepositoryError::NotFound,
            other => PostRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(())
    }

    async fn soft_delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let flipped = TopicIdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE posts SET deleted_at = NOW(), updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING topic_id"#,
            [post_id.into()],
        ))
        .one(&txn)
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let Some(flipped) = flipped else {
            txn.rollback()
                .await
                .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

            // Tell a repeat delete apart from a bogus id.
            return if self.post_exists(post_id).await? {
                Err(PostRepositoryError::AlreadyDeleted)
            } else {
                Err(PostRepositoryError::NotFound)
            };
        };

        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE topics SET num_posts = num_posts - 1 WHERE id = $1"#,
            [flipped.topic_id.into()],
        ))
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn restore(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let flipped = TopicIdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE posts SET deleted_at = NULL, updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NOT NULL
               RETURNING topic_id"#,
            [post_id.into()],
        ))
        .one(&txn)
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let Some(flipped) = flipped else {
            txn.rollback()
                .await
                .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

            return if self.post_exists(post_id).await? {
                Err(PostRepositoryError::NotDeleted)
            } else {
                Err(PostRepositoryError::NotFound)
            };
        };

        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE topics SET num_posts = num_posts + 1 WHERE id = $1"#,
            [flipped.topic_id.into()],
        ))
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

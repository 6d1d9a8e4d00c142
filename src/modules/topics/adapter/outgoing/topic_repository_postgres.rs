use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::topics::application::ports::outgoing::{
    NewTopic, TopicChanges, TopicRecord, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::topics::{ActiveModel as TopicActiveModel, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create(&self, data: NewTopic) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            forum_id: Set(data.forum_id),
            member_id: Set(data.author.map(Into::into)),
            title: Set(data.title),
            slug: Set(data.slug),
            views: Set(0),
            num_posts: Set(0),
            first_post_id: Set(None),
            last_post_id: Set(None),
            deleted_at: Set(None),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn edit(
        &self,
        topic_id: Uuid,
        changes: TopicChanges,
    ) -> Result<(), TopicRepositoryError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut active = TopicActiveModel {
            id: Set(topic_id),
            ..Default::default()
        };

        if let Some(title) = changes.title {
            active.title = Set(title);
        }

        if let Some(last_post_id) = changes.last_post_id {
            active.last_post_id = Set(last_post_id);
        }

        active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::NotFound,
            other => TopicRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(())
    }

    async fn increment_views(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        // Plain SET views = views + 1 keeps concurrent viewers honest;
        // read-modify-write through the entity would drop counts.
        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE topics SET views = views + 1 WHERE id = $1 AND deleted_at IS NULL RETURNING id"#,
            [topic_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.is_none() {
            return Err(TopicRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn soft_delete(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE topics SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL RETURNING id"#,
            [topic_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.is_none() {
            return Err(TopicRepositoryError::NotFound);
        }

        Ok(())
    }
}

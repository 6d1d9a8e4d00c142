use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::topics::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicRecord, TopicSummary,
};

use super::sea_orm_entity::topics::{
    Column as TopicColumn, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn find(&self, topic_id: Uuid) -> Result<TopicRecord, TopicQueryError> {
        let model: Option<TopicModel> = TopicEntity::find_by_id(topic_id)
            .filter(TopicColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| m.to_record())
            .ok_or(TopicQueryError::NotFound)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<TopicRecord, TopicQueryError> {
        let model: Option<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::Slug.eq(slug))
            .filter(TopicColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| m.to_record())
            .ok_or(TopicQueryError::NotFound)
    }

    async fn list_for_forum(&self, forum_id: Uuid) -> Result<Vec<TopicSummary>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::ForumId.eq(forum_id))
            .filter(TopicColumn::DeletedAt.is_null())
            .order_by_desc(TopicColumn::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_summary()).collect())
    }

    // Deleted topics keep their slug, so the probe looks at every row.
    async fn slug_exists(&self, slug: &str) -> Result<bool, TopicQueryError> {
        let model: Option<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.is_some())
    }
}

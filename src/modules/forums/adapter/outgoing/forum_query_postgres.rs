use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::{ForumQuery, ForumQueryError, ForumRecord};

use super::sea_orm_entity::forums;

#[derive(Debug, Clone)]
pub struct ForumQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ForumQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ForumQuery for ForumQueryPostgres {
    async fn find(&self, forum_id: Uuid) -> Result<ForumRecord, ForumQueryError> {
        let forum = forums::Entity::find_by_id(forum_id)
            .one(&*self.db)
            .await
            .map_err(|e| ForumQueryError::DatabaseError(e.to_string()))?;

        match forum {
            Some(model) => Ok(model.to_record()),
            None => Err(ForumQueryError::NotFound),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<ForumRecord, ForumQueryError> {
        let forum = forums::Entity::find()
            .filter(forums::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| ForumQueryError::DatabaseError(e.to_string()))?;

        match forum {
            Some(model) => Ok(model.to_record()),
            None => Err(ForumQueryError::NotFound),
        }
    }
}

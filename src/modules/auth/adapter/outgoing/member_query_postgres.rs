use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::{MemberQuery, MemberQueryError, MemberSettings};

use super::sea_orm_entity::members;

#[derive(Debug, Clone)]
pub struct MemberQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MemberQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberQuery for MemberQueryPostgres {
    async fn find_settings(&self, id: MemberId) -> Result<MemberSettings, MemberQueryError> {
        let member = members::Entity::find_by_id(id.as_uuid())
            .one(&*self.db)
            .await
            .map_err(|e| MemberQueryError::DatabaseError(e.to_string()))?;

        match member {
            Some(model) => Ok(model.to_settings()),
            None => Err(MemberQueryError::NotFound),
        }
    }
}

use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::ForumRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "forums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub description: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ForumRecord {
        ForumRecord {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::topics::adapter::outgoing::sea_orm_entity::topics::Entity")]
    Topics,
}

impl ActiveModelBehavior for ActiveModel {}

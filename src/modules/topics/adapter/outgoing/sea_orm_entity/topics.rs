use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;
use crate::topics::application::ports::outgoing::{TopicRecord, TopicSummary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub forum_id: Uuid,

    pub member_id: Option<Uuid>,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub views: i64,

    pub num_posts: i64,

    pub first_post_id: Option<Uuid>,

    pub last_post_id: Option<Uuid>,

    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> TopicRecord {
        TopicRecord {
            id: self.id,
            forum_id: self.forum_id,
            author: self.member_id.map(MemberId::from),
            title: self.title.clone(),
            slug: self.slug.clone(),
            views: self.views,
            num_posts: self.num_posts,
            first_post_id: self.first_post_id,
            last_post_id: self.last_post_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn to_summary(&self) -> TopicSummary {
        TopicSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            views: self.views,
            num_posts: self.num_posts,
            last_post_at: self.updated_at,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::forums::adapter::outgoing::sea_orm_entity::forums::Entity",
        from = "Column::ForumId",
        to = "crate::forums::adapter::outgoing::sea_orm_entity::forums::Column::Id"
    )]
    Forum,
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::members::Entity",
        from = "Column::MemberId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::members::Column::Id"
    )]
    Member,
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<crate::forums::adapter::outgoing::sea_orm_entity::forums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Forum.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

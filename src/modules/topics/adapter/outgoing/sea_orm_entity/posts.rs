use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub topic_id: Uuid,

    pub member_id: Option<Uuid>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topics::Entity",
        from = "Column::TopicId",
        to = "super::topics::Column::Id"
    )]
    Topic,
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::members::Entity",
        from = "Column::MemberId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::members::Column::Id"
    )]
    Member,
}

impl Related<super::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
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

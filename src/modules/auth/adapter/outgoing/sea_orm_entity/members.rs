use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::MemberSettings;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub posts_per_page: Option<i32>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_settings(&self) -> MemberSettings {
        MemberSettings {
            id: MemberId::from(self.id),
            username: self.username.clone(),
            posts_per_page: self.posts_per_page,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;
use crate::topics::application::ports::outgoing::{PostQuery, PostQueryError, PostRecord};

/// Joined row: the post plus its author's display name. Guests have
/// no member row, so the name falls back in SQL.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: Uuid,
    topic_id: Uuid,
    member_id: Option<Uuid>,
    author_name: String,
    content: String,
    deleted_at: Option<DateTimeWithTimeZone>,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl PostRow {
    fn into_record(self) -> PostRecord {
        PostRecord {
            id: self.id,
            topic_id: self.topic_id,
            author: self.member_id.map(MemberId::from),
            author_name: self.author_name,
            content: self.content,
            deleted_at: self.deleted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find(&self, post_id: Uuid) -> Result<PostRecord, PostQueryError> {
        let row = PostRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT p.id, p.topic_id, p.member_id,
                      COALESCE(m.username, 'Guest') AS author_name,
                      p.content, p.deleted_at, p.created_at, p.updated_at
               FROM posts p
               LEFT JOIN members m ON m.id = p.member_id
               WHERE p.id = $1"#,
            [post_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        row.map(PostRow::into_record).ok_or(PostQueryError::NotFound)
    }

    async fn all_for_topic(
        &self,
        topic_id: Uuid,
        include_deleted: bool,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let sql = if include_deleted {
            r#"SELECT p.id, p.topic_id, p.member_id,
                      COALESCE(m.username, 'Guest') AS author_name,
                      p.content, p.deleted_at, p.created_at, p.updated_at
               FROM posts p
               LEFT JOIN members m ON m.id = p.member_id
               WHERE p.topic_id = $1
               ORDER BY p.created_at ASC"#
        } else {
            r#"SELECT p.id, p.topic_id, p.member_id,
                      COALESCE(m.username, 'Guest') AS author_name,
                      p.content, p.deleted_at, p.created_at, p.updated_at
               FROM posts p
               LEFT JOIN members m ON m.id = p.member_id
               WHERE p.topic_id = $1 AND p.deleted_at IS NULL
               ORDER BY p.created_at ASC"#
        };

        let rows = PostRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [topic_id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PostRow::into_record).collect())
    }
}

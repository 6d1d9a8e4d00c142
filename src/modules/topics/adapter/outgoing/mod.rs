pub mod post_query_postgres;
pub mod post_repository_postgres;
pub mod sea_orm_entity;
pub mod topic_query_postgres;
pub mod topic_repository_postgres;

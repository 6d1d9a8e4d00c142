pub mod jwt;
pub mod member_query_postgres;
pub mod sea_orm_entity;

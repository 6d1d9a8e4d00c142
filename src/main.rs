pub mod modules;
pub use modules::auth;
pub use modules::forums;
pub use modules::topics;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::member_query_postgres::MemberQueryPostgres;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::forums::adapter::outgoing::forum_query_postgres::ForumQueryPostgres;
use crate::forums::application::forum_use_cases::ForumUseCases;
use crate::forums::application::service::ViewForumService;
use crate::topics::adapter::outgoing::post_query_postgres::PostQueryPostgres;
use crate::topics::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::topics::adapter::outgoing::topic_query_postgres::TopicQueryPostgres;
use crate::topics::adapter::outgoing::topic_repository_postgres::TopicRepositoryPostgres;
use crate::topics::application::service::{
    CreateFormService, CreateTopicService, DeletePostService, EditFormService, LastPageService,
    ReplyFormService, RestorePostService, ShowTopicService, SubmitEditService, SubmitReplyService,
};
use crate::topics::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic_use_cases: TopicUseCases,
    pub forum_use_cases: ForumUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bulletin board...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters. Cheap to clone; every service holds its own.
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repository = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_repository = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let forum_query = ForumQueryPostgres::new(Arc::clone(&db_arc));
    let member_query = MemberQueryPostgres::new(Arc::clone(&db_arc));

    let topic_use_cases = TopicUseCases {
        show: Arc::new(ShowTopicService::new(
            topic_query.clone(),
            topic_repository.clone(),
            post_query.clone(),
        )),
        last: Arc::new(LastPageService::new(
            topic_query.clone(),
            member_query.clone(),
        )),
        reply_form: Arc::new(ReplyFormService::new(topic_query.clone())),
        submit_reply: Arc::new(SubmitReplyService::new(
            topic_query.clone(),
            post_repository.clone(),
            member_query.clone(),
        )),
        edit_form: Arc::new(EditFormService::new(
            topic_query.clone(),
            post_query.clone(),
        )),
        submit_edit: Arc::new(SubmitEditService::new(
            topic_query.clone(),
            post_query.clone(),
            post_repository.clone(),
            topic_repository.clone(),
        )),
        create_form: Arc::new(CreateFormService::new(forum_query.clone())),
        create: Arc::new(CreateTopicService::new(
            forum_query.clone(),
            topic_query.clone(),
            topic_repository.clone(),
            post_repository.clone(),
        )),
        restore: Arc::new(RestorePostService::new(
            topic_query.clone(),
            post_query.clone(),
            post_repository.clone(),
            topic_repository.clone(),
        )),
        delete: Arc::new(DeletePostService::new(
            topic_query.clone(),
            post_query.clone(),
            post_repository,
            topic_repository,
            forum_query.clone(),
        )),
    };

    let forum_use_cases = ForumUseCases {
        view: Arc::new(ViewForumService::new(forum_query, topic_query)),
    };

    let state = AppState {
        topic_use_cases,
        forum_use_cases,
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    info!("Listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Forums
    cfg.service(crate::forums::adapter::incoming::web::routes::show_forum::show_forum_handler);
    // Topics
    cfg.service(crate::topics::adapter::incoming::web::routes::create_form::create_form_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::submit_create::submit_create_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::show_topic::show_topic_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::last_page::last_page_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::reply_form::reply_form_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::submit_reply::submit_reply_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::edit_form::edit_form_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::submit_edit::submit_edit_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::delete_post::delete_post_handler);
    cfg.service(crate::topics::adapter::incoming::web::routes::restore_post::restore_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

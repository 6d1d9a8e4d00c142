use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::current_member::CurrentMember,
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::{ReplyCommand, SubmitReplyError},
    AppState,
};

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct ReplyForm {
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topics/{slug}/reply")]
pub async fn submit_reply_handler(
    path: web::Path<String>,
    form: web::Form<ReplyForm>,
    member: CurrentMember,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let command = match ReplyCommand::new(member.member_id, &form.content) {
        Ok(command) => command,
        Err(err) => return pages::bad_request(&err.to_string()),
    };

    match data.topic_use_cases.submit_reply.execute(&slug, command).await {
        Ok(reply) => pages::see_other(paths::topic_post_path(&reply.slug, reply.page, reply.post_id)),
        Err(err) => map_submit_reply_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_submit_reply_error(err: SubmitReplyError) -> actix_web::HttpResponse {
    match err {
        SubmitReplyError::NotFound => pages::not_found("Topic not found"),
        SubmitReplyError::RepositoryError(msg) => {
            tracing::error!("Failed to post reply: {}", msg);
            pages::server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::topics::application::ports::incoming::use_cases::{PostedReply, SubmitReplyUseCase};

    // ============================================================
    // SubmitReply Use Case Mock
    // ============================================================

    #[derive(Clone)]
    struct MockSubmitReplyUseCase {
        result: Result<PostedReply, SubmitReplyError>,
    }

    impl MockSubmitReplyUseCase {
        fn success(reply: PostedReply) -> Self {
            Self { result: Ok(reply) }
        }

        fn not_found() -> Self {
            Self {
                result: Err(SubmitReplyError::NotFound),
            }
        }

        fn repo_error(msg: &str) -> Self {
            Self {
                result: Err(SubmitReplyError::RepositoryError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl SubmitReplyUseCase for MockSubmitReplyUseCase {
        async fn execute(
            &self,
            _slug: &str,
            _command: ReplyCommand,
        ) -> Result<PostedReply, SubmitReplyError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn posted_reply_redirects_to_its_anchor() {
        let post_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_submit_reply(MockSubmitReplyUseCase::success(PostedReply {
                slug: "busy-thread".to_string(),
                page: 2,
                post_id,
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(submit_reply_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/topics/busy-thread/reply")
            .set_form(ReplyForm {
                content: "count me in".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            format!("/topics/busy-thread?page=2#post-{}", post_id).as_str()
        );
    }

    #[actix_web::test]
    async fn blank_content_is_rejected_before_the_use_case_runs() {
        let state = TestAppStateBuilder::default()
            .with_submit_reply(MockSubmitReplyUseCase::repo_error("must not be reached"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(submit_reply_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/topics/busy-thread/reply")
            .set_form(ReplyForm {
                content: "   ".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Content cannot be empty"));
    }

    #[actix_web::test]
    async fn unknown_slug_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_submit_reply(MockSubmitReplyUseCase::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(submit_reply_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/topics/missing/reply")
            .set_form(ReplyForm {
                content: "hello".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn repository_failure_surfaces_as_server_error() {
        let state = TestAppStateBuilder::default()
            .with_submit_reply(MockSubmitReplyUseCase::repo_error("insert failed"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(submit_reply_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/topics/busy-thread/reply")
            .set_form(ReplyForm {
                content: "hello".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

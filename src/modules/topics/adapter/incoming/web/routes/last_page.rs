use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::current_member::CurrentMember,
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::{LastPageError, LastPageTarget},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topics/{slug}/last")]
pub async fn last_page_handler(
    path: web::Path<String>,
    member: CurrentMember,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.topic_use_cases.last.execute(&slug, member.member_id).await {
        Ok(target) => pages::found(redirect_location(&target)),
        Err(err) => map_last_page_error(err),
    }
}

/// Anchor at the topic's last post when it has one; an empty topic
/// still redirects to its final (only) page.
fn redirect_location(target: &LastPageTarget) -> String {
    match target.last_post_id {
        Some(post_id) => paths::topic_post_path(&target.slug, target.page, post_id),
        None => paths::topic_page_path(&target.slug, target.page),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_last_page_error(err: LastPageError) -> actix_web::HttpResponse {
    match err {
        LastPageError::NotFound => pages::not_found("Topic not found"),
        LastPageError::RepositoryError(msg) => {
            tracing::error!("Failed to resolve last page: {}", msg);
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

    use crate::auth::application::domain::entities::MemberId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::topics::application::ports::incoming::use_cases::LastPageUseCase;

    // ============================================================
    // LastPage Use Case Mock
    // ============================================================

    #[derive(Clone)]
    struct MockLastPageUseCase {
        result: Result<LastPageTarget, LastPageError>,
    }

    impl MockLastPageUseCase {
        fn success(target: LastPageTarget) -> Self {
            Self { result: Ok(target) }
        }

        fn not_found() -> Self {
            Self {
                result: Err(LastPageError::NotFound),
            }
        }
    }

    #[async_trait]
    impl LastPageUseCase for MockLastPageUseCase {
        async fn execute(
            &self,
            _slug: &str,
            _viewer: Option<MemberId>,
        ) -> Result<LastPageTarget, LastPageError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn single_page_topic_redirects_to_root_with_last_post_anchor() {
        let post_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_last_page(MockLastPageUseCase::success(LastPageTarget {
                slug: "short-thread".to_string(),
                page: 1,
                last_post_id: Some(post_id),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(last_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/topics/short-thread/last")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            format!("/topics/short-thread#post-{}", post_id).as_str()
        );
    }

    #[actix_web::test]
    async fn long_topic_redirects_to_its_final_page() {
        let post_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_last_page(MockLastPageUseCase::success(LastPageTarget {
                slug: "long-thread".to_string(),
                page: 3,
                last_post_id: Some(post_id),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(last_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/topics/long-thread/last")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            format!("/topics/long-thread?page=3#post-{}", post_id).as_str()
        );
    }

    #[actix_web::test]
    async fn empty_topic_redirects_without_an_anchor() {
        let state = TestAppStateBuilder::default()
            .with_last_page(MockLastPageUseCase::success(LastPageTarget {
                slug: "empty-thread".to_string(),
                page: 1,
                last_post_id: None,
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(last_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/topics/empty-thread/last")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/topics/empty-thread"
        );
    }

    #[actix_web::test]
    async fn unknown_slug_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_last_page(MockLastPageUseCase::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(last_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/topics/missing/last")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

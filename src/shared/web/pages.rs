use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use askama::Template;

/// Shared error page. Every handler funnels its failure responses
/// through the helpers below so the board presents one error look.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    title: &'a str,
    message: &'a str,
}

/// Render a template into a 200 HTML response.
///
/// Rendering only fails on formatting errors, which indicates a bug in
/// the template itself, so the failure is logged and masked as a 500.
pub fn render<T: Template>(template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            tracing::error!("Template rendering failed: {}", e);
            server_error()
        }
    }
}

/// 303 See Other, the post-mutation redirect.
pub fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 302 Found, used for read-path redirects such as jumping to a
/// topic's last page.
pub fn found(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn not_found(message: &str) -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not Found", message)
}

pub fn bad_request(message: &str) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Invalid Request", message)
}

pub fn server_error() -> HttpResponse {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server Error",
        "Something went wrong on our end. Please try again later.",
    )
}

fn error_response(status: StatusCode, title: &str, message: &str) -> HttpResponse {
    let page = ErrorPage {
        status: status.as_u16(),
        title,
        message,
    };

    match page.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(message.to_string())
        }
    }
}

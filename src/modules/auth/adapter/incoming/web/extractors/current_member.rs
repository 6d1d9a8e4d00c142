use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    dev::Payload, error::InternalError, http::header, web, Error as ActixError, FromRequest,
    HttpRequest,
};

use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::shared::web::pages;

/// Request-scoped identity, resolved from the optional bearer token.
///
/// The board is readable and writable by guests, so a missing or
/// unverifiable token yields an anonymous identity rather than a
/// rejection. Routes that care about the signed-in member (for
/// posts-per-page settings or post attribution) read `member_id`.
#[derive(Debug, Clone, Copy)]
pub struct CurrentMember {
    pub member_id: Option<MemberId>,
}

impl CurrentMember {
    pub fn anonymous() -> Self {
        Self { member_id: None }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for CurrentMember {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match extract_token_from_header(req) {
            Some(token) => token,
            None => return ready(Ok(CurrentMember::anonymous())),
        };

        let provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider not registered in application data");
                let response = pages::server_error();
                return ready(Err(
                    InternalError::from_response("TokenProvider missing", response).into(),
                ));
            }
        };

        match provider.verify_token(token) {
            Ok(claims) if claims.token_type == "access" => ready(Ok(CurrentMember {
                member_id: Some(MemberId::from(claims.sub)),
            })),
            Ok(_) => {
                tracing::debug!("Non-access token presented, treating request as guest");
                ready(Ok(CurrentMember::anonymous()))
            }
            Err(e) => {
                tracing::debug!("Ignoring invalid bearer token: {}", e);
                ready(Ok(CurrentMember::anonymous()))
            }
        }
    }
}

use actix_web::HttpResponse;

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::views::{HomePage, render};

/// GET /
pub async fn index(current: CurrentUser) -> AppResult<HttpResponse> {
    render(&HomePage {
        user: current.into_inner(),
    })
}

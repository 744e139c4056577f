//! Session cookie handling and current-user extractors.

use actix_session::{Session, SessionExt, SessionMiddleware, storage::CookieSessionStore};
use actix_web::{FromRequest, HttpRequest, cookie::Key, dev::Payload, web};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use quill_core::SessionState;
use quill_core::domain::User;

use crate::config::SessionConfig;
use crate::middleware::error::AppError;
use crate::state::AppState;

/// Session key holding the logged-in user's id.
pub const SESSION_USER_KEY: &str = "id";

/// Cookie-backed session store. The payload is encrypted with `key`.
pub fn session_middleware(config: &SessionConfig, key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.cookie_name.clone())
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .build()
}

/// Read the session payload. An unreadable payload counts as logged out.
pub fn session_state(session: &Session) -> SessionState {
    match session.get::<Uuid>(SESSION_USER_KEY) {
        Ok(id) => SessionState { id },
        Err(e) => {
            tracing::warn!("Ignoring unreadable session payload: {}", e);
            SessionState::anonymous()
        }
    }
}

pub fn log_in(session: &Session, user_id: Uuid) -> Result<(), AppError> {
    session.renew();
    session.insert(SESSION_USER_KEY, user_id)?;
    Ok(())
}

pub fn log_out(session: &Session) {
    session.purge();
}

fn lookup_user(req: &HttpRequest) -> LocalBoxFuture<'static, Result<Option<User>, AppError>> {
    let session = session_state(&req.get_session());
    let state = req.app_data::<web::Data<AppState>>().cloned();

    Box::pin(async move {
        let Some(state) = state else {
            tracing::error!("AppState not found in app data");
            return Err(AppError::Internal("Server configuration error".to_string()));
        };
        Ok(state.gate().current_user(&session).await?)
    })
}

/// The logged-in user. Handlers taking this redirect to `/login` when nobody is.
///
/// ```ignore
/// async fn protected_route(current: CurrentUser) -> impl Responder {
///     format!("Hello, {}!", current.0.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let lookup = lookup_user(req);
        Box::pin(async move { lookup.await?.map(CurrentUser).ok_or(AppError::LoginRequired) })
    }
}

/// Optional user extractor - doesn't fail if nobody is logged in.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let lookup = lookup_user(req);
        Box::pin(async move { Ok(MaybeUser(lookup.await?)) })
    }
}

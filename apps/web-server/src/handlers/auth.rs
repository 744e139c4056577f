//! Login, signup and logout.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_core::domain::validation::require_present;
use quill_core::error::RepoError;
use quill_shared::{LoginForm, SignupForm};

use crate::middleware::auth::{MaybeUser, log_in, log_out};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{LoginPage, SignupPage, redirect, render};

/// GET /login
pub async fn login_form(viewer: MaybeUser) -> AppResult<HttpResponse> {
    if viewer.0.is_some() {
        return Ok(redirect("/posts"));
    }
    render(&LoginPage)
}

/// POST /login
///
/// Unknown usernames and wrong passwords get the same bare redirect.
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let Some(user) = state.users.find_by_username(&form.username).await? else {
        tracing::debug!(username = %form.username, "Login rejected: unknown user");
        return Ok(redirect("/login"));
    };

    if !state.passwords.verify(&form.password, &user.password_hash)? {
        tracing::debug!(username = %form.username, "Login rejected: wrong password");
        return Ok(redirect("/login"));
    }

    log_in(&session, user.id)?;
    tracing::info!(user_id = %user.id, "User logged in");
    Ok(redirect("/posts"))
}

/// GET /signup
pub async fn signup_form(viewer: MaybeUser) -> AppResult<HttpResponse> {
    if viewer.0.is_some() {
        return Ok(redirect("/posts"));
    }
    render(&SignupPage)
}

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<SignupForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let mut user = User::new(form.username, form.email, String::new());
    if let Err(e) = user
        .validate()
        .and_then(|_| require_present("password", &form.password))
    {
        tracing::debug!("Signup rejected: {}", e);
        return Ok(redirect("/signup"));
    }
    user.password_hash = state.passwords.hash(&form.password)?;

    let user = match state.users.create(user).await {
        Ok(user) => user,
        Err(RepoError::Constraint(detail)) => {
            tracing::debug!("Signup rejected: {}", detail);
            return Ok(redirect("/signup"));
        }
        Err(e) => return Err(e.into()),
    };

    log_in(&session, user.id)?;
    tracing::info!(user_id = %user.id, "User signed up");
    Ok(redirect("/posts"))
}

/// GET /logout
pub async fn logout(session: Session) -> HttpResponse {
    log_out(&session);
    redirect("/login")
}

//! HTTP handlers and route configuration.

mod auth;
mod home;
mod posts;
mod users;


use actix_web::web;
use uuid::Uuid;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        // Session routes
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_form))
                .route(web::post().to(auth::login)),
        )
        .service(
            web::resource("/signup")
                .route(web::get().to(auth::signup_form))
                .route(web::post().to(auth::signup)),
        )
        .route("/logout", web::get().to(auth::logout))
        // User directory
        .service(
            web::scope("/users")
                .route("", web::get().to(users::index))
                .service(
                    web::resource("/{key}")
                        .route(web::get().to(users::show))
                        .route(web::post().to(users::update)),
                )
                .route("/{slug}/edit", web::get().to(users::edit)),
        )
        // Posts; "/new" must come before "/{id}"
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::index))
                        .route(web::post().to(posts::create)),
                )
                .route("/new", web::get().to(posts::new_form))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::show))
                        .route(web::post().to(posts::update)),
                )
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/delete", web::post().to(posts::destroy)),
        );
}

/// Ids in paths that don't parse are treated like missing records.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

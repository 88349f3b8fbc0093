//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod health;
mod users;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Auth
        .route("/signup", web::post().to(auth::signup))
        .route("/signin", web::post().to(auth::signin))
        // Blogs
        .route("/latest-blogs", web::post().to(blogs::latest_blogs))
        .route(
            "/all-latest-blogs-count",
            web::get().to(blogs::all_latest_blogs_count),
        )
        .route("/trending-blogs", web::get().to(blogs::trending_blogs))
        .route("/filter-blogs", web::post().to(blogs::filter_blogs))
        .route("/filter-blogs-count", web::post().to(blogs::filter_blogs_count))
        .route("/search-blogs", web::post().to(blogs::search_blogs))
        .route("/search-blogs-count", web::post().to(blogs::search_blogs_count))
        .route("/create-blog", web::post().to(blogs::create_blog))
        .route("/get-blog", web::post().to(blogs::get_blog))
        // Users
        .route("/search-users", web::post().to(users::search_users))
        .route("/get-profile", web::post().to(users::get_profile));
}

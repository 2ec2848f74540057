use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::blogs;
use super::handlers::health::health;
use super::handlers::projects;
use super::handlers::users;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::project::ports::ProjectServicePort;
use crate::domain::user::ports::UserServicePort;

/// Multipart framing allowance on top of the image size limit, so oversized
/// images are reported by the upload validation rather than cut off mid-stream.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub blog_service: Arc<dyn BlogServicePort>,
    pub project_service: Arc<dyn ProjectServicePort>,
    pub max_upload_bytes: usize,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    blog_service: Arc<dyn BlogServicePort>,
    project_service: Arc<dyn ProjectServicePort>,
    authenticator: Arc<Authenticator>,
    max_upload_bytes: usize,
) -> Router {
    let state = AppState {
        user_service,
        blog_service,
        project_service,
        max_upload_bytes,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/register/user", post(users::register_user))
        .route("/register/admin", post(users::register_admin))
        .route("/login/user", post(users::login_user))
        .route("/login/admin", post(users::login_admin));

    let user_routes = Router::new()
        .route("/searchBlogs", get(blogs::search_blogs))
        .route(
            "/upload/profile-picture",
            post(users::upload_profile_picture).layer(DefaultBodyLimit::max(
                max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
            )),
        )
        .route("/getAllBlogs", get(blogs::list_blogs))
        .route("/blog/like/:id", post(blogs::like_blog))
        .route("/blog/dislike/:id", post(blogs::dislike_blog))
        .route("/deleteBlog/:id", delete(blogs::delete_blog))
        .route("/addBlog", post(blogs::create_blog))
        .route("/getAllProjects", get(projects::list_projects))
        .route("/user/profile-info", put(users::update_profile_info))
        .route("/user/:id", get(users::get_user))
        .route("/user/:id/blogs", get(blogs::list_user_blogs))
        .route_layer(middleware::from_fn_with_state(
            authenticator.clone(),
            authenticate,
        ));

    // The later route_layer wraps the earlier one, so authenticate runs first.
    let admin_routes = Router::new()
        .route("/admin/deleteBlog/:id", delete(blogs::admin_delete_blog))
        .route("/unauthorize/:userId", delete(users::delete_user))
        .route("/getAllUser", get(users::list_users))
        .route("/addProject", post(projects::create_project))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Page routes
//!
//! Every handler builds a fresh [`ImageRotation`](vetgroom::ImageRotation) so
//! image choice never leaks between requests.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;
use vetgroom::pages::{
    AboutPage, BlogIndexPage, BlogPostPage, ContactPage, HomePage, LocationPage,
    LocationsIndexPage, ServiceLocationPage, ServicePage, ServicesIndexPage,
};

use crate::{
    AppState,
    error::{ApiError, Result},
    models::ApiResponse,
};

/// Create page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/services", get(services_index))
        .route("/services/{service}", get(service_detail))
        .route("/locations", get(locations_index))
        .route("/locations/{location}", get(location_detail))
        .route("/blog", get(blog_index))
        .route("/blog/{slug}", get(blog_post))
        // Combined landing pages: /{service}-in-{location}
        .route("/{slug}", get(service_in_location))
}

async fn home(State(state): State<AppState>) -> Json<ApiResponse<HomePage>> {
    let mut images = state.site.images.rotation();
    Json(ApiResponse::new(HomePage::build(&state.site, &mut images)))
}

async fn about(State(state): State<AppState>) -> Json<ApiResponse<AboutPage>> {
    Json(ApiResponse::new(AboutPage::build(&state.site)))
}

async fn contact(State(state): State<AppState>) -> Json<ApiResponse<ContactPage>> {
    Json(ApiResponse::new(ContactPage::build(
        &state.site,
        state.leads.config(),
    )))
}

async fn services_index(State(state): State<AppState>) -> Json<ApiResponse<ServicesIndexPage>> {
    let mut images = state.site.images.rotation();
    Json(ApiResponse::new(ServicesIndexPage::build(
        &state.site,
        &mut images,
    )))
}

async fn service_detail(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<Json<ApiResponse<ServicePage>>> {
    let mut images = state.site.images.rotation();
    let page = ServicePage::build(&state.site, &service, &mut images)
        .ok_or_else(|| ApiError::not_found(&format!("/services/{}", service)))?;
    Ok(Json(ApiResponse::new(page)))
}

async fn locations_index(State(state): State<AppState>) -> Json<ApiResponse<LocationsIndexPage>> {
    Json(ApiResponse::new(LocationsIndexPage::build(&state.site)))
}

async fn location_detail(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<ApiResponse<LocationPage>>> {
    let mut images = state.site.images.rotation();
    let page = LocationPage::build(&state.site, &location, &mut images)
        .ok_or_else(|| ApiError::not_found(&format!("/locations/{}", location)))?;
    Ok(Json(ApiResponse::new(page)))
}

async fn blog_index(State(state): State<AppState>) -> Json<ApiResponse<BlogIndexPage>> {
    Json(ApiResponse::new(BlogIndexPage::build(&state.site).await))
}

async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BlogPostPage>>> {
    let page = BlogPostPage::build(&state.site, &slug)
        .await
        .ok_or_else(|| ApiError::not_found(&format!("/blog/{}", slug)))?;
    Ok(Json(ApiResponse::new(page)))
}

async fn service_in_location(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ServiceLocationPage>>> {
    let mut images = state.site.images.rotation();
    let page = ServiceLocationPage::build(&state.site, &slug, &mut images).map_err(|e| {
        debug!("No landing page for {}: {}", slug, e);
        ApiError::from(e)
    })?;
    Ok(Json(ApiResponse::new(page)))
}

use leptos::*;
use crate::models::perfume::{DisplayPage, DisplaySort};

#[cfg(feature = "ssr")]
use actix_web::{http::header, web, HttpRequest, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::{log, warn};
#[cfg(feature = "ssr")]
use crate::config::Config;
#[cfg(feature = "ssr")]
use crate::error::AppError;
#[cfg(feature = "ssr")]
use crate::models::review::ReviewRequest;
#[cfg(feature = "ssr")]
use crate::utils::session::SESSION_COOKIE;

/// Shared by every actix worker.
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config, http: reqwest::Client::new() }
    }
}

/// One page of perfumes for an ingredient or category.
/// `Ok(None)` when the backend answers with a non-success status.
#[server(FetchDisplay, "/api")]
pub async fn fetch_display(sort: DisplaySort, query: String) -> Result<Option<DisplayPage>, ServerFnError> {
    let state: web::Data<AppState> = leptos_actix::extract().await?;
    Ok(load_display(&state, sort, &query).await?)
}

#[cfg(feature = "ssr")]
pub async fn load_display(
    state: &AppState,
    sort: DisplaySort,
    query: &str,
) -> Result<Option<DisplayPage>, reqwest::Error> {
    use crate::models::perfume::display_url;

    let url = display_url(&state.config.api_server_url, sort, query);
    log!("[SERVER] Fetching listing: {}", url);

    let response = state.http.get(&url).send().await?;
    if !response.status().is_success() {
        warn!("[SERVER] Listing request for {} returned {}", query, response.status());
        return Ok(None);
    }
    let page = response.json::<DisplayPage>().await?;
    log!("[SERVER] Returning {} of {} perfumes for {}", page.data.len(), page.total_elements, query);
    Ok(Some(page))
}

#[cfg(feature = "ssr")]
async fn passthrough(upstream: reqwest::Response) -> Result<HttpResponse, AppError> {
    let status = actix_web::http::StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(actix_web::http::StatusCode::BAD_GATEWAY);
    let body = upstream.bytes().await?;
    Ok(HttpResponse::build(status).body(body))
}

#[cfg(feature = "ssr")]
fn authorization(req: &HttpRequest) -> String {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// `POST /api/initialize`: drops the session cookie so the next login starts clean.
#[cfg(feature = "ssr")]
pub async fn initialize_session() -> HttpResponse {
    log!("[SERVER] Reinitializing session");
    let mut cookie = actix_web::cookie::Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .finish();
    cookie.make_removal();
    HttpResponse::Ok().cookie(cookie).finish()
}

/// `POST /api/reviewpage/{id}`: unwraps `{ payload }` and forwards the payload with the caller's token.
#[cfg(feature = "ssr")]
pub async fn post_review(
    state: web::Data<AppState>,
    perfume_id: web::Path<String>,
    req: HttpRequest,
    request: web::Json<ReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let perfume_id = perfume_id.into_inner();
    log!("[API] Received review for perfume {}", perfume_id);

    let upstream = state
        .http
        .post(state.config.review_url(&perfume_id))
        .header(reqwest::header::AUTHORIZATION, authorization(&req))
        .json(&request.into_inner().payload)
        .send()
        .await?;
    if !upstream.status().is_success() {
        warn!("[API] Review upstream for {} returned {}", perfume_id, upstream.status());
    }
    passthrough(upstream).await
}

/// `GET /auth/review/image/{name}`: hands out a pre-signed upload URL.
#[cfg(feature = "ssr")]
pub async fn presign_image(
    state: web::Data<AppState>,
    name: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let name = name.into_inner();
    let upstream = state
        .http
        .get(state.config.presign_url(&name))
        .header(reqwest::header::AUTHORIZATION, authorization(&req))
        .send()
        .await?;
    log!("[API] Upload URL for {} -> {}", name, upstream.status());
    passthrough(upstream).await
}

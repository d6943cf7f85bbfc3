/// Browser side of the review flow, talking to same-origin routes with `gloo-net`.
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use leptos::spawn_local;

use crate::error::GatewayError;
use crate::models::review::ReviewRequest;
use crate::submission::ReviewGateway;
use crate::utils::session::Session;

fn check(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(GatewayError::from_status(response.status()))
    }
}

fn transport(e: gloo_net::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

pub struct HttpReviewGateway {
    session: Option<Session>,
}

impl HttpReviewGateway {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    /// Raw token, as `/api/reviewpage` expects it.
    fn token(&self) -> &str {
        self.session.as_ref().map(|s| s.jwt.as_str()).unwrap_or_default()
    }

    fn bearer(&self) -> String {
        self.session.as_ref().map(Session::bearer).unwrap_or_default()
    }
}

impl ReviewGateway for HttpReviewGateway {
    async fn presigned_url(&self, name: &str) -> Result<String, GatewayError> {
        let url = format!("/auth/review/image/{}", urlencoding::encode(name));
        let response = Request::get(&url)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(transport)?;
        check(response)?.text().await.map_err(transport)
    }

    async fn upload(&self, presigned_url: &str, bytes: Vec<u8>) -> Result<(), GatewayError> {
        let body = js_sys::Uint8Array::from(bytes.as_slice());
        let response = Request::put(presigned_url)
            .body(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check(response).map(|_| ())
    }

    async fn post_review(&self, perfume_id: &str, request: &ReviewRequest) -> Result<(), GatewayError> {
        let response = Request::post(&format!("/api/reviewpage/{perfume_id}"))
            .header("AUTHORIZATION", self.token())
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check(response).map(|_| ())
    }

    fn initialize_session(&self) {
        log!("[SESSION] Reinitializing session");
        spawn_local(async {
            if let Err(e) = Request::post("/api/initialize").send().await {
                error!("[SESSION] Initialize request failed: {}", e);
            }
        });
    }
}

/// Session token lookup. The token is issued by the backend login flow and
/// stored in the `jwt` cookie; this module only reads it.
use leptos::logging::log;

pub const SESSION_COOKIE: &str = "jwt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub jwt: String,
}

impl Session {
    /// Value for the `Authorization` header of authenticated `/auth/*` calls.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.jwt)
    }
}

/// Extracts the session from a `Cookie` header / `document.cookie` string.
pub fn parse_session_cookie(cookies: &str) -> Option<Session> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| Session {
            jwt: urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        })
}

/// Reads the current session from the browser. Always `None` while rendering on the server.
pub fn use_session() -> Option<Session> {
    #[cfg(any(feature = "hydrate", feature = "csr"))]
    {
        use wasm_bindgen::JsCast;
        let cookies = leptos::document()
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default();
        let session = parse_session_cookie(&cookies);
        if session.is_none() {
            log!("[SESSION] No session cookie present");
        }
        session
    }
    #[cfg(not(any(feature = "hydrate", feature = "csr")))]
    {
        log!("[SESSION] Session is only available in the browser");
        None
    }
}

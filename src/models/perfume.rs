use serde::{Deserialize, Serialize};

/// Perfume summary as returned by the display API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Perfume {
    pub perfume_id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub rate: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
}

/// One page of `GET /display` results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPage {
    pub data: Vec<Perfume>,
    pub total_pages: u32,
    pub total_elements: u64,
}

/// Which filter a listing is built from; doubles as the `/display` query key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySort {
    Ingredient,
    Category,
}

impl DisplaySort {
    pub fn query_key(self) -> &'static str {
        match self {
            DisplaySort::Ingredient => "ingredient",
            DisplaySort::Category => "category",
        }
    }
}

/// Builds `{server}/display?<key>=<query>`, encoding the query once.
/// Route segments arrive already percent-encoded, so those are passed through unchanged.
pub fn display_url(server: &str, sort: DisplaySort, query: &str) -> String {
    let decoded = urlencoding::decode(query)
        .map(|q| q.into_owned())
        .unwrap_or_else(|_| query.to_string());
    format!(
        "{}/display?{}={}",
        server.trim_end_matches('/'),
        sort.query_key(),
        urlencoding::encode(&decoded)
    )
}

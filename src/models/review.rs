// src/models/review.rs
use serde::{Deserialize, Serialize};
use crate::models::keyword::{join_style_codes, Intensity, Longevity, Season, Style};

/// Upper bound on photos attached to a single review.
pub const MAX_PHOTOS: usize = 3;

/// Image picked by the reviewer, held in memory until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Review being composed in the form. Lives as long as the form does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8,                      // 0 means no star picked yet
    pub comment: String,                 // one-line comment
    pub text_review: String,             // free text, optional
    pub season: Option<Season>,
    pub longevity: Option<Longevity>,
    pub intensity: Option<Intensity>,
    pub styles: Vec<Style>,
    pub photos: Vec<PhotoFile>,
}

/// Inline error indicators; each one is computed on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub rating_missing: bool,
    pub comment_empty: bool,
    pub keywords_incomplete: bool,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        !(self.rating_missing || self.comment_empty || self.keywords_incomplete)
    }
}

impl ReviewDraft {
    pub fn validate(&self) -> ValidationErrors {
        ValidationErrors {
            rating_missing: self.rating == 0,
            comment_empty: self.comment.trim().is_empty(),
            keywords_incomplete: self.season.is_none()
                || self.longevity.is_none()
                || self.intensity.is_none()
                || self.styles.is_empty(),
        }
    }

    /// Replaces the queued photos, keeping at most [`MAX_PHOTOS`].
    pub fn set_photos(&mut self, mut photos: Vec<PhotoFile>) {
        photos.truncate(MAX_PHOTOS);
        self.photos = photos;
    }

    /// Builds the wire payload from a validated draft and the uploaded photo URLs.
    /// Returns `None` while a keyword is still missing.
    pub fn to_payload(&self, uploaded: &[String]) -> Option<ReviewPayload> {
        let photo = |i: usize| uploaded.get(i).cloned().unwrap_or_default();
        Some(ReviewPayload {
            rate: self.rating,
            comment: self.comment.clone(),
            season: self.season?.code().to_string(),
            longevity: self.longevity?.code().to_string(),
            intensity: self.intensity?.code().to_string(),
            style: join_style_codes(&self.styles),
            text_review: self.text_review.clone(),
            thumbnail: photo(0),
            image1: photo(1),
            image2: photo(2),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub rate: u8,
    pub comment: String,
    pub season: String,
    pub longevity: String,
    pub intensity: String,
    pub style: String,
    pub text_review: String,
    pub thumbnail: String,
    pub image1: String,
    pub image2: String,
}

/// Body of `POST /api/reviewpage/:id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub payload: ReviewPayload,
}

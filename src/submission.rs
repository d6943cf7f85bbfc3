/// Review submission flow: validate the draft, upload photos one by one to
/// pre-signed storage URLs, then post the composed review.
use leptos::logging::{log, warn};
use url::Url;

use crate::error::GatewayError;
use crate::models::review::{ReviewDraft, ReviewRequest, ValidationErrors};
use crate::utils::compression::ImageCompressor;

pub const LOGIN_REDIRECT: &str = "/login?invalid=true";

/// Remote side of the review flow. Implementations carry the session token.
#[allow(async_fn_in_trait)]
pub trait ReviewGateway {
    /// `GET /auth/review/image/:name`, answering with the pre-signed upload URL.
    async fn presigned_url(&self, name: &str) -> Result<String, GatewayError>;

    /// `PUT` of the compressed bytes to a pre-signed URL.
    async fn upload(&self, presigned_url: &str, bytes: Vec<u8>) -> Result<(), GatewayError>;

    /// `POST /api/reviewpage/:id`.
    async fn post_review(&self, perfume_id: &str, request: &ReviewRequest) -> Result<(), GatewayError>;

    /// `POST /api/initialize`. Fire and forget.
    fn initialize_session(&self);
}

/// Where a submit attempt ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent; the form shows these indicators.
    Invalid(ValidationErrors),
    /// Review stored, go to this path after refreshing route data.
    Navigate(String),
    RedirectToLogin,
    /// Gave up silently, the form stays as it is.
    Aborted,
}

pub fn review_tab_path(perfume_id: &str) -> String {
    format!("/perfumes/{perfume_id}?category=review")
}

/// Public location of an uploaded object: the pre-signed URL without its signature.
pub fn strip_presigned(presigned: &str) -> String {
    match Url::parse(presigned) {
        Ok(mut url) => {
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => presigned
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Session expired: reset it once, then send the user to log in again.
fn relogin<G: ReviewGateway>(gateway: &G) -> SubmitOutcome {
    gateway.initialize_session();
    SubmitOutcome::RedirectToLogin
}

pub async fn submit_review<G, C>(
    draft: &ReviewDraft,
    perfume_id: &str,
    gateway: &G,
    compressor: &C,
) -> SubmitOutcome
where
    G: ReviewGateway,
    C: ImageCompressor,
{
    let errors = draft.validate();
    if !errors.is_empty() {
        log!("[SUBMIT] Validation failed: {:?}", errors);
        return SubmitOutcome::Invalid(errors);
    }

    let mut uploaded = Vec::with_capacity(draft.photos.len());
    for photo in &draft.photos {
        let presigned = match gateway.presigned_url(&photo.name).await {
            Ok(url) => url,
            Err(GatewayError::Unauthorized) => {
                warn!("[UPLOAD] Upload URL refused for {}: session expired", photo.name);
                return relogin(gateway);
            }
            Err(e) => {
                warn!("[UPLOAD] Could not get upload URL for {}: {}", photo.name, e);
                return SubmitOutcome::Aborted;
            }
        };

        let compressed = match compressor.compress(&photo.bytes) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("[UPLOAD] Skipping {}: {}", photo.name, e);
                continue;
            }
        };

        if let Err(e) = gateway.upload(&presigned, compressed).await {
            warn!("[UPLOAD] Upload of {} failed: {}", photo.name, e);
            return SubmitOutcome::Aborted;
        }
        uploaded.push(strip_presigned(&presigned));
        log!("[UPLOAD] Uploaded {} ({} of {})", photo.name, uploaded.len(), draft.photos.len());
    }

    let Some(payload) = draft.to_payload(&uploaded) else {
        return SubmitOutcome::Aborted;
    };

    match gateway.post_review(perfume_id, &ReviewRequest { payload }).await {
        Ok(()) => {
            log!("[SUBMIT] Review stored for perfume {}", perfume_id);
            SubmitOutcome::Navigate(review_tab_path(perfume_id))
        }
        Err(GatewayError::Unauthorized) => relogin(gateway),
        Err(e) => {
            warn!("[SUBMIT] Review for perfume {} not stored: {}", perfume_id, e);
            SubmitOutcome::Aborted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompressionError;
    use crate::models::keyword::{Intensity, Longevity, Season, Style};
    use crate::models::review::PhotoFile;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Presign(String),
        Upload(String, Vec<u8>),
        Post(String, ReviewRequest),
        Initialize,
    }

    #[derive(Default)]
    struct MockGateway {
        calls: RefCell<Vec<Call>>,
        presign_failures: HashMap<String, GatewayError>,
        upload_failures: HashMap<String, GatewayError>,
        post_result: Option<GatewayError>,
    }

    impl MockGateway {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.borrow().iter().filter(|c| pred(c)).count()
        }
    }

    impl ReviewGateway for MockGateway {
        async fn presigned_url(&self, name: &str) -> Result<String, GatewayError> {
            self.calls.borrow_mut().push(Call::Presign(name.to_string()));
            match self.presign_failures.get(name) {
                Some(err) => Err(err.clone()),
                None => Ok(format!("https://bucket.example.com/reviews/{name}?X-Amz-Signature=abc")),
            }
        }

        async fn upload(&self, presigned_url: &str, bytes: Vec<u8>) -> Result<(), GatewayError> {
            self.calls
                .borrow_mut()
                .push(Call::Upload(presigned_url.to_string(), bytes));
            let name = strip_presigned(presigned_url)
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string();
            match self.upload_failures.get(&name) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn post_review(&self, perfume_id: &str, request: &ReviewRequest) -> Result<(), GatewayError> {
            self.calls
                .borrow_mut()
                .push(Call::Post(perfume_id.to_string(), request.clone()));
            match &self.post_result {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn initialize_session(&self) {
            self.calls.borrow_mut().push(Call::Initialize);
        }
    }

    /// Reverses the bytes so tests can tell compressed from raw input.
    struct ReverseCompressor;

    impl ImageCompressor for ReverseCompressor {
        fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressionError> {
            if bytes.is_empty() {
                return Err(CompressionError::Decode(image::ImageError::IoError(
                    std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "empty"),
                )));
            }
            Ok(bytes.iter().rev().copied().collect())
        }
    }

    fn photo(name: &str) -> PhotoFile {
        PhotoFile { name: name.to_string(), bytes: vec![1, 2, 3] }
    }

    fn valid_draft(photos: Vec<PhotoFile>) -> ReviewDraft {
        ReviewDraft {
            rating: 5,
            comment: "봄에 딱".into(),
            text_review: "은은한 장미향".into(),
            season: Some(Season::Spring),
            longevity: Some(Longevity::Medium),
            intensity: Some(Intensity::Weak),
            styles: vec![Style::Lovely, Style::Pure],
            photos,
        }
    }

    #[test]
    fn test_strip_presigned() {
        assert_eq!(
            strip_presigned("https://bucket.s3.amazonaws.com/review/a.jpg?X-Amz-Date=1&X-Amz-Signature=2"),
            "https://bucket.s3.amazonaws.com/review/a.jpg"
        );
        assert_eq!(strip_presigned("https://cdn.example.com/a.png#frag"), "https://cdn.example.com/a.png");
        assert_eq!(strip_presigned("not a url?sig=1"), "not a url");
    }

    #[tokio::test]
    async fn test_invalid_draft_makes_no_requests() {
        let gateway = MockGateway::default();
        let draft = ReviewDraft { rating: 0, comment: "  ".into(), ..valid_draft(vec![photo("a.jpg")]) };
        let outcome = submit_review(&draft, "12", &gateway, &ReverseCompressor).await;
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert!(errors.rating_missing);
                assert!(errors.comment_empty);
                assert!(!errors.keywords_incomplete);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_without_photos_posts_and_navigates() {
        let gateway = MockGateway::default();
        let outcome = submit_review(&valid_draft(vec![]), "12", &gateway, &ReverseCompressor).await;
        assert_eq!(outcome, SubmitOutcome::Navigate("/perfumes/12?category=review".into()));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        let Call::Post(id, request) = &calls[0] else { panic!("expected post, got {calls:?}") };
        assert_eq!(id, "12");
        assert_eq!(request.payload.style, "LOVELY, PURE");
        assert_eq!(request.payload.season, "SPRING");
        assert_eq!(request.payload.thumbnail, "");
    }

    #[tokio::test]
    async fn test_photos_upload_in_order_before_post() {
        let gateway = MockGateway::default();
        let draft = valid_draft(vec![photo("1.jpg"), photo("2.jpg"), photo("3.jpg")]);
        let outcome = submit_review(&draft, "7", &gateway, &ReverseCompressor).await;
        assert_eq!(outcome, SubmitOutcome::Navigate(review_tab_path("7")));

        let calls = gateway.calls();
        let presigned = |n: &str| format!("https://bucket.example.com/reviews/{n}?X-Amz-Signature=abc");
        assert_eq!(
            calls[..6],
            [
                Call::Presign("1.jpg".into()),
                Call::Upload(presigned("1.jpg"), vec![3, 2, 1]),
                Call::Presign("2.jpg".into()),
                Call::Upload(presigned("2.jpg"), vec![3, 2, 1]),
                Call::Presign("3.jpg".into()),
                Call::Upload(presigned("3.jpg"), vec![3, 2, 1]),
            ]
        );
        let Call::Post(_, request) = &calls[6] else { panic!("expected post last") };
        assert_eq!(request.payload.thumbnail, "https://bucket.example.com/reviews/1.jpg");
        assert_eq!(request.payload.image1, "https://bucket.example.com/reviews/2.jpg");
        assert_eq!(request.payload.image2, "https://bucket.example.com/reviews/3.jpg");
    }

    #[tokio::test]
    async fn test_failed_upload_stops_everything_after_it() {
        let mut gateway = MockGateway::default();
        gateway.upload_failures.insert("2.jpg".into(), GatewayError::Status(403));
        let draft = valid_draft(vec![photo("1.jpg"), photo("2.jpg"), photo("3.jpg")]);
        let outcome = submit_review(&draft, "7", &gateway, &ReverseCompressor).await;

        assert_eq!(outcome, SubmitOutcome::Aborted);
        assert_eq!(gateway.count(|c| matches!(c, Call::Presign(n) if n == "3.jpg")), 0);
        assert_eq!(gateway.count(|c| matches!(c, Call::Post(..))), 0);
        assert_eq!(gateway.count(|c| matches!(c, Call::Initialize)), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_presign_reinitializes_once() {
        let mut gateway = MockGateway::default();
        gateway.presign_failures.insert("1.jpg".into(), GatewayError::Unauthorized);
        let draft = valid_draft(vec![photo("1.jpg"), photo("2.jpg")]);
        let outcome = submit_review(&draft, "7", &gateway, &ReverseCompressor).await;

        assert_eq!(outcome, SubmitOutcome::RedirectToLogin);
        assert_eq!(
            gateway.calls(),
            vec![Call::Presign("1.jpg".into()), Call::Initialize]
        );
    }

    #[tokio::test]
    async fn test_refused_presign_aborts_silently() {
        for err in [
            GatewayError::Status(500),
            GatewayError::Status(403),
            GatewayError::Transport("offline".into()),
        ] {
            let mut gateway = MockGateway::default();
            gateway.presign_failures.insert("1.jpg".into(), err);
            let draft = valid_draft(vec![photo("1.jpg"), photo("2.jpg")]);
            let outcome = submit_review(&draft, "7", &gateway, &ReverseCompressor).await;

            assert_eq!(outcome, SubmitOutcome::Aborted);
            assert_eq!(gateway.calls(), vec![Call::Presign("1.jpg".into())]);
        }
    }

    #[tokio::test]
    async fn test_unauthorized_post_reinitializes_once() {
        let gateway = MockGateway { post_result: Some(GatewayError::Unauthorized), ..Default::default() };
        let outcome = submit_review(&valid_draft(vec![photo("1.jpg")]), "7", &gateway, &ReverseCompressor).await;

        assert_eq!(outcome, SubmitOutcome::RedirectToLogin);
        assert_eq!(gateway.count(|c| matches!(c, Call::Initialize)), 1);
    }

    #[tokio::test]
    async fn test_server_error_on_post_is_silent() {
        let gateway = MockGateway { post_result: Some(GatewayError::Status(500)), ..Default::default() };
        let outcome = submit_review(&valid_draft(vec![]), "7", &gateway, &ReverseCompressor).await;

        assert_eq!(outcome, SubmitOutcome::Aborted);
        assert_eq!(gateway.count(|c| matches!(c, Call::Initialize)), 0);
    }

    #[tokio::test]
    async fn test_uncompressible_photo_is_skipped() {
        let gateway = MockGateway::default();
        let broken = PhotoFile { name: "broken.heic".into(), bytes: vec![] };
        let draft = valid_draft(vec![broken, photo("ok.jpg")]);
        let outcome = submit_review(&draft, "7", &gateway, &ReverseCompressor).await;
        assert!(matches!(outcome, SubmitOutcome::Navigate(_)));

        let calls = gateway.calls();
        assert_eq!(gateway.count(|c| matches!(c, Call::Upload(..))), 1);
        let Some(Call::Post(_, request)) = calls.last() else { panic!("expected post last") };
        assert_eq!(request.payload.thumbnail, "https://bucket.example.com/reviews/ok.jpg");
        assert_eq!(request.payload.image1, "");
    }
}

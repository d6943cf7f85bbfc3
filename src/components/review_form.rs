use leptos::*;
use leptos::logging::{error, log};
use leptos_router::{use_navigate, NavigateOptions};

use crate::client::HttpReviewGateway;
use crate::components::comment_input::{OnelineComment, TextReview};
use crate::components::keyword_review::KeywordReview;
use crate::components::photo_input::PhotoInput;
use crate::components::star_rating::StarRating;
use crate::components::style_picker::StylePicker;
use crate::models::review::{ReviewDraft, ValidationErrors};
use crate::submission::{submit_review, SubmitOutcome, LOGIN_REDIRECT};
use crate::utils::compression::JpegCompressor;
use crate::utils::leptos_owner::with_owner_safe;
use crate::utils::session::use_session;

/// Full page load, so the perfume page renders with the new review in place.
fn navigate_with_refresh(path: &str) {
    if let Err(e) = window().location().set_href(path) {
        error!("[SUBMIT] Navigation to {} failed: {:?}", path, e);
    }
}

/// Review form for one perfume. Holds the draft and drives the submission.
#[component]
pub fn ReviewContentContainer(#[prop(into)] id: String) -> impl IntoView {
    let draft = create_rw_signal(ReviewDraft::default());
    let errors = create_rw_signal(ValidationErrors::default());
    let owner = Owner::current();
    let navigate = use_navigate();

    let handle_submit = move |_| {
        let snapshot = draft.get_untracked();
        errors.set(ValidationErrors::default());
        let id = id.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let gateway = HttpReviewGateway::new(use_session());
            let outcome = submit_review(&snapshot, &id, &gateway, &JpegCompressor::default()).await;
            log!("[SUBMIT] Outcome for perfume {}: {:?}", id, outcome);
            match outcome {
                SubmitOutcome::Invalid(found) => {
                    with_owner_safe(owner, "review validation", || errors.set(found));
                }
                SubmitOutcome::Navigate(path) => navigate_with_refresh(&path),
                SubmitOutcome::RedirectToLogin => {
                    with_owner_safe(owner, "login redirect", || {
                        navigate(LOGIN_REDIRECT, NavigateOptions::default())
                    });
                }
                SubmitOutcome::Aborted => {}
            }
        });
    };

    view! {
        <StarRating on_rating_change=Callback::new(move |rating| draft.update(|d| d.rating = rating)) />
        <Show when=move || errors.get().rating_missing>
            <p class="error">{ "별점을 선택해 주세요" }</p>
        </Show>
        <hr />
        <OnelineComment on_change=Callback::new(move |comment| draft.update(|d| d.comment = comment)) />
        <Show when=move || errors.get().comment_empty>
            <p class="error">{ "한 줄 평을 입력해 주세요" }</p>
        </Show>
        <hr />
        <KeywordReview
            selected_season=Signal::derive(move || draft.with(|d| d.season))
            selected_persistence=Signal::derive(move || draft.with(|d| d.longevity))
            selected_intensity=Signal::derive(move || draft.with(|d| d.intensity))
            on_season_select=Callback::new(move |season| draft.update(|d| d.season = Some(season)))
            on_persistence_select=Callback::new(move |longevity| draft.update(|d| d.longevity = Some(longevity)))
            on_intensity_select=Callback::new(move |intensity| draft.update(|d| d.intensity = Some(intensity)))
        />
        <StylePicker on_return=Callback::new(move |styles| draft.update(|d| d.styles = styles)) />
        <Show when=move || errors.get().keywords_incomplete>
            <p class="error">{ "키워드를 모두 선택해 주세요" }</p>
        </Show>
        <hr />
        <TextReview on_change=Callback::new(move |text| draft.update(|d| d.text_review = text)) />
        <hr />
        <PhotoInput on_change=Callback::new(move |photos| draft.update(|d| d.set_photos(photos))) />
        <div class="submit">
            <button type="button" on:click=handle_submit>{ "올리기" }</button>
        </div>
    }
}

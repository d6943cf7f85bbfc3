use leptos::Owner;

/// Runs `f` under an owner captured before an `.await`.
/// The component may have been unmounted while the request was in flight; then this logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(result) => Some(result),
        Err(e) => {
            leptos::logging::log!("[OWNER] Owner gone before {}: {:?}", log_context, e);
            None
        }
    }
}

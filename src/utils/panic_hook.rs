use std::panic;
use leptos::logging::log;

/// Installs `console_error_panic_hook` and adds context for Leptos owner disposal panics,
/// which show up when a review request finishes after the form was unmounted.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. The review form was left while a submission was still running");
            log!("[PANIC] 2. A photo finished reading after the page changed");
            log!("[PANIC] Wrap late signal updates in utils::leptos_owner::with_owner_safe");
        }
    }));
}

/// Call once from the hydrate entry point.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}

use leptos::Owner;

/// Runs `f` under an owner captured while the component was mounted.
/// Timer callbacks fire outside any reactive scope, so they carry the owner
/// with them. Returns None once it has been disposed.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    if let Some(owner) = owner {
        leptos::try_with_owner(owner, f).ok()
    } else {
        leptos::logging::log!("[OWNER] No Leptos owner captured for: {}", log_context);
        None
    }
}

use crate::form::DraftForm;
use crate::models::review::Rating;
use leptos::*;

/// Five-star selector bound to the draft rating.
/// Hovering previews a value; leaving the row falls back to the committed one.
#[component]
pub fn StarRating(draft: RwSignal<DraftForm>) -> impl IntoView {
    view! {
        <div class="star-rating-group">
            <div class="star-rating" on:mouseleave=move |_| draft.update(|d| d.hover_leave())>
                {Rating::all().map(|star| view! {
                    <span
                        class="star"
                        data-value=star.value().to_string()
                        class:active=move || draft.with(|d| d.star_visual(star).active)
                        class:hover=move || draft.with(|d| d.star_visual(star).preview)
                        on:click=move |_| draft.update(|d| d.select(star))
                        on:mouseenter=move |_| draft.update(|d| d.hover_enter(star))
                    >
                        "★"
                    </span>
                }).collect_view()}
            </div>
            <p class="rating-text">{move || draft.with(|d| d.rating_label())}</p>
        </div>
    }
}

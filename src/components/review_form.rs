use crate::components::star_rating::StarRating;
use crate::form::DraftForm;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn ReviewForm(draft: RwSignal<DraftForm>, on_submit: Callback<()>) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="rating-form" on:submit=handle_submit>
            <h2>{ "Rate this project" }</h2>
            <StarRating draft=draft />
            <input
                type="text"
                placeholder="Name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |e| draft.update(|d| d.name = event_target_value(&e))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |e| draft.update(|d| d.email = event_target_value(&e))
            />
            <textarea
                placeholder="Tell us what you think"
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |e| draft.update(|d| d.comment = event_target_value(&e))
            />
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}

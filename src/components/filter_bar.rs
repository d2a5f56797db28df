use crate::pipeline::Filter;
use leptos::*;

#[component]
pub fn FilterBar(current: Signal<Filter>, on_select: Callback<Filter>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {Filter::choices().into_iter().map(|filter| {
                let label = match filter {
                    Filter::All => "All".to_string(),
                    Filter::Only(rating) => format!("{} ★", rating),
                };
                view! {
                    <button
                        class="filter-btn"
                        data-filter=filter.to_string()
                        class:active=move || current.get() == filter
                        on:click=move |_| on_select.call(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

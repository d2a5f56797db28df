use crate::models::review::Rating;
use crate::stats::Statistics;
use leptos::*;

#[component]
pub fn StatsPanel(stats: Signal<Statistics>) -> impl IntoView {
    view! {
        <div class="stats-panel">
            <div class="stats-summary">
                <span class="avg-rating">{move || stats.with(|s| s.average_label())}</span>
                <span class="total-reviews">{move || stats.with(|s| s.total.to_string())}</span>
                <span>{ " reviews" }</span>
            </div>
            // five stars first
            {Rating::all().rev().map(|rating| view! {
                <div class="rating-bar">
                    <span class="rating-bar-label">{format!("{} ★", rating)}</span>
                    <div class="progress">
                        <div
                            class="progress-fill"
                            style:width=move || stats.with(|s| s.per_rating(rating).width_style())
                        ></div>
                    </div>
                    <span class="rating-bar-count">
                        {move || stats.with(|s| s.per_rating(rating).count.to_string())}
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}

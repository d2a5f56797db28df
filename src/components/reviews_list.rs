use crate::models::review::ReviewId;
use crate::pipeline::{ListBody, ReviewCard, ReviewList};
use leptos::*;

/// One review. Text fields go in as text nodes, which Leptos escapes.
#[component]
pub fn ReviewCardView(card: ReviewCard) -> impl IntoView {
    view! {
        <div class="review-card">
            <div class="review-header">
                <div class="review-info">
                    <h3>{card.name}</h3>
                    <p>{card.email}</p>
                </div>
                <div>
                    <div class="review-rating">{card.stars}</div>
                    <div class="review-date">{card.date}</div>
                </div>
            </div>
            <div class="review-comment">{card.comment}</div>
        </div>
    }
}

#[component]
pub fn ReviewsList(list: Signal<ReviewList>, on_delete: Callback<ReviewId>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h2>
                { "Reviews " }
                <span class="review-count">{move || list.with(|l| l.count_label())}</span>
            </h2>
            <div class="reviews-container">
                {move || match list.get().body {
                    ListBody::Placeholder(message) => view! {
                        <p class="no-reviews">{message}</p>
                    }.into_view(),
                    ListBody::Cards(cards) => cards.into_iter().map(|card| {
                        let id = card.id;
                        view! {
                            <div class="review-entry">
                                <ReviewCardView card=card />
                                <button class="delete-btn" on:click=move |_| on_delete.call(id)>
                                    { "Delete" }
                                </button>
                            </div>
                        }
                    }).collect_view(),
                }}
            </div>
        </div>
    }
}

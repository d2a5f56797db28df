/// Main application entry point for the review widget.
/// Wires the form, filter bar, statistics panel and list to one `ReviewBoard`.
use crate::board::ReviewBoard;
use crate::components::{
    filter_bar::FilterBar, review_form::ReviewForm, reviews_list::ReviewsList,
    stats_panel::StatsPanel, toast::ToastStack,
};
use crate::config::WidgetConfig;
use crate::form::DraftForm;
use crate::models::review::ReviewId;
use crate::notice::Toast;
use crate::pipeline::Filter;
use crate::store::{default_slot, MemoryStorage, StorageSlot};
use crate::utils::leptos_owner::with_owner_safe;
use chrono::Utc;
use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

type Board = ReviewBoard<Box<dyn StorageSlot>>;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/star-reviews.css"/>
        <Title text="Project Ratings"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <ReviewWidget/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ReviewWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_else(WidgetConfig::from_build_env);
    let toast_duration = config.toast_duration_ms;

    // Server render and first client pass see an empty board; the browser
    // slot is attached once mounted so hydration matches.
    let empty: Box<dyn StorageSlot> = Box::new(MemoryStorage::new());
    let board = create_rw_signal::<Board>(ReviewBoard::new(empty, &config));
    create_effect(move |_| {
        log!("[APP] Attaching review storage '{}'", config.storage_key);
        board.set(ReviewBoard::new(default_slot(), &config));
    });

    let draft = create_rw_signal(DraftForm::new());
    let (toasts, set_toasts) = create_signal(Vec::<(u64, Toast)>::new());
    let next_toast = store_value(0u64);
    let owner = Owner::current();

    let show_toast = move |toast: Toast| {
        let id = next_toast.get_value();
        next_toast.set_value(id + 1);
        set_toasts.update(|list| list.push((id, toast)));
        Timeout::new(toast_duration, move || {
            with_owner_safe(owner, "toast timeout", || {
                set_toasts.update(|list| list.retain(|(t, _)| *t != id))
            });
        })
        .forget();
    };

    let on_submit = Callback::new(move |_: ()| {
        let mut current = draft.get_untracked();
        if let Some(toast) = board.try_update(|b| b.submit(&mut current, Utc::now())) {
            show_toast(toast);
        }
        draft.set(current);
    });

    let on_delete = Callback::new(move |id: ReviewId| {
        let confirm = |prompt: &str| {
            gloo_utils::window()
                .confirm_with_message(prompt)
                .unwrap_or(false)
        };
        if let Some(toast) = board.try_update(|b| b.delete(id, confirm)).flatten() {
            show_toast(toast);
        }
    });

    let on_filter = Callback::new(move |filter: Filter| board.update(|b| b.set_filter(filter)));

    let filter = Signal::derive(move || board.with(|b| b.filter()));
    let list = Signal::derive(move || board.with(|b| b.list()));
    let stats = Signal::derive(move || board.with(|b| b.statistics()));

    view! {
        <div class="review-widget">
            <h1>{ "Project Ratings" }</h1>
            <StatsPanel stats=stats />
            <ReviewForm draft=draft on_submit=on_submit />
            <FilterBar current=filter on_select=on_filter />
            <ReviewsList list=list on_delete=on_delete />
            <ToastStack toasts=toasts />
        </div>
    }
}

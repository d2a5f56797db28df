/// Application state behind the widget: the review store, the active filter
/// and the id generator. UI handlers go through here and get back the
/// notification to show.
use crate::config::WidgetConfig;
use crate::form::{DraftForm, IdGenerator};
use crate::models::review::ReviewId;
use crate::notice::Toast;
use crate::pipeline::{build_list_with_placeholder, Filter, ReviewList};
use crate::stats::Statistics;
use crate::store::{ReviewStore, StorageSlot};
use chrono::{DateTime, Utc};
use leptos::logging::{error, log};

pub const SUBMITTED_MESSAGE: &str = "Thank you for your feedback! 🎉";
pub const DELETED_MESSAGE: &str = "Review deleted successfully";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save your review, please try again";
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete the review";
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this review?";

pub struct ReviewBoard<S> {
    store: ReviewStore<S>,
    filter: Filter,
    ids: IdGenerator,
    empty_message: String,
}

impl<S: StorageSlot> ReviewBoard<S> {
    pub fn new(slot: S, config: &WidgetConfig) -> Self {
        let store = ReviewStore::new(slot, config.storage_key.clone());
        let ids = IdGenerator::seeded(&store.load());
        Self {
            store,
            filter: Filter::All,
            ids,
            empty_message: config.empty_message.clone(),
        }
    }

    pub fn store(&self) -> &ReviewStore<S> {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        log!("[BOARD] Filter set to {}", filter);
        self.filter = filter;
    }

    pub fn list(&self) -> ReviewList {
        build_list_with_placeholder(&self.store.load(), self.filter, &self.empty_message)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.store.load())
    }

    /// Validates and stores the draft. On a failed write the draft is put
    /// back so nothing the user typed is lost.
    pub fn submit(&mut self, draft: &mut DraftForm, now: DateTime<Utc>) -> Toast {
        let snapshot = draft.clone();
        let review = match draft.submit(self.ids.next_id(now), now) {
            Ok(review) => review,
            Err(err) => return Toast::error(err.to_string()),
        };

        match self.store.append(review) {
            Ok(()) => Toast::success(SUBMITTED_MESSAGE),
            Err(err) => {
                error!("[BOARD] Failed to save review: {}", err);
                *draft = snapshot;
                Toast::error(SAVE_FAILED_MESSAGE)
            }
        }
    }

    /// Deletes after `confirm` agrees. A declined confirmation touches nothing.
    pub fn delete(&mut self, id: ReviewId, confirm: impl FnOnce(&str) -> bool) -> Option<Toast> {
        if !confirm(CONFIRM_DELETE_PROMPT) {
            log!("[BOARD] Deletion of {} cancelled", id);
            return None;
        }

        Some(match self.store.remove(id) {
            Ok(()) => Toast::success(DELETED_MESSAGE),
            Err(err) => {
                error!("[BOARD] Failed to delete review {}: {}", id, err);
                Toast::error(DELETE_FAILED_MESSAGE)
            }
        })
    }
}

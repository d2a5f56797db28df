use crate::models::review::{Rating, Review, ReviewId};
use chrono::{DateTime, Utc};
use leptos::logging::{log, warn};

pub const NO_RATING_LABEL: &str = "Select a rating";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please select a rating")]
    MissingRating,
}

/// How one star of the selector is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarVisual {
    /// Covered by the committed rating.
    pub active: bool,
    /// Covered by the star under the pointer.
    pub preview: bool,
}

/// The not-yet-submitted review.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftForm {
    rating: Option<Rating>,
    hover: Option<Rating>,
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn hovered(&self) -> Option<Rating> {
        self.hover
    }

    pub fn select(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    pub fn hover_enter(&mut self, rating: Rating) {
        self.hover = Some(rating);
    }

    pub fn hover_leave(&mut self) {
        self.hover = None;
    }

    pub fn star_visual(&self, star: Rating) -> StarVisual {
        StarVisual {
            active: self.rating.is_some_and(|r| star <= r),
            preview: self.hover.is_some_and(|h| star <= h),
        }
    }

    pub fn rating_label(&self) -> &'static str {
        self.rating.map_or(NO_RATING_LABEL, Rating::label)
    }

    /// Turns the draft into a review and clears it.
    /// Without a rating the draft is left as it was.
    pub fn submit(&mut self, id: ReviewId, now: DateTime<Utc>) -> Result<Review, FormError> {
        let rating = self.rating.ok_or(FormError::MissingRating)?;
        let review = Review {
            id,
            rating,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            comment: self.comment.trim().to_string(),
            date: now,
        };
        log!("[FORM] Built review {} with rating {}", review.id, rating);
        self.reset();
        Ok(review)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Hands out review ids that never repeat within a store.
///
/// Ids stay millisecond-timestamp shaped, but two reviews created in the same
/// millisecond get consecutive values instead of colliding.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: ReviewId,
}

impl IdGenerator {
    /// Starts above every id already in use.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a Review>) -> Self {
        let last = existing.into_iter().map(|r| r.id).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> ReviewId {
        let now_ms = now.timestamp_millis();
        self.last = match self.last.checked_add(1) {
            Some(after_last) => now_ms.max(after_last),
            None => {
                warn!("[FORM] Stored id {} is at the limit, restarting from the clock", self.last);
                now_ms
            }
        };
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn hover_previews_without_committing() {
        let mut draft = DraftForm::new();
        draft.hover_enter(rating(3));
        assert_eq!(draft.rating(), None);
        assert!(draft.star_visual(rating(3)).preview);
        assert!(!draft.star_visual(rating(4)).preview);
        assert!(!draft.star_visual(rating(1)).active);

        draft.hover_leave();
        assert!(Rating::all().all(|s| draft.star_visual(s) == StarVisual::default()));
    }

    #[test]
    fn leaving_reverts_to_committed_value() {
        let mut draft = DraftForm::new();
        draft.select(rating(2));
        draft.hover_enter(rating(5));
        assert_eq!(draft.rating(), Some(rating(2)));
        draft.hover_leave();

        let active: Vec<bool> = Rating::all().map(|s| draft.star_visual(s).active).collect();
        assert_eq!(active, vec![true, true, false, false, false]);
        assert_eq!(draft.rating_label(), "Fair 😐");
    }

    #[test]
    fn submit_without_rating_keeps_draft() {
        let mut draft = DraftForm::new();
        draft.name = "Ann".into();
        assert_eq!(draft.submit(1, now()), Err(FormError::MissingRating));
        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.rating_label(), NO_RATING_LABEL);
    }

    #[test]
    fn submit_trims_and_resets() {
        let mut draft = DraftForm::new();
        draft.select(rating(4));
        draft.name = "  Ann  ".into();
        draft.email = " ann@example.com\n".into();
        draft.comment = "\tGreat work ".into();

        let review = draft.submit(42, now()).unwrap();
        assert_eq!(review.id, 42);
        assert_eq!(review.rating, rating(4));
        assert_eq!(review.name, "Ann");
        assert_eq!(review.email, "ann@example.com");
        assert_eq!(review.comment, "Great work");
        assert_eq!(review.date, now());
        assert_eq!(draft, DraftForm::default());
    }

    #[test]
    fn ids_never_repeat_within_a_millisecond() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id(now());
        let b = ids.next_id(now());
        assert_eq!(a, now().timestamp_millis());
        assert_eq!(b, a + 1);
    }

    #[test]
    fn seeded_generator_skips_stored_ids() {
        let stored = Review {
            id: now().timestamp_millis() + 10,
            rating: rating(1),
            name: String::new(),
            email: String::new(),
            comment: String::new(),
            date: now(),
        };
        let mut ids = IdGenerator::seeded([&stored]);
        assert_eq!(ids.next_id(now()), stored.id + 1);
    }

    #[test]
    fn generator_seeded_at_max_id_does_not_overflow() {
        let stored = Review {
            id: i64::MAX,
            rating: rating(5),
            name: String::new(),
            email: String::new(),
            comment: String::new(),
            date: now(),
        };
        let mut ids = IdGenerator::seeded([&stored]);
        let first = ids.next_id(now());
        assert_eq!(first, now().timestamp_millis());
        assert_ne!(first, stored.id);
        assert_eq!(ids.next_id(now()), first + 1);
    }
}

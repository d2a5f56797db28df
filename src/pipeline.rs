//! Filtering, ordering and rendering of the review list.
//!
//! Everything here is a pure function of the review collection and the
//! current [`Filter`]; nothing is cached between calls.

use crate::config::DEFAULT_EMPTY_MESSAGE;
use crate::models::review::{Rating, Review, ReviewId};
use std::fmt;
use std::str::FromStr;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Which reviews the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Rating),
}

impl Filter {
    /// The filter bar entries: "all" followed by five down to one star.
    pub fn choices() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(Rating::all().rev().map(Filter::Only))
            .collect()
    }

    pub fn matches(&self, review: &Review) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(rating) => review.rating == *rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}'")]
pub struct FilterParseError(pub String);

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Filter::All);
        }
        s.parse::<i64>()
            .ok()
            .and_then(|value| Rating::try_from(value).ok())
            .map(Filter::Only)
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Only(rating) => write!(f, "{}", rating),
        }
    }
}

/// Keeps the reviews matching `filter`, newest first.
pub fn select(reviews: &[Review], filter: Filter) -> Vec<Review> {
    let mut selected: Vec<Review> = reviews
        .iter()
        .filter(|review| filter.matches(review))
        .cloned()
        .collect();
    // sort_by is stable, so equal dates keep storage order
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn star_string(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let mut stars = String::new();
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(usize::from(Rating::MAX) - filled));
    stars
}

/// Display form of one review. Text fields hold the plain text; they are
/// escaped where they meet markup, in `to_markup` or as view text nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: ReviewId,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub date: String,
    pub stars: String,
}

impl ReviewCard {
    pub fn from_review(review: &Review) -> Self {
        Self {
            id: review.id,
            name: review.name.clone(),
            email: review.email.clone(),
            comment: review.comment.clone(),
            date: review.date.format("%b %-d, %Y").to_string(),
            stars: star_string(review.rating),
        }
    }

    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="review-card">
    <div class="review-header">
        <div class="review-info">
            <h3>{name}</h3>
            <p>{email}</p>
        </div>
        <div>
            <div class="review-rating">{stars}</div>
            <div class="review-date">{date}</div>
        </div>
    </div>
    <div class="review-comment">{comment}</div>
</div>"#,
            name = escape_html(&self.name),
            email = escape_html(&self.email),
            stars = self.stars,
            date = self.date,
            comment = escape_html(&self.comment),
        )
    }
}

pub fn render(reviews: &[Review]) -> Vec<ReviewCard> {
    reviews.iter().map(ReviewCard::from_review).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Cards(Vec<ReviewCard>),
    Placeholder(String),
}

/// What the review list shows for one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewList {
    /// Size of the whole collection, whatever the filter.
    pub total: usize,
    pub body: ListBody,
}

impl ReviewList {
    pub fn count_label(&self) -> String {
        format!("({})", self.total)
    }
}

pub fn build_list(reviews: &[Review], filter: Filter) -> ReviewList {
    build_list_with_placeholder(reviews, filter, DEFAULT_EMPTY_MESSAGE)
}

pub fn build_list_with_placeholder(
    reviews: &[Review],
    filter: Filter,
    placeholder: &str,
) -> ReviewList {
    let selected = select(reviews, filter);
    let body = if selected.is_empty() {
        ListBody::Placeholder(placeholder.to_string())
    } else {
        ListBody::Cards(render(&selected))
    };
    ReviewList {
        total: reviews.len(),
        body,
    }
}

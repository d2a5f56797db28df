use crate::models::review::{Rating, Review};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingBreakdown {
    pub count: usize,
    pub percentage: f64,
}

impl RatingBreakdown {
    /// CSS width for the progress bar of this rating.
    pub fn width_style(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// Aggregates derived from the full review collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    /// Mean rating rounded to one decimal, `0.0` when there are no reviews.
    pub average: f64,
    pub total: usize,
    per_rating: [RatingBreakdown; 5],
}

impl Statistics {
    pub fn compute(reviews: &[Review]) -> Self {
        let total = reviews.len();
        if total == 0 {
            return Self::default();
        }

        let mut counts = [0usize; 5];
        let mut sum = 0u64;
        for review in reviews {
            counts[usize::from(review.rating.value() - 1)] += 1;
            sum += u64::from(review.rating.value());
        }

        let mean = sum as f64 / total as f64;
        let per_rating = counts.map(|count| RatingBreakdown {
            count,
            percentage: count as f64 / total as f64 * 100.0,
        });

        Self {
            average: (mean * 10.0).round() / 10.0,
            total,
            per_rating,
        }
    }

    pub fn per_rating(&self, rating: Rating) -> RatingBreakdown {
        self.per_rating[usize::from(rating.value() - 1)]
    }

    /// Breakdown rows from five stars down to one, as the panel lists them.
    pub fn rows(&self) -> impl Iterator<Item = (Rating, RatingBreakdown)> + '_ {
        Rating::all().rev().map(move |rating| (rating, self.per_rating(rating)))
    }

    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::log_debug;
use crate::modules::catalog::domain::{entities::Review, repositories::ReviewRepository};
use crate::shared::errors::AppResult;

/// Computes derived ratings from the reviews currently in the store.
///
/// Nothing is cached: every call reads the latest committed reviews.
pub struct RatingAggregator {
    reviews: Arc<dyn ReviewRepository>,
}

impl RatingAggregator {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    pub async fn average_rating(&self, creature_id: i32) -> AppResult<Decimal> {
        let reviews = self.reviews.reviews_of_creature(creature_id).await?;
        let average = Self::mean(&reviews);

        log_debug!(
            "Average rating for creature {} over {} reviews: {}",
            creature_id,
            reviews.len(),
            average
        );
        Ok(average)
    }

    /// Exact decimal mean of the ratings; zero for an empty slice.
    pub fn mean(reviews: &[Review]) -> Decimal {
        if reviews.is_empty() {
            return Decimal::ZERO;
        }

        let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
        Decimal::from(sum) / Decimal::from(reviews.len())
    }
}

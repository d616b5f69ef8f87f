use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregates derived from a store's reviews on every read
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Arithmetic mean of ratings; 0 when there are no reviews
    pub average_rating: f64,
    pub review_count: usize,
    pub latest_review_date: Option<DateTime<Utc>>,
}

impl ReviewStats {
    /// Compute aggregates from `(rating, created_at)` pairs in any order
    pub fn compute<I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = (i64, DateTime<Utc>)>,
    {
        let mut sum: i64 = 0;
        let mut count: usize = 0;
        let mut latest: Option<DateTime<Utc>> = None;

        for (rating, created_at) in reviews {
            sum += rating;
            count += 1;
            latest = Some(match latest {
                Some(current) if current >= created_at => current,
                _ => created_at,
            });
        }

        let average_rating = if count > 0 {
            sum as f64 / count as f64
        } else {
            0.0
        };

        Self {
            average_rating,
            review_count: count,
            latest_review_date: latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_compute_average_and_count() {
        let stats = ReviewStats::compute([(5, at(1)), (3, at(2)), (4, at(3))]);
        assert_eq!(stats.average_rating, 4.0);
        assert_eq!(stats.review_count, 3);
    }

    #[test]
    fn test_compute_empty() {
        let stats = ReviewStats::compute(std::iter::empty());
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.review_count, 0);
        assert!(stats.latest_review_date.is_none());
        assert_eq!(stats, ReviewStats::default());
    }

    #[test]
    fn test_latest_review_date_ignores_order() {
        let stats = ReviewStats::compute([(4, at(10)), (5, at(22)), (2, at(15))]);
        assert_eq!(stats.latest_review_date, Some(at(22)));
    }

    #[test]
    fn test_non_integral_average() {
        let stats = ReviewStats::compute([(5, at(1)), (4, at(2))]);
        assert_eq!(stats.average_rating, 4.5);
    }
}

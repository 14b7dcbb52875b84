//! Spending query: total cost of one service for one user over a period.

use crate::domain::foundation::{UserId, YearMonth};

use super::SubscriptionDetails;

/// Filter for the total-price aggregation.
///
/// A subscription contributes when it belongs to `user_id`, names
/// `service_name` exactly, starts no earlier than `from`, and ends no later
/// than `to`. Subscriptions without an end month never match: the end
/// comparison has nothing to compare against. Each match contributes
/// `price * months_active` over its own start..=end range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingQuery {
    pub user_id: UserId,
    pub service_name: String,
    pub from: YearMonth,
    pub to: YearMonth,
}

impl SpendingQuery {
    /// Whether a subscription falls inside this query.
    pub fn matches(&self, details: &SubscriptionDetails) -> bool {
        details.user_id() == &self.user_id
            && details.service_name() == self.service_name
            && details.start() >= self.from
            && details.end().is_some_and(|end| end <= self.to)
    }

    /// Sums the billed amount of every matching subscription.
    pub fn total<'a, I>(&self, subscriptions: I) -> i64
    where
        I: IntoIterator<Item = &'a SubscriptionDetails>,
    {
        subscriptions
            .into_iter()
            .filter(|details| self.matches(details))
            .filter_map(SubscriptionDetails::billed_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(raw: &str) -> YearMonth {
        YearMonth::parse("test", raw).unwrap()
    }

    fn details(service: &str, user: &str, price: i32, start: &str, end: Option<&str>) -> SubscriptionDetails {
        SubscriptionDetails::new(
            service.to_string(),
            price,
            UserId::new(user).unwrap(),
            month(start),
            end.map(month),
        )
        .unwrap()
    }

    fn query_2025() -> SpendingQuery {
        SpendingQuery {
            user_id: UserId::new("u1").unwrap(),
            service_name: "Netflix".to_string(),
            from: month("2025-01"),
            to: month("2025-12"),
        }
    }

    #[test]
    fn matching_row_contributes_price_times_inclusive_months() {
        let rows = [details("Netflix", "u1", 100, "2025-03", Some("2025-05"))];
        assert_eq!(query_2025().total(&rows), 300);
    }

    #[test]
    fn open_ended_rows_never_contribute() {
        let rows = [details("Netflix", "u1", 100, "2025-03", None)];
        assert!(!query_2025().matches(&rows[0]));
        assert_eq!(query_2025().total(&rows), 0);
    }

    #[test]
    fn filters_on_user_and_service_exactly() {
        let rows = [
            details("Netflix", "u2", 100, "2025-03", Some("2025-05")),
            details("netflix", "u1", 100, "2025-03", Some("2025-05")),
            details("Netflix Premium", "u1", 100, "2025-03", Some("2025-05")),
        ];
        assert_eq!(query_2025().total(&rows), 0);
    }

    #[test]
    fn rows_straddling_the_period_are_excluded() {
        let rows = [
            details("Netflix", "u1", 100, "2024-12", Some("2025-02")),
            details("Netflix", "u1", 100, "2025-11", Some("2026-01")),
        ];
        assert_eq!(query_2025().total(&rows), 0);
    }

    #[test]
    fn period_boundaries_are_inclusive() {
        let rows = [details("Netflix", "u1", 10, "2025-01", Some("2025-12"))];
        assert_eq!(query_2025().total(&rows), 120);
    }

    #[test]
    fn sums_across_rows() {
        let rows = [
            details("Netflix", "u1", 100, "2025-03", Some("2025-05")),
            details("Netflix", "u1", 50, "2025-07", Some("2025-08")),
        ];
        assert_eq!(query_2025().total(&rows), 400);
    }

    #[test]
    fn empty_input_totals_zero() {
        let rows: [SubscriptionDetails; 0] = [];
        assert_eq!(query_2025().total(&rows), 0);
    }
}

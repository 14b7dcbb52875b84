//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Works against a pre-existing `subscriptions` table:
//!
//! ```sql
//! CREATE TABLE subscriptions (
//!     id           SERIAL PRIMARY KEY,
//!     service_name TEXT    NOT NULL,
//!     price        INTEGER NOT NULL,
//!     user_id      TEXT    NOT NULL,
//!     start_date   DATE    NOT NULL,
//!     end_date     DATE
//! );
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId, YearMonth};
use crate::domain::subscription::{SpendingQuery, Subscription, SubscriptionDetails};
use crate::ports::SubscriptionRepository;

/// PostgreSQL implementation of SubscriptionRepository.
#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn create(&self, details: &SubscriptionDetails) -> Result<SubscriptionId, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO subscriptions (service_name, price, user_id, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(details.service_name())
        .bind(details.price())
        .bind(details.user_id().as_str())
        .bind(details.start().first_day())
        .bind(details.end().map(|end| end.first_day()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("insert subscription", e))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| database_error("read generated id", e))?;

        Ok(SubscriptionId::new(id))
    }

    async fn find_all(&self) -> Result<Vec<Subscription>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("fetch subscriptions", e))?;

        rows.into_iter().map(row_to_subscription).collect()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Subscription>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("fetch subscriptions by user", e))?;

        rows.into_iter().map(row_to_subscription).collect()
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let details = subscription.details();
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                service_name = $1,
                price = $2,
                user_id = $3,
                start_date = $4,
                end_date = $5
            WHERE id = $6
            "#,
        )
        .bind(details.service_name())
        .bind(details.price())
        .bind(details.user_id().as_str())
        .bind(details.start().first_day())
        .bind(details.end().map(|end| end.first_day()))
        .bind(subscription.id().as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("update subscription", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("No rows updated for subscription {}", subscription.id()),
            )
            .with_detail("subscription_id", subscription.id().to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete subscription", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(subscription_id = %id, "delete matched no rows");
        }

        Ok(())
    }

    async fn total_price(&self, query: &SpendingQuery) -> Result<i64, DomainError> {
        // Rows with a NULL end_date fail `end_date <= $4` and never contribute.
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(price * (DATE_PART('year', age(end_date, start_date)) * 12
                                         + DATE_PART('month', age(end_date, start_date)) + 1)), 0)::BIGINT
            FROM subscriptions
            WHERE user_id = $1
              AND service_name = $2
              AND start_date >= $3
              AND end_date <= $4
            "#,
        )
        .bind(query.user_id.as_str())
        .bind(query.service_name.as_str())
        .bind(query.from.first_day())
        .bind(query.to.first_day())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("calculate total price", e))?;

        Ok(total)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn database_error(action: &str, error: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, error),
    )
}

fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    database_error(&format!("get {}", column), error)
}

fn row_to_subscription(row: sqlx::postgres::PgRow) -> Result<Subscription, DomainError> {
    let id: i32 = row.try_get("id").map_err(|e| column_error("id", e))?;
    let service_name: String = row
        .try_get("service_name")
        .map_err(|e| column_error("service_name", e))?;
    let price: i32 = row.try_get("price").map_err(|e| column_error("price", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let start_date: NaiveDate = row
        .try_get("start_date")
        .map_err(|e| column_error("start_date", e))?;
    let end_date: Option<NaiveDate> = row
        .try_get("end_date")
        .map_err(|e| column_error("end_date", e))?;

    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid user_id in row {}: {}", id, e),
        )
    })?;

    Ok(Subscription::new(
        SubscriptionId::new(id),
        SubscriptionDetails::reconstitute(
            service_name,
            price,
            user_id,
            YearMonth::from_date(start_date),
            end_date.map(YearMonth::from_date),
        ),
    ))
}

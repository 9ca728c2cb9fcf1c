use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

use crate::domain::customer::{
    Customer, CustomerId, CustomerPayload, CustomerStore, Email, StoreResult,
};

// ============================================================================
// PostgreSQL Customer Store
// ============================================================================
//
// Reads go straight to the pool. Every write runs in its own transaction:
// `commit()` on success, rollback when the guard drops on any `?` exit.
// The pooled connection is released in both cases.
//
// ============================================================================

pub const DEFAULT_TABLE: &str = "customers";

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(CustomerId::new(row.id), row.name, Email::new(row.email))
    }
}

#[derive(Debug, FromRow)]
struct UpsertRow {
    id: i64,
    name: String,
    email: String,
    inserted: bool,
}

/// SQL statements rendered once for the configured table
struct Statements {
    select_all: String,
    select_by_id: String,
    select_by_email: String,
    insert: String,
    upsert: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            select_all: format!("SELECT id, name, email FROM {table} ORDER BY id"),
            select_by_id: format!("SELECT id, name, email FROM {table} WHERE id = $1"),
            select_by_email: format!(
                "SELECT id, name, email FROM {table} WHERE email = $1 ORDER BY id LIMIT 1"
            ),
            insert: format!(
                "INSERT INTO {table} (name, email) VALUES ($1, $2) RETURNING id, name, email"
            ),
            upsert: format!(
                "INSERT INTO {table} (id, name, email) VALUES ($1, $2, $3)
                 ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email
                 RETURNING id, name, email, (xmax = 0) AS inserted"
            ),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

pub struct PgCustomerStore {
    pool: PgPool,
    table: String,
    sql: Statements,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_table(pool, DEFAULT_TABLE)
    }

    /// Use a different table. The name is interpolated into SQL and must
    /// come from trusted configuration, never from a request.
    pub fn with_table(pool: PgPool, table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            sql: Statements::for_table(&table),
            pool,
            table,
        }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded customers");
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&self.sql.select_by_id)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(&self.sql.select_by_email)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn save(&self, customer: CustomerPayload) -> StoreResult<Customer> {
        let mut tx = self.pool.begin().await?;

        let saved = match customer.id {
            None => {
                let row = sqlx::query_as::<_, CustomerRow>(&self.sql.insert)
                    .bind(&customer.name)
                    .bind(customer.email.as_str())
                    .fetch_one(&mut *tx)
                    .await?;
                Customer::from(row)
            }
            Some(id) => {
                let row = sqlx::query_as::<_, UpsertRow>(&self.sql.upsert)
                    .bind(id.value())
                    .bind(&customer.name)
                    .bind(customer.email.as_str())
                    .fetch_one(&mut *tx)
                    .await?;

                // An explicit id bypassed the sequence; move it past that id
                if row.inserted {
                    sqlx::query(
                        "SELECT setval(pg_get_serial_sequence($1, 'id'), \
                         GREATEST(nextval(pg_get_serial_sequence($1, 'id')), $2))",
                    )
                    .bind(&self.table)
                    .bind(row.id)
                    .execute(&mut *tx)
                    .await?;
                }

                Customer::new(CustomerId::new(row.id), row.name, Email::new(row.email))
            }
        };

        tx.commit().await?;

        tracing::debug!(
            customer_id = %saved.id,
            table = %self.table,
            "Persisted customer"
        );

        Ok(saved)
    }

    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(&self.sql.delete)
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            customer_id = %id,
            rows_affected = result.rows_affected(),
            "Deleted customer row"
        );

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
//
// Statement rendering is checked everywhere. The round trip against a real
// server only runs when CUSTOMER_SERVICE_TEST_DATABASE_URL points at one.
//
// ============================================================================

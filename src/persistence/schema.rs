use sqlx::postgres::PgPool;

// ============================================================================
// Schema Bootstrap
// ============================================================================
//
// Creates the customer table when it is missing. Seeding is left to
// fixtures; this never touches existing rows.
//
// ============================================================================

pub async fn ensure_schema(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL
        )"
    ))
    .execute(pool)
    .await?;

    tracing::info!(table = %table, "Customer table ready");
    Ok(())
}

#[cfg(test)]
pub async fn drop_table(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(pool)
        .await?;
    Ok(())
}

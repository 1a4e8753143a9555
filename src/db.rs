use std::str::FromStr;

use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::seed::seed_if_empty;

pub type DbPool = SqlitePool;
pub type OrmConn = DatabaseConnection;

/// Columns added to `orders` after the first release. Older database files get them on startup.
const ADDITIVE_COLUMNS: [(&str, &str, &str); 2] = [
    ("orders", "customer_phone", "TEXT"),
    ("orders", "payment_method", "TEXT"),
];

/// Handle to the catalog/order database. Cheap to clone; both halves share one pool.
#[derive(Clone)]
pub struct Store {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl Store {
    /// Open (creating if needed) the SQLite database at `database_url`.
    ///
    /// Foreign keys are left unenforced: orders may outlive the product they reference.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = if is_in_memory(database_url) {
            // Every connection to `:memory:` is a separate database, so keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        let orm = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone());
        Ok(Self { pool, orm })
    }

    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Schema setup, additive column reconciliation and seeding, in that order.
/// Safe to run on every start.
pub async fn bootstrap(store: &Store) -> Result<()> {
    run_migrations(&store.pool).await?;
    for (table, column, decl) in ADDITIVE_COLUMNS {
        ensure_column(&store.pool, table, column, decl).await?;
    }
    let seeded = seed_if_empty(&store.orm).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded empty catalog");
    }
    Ok(())
}

pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn column_exists(pool: &DbPool, table: &str, column: &str) -> Result<bool> {
    let columns: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info(?1)")
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(columns
        .iter()
        .any(|(name,)| name.eq_ignore_ascii_case(column)))
}

/// Add `column` to `table` unless it is already there. Returns whether the column was added.
pub async fn ensure_column(pool: &DbPool, table: &str, column: &str, decl: &str) -> Result<bool> {
    if column_exists(pool, table, column).await? {
        return Ok(false);
    }

    let statement = format!("ALTER TABLE {table} ADD COLUMN {column} {decl}");
    sqlx::query(&statement).execute(pool).await?;
    tracing::info!(table, column, "added missing column");
    Ok(true)
}

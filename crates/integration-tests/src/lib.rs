// Test harness shared by the integration suites

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx_jsonfield::JsonField;
use tracing::{info, warn};

/// Initialize test logging (idempotent; later calls are no-ops)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Per-test database file under the system temp dir.
///
/// A random suffix keeps parallel test binaries from colliding; any stale
/// file from a previous run is removed first.
pub fn temp_db_path(test_name: &str) -> PathBuf {
    let suffix: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    let path = std::env::temp_dir().join(format!("test.sqlite3_{}_{}", test_name, suffix));
    if path.exists() {
        let _ = std::fs::remove_file(&path);
    }
    path
}

/// Remove a test database, tolerating failure.
///
/// Some CI platforms deny removal of still-mapped files; leftovers in the
/// temp dir are acceptable there.
pub fn remove_db(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        warn!("Could not remove test database {}: {}", path.display(), e);
    }
    // WAL mode leaves sidecar files next to the database
    for ext in ["-wal", "-shm"] {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(ext);
        let _ = std::fs::remove_file(PathBuf::from(sidecar));
    }
}

/// Create SQLite connection pool with WAL mode and optimizations
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Apply the test schema
pub async fn create_schema(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    info!("Creating test schema...");
    apply_sql(pool, include_str!("../migrations/001_create_records.sql")).await?;
    Ok(())
}

/// Apply a single SQL file, one statement at a time
async fn apply_sql(pool: &SqlitePool, sql: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut tx = pool.begin().await?;

    for statement in sql.split(';') {
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement).execute(&mut *tx).await?;
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Row model over the `records` table
#[derive(Debug, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub row_name: String,
    pub json_record: JsonField,
}

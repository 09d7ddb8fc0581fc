use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Storage engine the backend connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL (production default)
    Postgres,
    /// SQLite database file at `BLOG_SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite database, one per pool (tests)
    SqliteMemory,
}

impl DbKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::SqliteFile => "sqlite-file",
            Self::SqliteMemory => "sqlite-memory",
        }
    }

    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SqliteFile | Self::SqliteMemory)
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(Self::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Reads `BLOG_DB_KIND` for the server, defaulting to Postgres when unset.
///
/// `sqlite-memory` is refused here: a recycled pool connection reopens an
/// empty, unmigrated database. Tests build that state directly.
pub fn db_kind_from_env() -> Result<DbKind, AppError> {
    let kind = match env::var("BLOG_DB_KIND") {
        Ok(raw) => raw.parse()?,
        Err(_) => DbKind::Postgres,
    };
    if kind == DbKind::SqliteMemory {
        return Err(AppError::config(
            "BLOG_DB_KIND=sqlite-memory is only available to tests; use sqlite-file",
        ));
    }
    Ok(kind)
}

/// Builds a database URL from environment variables based on kind and owner.
pub fn db_url(kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("BLOG_DB")?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("BLOG_SQLITE_PATH").unwrap_or_else(|_| "blog.sqlite".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("BLOG_OWNER_USER")?,
            must_var("BLOG_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

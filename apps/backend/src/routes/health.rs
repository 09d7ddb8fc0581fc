use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

const UNKNOWN: &str = "unknown";

/// Liveness plus database reachability. Always 200; a database problem is
/// reported in the `db` and `db_error` fields.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

struct DbCheck {
    error: Option<String>,
    migrations: String,
}

async fn check_db(db: &DatabaseConnection) -> DbCheck {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1 AS ping");
    if let Err(e) = db.query_one(ping).await {
        return DbCheck {
            error: Some(format!("DB query failed: {e}")),
            migrations: UNKNOWN.to_string(),
        };
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(name)) => name,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => UNKNOWN.to_string(),
    };
    DbCheck {
        error: None,
        migrations,
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db_check = match require_db(&app_state) {
        Ok(db) => check_db(db).await,
        Err(e) => DbCheck {
            error: Some(format!("DB unavailable: {e}")),
            migrations: UNKNOWN.to_string(),
        },
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| UNKNOWN.to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if db_check.error.is_none() { "ok" } else { "error" },
        db_error: db_check.error,
        migrations: db_check.migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}

use blog_backend::config::db::{DbKind, DbOwner};
use blog_backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

impl From<Db> for DbKind {
    fn from(db: Db) -> Self {
        match db {
            Db::Postgres => DbKind::Postgres,
            Db::SqliteFile => DbKind::SqliteFile,
        }
    }
}

/// In-memory SQLite is not offered: each invocation would migrate a fresh
/// database that disappears when the command exits.
#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Blog database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    #[arg(value_parser = parse_command)]
    command: MigrationCommand,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

fn parse_command(raw: &str) -> Result<MigrationCommand, String> {
    raw.parse()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,migration_cli=info,blog_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let db_kind = DbKind::from(args.db);

    // Schema changes run with owner credentials
    let conn = match connect_db(db_kind, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(db = %db_kind, error = %e, "could not connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        tracing::error!(command = ?args.command, error = %e, "migration failed");
        std::process::exit(1);
    }
}

pub use sea_orm::{ConnectionTrait, DatabaseConnection};
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;

mod m20251019_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251019_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    /// Apply every pending migration
    Up,
    /// Roll back every applied migration
    Reset,
}

/// Run a migration command against an already-open connection.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let db_info_before = get_db_diagnostics(db).await?;

    tracing::info!(
        cmd = ?command,
        backend = %db_info_before.backend,
        db = %db_info_before.name,
        defined = db_info_before.defined_migrations_count,
        applied = db_info_before.mig_count,
        "migration=start"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
    };

    match result {
        Ok(()) => {
            let db_info_after = get_db_diagnostics(db).await?;
            tracing::info!(
                cmd = ?command,
                applied = db_info_after.mig_count,
                "migration=done"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(cmd = ?command, error = %e, "migration=failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct DbDiagnostics {
    backend: String,
    name: String,
    mig_count: usize,
    defined_migrations_count: usize,
}

async fn get_db_diagnostics(db: &DatabaseConnection) -> Result<DbDiagnostics, DbErr> {
    let backend = format!("{:?}", db.get_database_backend());

    let name = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("select current_database() as name"),
            );
            match db.query_one(stmt).await? {
                Some(row) => row.try_get("", "name")?,
                None => "<unknown>".to_string(),
            }
        }
        sea_orm::DatabaseBackend::Sqlite => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
            );
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "file") {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(file) => file,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        _ => "<unsupported>".to_string(),
    };

    let mig_count = count_applied_migrations(db).await.unwrap_or(0);
    let defined_migrations_count = Migrator::migrations().len();

    Ok(DbDiagnostics {
        backend,
        name,
        mig_count,
        defined_migrations_count,
    })
}

/// Count the migrations already applied.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

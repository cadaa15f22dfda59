//! SQLite persistence for imported catalogs.

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use rusqlite::{Connection, Error as SqliteError, Statement, Transaction};
use thiserror::Error;

use crate::CatalogDocument;
use crate::schema::{
    CLEAR_TABLES, CREATE_TABLES, INSERT_LINK, UPSERT_ATTRACTION, UPSERT_REGION, UPSERT_TOUR,
};

/// Errors raised when persisting a catalog to SQLite.
#[derive(Debug, Error)]
pub enum PersistCatalogError {
    /// Failed to create the parent directory for the database.
    #[error("failed to create parent directory for {path}")]
    CreateDirectory {
        /// Database path whose parent could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}")]
    Open {
        /// Destination database path.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the transaction failed.
    #[error("failed to begin catalog persistence transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating or clearing the catalog tables failed.
    #[error("failed to prepare catalog tables")]
    Schema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing an insert statement failed.
    #[error("failed to prepare {table} insert statement")]
    PrepareInsert {
        /// Table the statement writes to.
        table: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Writing a row failed.
    #[error("failed to persist {table} row {id}")]
    PersistRow {
        /// Table being written.
        table: &'static str,
        /// Identifier of the row being written.
        id: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the transaction failed.
    #[error("failed to commit catalog persistence transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Persist `document` to the SQLite database at `path`.
///
/// Parent directories and tables are created when missing. The previous
/// catalog is replaced in a single transaction, so readers see either the
/// old catalog or the new one. Rows keep the document order; a repeated
/// identifier updates the row of its first occurrence.
///
/// # Errors
/// Returns [`PersistCatalogError`] describing the step that failed; nothing
/// is committed in that case.
pub fn persist_catalog_to_sqlite(
    path: &Utf8Path,
    document: &CatalogDocument,
) -> Result<(), PersistCatalogError> {
    cicerone_fs::create_parent_dirs(path).map_err(|source| {
        PersistCatalogError::CreateDirectory {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let mut connection =
        Connection::open(path.as_std_path()).map_err(|source| PersistCatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let transaction = connection
        .transaction()
        .map_err(|source| PersistCatalogError::BeginTransaction { source })?;

    transaction
        .execute_batch(CREATE_TABLES)
        .and_then(|()| transaction.execute_batch(CLEAR_TABLES))
        .map_err(|source| PersistCatalogError::Schema { source })?;
    persist_rows(&transaction, document)?;

    transaction
        .commit()
        .map_err(|source| PersistCatalogError::Commit { source })?;
    info!(
        "persisted {} regions, {} tours, {} attractions and {} links to {path}",
        document.regions.len(),
        document.tours.len(),
        document.attractions.len(),
        document.links.len(),
    );
    Ok(())
}

fn persist_rows(
    transaction: &Transaction<'_>,
    document: &CatalogDocument,
) -> Result<(), PersistCatalogError> {
    let mut regions = prepare(transaction, "region", UPSERT_REGION)?;
    for region in &document.regions {
        regions
            .execute((&region.id, &region.name))
            .map_err(row_error("region", &region.id))?;
    }

    let mut tours = prepare(transaction, "tour", UPSERT_TOUR)?;
    for tour in &document.tours {
        tours
            .execute((&tour.id, &tour.region_id, tour.duration_days, tour.cost))
            .map_err(row_error("tour", &tour.id))?;
    }

    let mut attractions = prepare(transaction, "attraction", UPSERT_ATTRACTION)?;
    for attraction in &document.attractions {
        attractions
            .execute((&attraction.id, attraction.cultural_value))
            .map_err(row_error("attraction", &attraction.id))?;
    }

    let mut links = prepare(transaction, "tour_attraction", INSERT_LINK)?;
    for link in &document.links {
        let inserted = links
            .execute((&link.tour_id, &link.attraction_id))
            .map_err(row_error("tour_attraction", &link.tour_id))?;
        if inserted == 0 {
            debug!(
                "skipped repeated link {} -> {}",
                link.tour_id, link.attraction_id
            );
        }
    }

    Ok(())
}

fn prepare<'t>(
    transaction: &'t Transaction<'_>,
    table: &'static str,
    sql: &str,
) -> Result<Statement<'t>, PersistCatalogError> {
    transaction
        .prepare(sql)
        .map_err(|source| PersistCatalogError::PrepareInsert { table, source })
}

fn row_error(table: &'static str, id: &str) -> impl FnOnce(SqliteError) -> PersistCatalogError {
    let row_id = id.to_owned();
    move |source| PersistCatalogError::PersistRow {
        table,
        id: row_id,
        source,
    }
}

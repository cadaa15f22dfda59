//! Read-only `CatalogSource` backed by a SQLite database.

use camino::{Utf8Path, Utf8PathBuf};
use cicerone_core::{
    AttractionRecord, CatalogSource, RegionRecord, TourAttractionLink, TourRecord,
};
use log::debug;
use rusqlite::types::FromSql;
use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::schema::{SELECT_ATTRACTIONS, SELECT_LINKS, SELECT_REGIONS, SELECT_TOURS};

/// Error raised when reading a persisted catalog.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open catalog database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Querying a catalog table failed.
    #[error("failed to read the {table} table: {source}")]
    Query {
        /// Table being read.
        table: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored integer does not fit the record field.
    #[error("{table} {id} has {column} {value}, outside 0..={max}", max = u32::MAX)]
    OutOfRange {
        /// Table holding the row.
        table: &'static str,
        /// Identifier of the offending row.
        id: String,
        /// Column holding the value.
        column: &'static str,
        /// Stored value.
        value: i64,
    },
}

/// Catalog records stored in SQLite, read in insertion order.
///
/// The connection is opened read-only; use
/// [`persist_catalog_to_sqlite`](crate::persist_catalog_to_sqlite) to write
/// a catalog.
#[derive(Debug)]
pub struct SqliteCatalogSource {
    connection: Connection,
    path: Utf8PathBuf,
}

impl SqliteCatalogSource {
    /// Open the catalog database at `path`.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogError::OpenDatabase`] when the file is missing
    /// or is not a SQLite database.
    pub fn open(path: &Utf8Path) -> Result<Self, SqliteCatalogError> {
        let connection =
            Connection::open_with_flags(path.as_std_path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
                .map_err(|source| SqliteCatalogError::OpenDatabase {
                    path: path.to_path_buf(),
                    source,
                })?;
        debug!("opened catalog database {path}");
        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    /// Location of the database file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_rows<T>(
        &self,
        table: &'static str,
        sql: &str,
        mut convert: impl FnMut(&Row<'_>) -> Result<T, SqliteCatalogError>,
    ) -> Result<Vec<T>, SqliteCatalogError> {
        let query_error = |source| SqliteCatalogError::Query { table, source };
        let mut statement = self.connection.prepare(sql).map_err(query_error)?;
        let mut rows = statement.query([]).map_err(query_error)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            records.push(convert(row)?);
        }
        Ok(records)
    }
}

fn column<T: FromSql>(
    row: &Row<'_>,
    table: &'static str,
    index: usize,
) -> Result<T, SqliteCatalogError> {
    row.get(index)
        .map_err(|source| SqliteCatalogError::Query { table, source })
}

fn narrow(
    table: &'static str,
    id: &str,
    column_name: &'static str,
    value: i64,
) -> Result<u32, SqliteCatalogError> {
    u32::try_from(value).map_err(|_| SqliteCatalogError::OutOfRange {
        table,
        id: id.to_owned(),
        column: column_name,
        value,
    })
}

impl CatalogSource for SqliteCatalogSource {
    type Error = SqliteCatalogError;

    fn fetch_regions(&self) -> Result<Vec<RegionRecord>, Self::Error> {
        self.read_rows("region", SELECT_REGIONS, |row| {
            Ok(RegionRecord {
                id: column(row, "region", 0)?,
                name: column(row, "region", 1)?,
            })
        })
    }

    fn fetch_tours(&self) -> Result<Vec<TourRecord>, Self::Error> {
        self.read_rows("tour", SELECT_TOURS, |row| {
            let id: String = column(row, "tour", 0)?;
            let duration_days = narrow("tour", &id, "duration_days", column(row, "tour", 2)?)?;
            Ok(TourRecord {
                region_id: column(row, "tour", 1)?,
                duration_days,
                cost: column(row, "tour", 3)?,
                id,
            })
        })
    }

    fn fetch_attractions(&self) -> Result<Vec<AttractionRecord>, Self::Error> {
        self.read_rows("attraction", SELECT_ATTRACTIONS, |row| {
            let id: String = column(row, "attraction", 0)?;
            let cultural_value =
                narrow("attraction", &id, "cultural_value", column(row, "attraction", 1)?)?;
            Ok(AttractionRecord { id, cultural_value })
        })
    }

    fn fetch_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, Self::Error> {
        self.read_rows("tour_attraction", SELECT_LINKS, |row| {
            Ok(TourAttractionLink {
                tour_id: column(row, "tour_attraction", 0)?,
                attraction_id: column(row, "tour_attraction", 1)?,
            })
        })
    }
}

//! Table definitions shared by the reader and the writer.

/// Statements creating the catalog tables when they are missing.
///
/// Links reference tours and attractions by identifier without foreign
/// keys: dangling links are tolerated and dropped when the graph loads.
pub(crate) const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS region (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS tour (
        id TEXT PRIMARY KEY NOT NULL,
        region_id TEXT NOT NULL,
        duration_days INTEGER NOT NULL,
        cost REAL NOT NULL
    );
    CREATE TABLE IF NOT EXISTS attraction (
        id TEXT PRIMARY KEY NOT NULL,
        cultural_value INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS tour_attraction (
        tour_id TEXT NOT NULL,
        attraction_id TEXT NOT NULL,
        PRIMARY KEY (tour_id, attraction_id)
    );
";

/// Statements emptying every catalog table before a full import.
pub(crate) const CLEAR_TABLES: &str = "
    DELETE FROM tour_attraction;
    DELETE FROM attraction;
    DELETE FROM tour;
    DELETE FROM region;
";

pub(crate) const SELECT_REGIONS: &str = "SELECT id, name FROM region ORDER BY rowid";
pub(crate) const SELECT_TOURS: &str =
    "SELECT id, region_id, duration_days, cost FROM tour ORDER BY rowid";
pub(crate) const SELECT_ATTRACTIONS: &str =
    "SELECT id, cultural_value FROM attraction ORDER BY rowid";
pub(crate) const SELECT_LINKS: &str =
    "SELECT tour_id, attraction_id FROM tour_attraction ORDER BY rowid";

// Upserts keep the rowid of the first occurrence, so a repeated identifier
// updates the row in place instead of moving it to the end.
pub(crate) const UPSERT_REGION: &str = "INSERT INTO region (id, name) VALUES (?1, ?2)
    ON CONFLICT (id) DO UPDATE SET name = excluded.name";
pub(crate) const UPSERT_TOUR: &str =
    "INSERT INTO tour (id, region_id, duration_days, cost) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT (id) DO UPDATE SET region_id = excluded.region_id,
        duration_days = excluded.duration_days, cost = excluded.cost";
pub(crate) const UPSERT_ATTRACTION: &str = "INSERT INTO attraction (id, cultural_value) VALUES (?1, ?2)
    ON CONFLICT (id) DO UPDATE SET cultural_value = excluded.cultural_value";
pub(crate) const INSERT_LINK: &str =
    "INSERT OR IGNORE INTO tour_attraction (tour_id, attraction_id) VALUES (?1, ?2)";

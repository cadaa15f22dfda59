//! Behavioural tests for SQLite catalog storage using rstest-bdd.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use cicerone_core::{
    AttractionRecord, CatalogGraph, CatalogSource, RegionRecord, TourAttractionLink, TourRecord,
};
use cicerone_data::{CatalogDocument, SqliteCatalogSource, persist_catalog_to_sqlite};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Debug)]
struct StoreWorld {
    dir: TempDir,
    document: RefCell<CatalogDocument>,
    path: RefCell<Option<Utf8PathBuf>>,
    source: RefCell<Option<SqliteCatalogSource>>,
}

impl StoreWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            document: RefCell::new(CatalogDocument::default()),
            path: RefCell::new(None),
            source: RefCell::new(None),
        }
    }

    fn with_source<R>(&self, check: impl FnOnce(&SqliteCatalogSource) -> R) -> R {
        let borrowed = self.source.borrow();
        let source = borrowed
            .as_ref()
            .unwrap_or_else(|| panic!("catalog source should be open"));
        check(source)
    }
}

#[fixture]
fn world() -> StoreWorld {
    StoreWorld::new()
}

fn tour(id: &str, region_id: &str) -> TourRecord {
    TourRecord {
        id: id.to_owned(),
        region_id: region_id.to_owned(),
        duration_days: 2,
        cost: 15.5,
    }
}

fn region(id: &str, name: &str) -> RegionRecord {
    RegionRecord {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

#[given("a catalog document with two regions and three tours")]
fn two_region_document(world: &StoreWorld) {
    world.document.replace(CatalogDocument {
        regions: vec![region("R2", "Umbria"), region("R1", "Lazio")],
        tours: vec![tour("A", "R1"), tour("U", "R2"), tour("B", "R1"), tour("C", "R1")],
        ..CatalogDocument::default()
    });
}

#[given("a catalog document with a link to an unknown attraction")]
fn dangling_link_document(world: &StoreWorld) {
    world.document.replace(CatalogDocument {
        tours: vec![tour("A", "R1")],
        attractions: vec![AttractionRecord {
            id: "pantheon".to_owned(),
            cultural_value: 9,
        }],
        links: vec![
            TourAttractionLink::new("A", "pantheon"),
            TourAttractionLink::new("A", "atlantis"),
        ],
        ..CatalogDocument::default()
    });
}

#[when("the document is persisted to a new database")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn persist_document(world: &StoreWorld) {
    let path = Utf8PathBuf::from_path_buf(world.dir.path().join("store/catalog.db"))
        .expect("temp path should be UTF-8");
    persist_catalog_to_sqlite(&path, &world.document.borrow()).expect("persist catalog");
    world.path.replace(Some(path));
}

#[when("the database is opened as a catalog source")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn open_source(world: &StoreWorld) {
    let path = world.path.borrow().clone().expect("database should exist");
    let source = SqliteCatalogSource::open(&path).expect("open catalog");
    world.source.replace(Some(source));
}

#[then("the regions are read back in document order")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn regions_in_order(world: &StoreWorld) {
    let regions = world.with_source(|source| source.fetch_regions().expect("read regions"));
    assert_eq!(regions, world.document.borrow().regions);
}

#[then("the tours of region R1 are A, B and C")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn region_tours(world: &StoreWorld) {
    let catalog = world.with_source(|source| CatalogGraph::from_source(source).expect("load"));
    let ids: Vec<&str> = catalog
        .tours_in_region("R1")
        .into_iter()
        .map(|tour| tour.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[then("the stored links include the unknown attraction")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn stored_links(world: &StoreWorld) {
    let links = world.with_source(|source| {
        source
            .fetch_tour_attraction_links()
            .expect("read links")
    });
    assert!(links.contains(&TourAttractionLink::new("A", "atlantis")));
}

#[then("the loaded graph ignores the unknown attraction")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn graph_ignores_dangling_link(world: &StoreWorld) {
    let catalog = world.with_source(|source| CatalogGraph::from_source(source).expect("load"));
    let tour = catalog.tour("A").expect("tour A should load");
    assert_eq!(tour.attraction_ids().collect::<Vec<_>>(), vec!["pantheon"]);
    assert_eq!(tour.cultural_value(), 9);
}

#[scenario(path = "tests/features/catalog_store.feature", index = 0)]
fn imported_catalog_round_trip(world: StoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog_store.feature", index = 1)]
fn dangling_links_survive_storage(world: StoreWorld) {
    let _ = world;
}

//! Focused unit tests covering package CLI configuration and output.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::package::{
    DefaultPackageOptimizerBuilder, PackageConfig, PackageOptimizerBuilder,
    config_from_layers_for_test, run_package_with,
};
use camino::Utf8PathBuf;
use cicerone_core::{
    CatalogGraph, Optimizer, Package, PackageRequest, PackageRequestValidationError,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::cell::RefCell;

struct EmptyOptimizer;

impl Optimizer for EmptyOptimizer {
    fn generate_package(&self, _catalog: &CatalogGraph, _request: &PackageRequest) -> Package {
        Package::empty()
    }
}

#[derive(Default)]
struct RecordingBuilder {
    seen: RefCell<Option<PackageConfig>>,
}

impl PackageOptimizerBuilder for RecordingBuilder {
    fn build(&self, config: &PackageConfig) -> Result<Box<dyn Optimizer>, CliError> {
        self.seen.replace(Some(config.clone()));
        Ok(Box::new(EmptyOptimizer))
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn package_args(region: &str, catalog_db: Utf8PathBuf) -> PackageArgs {
    PackageArgs {
        region: Some(region.to_owned()),
        catalog_db: Some(catalog_db),
        ..PackageArgs::default()
    }
}

fn tour_ids(output: &Value) -> Vec<&str> {
    output["tours"]
        .as_array()
        .expect("tours array")
        .iter()
        .map(|tour| tour["id"].as_str().expect("tour id"))
        .collect()
}

fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}

#[rstest]
fn converting_package_without_region_errors() {
    let err = PackageConfig::try_from(PackageArgs::default()).expect_err("missing region");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REGION);
            assert_eq!(env, ENV_PACKAGE_REGION);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn package_config_defaults_catalog_location() {
    let args = PackageArgs {
        region: Some("R1".to_owned()),
        max_days: Some(4),
        ..PackageArgs::default()
    };

    let config = PackageConfig::try_from(args).expect("config should build");

    assert_eq!(config.catalog_db, Utf8PathBuf::from(DEFAULT_CATALOG_DB));
    assert_eq!(config.request, PackageRequest::new("R1").with_max_days(4));
}

#[rstest]
fn validate_sources_reports_missing_catalog(workspace: Workspace) {
    let config = PackageConfig {
        request: PackageRequest::new("R1"),
        catalog_db: workspace.path("absent.db"),
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG_DB),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let catalog_db = workspace.path("catalog.db");
    std::fs::create_dir(&catalog_db).expect("catalog directory");
    let config = PackageConfig {
        request: PackageRequest::new("R1"),
        catalog_db: catalog_db.clone(),
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_CATALOG_DB);
            assert_eq!(path, catalog_db);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_days": "a fortnight" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;

    let env_db = workspace.path("from-env.db");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog_db": workspace.path("from-file.db").as_str(),
            "max_budget": 250.0,
            "max_days": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "region": "R1",
        "catalog_db": env_db.as_str(),
    }));
    composer.push_cli(json!({ "max_days": 5 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");

    assert_eq!(config.request.region_id, "R1");
    assert_eq!(config.request.max_days, Some(5));
    assert_eq!(config.request.max_budget, Some(250.0));
    assert_eq!(config.catalog_db, env_db);
}

#[cfg(feature = "solver-bnb")]
#[rstest]
#[case::unconstrained(None, None, vec!["A", "B"], 13)]
#[case::two_days(Some(2), None, vec!["A"], 5)]
#[case::tight_budget(None, Some(24.0), vec!["B"], 8)]
#[case::ample_budget(None, Some(25.0), vec!["B", "C"], 13)]
fn package_command_prints_the_best_package(
    workspace: Workspace,
    #[case] max_days: Option<u32>,
    #[case] max_budget: Option<f64>,
    #[case] expected_tours: Vec<&str>,
    #[case] expected_value: u64,
) {
    let args = PackageArgs {
        max_days,
        max_budget,
        ..package_args("R1", workspace.seeded_catalog())
    };
    let mut stdout = Vec::new();

    run_package_with(args, &DefaultPackageOptimizerBuilder, &mut stdout).expect("package");

    let output = parse_output(&stdout);
    assert_eq!(tour_ids(&output), expected_tours);
    assert_eq!(output["value"], json!(expected_value));
}

#[cfg(feature = "solver-bnb")]
#[rstest]
fn package_output_carries_only_the_selection_and_totals(workspace: Workspace) {
    let mut stdout = Vec::new();

    run_package_with(
        package_args("R1", workspace.seeded_catalog()),
        &DefaultPackageOptimizerBuilder,
        &mut stdout,
    )
    .expect("package");

    let output = parse_output(&stdout);
    let mut keys: Vec<&str> = output
        .as_object()
        .expect("package object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["cost", "tours", "value"]);
    assert_eq!(output["cost"], json!(30.0));
}

#[cfg(not(feature = "solver-bnb"))]
#[rstest]
fn default_builder_requires_the_solver_feature() {
    let config = PackageConfig {
        request: PackageRequest::new("R1"),
        catalog_db: Utf8PathBuf::from(DEFAULT_CATALOG_DB),
    };

    match DefaultPackageOptimizerBuilder.build(&config) {
        Err(CliError::MissingFeature { feature, .. }) => assert_eq!(feature, "solver-bnb"),
        Err(other) => panic!("expected MissingFeature, found {other:?}"),
        Ok(_) => panic!("expected MissingFeature, found an optimizer"),
    }
}

#[rstest]
fn unknown_region_prints_the_empty_package(workspace: Workspace) {
    let builder = RecordingBuilder::default();
    let mut stdout = Vec::new();

    run_package_with(
        package_args("R9", workspace.seeded_catalog()),
        &builder,
        &mut stdout,
    )
    .expect("package");

    let output = parse_output(&stdout);
    assert!(tour_ids(&output).is_empty());
    assert_eq!(output["value"], json!(0));
}

#[rstest]
fn builder_receives_the_validated_request(workspace: Workspace) {
    let builder = RecordingBuilder::default();
    let catalog_db = workspace.seeded_catalog();
    let args = PackageArgs {
        max_days: Some(3),
        ..package_args("R1", catalog_db.clone())
    };

    run_package_with(args, &builder, &mut Vec::new()).expect("package");

    let seen = builder.seen.borrow();
    let config = seen.as_ref().expect("builder should be called");
    assert_eq!(config.request, PackageRequest::new("R1").with_max_days(3));
    assert_eq!(config.catalog_db, catalog_db);
}

#[rstest]
#[case::zero_days("R1", Some(0), None, PackageRequestValidationError::ZeroDays)]
#[case::negative_budget("R1", None, Some(-1.0), PackageRequestValidationError::NegativeBudget)]
#[case::blank_region(" ", None, None, PackageRequestValidationError::MissingRegion)]
fn invalid_requests_are_rejected_before_searching(
    workspace: Workspace,
    #[case] region: &str,
    #[case] max_days: Option<u32>,
    #[case] max_budget: Option<f64>,
    #[case] expected: PackageRequestValidationError,
) {
    let builder = RecordingBuilder::default();
    let args = PackageArgs {
        max_days,
        max_budget,
        ..package_args(region, workspace.seeded_catalog())
    };

    let err = run_package_with(args, &builder, &mut Vec::new()).expect_err("invalid request");

    match err {
        CliError::InvalidRequest(source) => assert_eq!(source, expected),
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
    assert!(builder.seen.borrow().is_none());
}

#[rstest]
fn corrupt_catalog_reports_the_database(workspace: Workspace) {
    let catalog_db = workspace.path("catalog.db");
    write_utf8(&catalog_db, b"not a database");

    let err = run_package_with(
        package_args("R1", catalog_db),
        &RecordingBuilder::default(),
        &mut Vec::new(),
    )
    .expect_err("corrupt database should fail");

    match err {
        CliError::Catalog(_) => {}
        other => panic!("expected Catalog, found {other:?}"),
    }
}

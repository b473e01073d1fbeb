//! End-to-end tests for the reconciliation engine.

use devkit_catalog::FeatureCatalog;
use devkit_core::{CONFIG_KEY, Engine, EngineState, HookRegistry};
use devkit_test_utils::TestPackage;
use pretty_assertions::assert_eq;
use serde_json::json;

fn engine_for(pkg: &TestPackage) -> Engine {
    Engine::load(
        pkg.root(),
        FeatureCatalog::builtin().unwrap(),
        HookRegistry::with_builtins(),
    )
    .unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn add_feature_writes_dev_dependencies() {
    let pkg = TestPackage::with_manifest("{\n  \"name\": \"demo\"\n}\n");
    let mut engine = engine_for(&pkg);
    assert_eq!(engine.state(), EngineState::Loaded);

    engine.add_features(&names(&["typescript"])).unwrap();
    assert_eq!(engine.state(), EngineState::Mutating);
    let report = engine.finish().unwrap();

    assert!(report.wrote_manifest);
    assert_eq!(report.changed, names(&["typescript"]));
    assert!(report.reinstall_needed());

    let manifest = pkg.manifest_json();
    let dev = manifest["devDependencies"].as_object().unwrap();
    assert!(dev.contains_key("typescript"));
    assert!(dev.contains_key("ts-node"));
    assert_eq!(manifest[CONFIG_KEY]["features"], json!(["typescript"]));
}

#[test]
fn remove_feature_leaves_other_entries() {
    let pkg = TestPackage::with_manifest(
        r#"{
  "name": "demo",
  "devDependencies": {
    "typescript": "^4.0.0",
    "mocha": "^9.0.2",
    "nyc": "^15.1.0",
    "ts-node": "^10.0.0",
    "@types/node": "^16.0.0"
  },
  "devkit": {
    "features": ["typescript", "mocha"]
  }
}
"#,
    );
    let mut engine = engine_for(&pkg);
    assert_eq!(engine.active(), names(&["typescript", "mocha"]));

    engine.remove_features(&names(&["typescript"])).unwrap();
    let report = engine.finish().unwrap();
    assert!(report.wrote_manifest);

    let manifest = pkg.manifest_json();
    let dev = manifest["devDependencies"].as_object().unwrap();
    assert!(!dev.contains_key("typescript"));
    assert!(!dev.contains_key("ts-node"));
    assert!(dev.contains_key("mocha"));
    assert_eq!(manifest[CONFIG_KEY]["features"], json!(["mocha"]));
}

#[test]
fn add_features_is_idempotent() {
    let pkg = TestPackage::with_manifest("{\n  \"name\": \"demo\"\n}\n");

    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["typescript", "eslint"])).unwrap();
    engine.finish().unwrap();
    let first = pkg.read_file("package.json");

    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["typescript", "eslint"])).unwrap();
    let report = engine.finish().unwrap();
    assert!(!report.wrote_manifest);
    assert!(!report.reinstall_needed());
    assert_eq!(pkg.read_file("package.json"), first);
}

#[test]
fn implication_closure_enables_companion() {
    let pkg = TestPackage::with_manifest("{\n  \"name\": \"demo\"\n}\n");
    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["typescript", "eslint"])).unwrap();
    assert_eq!(
        engine.active(),
        names(&["typescript", "eslint", "typescript-eslint"])
    );
    engine.finish().unwrap();

    let dev = pkg.manifest_json()["devDependencies"].clone();
    assert!(dev.as_object().unwrap().contains_key("@typescript-eslint/parser"));
}

#[test]
fn removal_cascade_drops_dependents() {
    let pkg = TestPackage::with_manifest("{\n  \"name\": \"demo\"\n}\n");
    let mut engine = engine_for(&pkg);
    engine
        .add_features(&names(&["typescript", "eslint", "typedoc"]))
        .unwrap();
    assert_eq!(
        engine.active(),
        names(&["typescript", "eslint", "typedoc", "typescript-eslint"])
    );

    engine.remove_features(&names(&["typescript"])).unwrap();
    assert_eq!(engine.active(), names(&["eslint"]));

    engine.finish().unwrap();
    let manifest = pkg.manifest_json();
    let dev = manifest["devDependencies"].as_object().unwrap();
    assert!(!dev.contains_key("typedoc"));
    assert!(!dev.contains_key("@typescript-eslint/parser"));
    assert!(dev.contains_key("eslint"));
}

#[test]
fn add_then_remove_round_trips_manifest() {
    let original = "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n";
    let pkg = TestPackage::with_manifest(original);

    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["mocha"])).unwrap();
    engine.remove_features(&names(&["mocha"])).unwrap();
    let report = engine.finish().unwrap();

    assert!(!report.wrote_manifest);
    // The feature's membership changed twice within the invocation, so it
    // still shows up in the user-facing summary.
    assert_eq!(report.changed, names(&["mocha"]));
    assert_eq!(pkg.read_file("package.json"), original);
}

#[test]
fn unknown_feature_aborts_before_mutation() {
    let original = "{\n  \"name\": \"demo\"\n}\n";
    let pkg = TestPackage::with_manifest(original);

    let mut engine = engine_for(&pkg);
    let err = engine
        .add_features(&names(&["typescript", "webpack"]))
        .unwrap_err();
    assert!(err.to_string().contains("webpack"));
    assert_eq!(engine.state(), EngineState::Loaded);
    assert!(engine.active().is_empty());

    engine.finish().unwrap();
    assert_eq!(pkg.read_file("package.json"), original);
}

#[test]
fn emptied_dependency_section_is_deleted() {
    let pkg = TestPackage::with_manifest(
        r#"{
  "name": "demo",
  "devDependencies": {
    "typedoc": "^0.21.2"
  }
}
"#,
    );
    let mut engine = engine_for(&pkg);
    // Presence detection marks typedoc active
    assert_eq!(engine.active(), names(&["typedoc"]));

    engine.remove_features(&names(&["typedoc"])).unwrap();
    engine.finish().unwrap();

    let manifest = pkg.manifest_json();
    assert!(manifest.get("devDependencies").is_none());
}

#[test]
fn activation_hooks_run_after_mutation() {
    let pkg = TestPackage::with_manifest("{\n  \"name\": \"demo\"\n}\n");
    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["typescript", "eslint"])).unwrap();
    engine.finish().unwrap();

    pkg.assert_file_exists("tsconfig.json");
    pkg.assert_file_exists(".eslintrc.json");
    let gitignore = pkg.read_file(".gitignore");
    assert!(gitignore.contains("dist/"));
}

#[test]
fn failing_hook_leaves_manifest_unwritten() {
    struct Boom;
    impl devkit_core::FeatureHooks for Boom {
        fn on_activate(&self, _ctx: &devkit_core::HookContext) -> devkit_core::Result<()> {
            Err(devkit_core::Error::Io(std::io::Error::other("hook failed")))
        }
    }

    let original = "{\n  \"name\": \"demo\"\n}\n";
    let pkg = TestPackage::with_manifest(original);

    let mut hooks = HookRegistry::new();
    hooks.register("mocha", Boom);
    let mut engine =
        Engine::load(pkg.root(), FeatureCatalog::builtin().unwrap(), hooks).unwrap();

    engine.add_features(&names(&["mocha"])).unwrap();
    let err = engine.finish().unwrap_err();
    assert!(err.to_string().contains("hook failed"));

    // All-or-nothing: the on-disk manifest is untouched
    assert_eq!(pkg.read_file("package.json"), original);
}

#[test]
fn stored_feature_list_survives_unrelated_invocation() {
    let pkg = TestPackage::with_manifest(
        r#"{
  "name": "demo",
  "devDependencies": {
    "prettier": "^2.3.2"
  },
  "devkit": {
    "features": ["prettier"]
  }
}
"#,
    );
    let mut engine = engine_for(&pkg);
    engine.add_features(&names(&["mocha"])).unwrap();
    let report = engine.finish().unwrap();

    assert_eq!(report.active, names(&["prettier", "mocha"]));
    let manifest = pkg.manifest_json();
    assert_eq!(manifest[CONFIG_KEY]["features"], json!(["prettier", "mocha"]));
}

//! Integration tests for bundle-maker-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const MARKED_DIRS: [&str; 12] = [
    "config",
    "src/Command",
    "src/Controller",
    "src/DependencyInjection",
    "src/EventSubscriber",
    "src/Security",
    "src/Service",
    "public",
    "translations",
    "templates",
    "tests",
    "assets",
];

/// Command running in `dir`, isolated from the user's config and environment.
fn bundle_maker(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bundle-maker");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("BUNDLE_MAKER_DEFAULTS__VENDOR")
        .env_remove("BUNDLE_MAKER_OUTPUT__FORMAT");
    cmd
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Symfony bundle"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn verbose_run_reports_progress_once() {
    let temp = TempDir::new().unwrap();
    let assert = bundle_maker(temp.path())
        .args(["-v", "new", "Blog", "--vendor", "Acme"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using the modern structure").not());

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("using the modern structure...").count(), 1, "{stdout}");
    assert_eq!(stdout.matches("completed successfully").count(), 1, "{stdout}");
}

#[test]
fn new_command_help_lists_flags() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--vendor"))
        .stdout(predicate::str::contains("--bundle-version"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn generates_bundle() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "Blog", "--vendor", "Acme", "--bundle-version", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating bundle at bundles/Blog using the modern structure...",
        ))
        .stdout(predicate::str::contains(
            "Bundle generation completed successfully",
        ));

    let base = temp.path().join("bundles/Blog");
    for dir in MARKED_DIRS {
        assert!(base.join(dir).join(".gitkeep").is_file(), "{dir}");
    }

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(base.join("composer.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "acme/blog");
    assert_eq!(manifest["version"], "2");
    assert_eq!(manifest["type"], "symfony-bundle");

    let bundle_class = fs::read_to_string(base.join("src/BlogBundle.php")).unwrap();
    assert!(bundle_class.contains("class BlogBundle extends"));
    assert!(base.join("flex-recipe/manifest.json").is_file());
}

#[test]
fn missing_vendor_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "Blog", "--no-input"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required field missing: vendor name"));

    assert!(!temp.path().join("bundles").exists());
}

#[test]
fn missing_bundle_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "--vendor", "Acme"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required field missing: bundle name"));

    assert!(!temp.path().join("bundles").exists());
}

#[test]
fn whitespace_vendor_is_missing() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "Blog", "--vendor", "   "])
        .assert()
        .code(2);

    assert!(!temp.path().join("bundles").exists());
}

#[test]
fn output_directory_prefixes_bundles() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "Shop", "--vendor", "Acme", "-o", "packages"])
        .assert()
        .success();

    assert!(temp.path().join("packages/bundles/Shop/composer.json").is_file());
}

#[test]
fn rerun_succeeds() {
    let temp = TempDir::new().unwrap();
    for _ in 0..2 {
        bundle_maker(temp.path())
            .args(["new", "Blog", "--vendor", "Acme"])
            .assert()
            .success();
    }
    assert!(temp.path().join("bundles/Blog/composer.json").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["new", "Blog", "--vendor", "Acme", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("flex-recipe/manifest.json"));

    assert!(!temp.path().join("bundles").exists());
}

#[test]
fn json_output_is_the_report() {
    let temp = TempDir::new().unwrap();
    let out = bundle_maker(temp.path())
        .args(["--output-format", "json", "new", "Blog", "--vendor", "Acme"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["base_path"], "bundles/Blog");
    assert_eq!(report["directories"].as_array().unwrap().len(), 12);
    assert_eq!(report["files"].as_array().unwrap().len(), 19);
}

#[test]
fn quiet_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["-q", "new", "Blog", "--vendor", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn vendor_from_local_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".bundle-maker.toml"),
        "[defaults]\nvendor = \"Acme\"\nversion = \"5\"\n",
    )
    .unwrap();

    bundle_maker(temp.path())
        .args(["new", "Blog"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join("bundles/Blog/composer.json")).unwrap();
    assert!(raw.contains("\"acme/blog\""));
    assert!(raw.contains("\"version\": \"5\""));
}

#[test]
fn vendor_from_environment() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .env("BUNDLE_MAKER_DEFAULTS__VENDOR", "Acme")
        .args(["new", "Blog"])
        .assert()
        .success();

    assert!(temp.path().join("bundles/Blog/composer.json").is_file());
}

#[test]
fn missing_config_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["--config", "nope.toml", "new", "Blog", "--vendor", "Acme"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("bundles").exists());
}

#[test]
fn config_set_then_get() {
    let temp = TempDir::new().unwrap();
    // `--config` must name an existing file.
    bundle_maker(temp.path())
        .args(["--config", "cfg.toml", "config", "set", "defaults.vendor", "Acme"])
        .assert()
        .code(4);

    fs::write(temp.path().join("cfg.toml"), "").unwrap();
    bundle_maker(temp.path())
        .args(["--config", "cfg.toml", "config", "set", "defaults.vendor", "Acme"])
        .assert()
        .success();

    bundle_maker(temp.path())
        .args(["--config", "cfg.toml", "config", "get", "defaults.vendor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.vendor = \"Acme\""));
}

#[test]
fn config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_local_writes_config() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join(".bundle-maker.toml")).unwrap();
    assert!(text.contains("[defaults]"));
    assert!(text.contains("version = \"1\""));
}

#[test]
fn log_file_receives_events() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["-v", "--log-file", "run.log", "new", "Blog", "--vendor", "Acme"])
        .assert()
        .success();

    let log = fs::read_to_string(temp.path().join("run.log")).unwrap();
    assert!(log.contains("Generating bundle at bundles/Blog"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    bundle_maker(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-maker"));
}

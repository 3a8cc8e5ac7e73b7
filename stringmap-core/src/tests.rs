//! End-to-end test suite for stringmap-core.

use crate::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

const ROBOT_GO: &str = r#"//go:generate go run github.com/example/stringmap robot.go robot

package example

type robot string

// const robot_comment = "no!"

const robot_Chicken = "BAWK!"
const robotCow = "MOO!"

var robot_variable = "no!"

const (
	robot_R2D2 = "R2-D2"
	robot_C3P0 = "C3P0"
	foobar     = 2
)

type bar struct {
	robotVar string
}

func (r robot) String() string {
	const robot_local = "no!"
	return string(r)
}

func anotherFunc() string {
	const robot_local = "no!"
	return robot_local
}

func robotFunc() bool {
	return true
}
"#;

fn write_file(file: &Path, content: &str) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

fn setup_temp_package() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("stringmap_tests")
        .join(format!("{}_{}", timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn values(pairs: &[NamePair]) -> Vec<&str> {
    pairs.iter().map(|p| p.value.as_str()).collect()
}

// Core Test 1: Full robot package generation
#[test]
fn test_generate_robot_package() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);

    let result = generate("robot", &dir, "robot.go").unwrap();

    assert_eq!(result.package, "example");
    assert_eq!(result.name, "Robot");
    assert_eq!(
        values(&result.pairs),
        vec!["robot_Chicken", "robotCow", "robot_R2D2", "robot_C3P0"]
    );
    assert!(result.written);
    assert_eq!(result.output_path, dir.join("robot_stringmap.go"));

    let written = fs::read_to_string(dir.join("robot_stringmap.go")).unwrap();
    assert_eq!(written, result.source);
    assert!(written.contains("package example\n"));
    assert!(written.contains("\t\"Chicken\": robot_Chicken,\n"));
    assert!(written.contains("\t\"Cow\": robotCow,\n"));
    assert!(written.contains("\t\"R2D2\": robot_R2D2,\n"));
    assert!(written.contains("\t\"C3P0\": robot_C3P0,\n"));
    assert!(!written.contains("foobar"));
    assert!(!written.contains("robot_local"));
    assert!(!written.contains("robotVar"));
}

// Core Test 2: The generated file does not disturb package loading on a rerun
#[test]
fn test_regenerate_is_idempotent() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);

    let first = generate("robot", &dir, "robot.go").unwrap();
    let second = generate("robot", &dir, "robot.go").unwrap();

    assert_eq!(first.pairs, second.pairs);
    assert_eq!(first.source, second.source);
}

// Core Test 3: Dry run renders without writing
#[test]
fn test_dry_run_writes_nothing() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);

    let result = StringMap::new(&dir, "robot.go", "robot")
        .dry_run(true)
        .generate()
        .unwrap();

    assert!(!result.written);
    assert!(!result.source.is_empty());
    assert!(!dir.join("robot_stringmap.go").exists());
}

// Core Test 4: Lexical failure leaves no output behind
#[test]
fn test_lexical_error_writes_nothing() {
    let dir = setup_temp_package();
    write_file(
        &dir.join("robot.go"),
        "package example\n\nconst robot_A = \"never closed\n",
    );

    let err = generate("robot", &dir, "robot.go").unwrap_err();
    assert!(matches!(err, StringmapError::Lexical(_)));
    assert!(!dir.join("robot_stringmap.go").exists());
}

// Core Test 5: Missing input file
#[test]
fn test_missing_input_file() {
    let dir = setup_temp_package();
    write_file(&dir.join("other.go"), "package example\n");

    let err = generate("robot", &dir, "robot.go").unwrap_err();
    assert!(matches!(err, StringmapError::Io { .. }));
    assert_eq!(err.path(), Some(&dir.join("robot.go")));
}

// Core Test 6: Metadata failure surfaces before scanning
#[test]
fn test_conflicting_packages() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);
    write_file(&dir.join("zoo.go"), "package zoo\n");

    let err = generate("robot", &dir, "robot.go").unwrap_err();
    assert!(matches!(err, StringmapError::Metadata { .. }));
}

// Core Test 7: Duplicate derived keys are rejected at render time
#[test]
fn test_duplicate_keys_rejected() {
    let dir = setup_temp_package();
    write_file(
        &dir.join("robot.go"),
        "package example\n\nconst robot_Cow = 1\nconst robotCow = 2\n",
    );

    let err = generate("robot", &dir, "robot.go").unwrap_err();
    assert!(matches!(err, StringmapError::Render { .. }));
    assert!(!dir.join("robot_stringmap.go").exists());
}

// Config Test 1: stringmap.toml suffix, generator and ignore list
#[test]
fn test_config_applied() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);
    write_file(
        &dir.join(CONFIG_FILE),
        "ignore = [\"robotCow\", \"robot_Unknown\"]\n\n[output]\nsuffix = \"_names.go\"\ngenerator = \"gen\"\n",
    );

    let result = generate("robot", &dir, "robot.go").unwrap();

    assert_eq!(
        values(&result.pairs),
        vec!["robot_Chicken", "robot_R2D2", "robot_C3P0"]
    );
    assert_eq!(result.output_path, dir.join("robot_names.go"));
    assert!(result.source.starts_with("// Code generated by gen; DO NOT EDIT.\n"));
}

// Config Test 2: builder settings override the config file
#[test]
fn test_builder_overrides_config() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);
    write_file(&dir.join(CONFIG_FILE), "[output]\nsuffix = \"_names.go\"\n");

    let result = StringMap::new(&dir, "robot.go", "robot")
        .suffix("_lookup.go")
        .ignore(["robot_C3P0"])
        .generate()
        .unwrap();

    assert_eq!(result.output_path, dir.join("robot_lookup.go"));
    assert_eq!(
        values(&result.pairs),
        vec!["robot_Chicken", "robotCow", "robot_R2D2"]
    );
}

// Config Test 3: config can be switched off
#[test]
fn test_config_disabled() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);
    write_file(&dir.join(CONFIG_FILE), "this is not toml = = =\n");

    let result = StringMap::new(&dir, "robot.go", "robot")
        .with_config(false)
        .dry_run(true)
        .generate()
        .unwrap();
    assert_eq!(result.pairs.len(), 4);

    let err = StringMap::new(&dir, "robot.go", "robot")
        .dry_run(true)
        .generate()
        .unwrap_err();
    assert!(matches!(err, StringmapError::Config { .. }));
}

// Extended Test 1: pointer type names strip the `*`
#[test]
fn test_pointer_type_name() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), ROBOT_GO);

    let result = StringMap::new(&dir, "robot.go", "*robot")
        .dry_run(true)
        .generate()
        .unwrap();

    assert_eq!(result.type_name, "robot");
    assert_eq!(result.name, "Robot");
    assert_eq!(result.pairs.len(), 4);
}

// Extended Test 2: exported type names and sibling files
#[test]
fn test_upper_case_type_and_other_files() {
    let dir = setup_temp_package();
    write_file(
        &dir.join("status.go"),
        "package web\n\ntype Status int\n\nconst (\n\tStatusOK Status = iota\n\tStatusNotFound\n\tStatus_teapot\n)\n",
    );
    write_file(&dir.join("server.go"), "package web\n\nconst StatusIgnored = 1\n");

    let result = generate("Status", &dir, "status.go").unwrap();

    let keys: Vec<_> = result.pairs.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["OK", "NotFound", "Teapot"]);
    assert_eq!(result.output_path, dir.join("status_stringmap.go"));
    assert!(result.source.contains("func ParseStatus(key string) (Status, bool) {"));
}

// Extended Test 3: an input with no matching constants still generates
#[test]
fn test_no_matches_generates_empty_map() {
    let dir = setup_temp_package();
    write_file(&dir.join("robot.go"), "package example\n\nconst other = 1\n");

    let result = generate("robot", &dir, "robot.go").unwrap();
    assert!(result.pairs.is_empty());
    assert!(result.source.contains("map[string]robot{}"));
}

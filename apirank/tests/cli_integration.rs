//! Integration tests for apirank CLI

use std::process::Command;

const FIXTURE: &str = "apirank/tests/fixtures/usage.json";

fn run_apirank(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "apirank", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn parse_ranking(stdout: &str) -> Vec<(String, u64, u64)> {
    let parsed: serde_json::Value = serde_json::from_str(stdout).expect("Invalid JSON output");
    parsed
        .as_array()
        .expect("ranking should be a JSON array")
        .iter()
        .map(|item| {
            (
                item["label"].as_str().unwrap().to_string(),
                item["count"].as_u64().unwrap(),
                item["rank"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_apirank(&["--help"]);

    assert!(success);
    assert!(stdout.contains("apirank"));
    assert!(stdout.contains("--data"));
    assert!(stdout.contains("--field"));
    assert!(stdout.contains("table"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_apirank(&["--version"]);

    assert!(success);
    assert!(stdout.contains("apirank"));
}

#[test]
fn test_default_catalog() {
    let (stdout, _, success) = run_apirank(&[]);

    assert!(success);
    let ranking = parse_ranking(&stdout);
    assert_eq!(ranking[0], ("numpy.sum".to_string(), 3, 1));
    assert_eq!(ranking[1], ("numpy.reshape".to_string(), 2, 2));
    assert_eq!(ranking[2], ("numpy.zeros".to_string(), 2, 3));
    assert_eq!(ranking[3], ("numpy.pad".to_string(), 1, 4));
}

#[test]
fn test_rank_ties_by_first_occurrence() {
    let (stdout, _, success) = run_apirank(&["rank", "--data", FIXTURE]);

    assert!(success);
    assert_eq!(
        parse_ranking(&stdout),
        vec![
            ("pad".to_string(), 2, 1),
            ("sum".to_string(), 2, 2),
            ("reshape".to_string(), 1, 3),
        ]
    );
}

#[test]
fn test_rank_other_field() {
    let (stdout, _, success) = run_apirank(&["--data", FIXTURE, "--field", "torch"]);

    assert!(success);
    let ranking = parse_ranking(&stdout);
    assert_eq!(ranking[0], ("reshape".to_string(), 3, 1));
    assert_eq!(ranking.len(), 3);
}

#[test]
fn test_empty_catalog_ranks_nothing() {
    let (stdout, _, success) = run_apirank(&["--data", "apirank/tests/fixtures/empty.json"]);

    assert!(success);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_table_output() {
    let (stdout, _, success) = run_apirank(&[
        "table",
        "--data",
        FIXTURE,
        "--template",
        "apirank/tests/fixtures/template.html",
        "--title",
        "NumPy usage",
    ]);

    assert!(success);
    assert!(stdout.contains("<title>NumPy usage</title>"));
    assert!(stdout.contains("<th>label</th>\n<th>count</th>\n<th>rank</th>"));
    assert!(stdout.contains("<tr>\n<th>pad</th>\n<td>2</td>\n<td>1</td>\n</tr>"));
    assert_eq!(stdout.matches("<tr>").count(), 4);
    assert!(!stdout.contains("{{TABLE}}"));
}

#[test]
fn test_table_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ranks.html");
    let out_str = out.to_string_lossy().to_string();

    let (stdout, _, success) = run_apirank(&["table", "--data", FIXTURE, "-o", &out_str]);

    assert!(success);
    assert!(stdout.is_empty());
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<th>sum</th>"));
}

#[test]
fn test_table_empty_catalog_fails() {
    let (_, stderr, success) =
        run_apirank(&["table", "--data", "apirank/tests/fixtures/empty.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("empty"));
}

#[test]
fn test_table_missing_template_fails() {
    let (_, stderr, success) = run_apirank(&[
        "table",
        "--data",
        FIXTURE,
        "--template",
        "/nonexistent/template.html",
    ]);

    assert!(!success);
    assert!(stderr.contains("failed to load template"));
}

#[test]
fn test_invalid_data_path() {
    let (_, stderr, success) = run_apirank(&["--data", "/nonexistent/catalog.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_non_array_catalog() {
    let (_, stderr, success) = run_apirank(&["--data", "apirank/tests/fixtures/object.json"]);

    assert!(!success);
    assert!(stderr.contains("expected a JSON array"));
}

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{RouteTree, route_count};

#[test]
fn per_file_lists_each_counted_file() {
    let tree = RouteTree::new();
    tree.routes("", 1);
    tree.routes("north", 2);

    let output = route_count().arg("--per-file").arg(tree.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("routes.xml --> 1"));
    assert!(lines[1].contains("north"));
    assert!(lines[1].ends_with("--> 2"));
    assert_eq!(lines[2], "Total routes: 3");
}

#[test]
fn json_report() {
    let tree = RouteTree::new();
    tree.routes("", 2);
    tree.routes("east/slab", 5);

    let output = route_count().args(["--format", "json"]).arg(tree.path()).output().unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 7);
    assert_eq!(report["files"].as_array().unwrap().len(), 2);
    assert_eq!(report["directories"], 3);
    assert!(report["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn yaml_report() {
    let tree = RouteTree::new();
    tree.routes("", 2);
    route_count()
        .args(["--format", "yaml"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 2"));
}

#[test]
fn progress_goes_to_stderr() {
    let tree = RouteTree::new();
    tree.routes("", 2);
    route_count()
        .arg("--progress")
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 2\n")
        .stderr(predicate::str::contains("--> 2"));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let tree = RouteTree::new();
    tree.routes("", 1);
    route_count()
        .arg("-vv")
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 1\n")
        .stderr(predicate::str::contains("scan finished"));
}

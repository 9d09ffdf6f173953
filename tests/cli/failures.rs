use predicates::prelude::*;

use crate::common::{RouteTree, route_count};

#[test]
fn malformed_xml_fails_without_partial_total() {
    let tree = RouteTree::new();
    tree.routes("", 3);
    tree.write_file("broken/routes.xml", "<routes><route></routes>");

    route_count()
        .arg(tree.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse XML"));
}

#[test]
fn missing_root_fails() {
    let tree = RouteTree::new();
    route_count()
        .arg(tree.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn file_as_root_fails() {
    let tree = RouteTree::new();
    let file = tree.routes("", 1);
    route_count()
        .arg(file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn keep_going_skips_and_warns() {
    let tree = RouteTree::new();
    tree.routes("", 3);
    tree.routes("ok", 1);
    tree.write_file("broken/routes.xml", "<routes>");

    route_count()
        .arg("--keep-going")
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 4\n")
        .stderr(predicate::str::contains("skipping"));
}

#[test]
fn invalid_log_filter_is_rejected() {
    let tree = RouteTree::new();
    route_count()
        .env("ROUTE_COUNT_LOG", "route_count=loud")
        .arg(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ROUTE_COUNT_LOG"));
}

use predicates::prelude::*;

use crate::common::{RouteTree, route_count};

#[test]
fn shows_help() {
    route_count()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route_count"));
}

#[test]
fn no_arguments_prints_usage() {
    route_count()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn empty_tree_reports_zero() {
    let tree = RouteTree::new();
    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 0\n");
}

#[test]
fn counts_single_file() {
    let tree = RouteTree::new();
    tree.write_file("routes.xml", "<routes><route/><route/><route/></routes>");
    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 3\n");
}

#[test]
fn sums_across_depth() {
    let tree = RouteTree::new();
    tree.routes("", 1);
    tree.routes("sub", 2);
    tree.routes("sub/deeper/still", 4);
    tree.mkdir("empty/branch");
    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 7\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn ignores_lookalike_files() {
    let tree = RouteTree::new();
    tree.write_file("Routes.xml", "<routes><route/></routes>");
    tree.write_file("routes.xml.bak", "<routes><route/></routes>");
    tree.write_file("sectors/routes.XML", "<routes><route/></routes>");
    tree.write_file("sectors/notes.txt", "not xml at all <");
    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 0\n");
}

#[test]
fn counts_routes_inside_wrappers() {
    let tree = RouteTree::new();
    tree.write_file("routes.xml", "<a><b><route/></b></a>");
    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 1\n");
}

#[test]
fn max_depth_limits_descent() {
    let tree = RouteTree::new();
    tree.routes("", 1);
    tree.routes("a", 2);
    tree.routes("a/b", 4);
    route_count()
        .args(["--max-depth", "1"])
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 3\n");
}

#[cfg(unix)]
#[test]
fn linked_directories_count_unless_no_follow() {
    let tree = RouteTree::new();
    tree.routes("real", 2);
    std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("linked")).unwrap();

    route_count()
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 4\n");
    route_count()
        .arg("--no-follow")
        .arg(tree.path())
        .assert()
        .success()
        .stdout("Total routes: 2\n");
}

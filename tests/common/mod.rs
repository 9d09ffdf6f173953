// tests/common/mod.rs
pub mod temp;

use assert_cmd::Command;

pub use temp::RouteTree;

/// The binary under test, isolated from the caller's log filter.
pub fn route_count() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_route_count"));
    cmd.env_remove("ROUTE_COUNT_LOG");
    cmd
}

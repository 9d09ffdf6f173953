// crates/domain/src/route_file.rs
use std::ffi::OsStr;

/// The only file name the traversal opens.
pub const ROUTE_FILE_NAME: &str = "routes.xml";

/// Tag name of the elements being counted.
pub const ROUTE_ELEMENT: &str = "route";

/// Exact, case-sensitive match against [`ROUTE_FILE_NAME`].
///
/// No glob, no extension matching and no case folding: `Routes.xml` and
/// `routes.xml.bak` are ordinary files.
pub fn is_route_file(name: &OsStr) -> bool {
    name == OsStr::new(ROUTE_FILE_NAME)
}

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;
pub mod xml;

pub use filesystem::LocalDirectoryLister;
pub use progress::StderrProgress;
pub use xml::XmlRouteCounter;

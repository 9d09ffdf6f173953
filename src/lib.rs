// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod run;

//! Shared infrastructure for the csv-remap CLI.

pub mod logging;

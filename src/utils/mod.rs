//! Utilities for sqlrun

pub mod logging;

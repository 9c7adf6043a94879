//! UI utilities for terminal output
//!
//! This module provides the progress spinner shown while waiting on the API.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};

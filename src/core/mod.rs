//! Core functionality for taskflow
//!
//! This module contains the core data structures.

pub mod models;

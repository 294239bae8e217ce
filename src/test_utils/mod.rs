//! Consolidated test utilities and helpers for the energy report.
//!
//! This module provides a centralized location for fake capabilities, test data
//! builders and canned payloads used throughout the codebase.

#![cfg(test)]

pub mod builders;
pub mod config;
pub mod fixtures;
pub mod mocks;

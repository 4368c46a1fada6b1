//! Shared fixtures for the integration tests of the workspace crates.

pub mod orst;

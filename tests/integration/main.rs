//! Integration test suite entry point.

mod catalog_tests;
mod fixture;
mod store_tests;

// tests/support/mod.rs
// Test doubles for the integration tests; not every test uses every item.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

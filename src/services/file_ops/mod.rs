//! Collision-safe relocation of extracted animation containers.

mod relocate;

pub use relocate::relocate_assets;

#[cfg(test)]
#[path = "tests/relocate_tests.rs"]
mod relocate_tests;

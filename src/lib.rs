//! favanims organizes a local collection of packed animation archives:
//! it unpacks staged `.zip`/`.rar` files, pulls the binary animation
//! containers out into a flat folder, scans the extracted content for
//! `<Anim dict="…"` reference lines, and merges the categorized results
//! into a persistent `FavouriteAnims.xml` manifest.

pub mod config;
pub mod services;
pub mod setup;
pub mod types;
pub mod workflow;

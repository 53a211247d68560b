//! Secondary physics rig ("spring bone") synthesis and persistence for
//! humanoid skeletons.
//!
//! This crate classifies skeleton nodes into semantic body parts, reduces
//! candidate sets to chain attachment roots, synthesizes sphere-collider
//! proxies and physics chains from a user-editable profile, and round-trips
//! the resulting rig through a compact path-addressed text format. It only
//! configures chains; it never simulates them.

#![forbid(unsafe_code)]

mod backend;
mod builder;
mod classify;
mod codec;
mod error;
mod keywords;
mod parts;
mod reduce;
mod roles;
mod scene;

#[cfg(feature = "json")]
pub mod config;

pub use backend::*;
pub use builder::*;
pub use classify::*;
pub use codec::*;
pub use error::*;
pub use parts::*;
pub use reduce::*;
pub use roles::*;
pub use scene::*;


#[cfg(test)]
mod reduce_tests;



#[cfg(all(test, feature = "json"))]
mod config_tests;

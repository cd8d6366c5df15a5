//! Components - Reusable UI Components
//!
//! Pure components: rendering is a function of configuration, side effects
//! go through the [`Host`](crate::host::Host) collaborators.

pub mod layout;
pub mod primitives;

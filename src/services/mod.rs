//! Game services
//!
//! Session setup and the top-level play loop wiring.

pub mod game;

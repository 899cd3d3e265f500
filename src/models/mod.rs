//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod card;
pub mod deck;
pub mod player;
pub mod config;
pub mod errors;

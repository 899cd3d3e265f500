//! User interface and presentation
//!
//! Presenters own every piece of narration text, keeping wording out of
//! the game engine.

pub mod presenters;

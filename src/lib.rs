//! Retro terminal Tetris.
//!
//! The `core` module holds the full simulation (board, pieces, scoring,
//! melody clock). `term`, `input`, and `audio` are thin adapters that render
//! state, map keys to actions, and synthesize the tone events the core emits.

pub mod audio;
pub mod core;
pub mod input;
pub mod term;
pub mod types;

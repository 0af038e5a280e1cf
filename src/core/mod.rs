//! Core module - pure game simulation with no I/O dependencies.
//!
//! Everything here is driven by the host loop: discrete input actions plus a
//! `tick(elapsed_ms)` clock. Rendering and audio consume the exposed state
//! and drained tone events; the core never touches a screen or device.

pub mod board;
pub mod melody;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use board::Board;
pub use melody::MelodyTrack;
pub use session::{Piece, Session};
pub use shapes::Shape;

//! Terminal adapter: framebuffer, diff renderer, and the game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Style, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

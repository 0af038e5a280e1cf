//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_DECREMENT_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Line clear reward table, indexed by rows cleared in one lock.
/// Multiplied by the current level when applied.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed per level step.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Top-level session state. Single source of truth for which
/// inputs and ticks are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Restart,
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    TogglePause,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A tone for the audio adapter to synthesize.
///
/// `delay_ms` is the offset from the moment the event is drained; it lets the
/// core schedule short sequences (the game-over jingle) without owning a clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEvent {
    pub freq_hz: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl ToneEvent {
    pub const fn new(freq_hz: f32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delayed(freq_hz: f32, duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
            delay_ms,
        }
    }
}

//! Game session - ties together board, pieces, scoring, and the melody clock.
//!
//! All mutation happens synchronously inside `tick` or a single `handle`
//! call; the host drives both from one loop, so no locking is needed.
//! Rejected actions (rotating into a wall, moving into settled cells) are
//! ordinary no-ops, not errors. The only terminal condition is `GameOver`,
//! reached when a freshly spawned piece collides at its spawn position.

use arrayvec::ArrayVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::melody::{MelodyTrack, GAME_OVER_TONES, LINE_CLEAR_TONE};
use crate::core::shapes::{self, Shape};
use crate::core::{scoring, Board};
use crate::types::{GameAction, Phase, PieceKind, ToneEvent, BASE_DROP_MS, BOARD_WIDTH};

/// Active falling piece: kind, post-rotation occupancy, and grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece in spawn orientation, centered horizontally at the top.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shapes::base_shape(kind);
        let x = (BOARD_WIDTH as i8) / 2 - (shape.width() as i8) / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }
}

/// Upper bound on tones emitted between drains: one melody note plus the
/// line-clear blip plus the three-tone game-over jingle, with headroom.
const TONE_QUEUE_CAP: usize = 8;

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Option<Piece>,
    next: PieceKind,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    melody: MelodyTrack,
    rng: SmallRng,
    pending_tones: ArrayVec<ToneEvent, TONE_QUEUE_CAP>,
}

impl Session {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Deterministic piece sequence for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let next = random_kind(&mut rng);
        Self {
            board: Board::new(),
            current: None,
            next,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::NotStarted,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            melody: MelodyTrack::new(),
            rng,
            pending_tones: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup (tests, demos).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// Preview of the queued piece.
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Begin a game. Valid from `NotStarted` and `GameOver`.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted | Phase::GameOver => {
                self.reset();
                self.spawn_piece();
                true
            }
            Phase::Running | Phase::Paused => false,
        }
    }

    /// Reset and begin again. Valid any time after the first start.
    pub fn restart(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted => false,
            Phase::Running | Phase::Paused | Phase::GameOver => {
                self.reset();
                self.spawn_piece();
                true
            }
        }
    }

    fn reset(&mut self) {
        self.board.clear();
        self.current = None;
        self.next = random_kind(&mut self.rng);
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.melody.reset();
        self.pending_tones.clear();
        self.phase = Phase::Running;
    }

    /// Promote the queued piece to current and draw a new queued piece.
    /// A spawn that collides with settled cells ends the game.
    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.next);
        self.next = random_kind(&mut self.rng);

        if piece.collides(&self.board) {
            self.current = None;
            self.phase = Phase::GameOver;
            for tone in GAME_OVER_TONES {
                self.push_tone(tone);
            }
        } else {
            self.current = Some(piece);
        }
    }

    /// Try to move the current piece by (dx, dy). A blocked downward move
    /// triggers the lock sequence; any other blocked move is rejected.
    /// Returns whether the piece actually moved.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        if !self.board.collides(&piece.shape, piece.x + dx, piece.y + dy) {
            self.current = Some(Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }

        if dy > 0 {
            self.lock_current(piece);
        }
        false
    }

    /// Rotate the current piece 90 degrees clockwise in place.
    /// Rejected without any offset search if the rotated shape collides.
    pub fn rotate_cw(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let rotated = piece.shape.rotate_cw();
        if self.board.collides(&rotated, piece.x, piece.y) {
            return false;
        }
        self.current = Some(Piece {
            shape: rotated,
            ..piece
        });
        true
    }

    /// Toggle between `Running` and `Paused`. Gravity and melody timers keep
    /// their accumulated values; they simply stop advancing.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            Phase::NotStarted | Phase::GameOver => false,
        }
    }

    /// Lock sequence: commit the piece, compact full rows, apply scoring and
    /// level/speed progression, then spawn the queued piece.
    fn lock_current(&mut self, piece: Piece) {
        self.board.fill(&piece.shape, piece.x, piece.y, piece.kind);
        self.current = None;

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // Points use the level in effect when the clear happened.
            self.score += scoring::line_clear_points(cleared, self.level);
            self.lines += cleared as u32;
            self.push_tone(LINE_CLEAR_TONE);

            let new_level = scoring::level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.drop_interval_ms = scoring::drop_interval_ms(new_level);
            }
        }

        self.spawn_piece();
    }

    /// Advance time: gravity at the level-dependent interval, melody at the
    /// fixed note interval. Only the `Running` phase consumes time.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.try_move(0, 1);
        }

        // Melody advances only while running; pausing freezes playback.
        if let Some(tone) = self.melody.advance(elapsed_ms) {
            self.push_tone(tone);
        }
    }

    /// Apply a discrete input action. Returns whether it had an effect.
    pub fn handle(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::TogglePause => self.toggle_pause(),
        }
    }

    /// Take all tones queued since the last drain. The host forwards them to
    /// the audio adapter (or drops them when no device is available).
    pub fn drain_tones(&mut self) -> ArrayVec<ToneEvent, TONE_QUEUE_CAP> {
        std::mem::take(&mut self.pending_tones)
    }

    fn push_tone(&mut self, tone: ToneEvent) {
        // If the host stops draining, newer tones win nothing; dropping is fine.
        let _ = self.pending_tones.try_push(tone);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn random_kind(rng: &mut SmallRng) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

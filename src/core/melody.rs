//! Background melody scheduler and sound-effect tone tables.
//!
//! The melody is Korobeiniki as a flat frequency table (0.0 = rest), one
//! entry per 400ms step. The track only keeps a pointer and a timer; actual
//! synthesis belongs to the audio adapter.

use crate::types::ToneEvent;

/// Milliseconds each melody step lasts.
pub const NOTE_DURATION_MS: u32 = 400;

/// Audible portion of a step; the remainder is a small gap between notes.
pub const NOTE_SUSTAIN_MS: u32 = NOTE_DURATION_MS * 4 / 5;

/// Korobeiniki, equal-tempered frequencies in Hz. 0.0 entries are rests.
#[rustfmt::skip]
pub const KOROBEINIKI_HZ: [f32; 38] = [
    659.25, 493.88, 523.25, 587.33, 523.25, 493.88, 440.00, // E B C D C B A
    440.00, 523.25, 659.25, 587.33, 523.25, 493.88, 523.25, // A C E D C B C
    587.33, 659.25, 523.25, 440.00, 440.00, 0.0,            // D E C A A (rest)
    587.33, 698.46, 880.00, 783.99, 698.46, 659.25, 523.25, // D F A G F E C
    659.25, 587.33, 523.25, 493.88, 523.25, 587.33, 659.25, // E D C B C D E
    523.25, 440.00, 440.00, 0.0,                            // C A A (rest)
];

/// Single high blip played when rows clear.
pub const LINE_CLEAR_TONE: ToneEvent = ToneEvent::new(880.0, 200);

/// Three-tone descending jingle played on game over.
pub const GAME_OVER_TONES: [ToneEvent; 3] = [
    ToneEvent::delayed(220.0, 500, 0),
    ToneEvent::delayed(196.0, 500, 250),
    ToneEvent::delayed(174.0, 1000, 500),
];

/// Looping pointer into the melody table, advanced by elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MelodyTrack {
    position: usize,
    timer_ms: u32,
}

impl MelodyTrack {
    pub fn new() -> Self {
        Self {
            position: 0,
            timer_ms: 0,
        }
    }

    /// Rewind to the start of the melody.
    pub fn reset(&mut self) {
        self.position = 0;
        self.timer_ms = 0;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Accumulate elapsed time; once a full note interval has passed, step
    /// the pointer (wrapping) and emit a tone for non-rest notes.
    ///
    /// At most one step per call: callers drive this from a frame tick far
    /// shorter than the note interval.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<ToneEvent> {
        self.timer_ms += elapsed_ms;
        if self.timer_ms < NOTE_DURATION_MS {
            return None;
        }
        self.timer_ms = 0;

        let freq_hz = KOROBEINIKI_HZ[self.position];
        self.position = (self.position + 1) % KOROBEINIKI_HZ.len();

        (freq_hz > 0.0).then(|| ToneEvent::new(freq_hz, NOTE_SUSTAIN_MS))
    }
}

impl Default for MelodyTrack {
    fn default() -> Self {
        Self::new()
    }
}

//! Audio adapter: square-wave synthesis of the core's tone events.
//!
//! The core only emits `ToneEvent` values; this module owns the device and
//! the oscillator. A machine without an output device simply plays nothing;
//! the game is unaffected.

use std::time::Duration;

use rodio::source::Source;
use rodio::{OutputStream, OutputStreamHandle};

use crate::types::ToneEvent;

const SAMPLE_RATE: u32 = 44_100;

/// Master gain for every synthesized tone.
const GAIN: f32 = 0.1;

/// Naive square-wave oscillator at a fixed frequency.
pub struct SquareWave {
    freq_hz: f32,
    sample_idx: u32,
}

impl SquareWave {
    pub fn new(freq_hz: f32) -> Self {
        Self {
            freq_hz,
            sample_idx: 0,
        }
    }
}

impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let t = self.sample_idx as f32 / SAMPLE_RATE as f32;
        self.sample_idx = self.sample_idx.wrapping_add(1);
        let phase = (t * self.freq_hz).fract();
        Some(if phase < 0.5 { 1.0 } else { -1.0 })
    }
}

impl Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Handle to the output device. Dropping it stops all playback.
pub struct AudioOutput {
    // Keeps the stream alive; playback dies when this drops.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    muted: bool,
}

impl AudioOutput {
    /// Open the default output device. `None` when no device is available.
    pub fn open() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            handle,
            muted: false,
        })
    }

    /// Schedule a tone. Fire-and-forget; overlapping tones mix.
    pub fn play(&self, tone: ToneEvent) {
        if self.muted {
            return;
        }
        let source = SquareWave::new(tone.freq_hz)
            .take_duration(Duration::from_millis(tone.duration_ms as u64))
            .amplify(GAIN)
            .delay(Duration::from_millis(tone.delay_ms as u64));
        // A failure here means the device went away; nothing to do about it.
        let _ = self.handle.play_raw(source);
    }

    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_wave_alternates_sign() {
        let samples: Vec<f32> = SquareWave::new(441.0).take(200).collect();
        assert!(samples.iter().any(|&s| s > 0.0));
        assert!(samples.iter().any(|&s| s < 0.0));
        assert!(samples.iter().all(|&s| s == 1.0 || s == -1.0));
    }

    #[test]
    fn square_wave_period_matches_frequency() {
        // At 441 Hz and 44100 Hz sampling, one period spans 100 samples:
        // 50 high then 50 low.
        let samples: Vec<f32> = SquareWave::new(441.0).take(100).collect();
        assert!(samples[..50].iter().all(|&s| s == 1.0));
        assert!(samples[50..].iter().all(|&s| s == -1.0));
    }

    #[test]
    fn source_reports_mono_at_fixed_rate() {
        let wave = SquareWave::new(880.0);
        assert_eq!(wave.channels(), 1);
        assert_eq!(wave.sample_rate(), SAMPLE_RATE);
        assert_eq!(wave.total_duration(), None);
    }
}

//! Fire-and-forget sound cues.
//!
//! Two short synthesized chirps: one on flap, one on score. Playback is
//! best-effort: if no audio device is available the cues silently vanish,
//! and the simulation never observes an audio failure.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Audio output handle plus the mute flag.
pub struct Audio {
    // Keeps the device alive; dropping it stops all playback.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    muted: bool,
}

impl Audio {
    /// Open the default output device. A machine without one still gets a
    /// working (silent) handle.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
                muted: false,
            },
            Err(_) => Self {
                _stream: None,
                handle: None,
                muted: false,
            },
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    /// Short rising chirp played on each flap.
    pub fn play_flap(&self) {
        self.play_tones(&[(523.25, 50, 0.10), (659.25, 60, 0.08)]);
    }

    /// Two-note ding played when a pipe is passed.
    pub fn play_score(&self) {
        self.play_tones(&[(783.99, 70, 0.10), (1046.50, 110, 0.10)]);
    }

    /// Queue a sequence of (frequency Hz, duration ms, amplitude) tones on a
    /// detached sink. Every failure path is ignored.
    fn play_tones(&self, tones: &[(f32, u64, f32)]) {
        if self.muted {
            return;
        }
        if let Some(handle) = &self.handle {
            if let Ok(sink) = Sink::try_new(handle) {
                for &(freq, ms, amp) in tones {
                    let tone = SineWave::new(freq)
                        .take_duration(Duration::from_millis(ms))
                        .amplify(amp);
                    sink.append(tone);
                }
                sink.detach();
            }
        }
    }
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

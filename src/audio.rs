//! Sound cues for game events.
//!
//! Sample files under `assets/` are used when present; otherwise each cue is
//! a short synthesized tone.
use std::fs::File;
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::core::GameEvent;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    paths.iter().find_map(|p| load_bytes(p)).map(Arc::new)
}

struct Cue {
    sample: Option<Arc<Vec<u8>>>,
    /// Fallback tone (Hz, ms).
    tone: (f32, u64),
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    step: Cue,
    bump: Cue,
    halt: Cue,
    correct: Cue,
    wrong: Cue,
    escape: Cue,
    volume: f32,
}

impl AudioManager {
    /// `None` when no output device is available.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("audio disabled: {}", e);
                return None;
            }
        };
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            step: Cue {
                sample: load_bytes_any(&["assets/sfx_step.wav", "assets/sounds/step.wav"]),
                tone: (440.0, 40),
            },
            bump: Cue {
                sample: load_bytes_any(&["assets/sfx_bump.wav", "assets/sounds/bump.wav"]),
                tone: (110.0, 60),
            },
            halt: Cue {
                sample: load_bytes_any(&["assets/sfx_question.wav", "assets/sounds/question.wav"]),
                tone: (660.0, 180),
            },
            correct: Cue {
                sample: load_bytes_any(&["assets/sfx_correct.wav", "assets/sounds/correct.wav"]),
                tone: (880.0, 200),
            },
            wrong: Cue {
                sample: load_bytes_any(&["assets/sfx_wrong.wav", "assets/sounds/wrong.wav"]),
                tone: (150.0, 500),
            },
            escape: Cue {
                sample: load_bytes_any(&["assets/sfx_escape.wav", "assets/sounds/win.wav"]),
                tone: (1046.5, 400),
            },
            volume: 0.4,
        })
    }

    pub fn play_event(&self, event: GameEvent) {
        let cue = match event {
            GameEvent::Ignored => return,
            GameEvent::Moved => &self.step,
            GameEvent::Bumped => &self.bump,
            GameEvent::Halted => &self.halt,
            GameEvent::Answered => &self.correct,
            GameEvent::Failed => &self.wrong,
            GameEvent::Escaped => &self.escape,
        };
        debug!("sfx {}", event.as_str());
        // Outcome cues get their own sink so they don't wait behind queued steps.
        if matches!(event, GameEvent::Failed | GameEvent::Escaped) {
            self.play_detached(cue);
        } else {
            self.play_queued(cue);
        }
    }

    fn play_queued(&self, cue: &Cue) {
        if let Some(dec) = decode(cue) {
            self.sfx_sink.append(dec.amplify(self.volume));
        } else {
            self.sfx_sink.append(tone(cue.tone).amplify(self.volume));
        }
    }

    fn play_detached(&self, cue: &Cue) {
        let Ok(sink) = Sink::try_new(&self.handle) else { return };
        if let Some(dec) = decode(cue) {
            sink.append(dec.amplify(self.volume));
        } else {
            sink.append(tone(cue.tone).amplify(self.volume));
        }
        sink.detach();
    }
}

fn decode(cue: &Cue) -> Option<Decoder<Cursor<Vec<u8>>>> {
    let bytes = cue.sample.as_ref()?;
    Decoder::new(Cursor::new(bytes.as_ref().clone())).ok()
}

fn tone((hz, ms): (f32, u64)) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(hz).take_duration(Duration::from_millis(ms))
}

use std::collections::VecDeque;
use std::io::Write;

use phasor_protocol::Frame;
use thiserror::Error;

const DEFAULT_RECORDING_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode frame {seq}: {source}")]
    Encode {
        seq: u64,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_presented: u64,
    pub frames_changed: u64,
}

impl RenderStats {
    pub fn new() -> Self {
        Self {
            frames_presented: 0,
            frames_changed: 0,
        }
    }

    fn note(&mut self, changed: bool) {
        self.frames_presented = self.frames_presented.saturating_add(1);
        if changed {
            self.frames_changed = self.frames_changed.saturating_add(1);
        }
    }
}

impl Default for RenderStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer of frames. `present` reports whether the frame drew something
/// different from the previously presented one.
pub trait FrameRenderer {
    fn present(&mut self, frame: &Frame) -> Result<bool, RenderError>;
    fn stats(&self) -> &RenderStats;
}

fn changed(last: Option<&Frame>, frame: &Frame) -> bool {
    last.map_or(true, |last| !last.same_picture(frame))
}

pub struct NullRenderer {
    last: Option<Frame>,
    stats_: RenderStats,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self {
            last: None,
            stats_: RenderStats::new(),
        }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer for NullRenderer {
    fn present(&mut self, frame: &Frame) -> Result<bool, RenderError> {
        let changed = changed(self.last.as_ref(), frame);
        if changed {
            self.last = Some(frame.clone());
        }
        self.stats_.note(changed);
        Ok(changed)
    }

    fn stats(&self) -> &RenderStats {
        &self.stats_
    }
}

/// Keeps the most recent frames for inspection.
pub struct RecordingRenderer {
    frames: VecDeque<Frame>,
    capacity: usize,
    stats_: RenderStats,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECORDING_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: VecDeque::new(),
            capacity: capacity.max(1),
            stats_: RenderStats::new(),
        }
    }

    pub fn frames(&self) -> &VecDeque<Frame> {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.back()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer for RecordingRenderer {
    fn present(&mut self, frame: &Frame) -> Result<bool, RenderError> {
        let changed = changed(self.frames.back(), frame);
        self.frames.push_back(frame.clone());
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
        self.stats_.note(changed);
        Ok(changed)
    }

    fn stats(&self) -> &RenderStats {
        &self.stats_
    }
}

/// Writes every frame as one line of JSON.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    last: Option<Frame>,
    stats_: RenderStats,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            stats_: RenderStats::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameRenderer for JsonLinesRenderer<W> {
    fn present(&mut self, frame: &Frame) -> Result<bool, RenderError> {
        let line = frame.to_json().map_err(|source| RenderError::Encode {
            seq: frame.seq,
            source,
        })?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        let changed = changed(self.last.as_ref(), frame);
        self.last = Some(frame.clone());
        self.stats_.note(changed);
        Ok(changed)
    }

    fn stats(&self) -> &RenderStats {
        &self.stats_
    }
}

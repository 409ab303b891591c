use crate::audio::cue::AudioManifest;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{BumperError, BumperResult};
use crate::session::render_session::RenderedFrame;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-frame state dump written by [`SvgDirSink`].
pub const STATES_FILE: &str = "states.json";
/// File name of the audio manifest written by [`SvgDirSink`].
pub const AUDIO_FILE: &str = "audio.json";

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkConfig {
    /// Composition id.
    pub id: String,
    /// Output size.
    pub canvas: Canvas,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Frames that will be pushed.
    pub range: FrameRange,
    /// Audio placement for the range, if the composition has any cues.
    pub audio: Option<AudioManifest>,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink {
    /// Called once before the first frame.
    fn begin(&mut self, cfg: SinkConfig) -> BumperResult<()>;
    /// Called once per frame of the range.
    fn push_frame(&mut self, frame: &RenderedFrame) -> BumperResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> BumperResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    ended: bool,
    /// Frames in timeline order.
    pub frames: Vec<RenderedFrame>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BumperResult<()> {
        self.cfg = Some(cfg);
        self.ended = false;
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &RenderedFrame) -> BumperResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> BumperResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes `frame_00000.svg`, `frame_00001.svg`, ... into a directory, then `states.json` and,
/// when the composition has sound, `audio.json`.
#[derive(Debug)]
pub struct SvgDirSink {
    dir: PathBuf,
    overwrite: bool,
    cfg: Option<SinkConfig>,
    states: Vec<serde_json::Value>,
    written: Vec<PathBuf>,
}

impl SvgDirSink {
    /// Sink rooted at `dir`. Existing frame files are an error unless `overwrite` is set.
    pub fn new(dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            dir: dir.into(),
            overwrite,
            cfg: None,
            states: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path of the SVG file for `frame`.
    pub fn frame_path(&self, frame: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.svg", frame.0))
    }

    fn write_file(&mut self, path: PathBuf, contents: &[u8]) -> BumperResult<()> {
        if !self.overwrite && path.exists() {
            return Err(BumperError::io(format!(
                "refusing to overwrite '{}' (pass overwrite to replace it)",
                path.display()
            )));
        }
        fs::write(&path, contents)
            .map_err(|e| BumperError::io(format!("write '{}': {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }

    fn write_json<T: serde::Serialize>(&mut self, name: &str, value: &T) -> BumperResult<()> {
        let body = serde_json::to_vec_pretty(value)
            .map_err(|e| BumperError::serde(format!("serialize {name}: {e}")))?;
        self.write_file(self.dir.join(name), &body)
    }
}

impl FrameSink for SvgDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> BumperResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            BumperError::io(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.states.clear();
        self.written.clear();
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, frame: &RenderedFrame) -> BumperResult<()> {
        let path = self.frame_path(frame.frame);
        self.write_file(path, frame.svg.as_bytes())?;
        self.states.push(serde_json::json!({
            "frame": frame.frame.0,
            "state": frame.state,
        }));
        Ok(())
    }

    fn end(&mut self) -> BumperResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| BumperError::validation("svg sink ended before begin"))?;
        let states = std::mem::take(&mut self.states);
        self.write_json(
            STATES_FILE,
            &serde_json::json!({
                "id": cfg.id,
                "fps": cfg.fps.to_string(),
                "width": cfg.canvas.width,
                "height": cfg.canvas.height,
                "frames": states,
            }),
        )?;
        if let Some(audio) = cfg.audio.as_ref() {
            self.write_json(AUDIO_FILE, audio)?;
        }
        tracing::debug!(dir = %self.dir.display(), files = self.written.len(), "svg sink finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;

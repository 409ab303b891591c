use crate::bumper::timeline::Breakpoints;
use crate::config::AudioConfig;
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{BumperError, BumperResult};

/// Sample rate used for timeline sample positions.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// A sound that starts at a fixed frame and plays to the end of the composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioCue {
    /// Asset file name, resolved by the host.
    pub file: String,
    /// First frame on which the sound is audible.
    pub start: FrameIndex,
    /// Gain in `[0, 1]`.
    pub volume: f64,
}

/// The audible part of a cue within a render range.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioSegment {
    /// Asset file name.
    pub file: String,
    /// First sample, relative to the start of the render range.
    pub timeline_start_sample: u64,
    /// End sample (exclusive), relative to the start of the render range.
    pub timeline_end_sample: u64,
    /// Offset into the source where playback begins.
    pub source_start_sec: f64,
    /// Gain in `[0, 1]`.
    pub volume: f64,
}

/// All segments for one render range.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioManifest {
    /// Sample rate of the timeline positions.
    pub sample_rate: u32,
    /// Output channel count.
    pub channels: u16,
    /// Length of the range in samples.
    pub total_samples: u64,
    /// Segments in cue order.
    pub segments: Vec<AudioSegment>,
}

impl AudioCue {
    /// The typing sound: starts on the first whole frame at or after typing start.
    pub fn typing(fps: Fps, audio: &AudioConfig) -> Self {
        let start = Breakpoints::for_fps(fps).typing_start.ceil().max(0.0) as u64;
        Self {
            file: audio.file.clone(),
            start: FrameIndex(start),
            volume: audio.volume,
        }
    }

    /// Whether the cue is audible on `frame`.
    pub fn is_active(&self, frame: FrameIndex) -> bool {
        frame >= self.start
    }

    /// The part of this cue inside `range`, if any.
    pub fn segment(&self, range: FrameRange, fps: Fps, sample_rate: u32) -> Option<AudioSegment> {
        let start = self.start.0.max(range.start.0);
        let end = range.end.0;
        if start >= end {
            return None;
        }
        Some(AudioSegment {
            file: self.file.clone(),
            timeline_start_sample: frame_to_sample(start - range.start.0, fps, sample_rate),
            timeline_end_sample: frame_to_sample(end - range.start.0, fps, sample_rate),
            source_start_sec: fps.frames_to_secs((start - self.start.0) as f64),
            volume: self.volume,
        })
    }
}

/// Convert a frame count to a sample count, rounding to nearest.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

/// Place `cues` on the timeline of `range`.
pub fn build_audio_manifest(
    cues: &[AudioCue],
    range: FrameRange,
    fps: Fps,
) -> BumperResult<AudioManifest> {
    if range.is_empty() {
        return Err(BumperError::validation(
            "audio manifest range must be non-empty",
        ));
    }

    let segments = cues
        .iter()
        .filter_map(|cue| cue.segment(range, fps, MIX_SAMPLE_RATE))
        .collect();
    Ok(AudioManifest {
        sample_rate: MIX_SAMPLE_RATE,
        channels: 2,
        total_samples: frame_to_sample(range.len_frames(), fps, MIX_SAMPLE_RATE),
        segments,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/cue.rs"]
mod tests;

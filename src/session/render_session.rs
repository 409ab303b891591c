use crate::audio::cue::{AudioManifest, build_audio_manifest};
use crate::composition::Composition;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{BumperError, BumperResult};
use crate::scene::model::Scene;
use crate::session::fingerprint::{FrameFingerprint, fingerprint_scene};
use crate::session::sink::{FrameSink, SinkConfig};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Options controlling `RenderSession` range rendering behavior.
#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    /// Enable frame-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Frames evaluated, deduplicated and serialized together before being pushed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Serialize each distinct scene of a chunk once and reuse the markup for repeats.
    pub static_frame_elision: bool,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Frames actually serialized (may be < total when static-frame elision is enabled).
    pub frames_rendered: u64,
    /// Frames that reused the markup of an identical earlier frame in the same chunk.
    pub frames_elided: u64,
}

/// One frame of output.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    /// Timeline position.
    pub frame: FrameIndex,
    /// Animated values, as reported by the composition.
    pub state: serde_json::Value,
    /// Standalone SVG document.
    pub svg: Arc<str>,
    /// Fingerprint of the scene the markup was produced from.
    pub fingerprint: FrameFingerprint,
}

/// Session-oriented renderer.
///
/// A session validates the composition and options once, then renders single frames or whole
/// ranges. Output is identical with and without parallelism or elision.
pub struct RenderSession {
    comp: Arc<dyn Composition>,
    opts: RenderSessionOpts,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("composition", &self.comp.spec().id)
            .field("opts", &self.opts)
            .finish()
    }
}

impl RenderSession {
    /// Construct a new render session.
    #[tracing::instrument(level = "debug", skip_all, fields(id = %comp.spec().id))]
    pub fn new(comp: Arc<dyn Composition>, opts: RenderSessionOpts) -> BumperResult<Self> {
        comp.spec().validate()?;
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self { comp, opts, pool })
    }

    /// The composition being rendered.
    pub fn composition(&self) -> &dyn Composition {
        self.comp.as_ref()
    }

    /// Active options.
    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Render a single frame.
    pub fn render_frame(&self, frame: FrameIndex) -> BumperResult<RenderedFrame> {
        let duration = self.comp.spec().duration;
        if frame >= duration {
            return Err(BumperError::validation(format!(
                "render_frame frame {} must be within composition duration {}",
                frame.0, duration.0
            )));
        }
        let scene = self.comp.scene(frame);
        let fingerprint = fingerprint_scene(&scene);
        Ok(RenderedFrame {
            frame,
            state: self.comp.state_json(frame)?,
            svg: Arc::from(scene.to_svg()),
            fingerprint,
        })
    }

    /// Audio placement for `range`.
    pub fn audio_manifest(&self, range: FrameRange) -> BumperResult<AudioManifest> {
        self.check_range(range, "audio_manifest")?;
        build_audio_manifest(&self.comp.audio_cues(), range, self.comp.spec().fps)
    }

    /// Render a frame range and stream frames into a sink.
    ///
    /// The sink receives frames in strictly increasing frame index order, whatever order the
    /// workers finish in.
    #[tracing::instrument(level = "debug", skip_all, fields(id = %self.comp.spec().id, start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> BumperResult<RenderStats> {
        self.check_range(range, "render_range")?;

        let spec = self.comp.spec();
        let manifest = build_audio_manifest(&self.comp.audio_cues(), range, spec.fps)?;
        sink.begin(SinkConfig {
            id: spec.id.clone(),
            canvas: spec.canvas,
            fps: spec.fps,
            range,
            audio: (!manifest.segments.is_empty()).then_some(manifest),
        })?;

        let chunk_size = normalized_chunk_size(self.opts.chunk_size).min(range.len_frames());
        let mut stats = RenderStats::default();
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let (frames, chunk_stats) = self.render_chunk(chunk_start, chunk_end)?;
            for frame in &frames {
                sink.push_frame(frame)?;
            }
            tracing::debug!(
                start = chunk_start,
                end = chunk_end,
                rendered = chunk_stats.frames_rendered,
                elided = chunk_stats.frames_elided,
                "chunk done"
            );
            stats.frames_total += chunk_stats.frames_total;
            stats.frames_rendered += chunk_stats.frames_rendered;
            stats.frames_elided += chunk_stats.frames_elided;
            chunk_start = chunk_end;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames_total,
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            "range rendered"
        );
        Ok(stats)
    }

    fn check_range(&self, range: FrameRange, what: &str) -> BumperResult<()> {
        if range.start > range.end {
            return Err(BumperError::validation(format!(
                "{what} range start must be <= end"
            )));
        }
        if range.is_empty() {
            return Err(BumperError::validation(format!(
                "{what} range must be non-empty"
            )));
        }
        let duration = self.comp.spec().duration;
        if range.end > duration {
            return Err(BumperError::validation(format!(
                "{what} range must be within composition duration {}",
                duration.0
            )));
        }
        Ok(())
    }

    fn render_chunk(&self, start: u64, end: u64) -> BumperResult<(Vec<RenderedFrame>, RenderStats)> {
        let comp = self.comp.as_ref();
        let frames: Vec<FrameIndex> = (start..end).map(FrameIndex).collect();

        // Evaluation is cheap; serialization is where the time goes.
        let evaluated: Vec<(Scene, serde_json::Value)> = self.map_frames(&frames[..], |&f| {
            Ok((comp.scene(f), comp.state_json(f)?))
        })?;
        let fingerprints: Vec<FrameFingerprint> =
            evaluated.iter().map(|(scene, _)| fingerprint_scene(scene)).collect();

        let mut uniq = Vec::<usize>::new();
        let mut map = Vec::<usize>::with_capacity(frames.len());
        if self.opts.static_frame_elision {
            let mut seen = HashMap::<FrameFingerprint, usize>::new();
            for (i, fp) in fingerprints.iter().enumerate() {
                let u = *seen.entry(*fp).or_insert_with(|| {
                    uniq.push(i);
                    uniq.len() - 1
                });
                map.push(u);
            }
        } else {
            uniq.extend(0..frames.len());
            map.extend(0..frames.len());
        }

        let markup: Vec<Arc<str>> =
            self.map_frames(&uniq[..], |&i| Ok(Arc::from(evaluated[i].0.to_svg())))?;

        let stats = RenderStats {
            frames_total: frames.len() as u64,
            frames_rendered: uniq.len() as u64,
            frames_elided: (frames.len() - uniq.len()) as u64,
        };
        let out = evaluated
            .into_iter()
            .enumerate()
            .map(|(i, (_, state))| RenderedFrame {
                frame: frames[i],
                state,
                svg: markup[map[i]].clone(),
                fingerprint: fingerprints[i],
            })
            .collect();
        Ok((out, stats))
    }

    /// Map `items` in order, on the session pool when parallel.
    fn map_frames<T, R, F>(&self, items: &[T], f: F) -> BumperResult<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> BumperResult<R> + Sync + Send,
    {
        match self.pool.as_ref() {
            Some(pool) => pool.install(|| items.par_iter().map(&f).collect()),
            None => items.iter().map(f).collect(),
        }
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> BumperResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BumperError::validation(
            "render session 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BumperError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;

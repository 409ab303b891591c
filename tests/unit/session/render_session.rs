use super::*;
use crate::composition::intro::IntroBumper;
use crate::config::BumperConfig;
use crate::session::sink::InMemorySink;

fn bumper() -> Arc<dyn Composition> {
    Arc::new(IntroBumper::new(BumperConfig::default()).unwrap())
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

fn render(opts: RenderSessionOpts, r: FrameRange) -> (Vec<RenderedFrame>, RenderStats) {
    let session = RenderSession::new(bumper(), opts).unwrap();
    let mut sink = InMemorySink::new();
    let stats = session.render_range(r, &mut sink).unwrap();
    assert!(sink.ended());
    (sink.frames, stats)
}

#[test]
fn render_frame_rejects_frames_past_the_end() {
    let session = RenderSession::new(bumper(), RenderSessionOpts::default()).unwrap();
    assert!(session.render_frame(FrameIndex(149)).is_ok());
    let err = session.render_frame(FrameIndex(150)).unwrap_err();
    assert!(err.to_string().contains("duration"));
}

#[test]
fn render_frame_carries_state_and_markup() {
    let session = RenderSession::new(bumper(), RenderSessionOpts::default()).unwrap();
    let f = session.render_frame(FrameIndex(70)).unwrap();
    assert_eq!(f.frame, FrameIndex(70));
    assert_eq!(f.state["show_typing_layer"], serde_json::Value::Bool(true));
    assert!(f.svg.starts_with("<svg"));
    assert!(f.svg.contains("width=\"1920\""));
}

#[test]
fn frames_arrive_in_order() {
    let opts = RenderSessionOpts {
        chunk_size: 7,
        ..RenderSessionOpts::default()
    };
    let (frames, stats) = render(opts, range(10, 60));
    let idx: Vec<u64> = frames.iter().map(|f| f.frame.0).collect();
    assert_eq!(idx, (10..60).collect::<Vec<_>>());
    assert_eq!(stats.frames_total, 50);
    assert_eq!(stats.frames_rendered, 50);
    assert_eq!(stats.frames_elided, 0);
}

#[test]
fn parallel_matches_serial() {
    let serial = render(RenderSessionOpts::default(), range(0, 150)).0;
    let parallel = render(
        RenderSessionOpts {
            parallel: true,
            threads: Some(3),
            chunk_size: 11,
            static_frame_elision: false,
        },
        range(0, 150),
    )
    .0;
    assert_eq!(serial, parallel);
}

#[test]
fn elision_reuses_markup_without_changing_output() {
    let plain = render(RenderSessionOpts::default(), range(0, 150)).0;
    let (elided, stats) = render(
        RenderSessionOpts {
            chunk_size: 150,
            static_frame_elision: true,
            ..RenderSessionOpts::default()
        },
        range(0, 150),
    );
    assert_eq!(plain, elided);
    assert_eq!(stats.frames_total, 150);
    assert_eq!(stats.frames_rendered + stats.frames_elided, 150);
    // Frames 19..=45 repeat the settled logo of frame 18.
    assert!(stats.frames_elided >= 27, "{stats:?}");
}

#[test]
fn elision_is_scoped_to_chunks() {
    let (_, one_chunk) = render(
        RenderSessionOpts {
            chunk_size: 64,
            static_frame_elision: true,
            ..RenderSessionOpts::default()
        },
        range(18, 46),
    );
    assert_eq!(one_chunk.frames_rendered, 1);
    assert_eq!(one_chunk.frames_elided, 27);

    let (_, split) = render(
        RenderSessionOpts {
            chunk_size: 14,
            static_frame_elision: true,
            ..RenderSessionOpts::default()
        },
        range(18, 46),
    );
    assert_eq!(split.frames_rendered, 2);
    assert_eq!(split.frames_elided, 26);
}

#[test]
fn parallel_elision_matches_serial() {
    let serial = render(RenderSessionOpts::default(), range(40, 120)).0;
    let (parallel, _) = render(
        RenderSessionOpts {
            parallel: true,
            threads: Some(2),
            chunk_size: 16,
            static_frame_elision: true,
        },
        range(40, 120),
    );
    assert_eq!(serial, parallel);
}

#[test]
fn invalid_ranges_are_rejected() {
    let session = RenderSession::new(bumper(), RenderSessionOpts::default()).unwrap();
    let mut sink = InMemorySink::new();
    assert!(session.render_range(range(5, 5), &mut sink).is_err());
    assert!(session.render_range(range(100, 151), &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn zero_threads_is_rejected() {
    let err = RenderSession::new(
        bumper(),
        RenderSessionOpts {
            parallel: true,
            threads: Some(0),
            ..RenderSessionOpts::default()
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn sink_config_carries_audio_only_when_audible() {
    let session = RenderSession::new(bumper(), RenderSessionOpts::default()).unwrap();

    let mut sink = InMemorySink::new();
    session.render_range(range(0, 30), &mut sink).unwrap();
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.id, "IntroBumper");
    assert_eq!(cfg.range, range(0, 30));
    assert!(cfg.audio.is_none());

    session.render_range(range(0, 150), &mut sink).unwrap();
    let audio = sink.config().unwrap().audio.as_ref().unwrap();
    assert_eq!(audio.segments.len(), 1);
    assert_eq!(audio.segments[0].timeline_start_sample, 54 * 1600);
    assert_eq!(audio.total_samples, 150 * 1600);
}

#[test]
fn audio_manifest_validates_range() {
    let session = RenderSession::new(bumper(), RenderSessionOpts::default()).unwrap();
    assert!(session.audio_manifest(range(0, 0)).is_err());
    let m = session.audio_manifest(range(60, 90)).unwrap();
    assert_eq!(m.segments[0].timeline_start_sample, 0);
    assert!((m.segments[0].source_start_sec - 0.2).abs() < 1e-9);
}

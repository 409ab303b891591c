use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn typing_cue_starts_at_typing_start() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    assert_eq!(cue.file, "typing.m4a");
    assert_eq!(cue.start, FrameIndex(54));
    assert_eq!(cue.volume, 0.2);
    assert!(!cue.is_active(FrameIndex(53)));
    assert!(cue.is_active(FrameIndex(54)));
    assert!(cue.is_active(FrameIndex(10_000)));
}

#[test]
fn fractional_typing_start_rounds_up_to_whole_frame() {
    let cue = AudioCue::typing(Fps::new(24, 1).unwrap(), &AudioConfig::default());
    assert_eq!(cue.start, FrameIndex(44));
}

#[test]
fn frame_to_sample_handles_rational_rates() {
    assert_eq!(frame_to_sample(30, fps30(), 48_000), 48_000);
    assert_eq!(frame_to_sample(54, fps30(), 48_000), 86_400);
    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(frame_to_sample(30000, ntsc, 48_000), 48_048_000);
}

#[test]
fn segment_for_full_composition() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    let seg = cue.segment(range(0, 150), fps30(), 48_000).unwrap();
    assert_eq!(seg.timeline_start_sample, 86_400);
    assert_eq!(seg.timeline_end_sample, 240_000);
    assert_eq!(seg.source_start_sec, 0.0);
    assert_eq!(seg.volume, 0.2);
}

#[test]
fn segment_for_range_starting_mid_cue_offsets_source() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    let seg = cue.segment(range(84, 150), fps30(), 48_000).unwrap();
    assert_eq!(seg.timeline_start_sample, 0);
    assert_eq!(seg.timeline_end_sample, 105_600);
    assert!((seg.source_start_sec - 1.0).abs() < 1e-12);
}

#[test]
fn no_segment_before_cue() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    assert!(cue.segment(range(0, 54), fps30(), 48_000).is_none());
    assert!(cue.segment(range(0, 55), fps30(), 48_000).is_some());
}

#[test]
fn manifest_rejects_empty_range() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    assert!(build_audio_manifest(&[cue], range(10, 10), fps30()).is_err());
}

#[test]
fn manifest_collects_audible_cues() {
    let cue = AudioCue::typing(fps30(), &AudioConfig::default());
    let m = build_audio_manifest(&[cue], range(0, 150), fps30()).unwrap();
    assert_eq!(m.sample_rate, MIX_SAMPLE_RATE);
    assert_eq!(m.channels, 2);
    assert_eq!(m.total_samples, 240_000);
    assert_eq!(m.segments.len(), 1);

    let m = build_audio_manifest(
        &[AudioCue::typing(fps30(), &AudioConfig::default())],
        range(0, 20),
        fps30(),
    )
    .unwrap();
    assert!(m.segments.is_empty());
}

use super::*;
use crate::bumper::typing::DEFAULT_TAGLINE;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn rates() -> Vec<Fps> {
    [(24, 1), (25, 1), (30, 1), (60, 1), (30000, 1001)]
        .into_iter()
        .map(|(n, d)| Fps::new(n, d).unwrap())
        .collect()
}

#[test]
fn first_frame_is_blank() {
    for fps in rates() {
        let s = compute_state(FrameIndex(0), fps);
        assert_eq!(s.logo_opacity, 0.0);
        assert_eq!(s.logo_offset_x, 0.0);
        assert_eq!(s.revealed_text, "");
        assert!(!s.show_typing_layer);
    }
}

#[test]
fn thirty_fps_reference_frames() {
    let fps = fps30();
    let s = compute_state(FrameIndex(9), fps);
    assert_eq!(s.logo_opacity, 0.5);

    let s = compute_state(FrameIndex(18), fps);
    assert_eq!(s.logo_opacity, 1.0);

    let s = compute_state(FrameIndex(60), fps);
    assert_eq!(s.logo_offset_x, -250.0);

    let s = compute_state(FrameIndex(53), fps);
    assert!(!s.show_typing_layer);

    let s = compute_state(FrameIndex(54), fps);
    assert!(s.show_typing_layer);
    assert_eq!(s.revealed_text, "");
    assert!(s.cursor_visible);

    let s = compute_state(FrameIndex(95), fps);
    assert_eq!(s.revealed_text, DEFAULT_TAGLINE);
}

#[test]
fn logo_fully_opaque_through_hold() {
    for fps in rates() {
        let bp = Breakpoints::for_fps(fps);
        let first = bp.logo_fade_in_end.ceil() as u64;
        let last = bp.logo_hold_end.ceil() as u64;
        for f in first..last {
            let s = compute_state(FrameIndex(f), fps);
            assert_eq!(s.logo_opacity, 1.0, "fps={fps} f={f}");
            assert_eq!(s.logo_offset_x, 0.0, "fps={fps} f={f}");
        }
    }
}

#[test]
fn logo_offset_reaches_and_holds_final_position() {
    for fps in rates() {
        let bp = Breakpoints::for_fps(fps);
        let first = bp.logo_slide_end.ceil() as u64;
        for f in first..first + 500 {
            assert_eq!(compute_state(FrameIndex(f), fps).logo_offset_x, -250.0);
        }
    }
}

#[test]
fn logo_offset_moves_monotonically_left_during_slide() {
    let fps = fps30();
    let mut prev = 0.0;
    for f in 45..=60 {
        let x = compute_state(FrameIndex(f), fps).logo_offset_x;
        assert!(x <= prev, "f={f} x={x} prev={prev}");
        assert!((-250.0..=0.0).contains(&x));
        prev = x;
    }
    let mid = compute_state(FrameIndex(52), fps).logo_offset_x;
    assert!(mid < -100.0 && mid > -200.0, "mid={mid}");
}

#[test]
fn typing_layer_hidden_until_typing_start() {
    for fps in rates() {
        let start = Breakpoints::for_fps(fps).typing_start;
        for f in 0..200u64 {
            let s = compute_state(FrameIndex(f), fps);
            assert_eq!(s.show_typing_layer, (f as f64) >= start);
            if !s.show_typing_layer {
                assert_eq!(s.revealed_text, "");
            }
        }
    }
}

#[test]
fn revealed_text_is_monotonic_prefix() {
    for fps in rates() {
        let mut prev = 0;
        for f in 0..400u64 {
            let s = compute_state(FrameIndex(f), fps);
            assert!(DEFAULT_TAGLINE.starts_with(&s.revealed_text));
            assert!(s.revealed_text.len() >= prev);
            prev = s.revealed_text.len();
        }
        assert_eq!(prev, DEFAULT_TAGLINE.len());
    }
}

#[test]
fn cursor_blinks_from_typing_start() {
    let fps = fps30();
    for f in 54..69 {
        assert!(compute_state(FrameIndex(f), fps).cursor_visible, "f={f}");
    }
    for f in 69..84 {
        assert!(!compute_state(FrameIndex(f), fps).cursor_visible, "f={f}");
    }
    assert!(compute_state(FrameIndex(84), fps).cursor_visible);
}

#[test]
fn cursor_blink_phase_follows_fractional_typing_start() {
    // Typing starts at frame 43.2 at 24 fps.
    let fps = Fps::new(24, 1).unwrap();
    assert!(!compute_state(FrameIndex(43), fps).show_typing_layer);
    for f in 44..59 {
        let s = compute_state(FrameIndex(f), fps);
        assert!(s.show_typing_layer, "f={f}");
        assert!(s.cursor_visible, "f={f}");
    }
    for f in 59..74 {
        assert!(!compute_state(FrameIndex(f), fps).cursor_visible, "f={f}");
    }
    assert!(compute_state(FrameIndex(74), fps).cursor_visible);
}

#[test]
fn frames_past_duration_extrapolate_without_error() {
    let s = compute_state(FrameIndex(u64::from(u32::MAX)), fps30());
    assert_eq!(s.logo_opacity, 1.0);
    assert_eq!(s.logo_offset_x, -250.0);
    assert_eq!(s.revealed_text, DEFAULT_TAGLINE);
    assert!(s.show_typing_layer);
}

#[test]
fn evaluation_is_deterministic_in_any_order() {
    let fps = fps30();
    let forward = (0..150).map(|f| compute_state(FrameIndex(f), fps)).collect::<Vec<_>>();
    for f in (0..150).rev() {
        let again = compute_state(FrameIndex(f), fps);
        assert_eq!(again, forward[f as usize]);
        assert_eq!(
            again.logo_offset_x.to_bits(),
            forward[f as usize].logo_offset_x.to_bits()
        );
        assert_eq!(
            again.logo_opacity.to_bits(),
            forward[f as usize].logo_opacity.to_bits()
        );
    }
}

#[test]
fn config_overrides_tagline_speed_and_blink() {
    let config = BumperConfig {
        tagline: "Hi".to_owned(),
        chars_per_second: 1.0,
        cursor_half_period_frames: 5,
        ..BumperConfig::default()
    };
    let tl = BumperTimeline::new(fps30(), &config);
    assert_eq!(tl.typing().text(), "Hi");

    // One char per second with jitter >= 0.2 keeps the first char hidden for 6+ frames.
    assert_eq!(tl.state_at(FrameIndex(55)).revealed_text, "");
    assert_eq!(tl.state_at(FrameIndex(1_000)).revealed_text, "Hi");

    assert!(tl.state_at(FrameIndex(58)).cursor_visible);
    assert!(!tl.state_at(FrameIndex(59)).cursor_visible);
}

#[test]
fn default_config_matches_stock_timeline() {
    let config = BumperConfig::default();
    let configured = BumperTimeline::new(fps30(), &config);
    let stock = BumperTimeline::with_defaults(fps30());
    for f in 0..150 {
        assert_eq!(
            configured.state_at(FrameIndex(f)),
            stock.state_at(FrameIndex(f))
        );
    }
}

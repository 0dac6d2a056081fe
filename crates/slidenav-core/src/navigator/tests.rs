use super::*;
use crate::event::TweenOutcome;
use crate::motion::ManualClock;
use crate::surface::{
    BodyClass, Element, MemorySurface, ScrollBehavior, SlideLayout, SlideRect,
};
use crate::viewport::{Pointer, Viewport};

type TestNavigator = SlideNavigator<MemorySurface, ManualClock>;

fn config() -> NavigatorConfig {
    NavigatorConfig {
        intro_delay_ms: 0,
        ..Default::default()
    }
}

/// Start the navigator and run the intro to completion
fn ready(surface: MemorySurface, config: NavigatorConfig) -> (TestNavigator, ManualClock) {
    let clock = ManualClock::new();
    let mut nav = SlideNavigator::new(surface, clock.clone(), config).unwrap();
    nav.start();
    nav.on_frame();
    nav.handle_event(NavEvent::SubtitleTransitionEnd);
    assert!(nav.is_ready());
    (nav, clock)
}

fn desktop() -> (TestNavigator, ManualClock) {
    ready(MemorySurface::new(5, 1280.0, 800.0), config())
}

/// Touch device viewport
fn touch(width: f64, height: f64) -> Viewport {
    Viewport::new(width, height).with_pointer(Pointer::Coarse)
}

/// Five slides on a phone-sized touch screen
fn phone() -> MemorySurface {
    MemorySurface::new(5, 600.0, 800.0).with_pointer(Pointer::Coarse)
}

fn mobile() -> (TestNavigator, ManualClock) {
    ready(phone(), config())
}

/// Let the running transition reach its final frame
fn finish(nav: &mut TestNavigator, clock: &ManualClock) {
    clock.advance_ms(nav.config().tween_duration_ms);
    nav.on_frame();
}

/// Resize the window, keeping the pointer kind
fn resize(nav: &mut TestNavigator, width: f64, height: f64) {
    let pointer = nav.surface().viewport.pointer;
    resize_to(nav, Viewport::new(width, height).with_pointer(pointer));
}

fn resize_to(nav: &mut TestNavigator, viewport: Viewport) {
    nav.surface_mut().viewport = viewport;
    nav.handle_event(NavEvent::Resize);
    nav.on_frame();
}

#[test]
fn test_empty_deck_is_rejected() {
    let surface = MemorySurface::new(0, 1280.0, 800.0);
    let result = SlideNavigator::new(surface, ManualClock::new(), config());
    assert!(matches!(result, Err(Error::EmptyDeck)));
}

#[test]
fn test_start_lays_out_desktop_and_locks_scroll() {
    let clock = ManualClock::new();
    let surface = MemorySurface::new(5, 1280.0, 800.0);
    let mut nav =
        SlideNavigator::new(surface, clock.clone(), NavigatorConfig::default()).unwrap();
    nav.start();

    let s = nav.surface();
    assert_eq!(nav.mode(), Some(Mode::Desktop));
    assert_eq!(s.app_height, Some(800.0));
    assert!(s.has_class(BodyClass::ScrollLock));
    assert!(!s.has_class(BodyClass::Mobile));
    assert_eq!(s.track_height, Some(4000.0));
    assert_eq!(s.track_offset, Some(0.0));
    assert_eq!(
        s.layouts[3],
        SlideLayout::Absolute {
            top: 2400.0,
            height: 800.0
        }
    );

    // Input is swallowed until the intro finishes
    assert!(!nav.is_ready());
    assert_eq!(
        nav.handle_event(NavEvent::Key(NavKey::ArrowDown)),
        EventOutcome::Consumed
    );
    assert!(!nav.is_transitioning());
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_intro_waits_for_delay_then_transition_end() {
    let clock = ManualClock::new();
    let surface = MemorySurface::new(3, 1280.0, 800.0);
    let mut nav =
        SlideNavigator::new(surface, clock.clone(), NavigatorConfig::default()).unwrap();
    nav.start();

    clock.advance_ms(199);
    nav.on_frame();
    assert!(!nav.surface().subtitle_revealed);

    clock.advance_ms(1);
    nav.on_frame();
    assert!(nav.surface().subtitle_revealed);
    assert!(!nav.is_ready());

    nav.handle_event(NavEvent::SubtitleTransitionEnd);
    let s = nav.surface();
    assert!(nav.is_ready());
    assert!(!s.has_class(BodyClass::ScrollLock));
    assert!(s.menu_armed);
    assert_eq!(s.dots, vec!["Go to slide 1", "Go to slide 2", "Go to slide 3"]);
    assert_eq!(s.current_dot(), Some(0));
    assert!(s.revealed[0]);
}

#[test]
fn test_intro_fallback_finalizes_once() {
    let clock = ManualClock::new();
    let surface = MemorySurface::new(3, 1280.0, 800.0);
    let mut nav = SlideNavigator::new(surface, clock.clone(), config()).unwrap();
    nav.start();
    nav.on_frame();
    assert_eq!(nav.next_deadline(), Some(clock.now() + config().intro_fallback()));

    clock.advance_ms(1800);
    nav.on_frame();
    assert!(nav.is_ready());
    assert_eq!(nav.next_deadline(), None);

    // A late transition end does not rebuild anything
    nav.surface_mut().dots.clear();
    nav.handle_event(NavEvent::SubtitleTransitionEnd);
    assert!(nav.surface().dots.is_empty());
}

#[test]
fn test_missing_optional_elements_are_skipped() {
    let surface = MemorySurface::new(3, 1280.0, 800.0)
        .without(Element::Subtitle)
        .without(Element::DotContainer)
        .without(Element::MenuTrigger);
    let clock = ManualClock::new();
    let mut nav = SlideNavigator::new(surface, clock.clone(), config()).unwrap();
    nav.start();
    nav.on_frame();

    assert!(nav.is_ready());
    let s = nav.surface();
    assert!(!s.subtitle_revealed);
    assert!(s.dots.is_empty());
    assert!(!s.menu_armed);
    assert_eq!(nav.handle_event(NavEvent::MenuTrigger), EventOutcome::PassThrough);
}

#[test]
fn test_slide_titles_appear_in_dot_labels() {
    let mut surface = MemorySurface::new(2, 1280.0, 800.0);
    surface.titles[1] = Some("Roadmap".to_string());
    let (nav, _clock) = ready(surface, config());
    assert_eq!(nav.surface().dots[1], "Go to slide 2: Roadmap");
}

#[test]
fn test_advance_tweens_to_next_slide() {
    let (mut nav, clock) = desktop();

    assert!(nav.advance(1));
    assert!(nav.is_transitioning());
    assert_eq!(nav.index(), 0);
    assert_eq!(nav.target_index(), 1);

    clock.advance_ms(225);
    nav.on_frame();
    assert!((nav.offset() + 400.0).abs() < 1e-6);
    assert_eq!(nav.index(), 0);

    clock.advance_ms(225);
    nav.on_frame();
    assert!(!nav.is_transitioning());
    assert_eq!(nav.index(), 1);
    assert_eq!(nav.offset(), -800.0);
    let s = nav.surface();
    assert_eq!(s.track_offset, Some(-800.0));
    assert!(s.revealed[1]);
    assert_eq!(s.current_dot(), Some(1));
}

#[test]
fn test_advance_while_transitioning_is_noop() {
    let (mut nav, clock) = desktop();
    assert!(nav.advance(1));
    clock.advance_ms(100);
    nav.on_frame();
    let offset = nav.offset();
    let writes = nav.surface().offset_writes;

    assert!(!nav.advance(1));
    assert!(!nav.advance(-1));
    assert_eq!(nav.tween_to(3), TweenOutcome::Busy);
    assert_eq!(nav.index(), 0);
    assert_eq!(nav.target_index(), 1);
    assert_eq!(nav.offset(), offset);
    assert_eq!(nav.surface().offset_writes, writes);
}

#[test]
fn test_cooldown_restarts_when_step_lands() {
    let (mut nav, clock) = desktop();
    assert!(nav.advance(1));
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 1);

    // Trackpad inertia right after the slide lands
    clock.advance_ms(10);
    assert!(!nav.advance(1));
    assert!(!nav.is_transitioning());

    clock.advance_ms(320);
    assert!(nav.advance(1));
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 2);
}

#[test]
fn test_cooldown_outlives_short_transition() {
    let cfg = NavigatorConfig {
        tween_duration_ms: 100,
        ..config()
    };
    let (mut nav, clock) = ready(MemorySurface::new(5, 1280.0, 800.0), cfg);

    assert!(nav.advance(1));
    assert!(!nav.advance(1));
    clock.advance_ms(100);
    nav.on_frame();
    assert_eq!(nav.index(), 1);

    clock.advance_ms(200);
    assert!(!nav.advance(1));

    clock.advance_ms(130);
    assert!(nav.advance(1));
}

#[test]
fn test_jumps_do_not_start_cooldown() {
    let (mut nav, clock) = desktop();
    assert_eq!(nav.tween_to(3), TweenOutcome::Started);
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 3);
    assert!(nav.advance(-1));
}

#[test]
fn test_tween_to_current_slide_is_idempotent() {
    let (mut nav, _clock) = desktop();
    let writes = nav.surface().offset_writes;

    assert_eq!(nav.tween_to(0), TweenOutcome::AlreadyThere);
    assert!(!nav.is_transitioning());
    assert!(!nav.needs_frame());
    assert_eq!(nav.index(), 0);
    assert_eq!(nav.surface().offset_writes, writes);
}

#[test]
fn test_index_stays_in_bounds() {
    let (mut nav, clock) = desktop();
    let deltas = [-1, -1, 1, 1, 1, 1, 1, 1, 1, -1, 1, 1, -1, -1, -1, -1, -1, -1];
    for delta in deltas {
        nav.advance(delta);
        finish(&mut nav, &clock);
        clock.advance_ms(400);
        assert!(nav.index() < nav.slide_count());
    }
    assert_eq!(nav.index(), 0);
    assert!(!nav.advance(-1));
}

#[test]
fn test_advance_stops_at_last_slide() {
    let (mut nav, clock) = desktop();
    assert_eq!(nav.tween_to(99), TweenOutcome::Started);
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 4);

    clock.advance_ms(400);
    assert!(!nav.advance(1));
    assert!(!nav.is_transitioning());
}

#[test]
fn test_wheel_accumulates_to_single_step() {
    let (mut nav, _clock) = desktop();
    for _ in 0..2 {
        let outcome = nav.handle_event(NavEvent::Wheel { delta_y: 25.0 });
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(!nav.is_transitioning());
    }
    nav.handle_event(NavEvent::Wheel { delta_y: 25.0 });

    assert!(nav.is_transitioning());
    assert_eq!(nav.target_index(), 1);
    assert_eq!(nav.wheel.accumulated(), 0.0);
}

#[test]
fn test_wheel_during_transition_is_not_queued() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::Wheel { delta_y: 100.0 });
    assert_eq!(nav.target_index(), 1);

    nav.handle_event(NavEvent::Wheel { delta_y: 50.0 });
    nav.handle_event(NavEvent::Wheel { delta_y: 50.0 });
    assert_eq!(nav.wheel.accumulated(), 0.0);

    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 1);
    assert!(!nav.is_transitioning());
}

#[test]
fn test_wheel_inertia_after_landing_is_dropped() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::Wheel { delta_y: 100.0 });
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 1);

    clock.advance_ms(50);
    for _ in 0..4 {
        nav.handle_event(NavEvent::Wheel { delta_y: 40.0 });
    }
    assert!(!nav.is_transitioning());
    assert_eq!(nav.wheel.accumulated(), 0.0);

    clock.advance_ms(300);
    nav.handle_event(NavEvent::Wheel { delta_y: 100.0 });
    assert_eq!(nav.target_index(), 2);
}

#[test]
fn test_touch_move_fires_swipe() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::TouchStart { y: 500.0 });
    let outcome = nav.handle_event(NavEvent::TouchMove { y: 480.0 });
    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(!nav.is_transitioning());

    // No release needed
    nav.handle_event(NavEvent::TouchMove { y: 460.0 });
    assert_eq!(nav.target_index(), 1);
    finish(&mut nav, &clock);

    // The same drag never fires twice
    clock.advance_ms(400);
    nav.handle_event(NavEvent::TouchMove { y: 100.0 });
    assert!(!nav.is_transitioning());
    nav.handle_event(NavEvent::TouchEnd);

    nav.handle_event(NavEvent::TouchStart { y: 300.0 });
    nav.handle_event(NavEvent::TouchMove { y: 400.0 });
    assert_eq!(nav.target_index(), 0);
}

#[test]
fn test_touch_move_ignored_while_animating() {
    let (mut nav, clock) = desktop();
    assert!(nav.advance(1));
    nav.handle_event(NavEvent::TouchStart { y: 500.0 });
    nav.handle_event(NavEvent::TouchMove { y: 400.0 });
    assert_eq!(nav.target_index(), 1);
    finish(&mut nav, &clock);

    // The gesture stays armed until it fires or ends
    clock.advance_ms(400);
    nav.handle_event(NavEvent::TouchMove { y: 400.0 });
    assert_eq!(nav.target_index(), 2);
}

#[test]
fn test_touch_end_disarms_gesture() {
    let (mut nav, _clock) = desktop();
    nav.handle_event(NavEvent::TouchStart { y: 500.0 });
    nav.handle_event(NavEvent::TouchEnd);
    nav.handle_event(NavEvent::TouchMove { y: 100.0 });
    assert!(!nav.is_transitioning());
}

#[test]
fn test_keys_on_desktop() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::Key(NavKey::End));
    assert_eq!(nav.target_index(), 4);
    finish(&mut nav, &clock);

    nav.handle_event(NavEvent::Key(NavKey::PageUp));
    assert_eq!(nav.target_index(), 3);
    finish(&mut nav, &clock);

    nav.handle_event(NavEvent::Key(NavKey::Home));
    assert_eq!(nav.target_index(), 0);
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_nearest_slide_anchor() {
    let rects = [0.0, 800.0, 1600.0]
        .into_iter()
        .map(|top| SlideRect { top, height: 800.0 })
        .collect();
    let mut surface = MemorySurface::with_rects(rects, touch(600.0, 1000.0));
    surface.scroll_y = 750.0;
    let nav = SlideNavigator::new(surface, ManualClock::new(), config()).unwrap();

    // anchor = 750 + 350 = 1100: top 800 is 300 away, top 1600 is 500 away
    assert_eq!(nav.nearest_slide(), 1);
}

#[test]
fn test_mobile_entry_attaches_observers() {
    let (nav, _clock) = mobile();
    let s = nav.surface();
    assert_eq!(nav.mode(), Some(Mode::Mobile));
    assert!(s.has_class(BodyClass::Mobile));
    assert_eq!(s.observed_thresholds, Some(vec![0.45, 0.75]));
    assert!(s.scroll_listener);
    assert!(s.layouts.iter().all(|l| *l == SlideLayout::Flow));
    assert_eq!(s.track_offset, None);
    assert_eq!(s.track_height, None);
}

#[test]
fn test_narrow_mouse_window_stays_paginated() {
    let (mut nav, _clock) = desktop();
    resize(&mut nav, 800.0, 800.0);
    assert_eq!(nav.mode(), Some(Mode::Desktop));
    assert_eq!(nav.surface().track_height, Some(4000.0));

    // A wide touch screen is not a phone either
    resize_to(&mut nav, touch(1920.0, 1080.0));
    assert_eq!(nav.mode(), Some(Mode::Desktop));
    assert_eq!(nav.surface().track_height, Some(5400.0));
}

#[test]
fn test_switch_to_mobile_clears_desktop_layout() {
    let (mut nav, _clock) = desktop();
    resize_to(&mut nav, touch(600.0, 800.0));

    let s = nav.surface();
    assert_eq!(nav.mode(), Some(Mode::Mobile));
    assert!(s.layouts.iter().all(|l| *l == SlideLayout::Flow));
    assert_eq!(s.track_offset, None);
    assert_eq!(s.track_height, None);
    assert!(s.scroll_listener);
}

#[test]
fn test_switch_to_desktop_resumes_from_scroll_position() {
    let (mut nav, _clock) = mobile();
    // anchor = 2500 + 280 = 2780, nearest top is 2400
    nav.surface_mut().scroll_y = 2500.0;
    resize_to(&mut nav, Viewport::new(1280.0, 800.0));

    let s = nav.surface();
    assert_eq!(nav.mode(), Some(Mode::Desktop));
    assert_eq!(nav.index(), 3);
    assert_eq!(s.track_height, Some(4000.0));
    assert_eq!(s.track_offset, Some(-2400.0));
    assert_eq!(s.scroll_y, 0.0);
    assert!(!s.scroll_listener);
    assert_eq!(s.observed_thresholds, None);
    assert!(s.decorations.iter().all(Option::is_none));
    assert_eq!(
        s.layouts[4],
        SlideLayout::Absolute {
            top: 3200.0,
            height: 800.0
        }
    );
}

#[test]
fn test_mode_change_mid_transition_lands_on_target() {
    let (mut nav, clock) = desktop();
    nav.advance(1);
    clock.advance_ms(100);
    nav.on_frame();

    resize_to(&mut nav, touch(600.0, 800.0));
    assert_eq!(nav.mode(), Some(Mode::Mobile));
    assert!(!nav.is_transitioning());
    assert_eq!(nav.index(), 1);
    assert_eq!(nav.surface().scroll_y, 800.0);
}

#[test]
fn test_mobile_chrome_resize_is_ignored() {
    let (mut nav, _clock) = mobile();
    let writes = nav.surface().app_height_writes;

    resize(&mut nav, 600.0, 720.0);
    assert_eq!(nav.surface().app_height_writes, writes);
    assert_eq!(nav.surface().app_height, Some(800.0));

    resize(&mut nav, 600.0, 650.0);
    assert_eq!(nav.surface().app_height_writes, writes + 1);
    assert_eq!(nav.surface().app_height, Some(650.0));
}

#[test]
fn test_orientation_change_is_always_real() {
    let (mut nav, _clock) = mobile();
    let writes = nav.surface().app_height_writes;
    nav.surface_mut().viewport = touch(600.0, 760.0);
    nav.handle_event(NavEvent::OrientationChange);
    nav.on_frame();
    assert_eq!(nav.surface().app_height_writes, writes + 1);
}

#[test]
fn test_desktop_height_change_relayouts() {
    let (mut nav, _clock) = desktop();
    resize(&mut nav, 1280.0, 760.0);
    let s = nav.surface();
    assert_eq!(s.app_height, Some(760.0));
    assert_eq!(s.track_height, Some(3800.0));
}

#[test]
fn test_resizes_coalesce_into_one_frame() {
    let (mut nav, _clock) = desktop();
    let writes = nav.surface().app_height_writes;
    nav.surface_mut().viewport = Viewport::new(1280.0, 700.0);
    for _ in 0..5 {
        nav.handle_event(NavEvent::Resize);
    }
    assert!(nav.needs_frame());
    nav.on_frame();
    assert!(!nav.needs_frame());
    assert_eq!(nav.surface().app_height_writes, writes + 1);
}

#[test]
fn test_resize_mid_transition_defers_layout() {
    let (mut nav, clock) = desktop();
    nav.advance(1);
    resize(&mut nav, 1280.0, 700.0);
    assert!(nav.is_transitioning());
    assert_eq!(nav.surface().track_height, Some(4000.0));

    finish(&mut nav, &clock);
    let s = nav.surface();
    assert_eq!(nav.index(), 1);
    assert_eq!(s.track_height, Some(3500.0));
    assert_eq!(s.track_offset, Some(-700.0));
}

#[test]
fn test_mobile_entry_reveals_every_slide() {
    let (mut nav, _clock) = desktop();
    assert!(!nav.surface().revealed[3]);
    resize_to(&mut nav, touch(600.0, 800.0));
    assert!(nav.surface().revealed.iter().all(|r| *r));
    assert_eq!(nav.surface().reveal_writes, 5);
}

#[test]
fn test_partially_visible_slide_is_revealed_not_promoted() {
    let (mut nav, _clock) = mobile();
    nav.revealed[3] = false;
    nav.surface_mut().revealed[3] = false;

    nav.handle_event(NavEvent::Visibility { index: 3, ratio: 0.0 });
    assert!(!nav.surface().revealed[3]);

    nav.handle_event(NavEvent::Visibility { index: 3, ratio: 0.2 });
    assert!(nav.surface().revealed[3]);
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_visibility_promotes_slide() {
    let (mut nav, _clock) = mobile();
    nav.handle_event(NavEvent::Visibility { index: 2, ratio: 0.3 });
    assert_eq!(nav.index(), 0);

    nav.handle_event(NavEvent::Visibility { index: 2, ratio: 0.5 });
    assert_eq!(nav.index(), 2);
    assert!(nav.surface().revealed[2]);
    assert_eq!(nav.surface().current_dot(), Some(2));

    nav.handle_event(NavEvent::Visibility { index: 9, ratio: 1.0 });
    assert_eq!(nav.index(), 2);
}

#[test]
fn test_scroll_anchor_without_observer() {
    let surface = phone().without_observer();
    let (mut nav, _clock) = ready(surface, config());
    assert_eq!(nav.surface().observed_thresholds, None);

    // Observer entries are meaningless without an observer
    nav.handle_event(NavEvent::Visibility { index: 4, ratio: 1.0 });
    assert_eq!(nav.index(), 0);

    nav.surface_mut().scroll_y = 1700.0;
    nav.handle_event(NavEvent::Scroll);
    nav.handle_event(NavEvent::Scroll);
    assert!(nav.needs_frame());
    nav.on_frame();
    assert!(!nav.needs_frame());
    assert_eq!(nav.index(), 2);
}

#[test]
fn test_observer_owns_index_over_scroll_anchor() {
    let (mut nav, _clock) = mobile();
    nav.surface_mut().scroll_y = 1700.0;
    nav.handle_event(NavEvent::Scroll);
    nav.on_frame();
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_frame_fade_decoration() {
    let (mut nav, _clock) = mobile();
    let s = nav.surface();
    let first = s.decorations[0].unwrap();
    assert!((first.opacity - 1.0).abs() < 1e-9);
    assert_eq!(first.translate_y, 0.0);
    let second = s.decorations[1].unwrap();
    assert!((second.opacity - 0.45).abs() < 1e-9);
    assert_eq!(second.translate_y, 28.0);

    // Halfway between slides 0 and 1 both frames are partially faded
    nav.surface_mut().scroll_y = 400.0;
    nav.handle_event(NavEvent::Scroll);
    nav.on_frame();
    let s = nav.surface();
    let above = s.decorations[0].unwrap();
    let below = s.decorations[1].unwrap();
    assert!(above.translate_y < 0.0 && below.translate_y > 0.0);
    assert!((above.opacity - below.opacity).abs() < 1e-9);
    assert!(above.opacity > 0.45 && above.opacity < 1.0);

    nav.set_frame_fade(false);
    assert!(nav.surface().decorations.iter().all(Option::is_none));
}

#[test]
fn test_frame_fade_disabled_writes_nothing() {
    let cfg = NavigatorConfig {
        frame_fade: false,
        ..config()
    };
    let (mut nav, _clock) = ready(phone(), cfg);
    nav.surface_mut().scroll_y = 1000.0;
    nav.handle_event(NavEvent::Scroll);
    nav.on_frame();
    assert!(nav.surface().decorations.iter().all(Option::is_none));
}

#[test]
fn test_mobile_defers_to_native_scrolling() {
    let (mut nav, _clock) = mobile();
    let pass = [
        NavEvent::Wheel { delta_y: 200.0 },
        NavEvent::Key(NavKey::ArrowDown),
        NavEvent::TouchStart { y: 500.0 },
        NavEvent::TouchMove { y: 10.0 },
    ];
    for event in pass {
        assert_eq!(nav.handle_event(event), EventOutcome::PassThrough);
    }
    assert!(!nav.advance(1));
    assert_eq!(nav.tween_to(2), TweenOutcome::Inactive);

    assert_eq!(nav.handle_event(NavEvent::Key(NavKey::End)), EventOutcome::Consumed);
    let s = nav.surface();
    assert_eq!(s.scroll_y, 3200.0);
    assert_eq!(s.last_scroll_behavior, Some(ScrollBehavior::Smooth));
}

#[test]
fn test_dot_click_per_mode() {
    let (mut nav, _clock) = desktop();
    assert_eq!(nav.handle_event(NavEvent::DotClicked(3)), EventOutcome::Consumed);
    assert_eq!(nav.target_index(), 3);
    assert_eq!(nav.handle_event(NavEvent::DotClicked(7)), EventOutcome::PassThrough);

    let (mut nav, _clock) = mobile();
    nav.handle_event(NavEvent::DotClicked(2));
    assert_eq!(nav.surface().scroll_y, 1600.0);
    assert_eq!(nav.surface().last_scroll_behavior, Some(ScrollBehavior::Smooth));
}

#[test]
fn test_menu_toggle_and_escape() {
    let (mut nav, _clock) = desktop();
    assert_eq!(nav.handle_event(NavEvent::MenuTrigger), EventOutcome::Consumed);
    assert!(nav.is_menu_open());
    assert!(nav.surface().has_class(BodyClass::MenuActive));

    assert_eq!(nav.handle_event(NavEvent::Key(NavKey::Escape)), EventOutcome::Consumed);
    assert!(!nav.is_menu_open());
    assert!(!nav.surface().has_class(BodyClass::MenuActive));
    let outcome = nav.handle_event(NavEvent::Key(NavKey::Escape));
    assert_eq!(outcome, EventOutcome::PassThrough);
}

#[test]
fn test_reveal_is_applied_once() {
    let (mut nav, clock) = desktop();
    nav.advance(1);
    finish(&mut nav, &clock);
    clock.advance_ms(400);
    nav.advance(-1);
    finish(&mut nav, &clock);

    let s = nav.surface();
    assert_eq!(nav.index(), 0);
    assert_eq!(s.reveal_writes, 2);
    assert!(s.revealed[0] && s.revealed[1]);
}

#[test]
fn test_scroll_cue_dismissed_once() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::Key(NavKey::ArrowUp));
    nav.handle_event(NavEvent::Wheel { delta_y: 0.5 });
    assert!(!nav.surface().cue_hidden);

    nav.handle_event(NavEvent::Wheel { delta_y: 30.0 });
    assert!(nav.surface().cue_hidden);
    assert!(nav.is_cue_dismissed());

    nav.handle_event(NavEvent::Key(NavKey::ArrowDown));
    finish(&mut nav, &clock);
    clock.advance_ms(400);
    nav.handle_event(NavEvent::Key(NavKey::End));
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 4);
    assert_eq!(nav.surface().cue_writes, 1);
}

#[test]
fn test_scroll_cue_hidden_when_leaving_first_slide() {
    let (mut nav, clock) = desktop();
    nav.handle_event(NavEvent::DotClicked(2));
    assert!(!nav.surface().cue_hidden);
    finish(&mut nav, &clock);
    assert!(nav.surface().cue_hidden);
}

#[test]
fn test_scroll_cue_hidden_by_drag() {
    let (mut nav, _clock) = desktop();
    nav.handle_event(NavEvent::TouchStart { y: 500.0 });
    nav.handle_event(NavEvent::TouchMove { y: 495.0 });
    assert!(!nav.surface().cue_hidden);
    nav.handle_event(NavEvent::TouchMove { y: 490.0 });
    assert!(nav.surface().cue_hidden);
    assert!(!nav.is_transitioning());
}

#[test]
fn test_scroll_cue_hidden_by_mobile_scroll() {
    let (mut nav, _clock) = mobile();
    nav.surface_mut().scroll_y = 20.0;
    nav.handle_event(NavEvent::Scroll);
    nav.on_frame();
    assert!(!nav.surface().cue_hidden);

    nav.surface_mut().scroll_y = 25.0;
    nav.handle_event(NavEvent::Scroll);
    assert!(nav.surface().cue_hidden);
}

#[test]
fn test_missing_scroll_cue_is_skipped() {
    let surface = MemorySurface::new(5, 1280.0, 800.0).without(Element::ScrollCue);
    let (mut nav, clock) = ready(surface, config());
    nav.handle_event(NavEvent::Key(NavKey::End));
    finish(&mut nav, &clock);
    assert_eq!(nav.index(), 4);
    assert_eq!(nav.surface().cue_writes, 0);
    assert!(!nav.is_cue_dismissed());
}

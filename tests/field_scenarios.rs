//! End-to-end scenarios for the field animator.
//!
//! These drive the public API the way the windowed host does: input events
//! and timer polls with explicit timestamps, frames drawn into a `DrawList`.

use logo_field::input::FieldInput;
use logo_field::prelude::*;
use logo_field::timers::GrowthTimer;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn animator() -> FieldAnimator {
    FieldAnimator::with_spawn(
        FieldConfig::default(),
        Bounds::new(1000.0, 800.0),
        SpawnContext::seeded(2024),
    )
}

fn still_logo(x: f32, y: f32) -> Logo {
    Logo {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        size: 80.0,
        rotation: 0.0,
        rotation_speed: 0.0,
        opacity: 0.5,
        pulse_phase: 0.0,
    }
}

// ============================================================================
// Growth
// ============================================================================

#[test]
fn test_scroll_past_threshold_grows_to_cap() {
    let mut anim = animator();
    anim.image_loaded();

    // 400 > 0.3 * 800
    anim.handle(FieldEvent::Scroll { offset: 400.0 }, ms(0));
    anim.advance(ms(1999));
    assert_eq!(anim.field().len(), 19);

    anim.advance(ms(2000));
    assert_eq!(anim.field().len(), 20);
    assert_eq!(anim.next_deadline(), None);

    // Timer stopped: no 21st logo, however long we wait or scroll
    anim.handle(FieldEvent::Scroll { offset: 0.0 }, ms(3000));
    anim.handle(FieldEvent::Scroll { offset: 500.0 }, ms(3100));
    anim.advance(ms(60_000));
    assert_eq!(anim.field().len(), 20);
}

#[test]
fn test_growth_runs_before_image_loads() {
    let mut anim = animator();
    anim.handle(FieldEvent::Scroll { offset: 400.0 }, ms(0));
    anim.advance(ms(500));
    assert_eq!(anim.field().len(), 5);

    // Nothing moves or draws until the loop starts
    let before: Vec<Logo> = anim.field().logos().to_vec();
    let mut canvas = DrawList::new();
    anim.frame(&mut canvas);
    assert!(canvas.sprites().is_empty());
    assert_eq!(anim.field().logos(), &before[..]);

    anim.image_loaded();
    anim.frame(&mut canvas);
    assert_eq!(canvas.sprites().len(), 5);
}

#[test]
fn test_ambient_logos_land_on_surface() {
    let mut anim = animator();
    anim.handle(FieldEvent::Scroll { offset: 400.0 }, ms(0));
    anim.advance(ms(2000));

    for logo in anim.field().logos() {
        assert!(logo.position.x >= 0.0 && logo.position.x < 1000.0);
        assert!(logo.position.y >= 0.0 && logo.position.y < 800.0);
        assert!(logo.opacity >= 0.3 && logo.opacity <= 0.8);
    }
}

#[test]
fn test_scroll_indicator_arms_growth_before_image_loads() {
    let mut anim = animator();
    let mut input = FieldInput::new(1000.0, 800.0, 3.0, true);

    input.trigger_scroll_indicator();
    let mut now = ms(0);
    let mut scrolls = 0;
    while input.is_smooth_scrolling() {
        input.step();
        for event in input.drain() {
            assert!(matches!(event, FieldEvent::Scroll { .. }));
            scrolls += 1;
            anim.handle(event, now);
        }
        anim.advance(now);
        now += ms(16);
    }

    assert!(scrolls > 0);
    assert_eq!(anim.state(), LoopState::Unstarted);
    assert_ne!(anim.growth(), GrowthTimer::Idle);

    anim.advance(now + ms(5000));
    assert_eq!(anim.field().len(), 20);
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_click_adds_logo_at_pointer() {
    let mut anim = animator();
    for i in 0..5 {
        anim.handle(FieldEvent::Click { position: Vec2::new(i as f32 * 100.0, 300.0) }, ms(0));
    }
    assert_eq!(anim.field().len(), 5);

    anim.handle(FieldEvent::Click { position: Vec2::new(50.0, 50.0) }, ms(10));
    assert_eq!(anim.field().len(), 6);
    assert_eq!(anim.field().logos()[5].position, Vec2::new(50.0, 50.0));
}

#[test]
fn test_clicks_stop_at_double_cap() {
    let mut anim = animator();
    for _ in 0..100 {
        anim.handle(FieldEvent::Click { position: Vec2::new(10.0, 10.0) }, ms(0));
    }
    assert_eq!(anim.field().len(), 40);
}

#[test]
fn test_pointer_on_logo_center_is_harmless() {
    let mut anim = animator();
    let mut logo = still_logo(100.0, 100.0);
    logo.velocity.x = 1.0;
    anim.field_mut().push(logo);

    anim.handle(FieldEvent::PointerMove { position: Vec2::new(100.0, 100.0) }, ms(0));

    let logo = &anim.field().logos()[0];
    assert_eq!(logo.velocity, Vec2::new(1.0, 0.0));
}

#[test]
fn test_pointer_repels_nearby_logos_only() {
    let mut anim = animator();
    anim.field_mut().push(still_logo(150.0, 100.0));
    anim.field_mut().push(still_logo(900.0, 700.0));

    anim.handle(FieldEvent::PointerMove { position: Vec2::new(100.0, 100.0) }, ms(0));

    let near = &anim.field().logos()[0];
    let far = &anim.field().logos()[1];
    // (200 - 50) / 200 * 0.5 = 0.375, pointing away from the pointer
    assert!((near.velocity.x - 0.375).abs() < 0.0001);
    assert!(near.velocity.y.abs() < 0.0001);
    assert_eq!(far.velocity, Vec2::ZERO);
}

// ============================================================================
// Scroll coupling and decay
// ============================================================================

#[test]
fn test_scroll_impulse_then_single_decay() {
    let mut anim = animator();
    anim.field_mut().push(still_logo(100.0, 100.0));
    anim.field_mut().push(still_logo(500.0, 500.0));

    anim.handle(FieldEvent::Scroll { offset: 50.0 }, ms(1000));
    for logo in anim.field().logos() {
        assert!((logo.velocity.x - 0.5).abs() < 0.0001);
        assert!((logo.velocity.y - 0.5).abs() < 0.0001);
        assert!((logo.rotation_speed - 0.005).abs() < 0.00001);
    }

    anim.advance(ms(1149));
    assert!((anim.field().logos()[0].velocity.x - 0.5).abs() < 0.0001);

    anim.advance(ms(1150));
    for logo in anim.field().logos() {
        assert!((logo.velocity.x - 0.475).abs() < 0.0001);
        assert!((logo.velocity.y - 0.475).abs() < 0.0001);
        assert!((logo.rotation_speed - 0.00475).abs() < 0.00001);
    }

    // Exactly once
    anim.advance(ms(5000));
    assert!((anim.field().logos()[0].velocity.x - 0.475).abs() < 0.0001);
}

#[test]
fn test_decay_waits_for_last_scroll() {
    let mut anim = animator();
    anim.field_mut().push(still_logo(100.0, 100.0));

    anim.handle(FieldEvent::Scroll { offset: 10.0 }, ms(0));
    anim.handle(FieldEvent::Scroll { offset: 20.0 }, ms(100));
    anim.handle(FieldEvent::Scroll { offset: 30.0 }, ms(200));

    // 0.1 per 10px step, three steps
    anim.advance(ms(300));
    assert!((anim.field().logos()[0].velocity.x - 0.3).abs() < 0.0001);

    anim.advance(ms(350));
    assert!((anim.field().logos()[0].velocity.x - 0.285).abs() < 0.0001);
}

#[test]
fn test_scrolling_up_pushes_left_but_still_lifts() {
    let mut anim = animator();
    anim.handle(FieldEvent::Scroll { offset: 100.0 }, ms(0));
    anim.field_mut().push(still_logo(100.0, 100.0));

    anim.handle(FieldEvent::Scroll { offset: 60.0 }, ms(10));
    let logo = &anim.field().logos()[0];
    assert!((logo.velocity.x + 0.4).abs() < 0.0001);
    assert!((logo.velocity.y - 0.4).abs() < 0.0001);
    assert!((logo.rotation_speed + 0.004).abs() < 0.00001);
}

// ============================================================================
// Frame
// ============================================================================

#[test]
fn test_frame_updates_then_draws_each_logo() {
    let mut anim = animator();
    anim.image_loaded();

    let mut logo = still_logo(100.0, 100.0);
    logo.velocity = Vec2::new(2.0, 3.0);
    logo.rotation_speed = 0.1;
    anim.field_mut().push(logo);
    anim.field_mut().push(still_logo(300.0, 300.0));

    let mut canvas = DrawList::new();
    anim.frame(&mut canvas);

    let sprites = canvas.sprites();
    assert_eq!(sprites.len(), 2);
    assert_eq!(sprites[0].center, [102.0, 103.0]);
    assert!((sprites[0].rotation - 0.1).abs() < 0.0001);
    // Pulse phase advanced to 0.02 before drawing
    let expected = 80.0 * (1.0 + 0.1 * 0.02f32.sin());
    assert!((sprites[0].size - expected).abs() < 0.001);
    assert_eq!(sprites[1].center, [300.0, 300.0]);
}

#[test]
fn test_logos_bounce_back_into_view() {
    let mut anim = animator();
    anim.image_loaded();

    let mut logo = still_logo(1075.0, 400.0);
    logo.velocity.x = 10.0;
    anim.field_mut().push(logo);

    let mut canvas = DrawList::new();
    anim.frame(&mut canvas);
    // 1085 > 1000 + 80: reflected, not clamped
    let logo = &anim.field().logos()[0];
    assert_eq!(logo.velocity.x, -10.0);
    assert_eq!(logo.position.x, 1085.0);

    for _ in 0..10 {
        anim.frame(&mut canvas);
    }
    assert!(anim.field().logos()[0].position.x < 1000.0);
}

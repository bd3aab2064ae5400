// Host-side tests driving the mounted effect with a fake clock.

mod common;

use common::{forced_spawn, profile, DrawCall, RecordingSurface, DISPLAY_HZ_MS};
use glam::Vec2;
use singularity_core::*;

fn mount(tier: Tier, params: TierParams) -> BlackHoleEffect<ManualScheduler> {
    let mut effect =
        BlackHoleEffect::with_params(profile(tier), params, ManualScheduler::new(), 7, 0.0)
            .unwrap();
    effect.start();
    effect
}

#[derive(Default, Debug)]
struct Tally {
    throttled: u32,
    skipped: u32,
    rendered: u32,
}

fn run(
    effect: &mut BlackHoleEffect<ManualScheduler>,
    surface: &mut RecordingSurface,
    frames: u32,
    frame_ms: f64,
) -> Tally {
    let mut tally = Tally::default();
    for k in 1..=frames {
        assert!(effect.scheduler_mut().fire().is_some(), "no frame pending");
        match effect.on_frame(k as f64 * frame_ms, surface) {
            FrameOutcome::Throttled => tally.throttled += 1,
            FrameOutcome::Skipped => tally.skipped += 1,
            FrameOutcome::Rendered { .. } => tally.rendered += 1,
            FrameOutcome::Idle => panic!("mounted effect went idle"),
        }
    }
    tally
}

#[test]
fn mount_requests_first_frame() {
    let effect = BlackHoleEffect::mount(profile(Tier::Full), ManualScheduler::new(), 1, 0.0)
        .unwrap();
    assert!(effect.is_mounted());
    assert_eq!(effect.scheduler().requested(), 1);
    assert_eq!(effect.pending_frame(), effect.scheduler().pending());
}

#[test]
fn every_callback_rerequests_a_frame() {
    let mut effect = mount(Tier::Full, TierParams::full(1280.0));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    run(&mut effect, &mut surface, 30, DISPLAY_HZ_MS);
    assert_eq!(effect.scheduler().requested(), 31);
}

#[test]
fn full_tier_at_sixty_hz_renders_every_fourth_callback() {
    let mut effect = mount(Tier::Full, TierParams::full(1280.0));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let tally = run(&mut effect, &mut surface, 60, DISPLAY_HZ_MS);
    assert_eq!(tally.throttled, 30);
    assert_eq!(tally.skipped, 15);
    assert_eq!(tally.rendered, 15);
}

#[test]
fn low_tier_at_sixty_hz_processes_every_third_admitted_frame() {
    let mut effect = mount(Tier::Low, TierParams::low());
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let tally = run(&mut effect, &mut surface, 180, DISPLAY_HZ_MS);
    assert_eq!(tally.throttled, 120);
    assert_eq!(tally.skipped, 40);
    assert_eq!(tally.rendered, 20);
}

#[test]
fn full_tier_draw_order() {
    let mut effect = mount(Tier::Full, forced_spawn(Tier::Full));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    run(&mut effect, &mut surface, 40, DISPLAY_HZ_MS);
    assert!(!effect.field().is_empty());

    // keep only the last processed frame
    let calls = surface.take();
    let last_fade = calls
        .iter()
        .rposition(|c| matches!(c, DrawCall::Fade(_)))
        .unwrap();
    let frame = &calls[last_fade..];

    assert_eq!(frame[0], DrawCall::Fade(0.08));
    let n = frame.len();
    assert!(matches!(frame[n - 2], DrawCall::Radial { stops: 3, .. }));
    assert!(matches!(frame[n - 1], DrawCall::Ring { .. }));
    let circles = frame[1..n - 2]
        .iter()
        .filter(|c| matches!(c, DrawCall::Circle { .. }))
        .count();
    assert_eq!(circles, n - 3);
    assert_eq!(circles, effect.field().len());
}

#[test]
fn low_tier_draws_flat_particles_and_solid_disc() {
    let mut effect = mount(Tier::Low, forced_spawn(Tier::Low));
    let mut surface = RecordingSurface::new(1024.0, 768.0);
    run(&mut effect, &mut surface, 120, DISPLAY_HZ_MS);

    let calls = surface.take();
    let last_fade = calls
        .iter()
        .rposition(|c| matches!(c, DrawCall::Fade(_)))
        .unwrap();
    let frame = &calls[last_fade..];
    assert_eq!(frame[0], DrawCall::Fade(0.15));
    match frame.last().unwrap() {
        DrawCall::Circle {
            center,
            radius,
            color,
        } => {
            assert_eq!(*center, Vec2::new(512.0, 384.0));
            assert_eq!(*radius, HORIZON_DISC_RADIUS);
            assert_eq!(*color, HORIZON_CORE);
        }
        other => panic!("expected solid disc, got {other:?}"),
    }
    for call in &frame[1..frame.len() - 1] {
        if let DrawCall::Circle { color, .. } = call {
            assert_eq!(color.hue, LOW_TIER_PARTICLE.hue);
            assert!(color.alpha >= ALPHA_FLOOR && color.alpha <= 1.0);
        }
    }
}

#[test]
fn center_follows_surface_size() {
    let mut effect = mount(Tier::Full, TierParams::full(1280.0));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    run(&mut effect, &mut surface, 4, DISPLAY_HZ_MS);
    assert_eq!(effect.field().center(), Vec2::new(400.0, 300.0));

    surface.size = Vec2::new(1200.0, 900.0);
    for k in 5..=8 {
        effect.scheduler_mut().fire();
        effect.on_frame(k as f64 * DISPLAY_HZ_MS, &mut surface);
    }
    assert_eq!(effect.field().center(), Vec2::new(600.0, 450.0));
}

#[test]
fn absorbed_particle_is_never_drawn() {
    let mut effect = mount(Tier::Full, TierParams::full(1280.0));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    // first processed frame of the full tier at 60 Hz is the fourth callback
    run(&mut effect, &mut surface, 3, DISPLAY_HZ_MS);
    surface.take();
    effect
        .field_mut()
        .insert(Particle::at_rest(Vec2::new(424.0, 300.0), 2.0, 250.0));

    effect.scheduler_mut().fire();
    let outcome = effect.on_frame(4.0 * DISPLAY_HZ_MS, &mut surface);
    match outcome {
        FrameOutcome::Rendered { report, .. } => assert_eq!(report.absorbed, 1),
        other => panic!("expected a rendered frame, got {other:?}"),
    }
    let drawn = surface
        .calls
        .iter()
        .filter(|c| matches!(c, DrawCall::Circle { .. }))
        .count();
    assert_eq!(drawn, effect.field().len());
}

#[test]
fn sustained_half_rate_lowers_quality_three_times() {
    let mut effect = mount(Tier::Low, TierParams::low());
    let mut surface = RecordingSurface::new(800.0, 600.0);
    // 12 callbacks per second, every one admitted: half the 24 fps target
    let frame_ms = 1000.0 / 12.0;
    let tally = run(&mut effect, &mut surface, 80, frame_ms);
    assert_eq!(tally.throttled, 0);
    assert!((effect.quality().scalar() - 0.7).abs() < 1e-6);

    for k in 81..=400 {
        effect.scheduler_mut().fire();
        effect.on_frame(k as f64 * frame_ms, &mut surface);
    }
    assert_eq!(effect.quality().scalar(), QUALITY_MIN);
}

#[test]
fn on_target_admission_keeps_quality() {
    let mut effect = mount(Tier::Low, TierParams::low());
    let mut surface = RecordingSurface::new(800.0, 600.0);
    // 60 Hz display admits ~20 frames per second, inside the dead band
    run(&mut effect, &mut surface, 600, DISPLAY_HZ_MS);
    assert_eq!(effect.quality().scalar(), 1.0);
}

#[test]
fn lowered_quality_shrinks_budget() {
    let mut effect = mount(Tier::Low, forced_spawn(Tier::Low));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let frame_ms = 1000.0 / 12.0;
    for k in 1..=400u32 {
        effect.scheduler_mut().fire();
        if let FrameOutcome::Rendered { spawned: true, .. } =
            effect.on_frame(k as f64 * frame_ms, &mut surface)
        {
            let budget = effect.field().spawn_budget(effect.quality().scalar());
            assert!(effect.field().len() <= budget);
        }
    }
    assert_eq!(effect.field().spawn_budget(effect.quality().scalar()), 3);
}

#[test]
fn unmount_cancels_pending_frame_and_goes_idle() {
    let mut effect = mount(Tier::Full, forced_spawn(Tier::Full));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    run(&mut effect, &mut surface, 20, DISPLAY_HZ_MS);
    let pending = effect.pending_frame().unwrap();

    effect.unmount();
    assert!(!effect.is_mounted());
    assert_eq!(effect.pending_frame(), None);
    assert_eq!(effect.scheduler().pending(), None);
    assert_eq!(effect.scheduler().cancelled(), &[pending]);
    assert!(effect.field().is_empty());

    let requested = effect.scheduler().requested();
    surface.take();
    assert_eq!(effect.on_frame(10_000.0, &mut surface), FrameOutcome::Idle);
    assert!(surface.calls.is_empty());
    assert_eq!(effect.scheduler().requested(), requested);

    // a second teardown is a no-op
    effect.unmount();
    assert_eq!(effect.scheduler().cancelled().len(), 1);
}

struct RefusingScheduler;

impl FrameScheduler for RefusingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        None
    }

    fn cancel(&mut self, _handle: FrameHandle) {}
}

#[test]
fn host_without_scheduling_leaves_effect_inert() {
    let effect = BlackHoleEffect::mount(profile(Tier::Low), RefusingScheduler, 1, 0.0).unwrap();
    assert_eq!(effect.pending_frame(), None);
    assert!(effect.field().is_empty());
}

#[test]
fn backing_scale_follows_tier() {
    let mut p = profile(Tier::Full);
    p.device_pixel_ratio = 3.0;
    let full = BlackHoleEffect::new(p.clone(), ManualScheduler::new(), 1, 0.0).unwrap();
    assert_eq!(full.backing_scale(), 1.5);
    p.tier = Tier::Low;
    let low = BlackHoleEffect::new(p, ManualScheduler::new(), 1, 0.0).unwrap();
    assert_eq!(low.backing_scale(), 0.75);
}

#[test]
fn backing_scale_tracks_pixel_ratio_after_mount() {
    let full = BlackHoleEffect::new(profile(Tier::Full), ManualScheduler::new(), 1, 0.0).unwrap();
    assert_eq!(full.backing_scale(), 1.0);
    // zooming to 200% raises the ratio; the full tier follows up to its cap
    assert_eq!(full.backing_scale_for(2.0), 1.5);
    assert_eq!(full.backing_scale_for(1.25), 1.25);
    assert_eq!(full.backing_scale_for(0.5), 0.5);

    let low = BlackHoleEffect::new(profile(Tier::Low), ManualScheduler::new(), 1, 0.0).unwrap();
    assert_eq!(low.backing_scale_for(2.0), 0.75);
    assert_eq!(low.backing_scale_for(1.0), 0.75);
}

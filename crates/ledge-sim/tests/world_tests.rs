// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::expect_used)]

use approx::assert_abs_diff_eq;
use ledge_app_core::prefs::{PhysicsPrefs, PrefsError, ResolverMode};
use ledge_geom::GeomError;
use ledge_math::Vec3;
use ledge_sim::{
    AppContext, Body, FrameReport, InputSnapshot, Level, ObjectId, ObjectKind, SimError, SimEvent,
    World,
};
use proptest::prelude::*;

const FORWARD: InputSnapshot = InputSnapshot {
    forward: 1.0,
    strafe: 0.0,
    turn: 0.0,
    jump: false,
};

const RIGHT: InputSnapshot = InputSnapshot {
    forward: 0.0,
    strafe: 1.0,
    turn: 0.0,
    jump: false,
};

fn prefs(resolver: ResolverMode) -> PhysicsPrefs {
    PhysicsPrefs {
        resolver,
        ..PhysicsPrefs::default()
    }
}

/// Floor slab with its top at y = 2.
fn floored(spawn: Vec3) -> (Level, ObjectId) {
    let mut level = Level::new(spawn);
    let floor = level.platform(Vec3::new(0.0, 1.5, 0.0), Vec3::new(40.0, 1.0, 10.0));
    (level, floor)
}

fn run(world: &mut World, frames: u64, input: InputSnapshot) -> Vec<FrameReport> {
    let start = world.frames();
    (start..start + frames)
        .map(|frame| world.step(&AppContext::new(frame, input)))
        .collect()
}

fn events(reports: &[FrameReport]) -> Vec<SimEvent> {
    reports.iter().flat_map(|r| r.events.clone()).collect()
}

#[test]
fn falling_player_lands_once_and_rests_on_the_floor() {
    for mode in [ResolverMode::Discrete, ResolverMode::Swept] {
        let (level, floor) = floored(Vec3::new(0.0, 3.5, 0.0));
        let mut world = World::new(prefs(mode), &level).expect("valid level");
        let reports = run(&mut world, 90, InputSnapshot::IDLE);

        let last = reports.last().expect("frames ran");
        assert!(last.grounded, "{mode}: player should rest on the floor");
        assert!(last.contacts > 0);
        assert_eq!(last.velocity.y(), 0.0);
        assert_abs_diff_eq!(last.position.y(), 2.5, epsilon = 2e-3);
        assert_eq!(
            events(&reports),
            vec![SimEvent::Landed { on: floor }],
            "{mode}: exactly one landing"
        );
    }
}

#[test]
fn walls_stop_horizontal_motion() {
    for mode in [ResolverMode::Discrete, ResolverMode::Swept] {
        let (mut level, _) = floored(Vec3::new(0.0, 2.5, 0.0));
        level.platform(Vec3::new(3.0, 3.0, 0.0), Vec3::new(1.0, 4.0, 10.0));
        let mut world = World::new(prefs(mode), &level).expect("valid level");
        let reports = run(&mut world, 120, RIGHT);

        let last = reports.last().expect("frames ran");
        // Wall face at x = 2.5, player half-width 0.3.
        assert!(last.position.x() <= 2.2 + 1e-3, "{mode}: x = {}", last.position.x());
        assert!(last.position.x() > 2.0, "{mode}: should reach the wall");
        assert!(last.grounded);
        assert_eq!(last.velocity.x(), 0.0);
    }
}

#[test]
fn swept_resolver_stops_fast_bodies_at_thin_walls() {
    let fast = |resolver| PhysicsPrefs {
        resolver,
        move_speed: 600.0,
        ..PhysicsPrefs::default()
    };
    let (mut level, _) = floored(Vec3::new(0.0, 2.5, 0.0));
    let wall = level.platform(Vec3::new(2.0, 3.0, 0.0), Vec3::new(0.05, 2.0, 10.0));

    let mut swept = World::new(fast(ResolverMode::Swept), &level).expect("valid level");
    let report = swept.step(&AppContext::new(0, RIGHT));
    let face = swept.obstacle(wall).expect("wall exists").world_box().min().x();
    assert!(report.position.x() + 0.3 <= face + 1e-4);
    assert!(report.position.x() > 1.0);

    let mut discrete = World::new(fast(ResolverMode::Discrete), &level).expect("valid level");
    let report = discrete.step(&AppContext::new(0, RIGHT));
    assert!(report.position.x() > 3.0, "discrete stepping tunnels through");
}

#[test]
fn pressure_plate_raises_its_bridge() {
    let level = Level::demo();
    let mut world = World::new(PhysicsPrefs::default(), &level).expect("demo is valid");
    let bridge = world
        .obstacles()
        .iter()
        .find(|o| o.kind() == ObjectKind::Bridge)
        .map(Body::id)
        .expect("demo has a bridge");

    let reports = run(&mut world, 240, FORWARD);
    let all = events(&reports);
    let activated = all
        .iter()
        .position(|e| matches!(e, SimEvent::TriggerActivated { .. }))
        .expect("plate pressed");
    assert_eq!(all[activated + 1], SimEvent::BridgeRaised { bridge });

    let raised = world
        .obstacle(bridge)
        .expect("bridge exists")
        .as_bridge()
        .expect("is a bridge");
    assert!(raised.is_raised());
    assert_eq!(raised.spatial().position().y(), raised.raised_y());
    // Walked over the plate, across the raised bridge, and onto the far slab.
    assert!(world.player().position().z() > 14.0);
    assert!(!all.iter().any(|e| matches!(e, SimEvent::Respawned { .. })));
}

#[test]
fn collectables_count_once_and_do_not_block() {
    let (mut level, _) = floored(Vec3::new(0.0, 2.5, 0.0));
    let gem = level.collectable(Vec3::new(0.0, 2.6, 2.0));
    let mut world = World::new(PhysicsPrefs::default(), &level).expect("valid level");

    let reports = run(&mut world, 70, FORWARD);
    let collected: Vec<_> = events(&reports)
        .into_iter()
        .filter(|e| matches!(e, SimEvent::Collected { .. }))
        .collect();
    assert_eq!(collected, vec![SimEvent::Collected { item: gem, score: 1 }]);
    assert_eq!(world.score(), 1);
    assert!(world.player().position().z() > 4.0);
    let item = world.obstacle(gem).expect("gem exists");
    assert!(item.as_collectable().expect("is a gem").is_collected());
}

#[test]
fn falling_off_the_course_respawns() {
    let spawn = Vec3::new(0.0, 2.5, 0.0);
    let mut level = Level::new(spawn);
    level.platform(Vec3::new(0.0, 1.5, 0.0), Vec3::new(4.0, 1.0, 4.0));
    let mut world = World::new(PhysicsPrefs::default(), &level).expect("valid level");

    let reports = run(&mut world, 200, FORWARD);
    let frame = reports
        .iter()
        .find(|r| r.events.iter().any(|e| matches!(e, SimEvent::Respawned { .. })))
        .expect("fell off");
    assert_eq!(frame.position, spawn);
    assert_eq!(frame.velocity, Vec3::ZERO);
}

#[test]
fn step_guard_keeps_a_ledge_landing_on_top() {
    // Lands with 0.02 of footprint over the edge and ~0.033 of penetration.
    let spawn = Vec3::new(5.28, 4.5, 0.0);
    let mut level = Level::new(spawn);
    level.platform(Vec3::new(0.0, 1.5, 0.0), Vec3::new(10.0, 1.0, 10.0));

    let mut guarded = World::new(PhysicsPrefs::default(), &level).expect("valid level");
    let reports = run(&mut guarded, 120, InputSnapshot::IDLE);
    assert!(reports.last().expect("frames ran").grounded);
    assert!(!events(&reports)
        .iter()
        .any(|e| matches!(e, SimEvent::Respawned { .. })));

    let unguarded_prefs = PhysicsPrefs {
        step_guard: None,
        ..PhysicsPrefs::default()
    };
    let mut unguarded = World::new(unguarded_prefs, &level).expect("valid level");
    let reports = run(&mut unguarded, 120, InputSnapshot::IDLE);
    assert!(events(&reports)
        .iter()
        .any(|e| matches!(e, SimEvent::Respawned { .. })));
}

#[test]
fn demo_walk_without_timing_drops_off_the_shuttle() {
    for mode in [ResolverMode::Discrete, ResolverMode::Swept] {
        let mut world = World::new(prefs(mode), &Level::demo()).expect("demo is valid");
        let reports = run(&mut world, 600, FORWARD);
        let from = events(&reports)
            .into_iter()
            .find_map(|e| match e {
                SimEvent::Respawned { from } => Some(from),
                _ => None,
            })
            .expect("straight walk falls off");
        assert!(from.z() > 20.0, "{mode}: fell past the walled landing");
    }
}

#[test]
fn kerb_is_stepped_onto_only_by_the_discrete_resolver() {
    // 1/64 s frames and a 0.5 wide player keep every x coordinate exact.
    let tuned = |resolver| PhysicsPrefs {
        resolver,
        fixed_dt: 1.0 / 64.0,
        ..PhysicsPrefs::default()
    };
    let (mut level, _) = floored(Vec3::new(0.0, 2.5, 0.0));
    level = level.with_player_size(Vec3::new(0.5, 1.0, 0.5));
    level.platform(Vec3::new(6.5, 2.1, 0.0), Vec3::new(8.0, 0.2, 10.0));

    let mut discrete = World::new(tuned(ResolverMode::Discrete), &level).expect("valid level");
    let last = run(&mut discrete, 120, RIGHT).pop().expect("frames ran");
    assert_abs_diff_eq!(last.position.x(), 7.5, epsilon = 1e-4);
    assert_abs_diff_eq!(last.position.y(), 2.7, epsilon = 2e-3);
    assert!(last.grounded);

    let mut swept = World::new(tuned(ResolverMode::Swept), &level).expect("valid level");
    let last = run(&mut swept, 120, RIGHT).pop().expect("frames ran");
    assert_eq!(last.position.x(), 2.25);
    assert_abs_diff_eq!(last.position.y(), 2.5, epsilon = 2e-3);
}

#[test]
fn overlapping_solids_resolve_in_list_order() {
    let discrete = |level: &Level| {
        let mut world = World::new(prefs(ResolverMode::Discrete), level).expect("valid level");
        world.step(&AppContext::new(0, InputSnapshot::IDLE))
    };

    // Sunk 0.05 into the floor and 0.1 into a block on the right: the floor
    // lifts the player, then the block pushes it left.
    let (mut level, _) = floored(Vec3::new(0.0, 2.45, 0.0));
    level.platform(Vec3::new(0.7, 2.5, 0.0), Vec3::ONE);
    let report = discrete(&level);
    assert_eq!(report.contacts, 2);
    assert_abs_diff_eq!(report.position.x(), -0.1, epsilon = 1e-5);
    assert_abs_diff_eq!(report.position.y(), 2.5, epsilon = 1e-5);
    assert_eq!(report.position.z(), 0.0);
    assert!(report.grounded);

    // A stub just under the floor's top. Listed after the floor, the lift
    // already clears it; listed first, its shallow side push lands too.
    let stub = (Vec3::new(0.77, 1.4975, 0.0), Vec3::new(1.0, 0.995, 1.0));
    let unguarded = PhysicsPrefs {
        step_guard: None,
        ..PhysicsPrefs::default()
    };

    let (mut floor_first, _) = floored(Vec3::new(0.0, 2.45, 0.0));
    floor_first.platform(stub.0, stub.1);
    let mut world = World::new(unguarded.clone(), &floor_first).expect("valid level");
    let report = world.step(&AppContext::new(0, InputSnapshot::IDLE));
    assert_eq!(report.contacts, 1);
    assert_eq!(report.position.x(), 0.0);

    let mut stub_first = Level::new(Vec3::new(0.0, 2.45, 0.0));
    stub_first.platform(stub.0, stub.1);
    stub_first.platform(Vec3::new(0.0, 1.5, 0.0), Vec3::new(40.0, 1.0, 10.0));
    let mut world = World::new(unguarded, &stub_first).expect("valid level");
    let report = world.step(&AppContext::new(0, InputSnapshot::IDLE));
    assert_eq!(report.contacts, 2);
    assert_abs_diff_eq!(report.position.x(), -0.03, epsilon = 1e-5);
    assert_abs_diff_eq!(report.position.y(), 2.5, epsilon = 1e-5);
}

#[test]
fn swept_mode_lets_a_moving_platform_push_the_player() {
    let (mut level, _) = floored(Vec3::new(0.0, 2.5, 0.0));
    let pusher = level.moving_platform(
        Vec3::new(-3.0, 2.5, 0.0),
        Vec3::new(5.0, 2.5, 0.0),
        Vec3::ONE,
        2.0,
    );
    let mut world = World::new(prefs(ResolverMode::Swept), &level).expect("valid level");

    for frame in 0..120 {
        let report = world.step(&AppContext::new(frame, InputSnapshot::IDLE));
        let front = world.obstacle(pusher).expect("pusher").world_box().max().x();
        let back = world.player().world_box().min().x();
        assert!(front - back <= 1e-4, "frame {frame}: left overlapping by {}", front - back);
        assert!(report.grounded);
    }
    // The pusher has travelled 4 units to x = 1 and the player sits flush ahead of it.
    assert_abs_diff_eq!(world.player().position().x(), 1.8, epsilon = 5e-3);
    assert_abs_diff_eq!(world.player().position().y(), 2.5, epsilon = 2e-3);
}

#[test]
fn non_finite_transform_keeps_last_good_box() {
    let (level, floor) = floored(Vec3::new(0.0, 2.5, 0.0));
    let mut world = World::new(PhysicsPrefs::default(), &level).expect("valid level");
    run(&mut world, 5, InputSnapshot::IDLE);

    let before = *world.obstacle(floor).expect("floor").world_box();
    world
        .obstacle_mut(floor)
        .expect("floor")
        .spatial_mut()
        .set_position(Vec3::new(f32::NAN, 1.5, 0.0));
    let reports = run(&mut world, 5, InputSnapshot::IDLE);

    let after = world.obstacle(floor).expect("floor");
    assert_eq!(*after.world_box(), before);
    assert_eq!(after.transform().translation(), Vec3::new(0.0, 1.5, 0.0));
    assert!(reports.last().expect("frames ran").grounded);
}

#[test]
fn construction_rejects_bad_prefs_and_links() {
    let (mut level, floor) = floored(Vec3::ZERO);
    let bad = PhysicsPrefs {
        fixed_dt: -1.0,
        ..PhysicsPrefs::default()
    };
    assert!(matches!(
        World::new(bad, &level),
        Err(SimError::InvalidPrefs(PrefsError::OutOfRange { .. }))
    ));

    let mut dangling = level.clone();
    dangling.trigger(Vec3::ZERO, Vec3::ONE, &[ObjectId(42)]);
    assert_eq!(
        World::new(PhysicsPrefs::default(), &dangling).err(),
        Some(SimError::UnknownObject(ObjectId(42)))
    );

    let plate = level.trigger(Vec3::ZERO, Vec3::ONE, &[floor]);
    assert_eq!(
        World::new(PhysicsPrefs::default(), &level).err(),
        Some(SimError::NotABridge {
            trigger: plate,
            target: floor,
        })
    );

    let mut broken = Level::new(Vec3::new(f32::INFINITY, 0.0, 0.0));
    broken.platform(Vec3::ZERO, Vec3::ONE);
    assert_eq!(
        World::new(PhysicsPrefs::default(), &broken).err(),
        Some(SimError::Geom(GeomError::NonFiniteTransform))
    );
}

#[test]
fn object_lookup_and_shared_bounds() {
    let level = Level::demo();
    let world = World::new(PhysicsPrefs::default(), &level).expect("demo is valid");
    assert_eq!(
        world.obstacle(ObjectId(999)).err(),
        Some(SimError::UnknownObject(ObjectId(999)))
    );
    // Player, platform, collectable, bridge, trigger.
    assert_eq!(world.cache().len(), 5);
    let platforms: Vec<_> = world
        .obstacles()
        .iter()
        .filter(|o| o.kind() == ObjectKind::Platform)
        .collect();
    assert!(platforms.len() > 1);
    assert!(std::sync::Arc::ptr_eq(
        platforms[0].spatial().model(),
        platforms[1].spatial().model()
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn idle_drops_settle_on_top_of_the_floor(
        drop in 0.0f32..3.0,
        x in -4.0f32..4.0,
        swept in any::<bool>(),
    ) {
        let mode = if swept { ResolverMode::Swept } else { ResolverMode::Discrete };
        let (level, _) = floored(Vec3::new(x, 2.5 + drop, 0.0));
        let mut world = World::new(prefs(mode), &level).expect("valid level");
        let reports = run(&mut world, 150, InputSnapshot::IDLE);
        let last = reports.last().expect("frames ran");
        prop_assert!(last.grounded);
        prop_assert!((last.position.y() - 2.5).abs() <= 2e-3);
        prop_assert!((last.position.x() - x).abs() <= 1e-5);
    }
}

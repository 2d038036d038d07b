// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_app_core::prefs::{PhysicsPrefs, ResolverMode};
use ledge_geom::{overlaps, sweep, Aabb, DiscreteResolver};
use ledge_math::{Axis, Vec3};
use tracing::{debug, info, instrument, warn};

use crate::body::{Body, Spatial};
use crate::cache::BoundsCache;
use crate::error::SimError;
use crate::input::AppContext;
use crate::level::{Level, ObstacleDesc};
use crate::objects::{
    Bridge, Collectable, ObjectId, ObjectKind, Obstacle, Platform, Player, Trigger,
};

/// Vertical slack when deciding which obstacles the player stands on.
const SUPPORT_TOLERANCE: f32 = 1e-3;

/// Something that happened during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// The player touched down after being airborne.
    Landed {
        /// Obstacle landed on.
        on: ObjectId,
    },
    /// A pressure plate was pressed for the first time.
    TriggerActivated {
        /// The plate.
        trigger: ObjectId,
    },
    /// A bridge started rising.
    BridgeRaised {
        /// The bridge.
        bridge: ObjectId,
    },
    /// A pickup was collected.
    Collected {
        /// The pickup.
        item: ObjectId,
        /// Score after collecting it.
        score: u32,
    },
    /// The player fell below the course and was reset.
    Respawned {
        /// Position just before the reset.
        from: Vec3,
    },
}

/// Outcome of one [`World::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame index from the context.
    pub frame: u64,
    /// Events in the order they happened.
    pub events: Vec<SimEvent>,
    /// Collision responses applied to the player.
    pub contacts: usize,
    /// Player position at the end of the frame.
    pub position: Vec3,
    /// Player velocity at the end of the frame.
    pub velocity: Vec3,
    /// Whether the player ended the frame on the ground.
    pub grounded: bool,
    /// Collectables picked up so far.
    pub score: u32,
}

/// Earliest swept impact over all solid obstacles.
struct Impact {
    obstacle: ObjectId,
    time_of_impact: f32,
    axis: Axis,
    normal: Vec3,
}

/// The running course: one player, obstacles in test order.
#[derive(Debug)]
pub struct World {
    prefs: PhysicsPrefs,
    resolver: DiscreteResolver,
    cache: BoundsCache,
    player: Player,
    obstacles: Vec<Obstacle>,
    score: u32,
    frames: u64,
}

impl World {
    /// Instantiates `level` with validated `prefs`.
    ///
    /// Fails on invalid prefs, non-finite placements, or trigger links that
    /// do not name a bridge.
    pub fn new(prefs: PhysicsPrefs, level: &Level) -> Result<Self, SimError> {
        prefs.validate()?;
        let mut cache = BoundsCache::new();
        let player = Player::new(
            cache.get(ObjectKind::Player)?,
            level.spawn(),
            level.spawn_yaw(),
            level.player_size(),
            prefs.clone(),
        )?;

        let mut obstacles = Vec::with_capacity(level.obstacles().len());
        for (id, desc) in level.obstacles() {
            let spatial = Spatial::new(cache.get(desc.kind())?, *desc.transform())?;
            let obstacle = match desc {
                ObstacleDesc::Platform { patrol: None, .. } => {
                    Obstacle::Platform(Platform::fixed(*id, spatial))
                }
                ObstacleDesc::Platform {
                    patrol: Some(patrol),
                    ..
                } => Obstacle::Platform(Platform::patrolling(*id, spatial, *patrol)),
                ObstacleDesc::Trigger { bridges, .. } => {
                    Obstacle::Trigger(Trigger::new(*id, spatial, bridges.clone()))
                }
                ObstacleDesc::Bridge {
                    raised_y, speed, ..
                } => Obstacle::Bridge(Bridge::new(*id, spatial, *raised_y, *speed)),
                ObstacleDesc::Collectable { .. } => {
                    Obstacle::Collectable(Collectable::new(*id, spatial))
                }
            };
            obstacles.push(obstacle);
        }

        let resolver = prefs
            .step_guard
            .map_or_else(DiscreteResolver::new, |h| {
                DiscreteResolver::new().with_step_guard(h)
            });
        let world = Self {
            prefs,
            resolver,
            cache,
            player,
            obstacles,
            score: 0,
            frames: 0,
        };
        world.check_links()?;
        info!(
            obstacles = world.obstacles.len(),
            resolver = %world.prefs.resolver,
            "world ready"
        );
        Ok(world)
    }

    fn check_links(&self) -> Result<(), SimError> {
        for trigger in self.obstacles.iter().filter_map(Obstacle::as_trigger) {
            for target in trigger.bridges() {
                if self.obstacle(*target)?.as_bridge().is_none() {
                    return Err(SimError::NotABridge {
                        trigger: trigger.id(),
                        target: *target,
                    });
                }
            }
        }
        Ok(())
    }

    /// Physics parameters in use.
    pub const fn prefs(&self) -> &PhysicsPrefs {
        &self.prefs
    }

    /// The player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Obstacles in test order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Obstacle by id.
    pub fn obstacle(&self, id: ObjectId) -> Result<&Obstacle, SimError> {
        self.obstacles
            .iter()
            .find(|o| o.id() == id)
            .ok_or(SimError::UnknownObject(id))
    }

    /// Mutable obstacle by id.
    pub fn obstacle_mut(&mut self, id: ObjectId) -> Result<&mut Obstacle, SimError> {
        self.obstacles
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(SimError::UnknownObject(id))
    }

    /// Shared model bounds.
    pub const fn cache(&self) -> &BoundsCache {
        &self.cache
    }

    /// Collectables picked up so far.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Frames stepped so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one fixed frame of `prefs.fixed_dt` seconds.
    #[instrument(level = "debug", skip_all, fields(frame = ctx.frame))]
    pub fn step(&mut self, ctx: &AppContext) -> FrameReport {
        let dt = self.prefs.fixed_dt;
        let was_grounded = self.player.is_grounded();
        let mut events = Vec::new();

        self.player.apply_input(&ctx.input, dt);
        self.player.update(dt);

        for obstacle in &mut self.obstacles {
            obstacle.update(dt);
            refresh_logged(obstacle);
        }

        let (contacts, grounded) = match self.prefs.resolver {
            ResolverMode::Discrete => self.move_discrete(dt),
            ResolverMode::Swept => self.move_swept(dt),
        };
        self.player.set_grounded(grounded);

        let supports = if grounded { self.supports() } else { Vec::new() };
        if grounded && !was_grounded {
            if let Some(on) = supports.first() {
                debug!(%on, "landed");
                events.push(SimEvent::Landed { on: *on });
            }
        }
        self.press_triggers(&supports, &mut events);
        self.collect_pickups(&mut events);

        let position = self.player.position();
        if position.y() < self.prefs.respawn_height {
            self.player.respawn();
            refresh_logged(&mut self.player);
            info!(from = ?position, "player respawned");
            events.push(SimEvent::Respawned { from: position });
        }

        self.frames += 1;
        FrameReport {
            frame: ctx.frame,
            events,
            contacts,
            position: self.player.position(),
            velocity: self.player.velocity(),
            grounded: self.player.is_grounded(),
            score: self.score,
        }
    }

    /// Integrates, then pushes the player out of each overlapping solid in
    /// list order. Returns the contact count and the grounded flag.
    fn move_discrete(&mut self, dt: f32) -> (usize, bool) {
        let delta = self.player.velocity() * dt;
        self.player.spatial_mut().translate(delta);
        refresh_logged(&mut self.player);
        self.resolve_overlaps()
    }

    /// Applies the discrete resolver against every solid obstacle.
    fn resolve_overlaps(&mut self) -> (usize, bool) {
        let mut contacts = 0;
        let mut grounded = false;
        for obstacle in self.obstacles.iter().filter(|o| o.is_solid()) {
            let Some(contact) = self.resolver.resolve(
                self.player.world_box(),
                obstacle.world_box(),
                self.player.velocity(),
            ) else {
                continue;
            };
            debug!(
                obstacle = %obstacle.id(),
                axis = %contact.axis,
                depth = contact.depth,
                "resolved overlap"
            );
            self.player.spatial_mut().translate(contact.correction);
            self.player.set_velocity(contact.velocity);
            refresh_logged(&mut self.player);
            contacts += 1;
            grounded |= contact.grounded && contact.depth > 0.0;
        }
        (contacts, grounded)
    }

    /// Moves to the earliest impact, drops the blocked component, and slides
    /// the rest; residual overlaps (from moving obstacles) are then resolved
    /// discretely.
    fn move_swept(&mut self, dt: f32) -> (usize, bool) {
        refresh_logged(&mut self.player);
        let mut remaining = self.player.velocity() * dt;
        let mut contacts = 0;
        let mut grounded = false;

        for _ in 0..self.prefs.max_slide_iterations {
            if remaining.is_zero() {
                break;
            }
            let Some(impact) = self.earliest_impact(remaining) else {
                self.player.spatial_mut().translate(remaining);
                refresh_logged(&mut self.player);
                break;
            };
            debug!(
                obstacle = %impact.obstacle,
                toi = impact.time_of_impact,
                axis = %impact.axis,
                "swept impact"
            );
            self.player
                .spatial_mut()
                .translate(remaining * impact.time_of_impact);
            refresh_logged(&mut self.player);
            let velocity = self.player.velocity().with(impact.axis, 0.0);
            self.player.set_velocity(velocity);
            remaining = (remaining * (1.0 - impact.time_of_impact)).with(impact.axis, 0.0);
            contacts += 1;
            grounded |= impact.axis.is_vertical() && impact.normal.y() > 0.0;
        }

        let (residual, pushed_up) = self.resolve_overlaps();
        (contacts + residual, grounded || pushed_up)
    }

    fn earliest_impact(&self, displacement: Vec3) -> Option<Impact> {
        let mover = self.player.world_box();
        let mut best: Option<Impact> = None;
        for obstacle in self.obstacles.iter().filter(|o| o.is_solid()) {
            let hit = match sweep(mover, obstacle.world_box(), displacement) {
                Ok(hit) => hit,
                Err(err) => {
                    warn!(obstacle = %obstacle.id(), %err, "sweep skipped");
                    continue;
                }
            };
            let Some(axis) = hit.axis() else {
                continue;
            };
            if best
                .as_ref()
                .is_none_or(|b| hit.time_of_impact < b.time_of_impact)
            {
                best = Some(Impact {
                    obstacle: obstacle.id(),
                    time_of_impact: hit.time_of_impact,
                    axis,
                    normal: hit.normal,
                });
            }
        }
        best
    }

    /// Solid obstacles directly beneath the player, in list order.
    fn supports(&self) -> Vec<ObjectId> {
        let feet = self.player.world_box();
        self.obstacles
            .iter()
            .filter(|o| o.is_solid() && stands_on(feet, o.world_box()))
            .map(Body::id)
            .collect()
    }

    fn press_triggers(&mut self, supports: &[ObjectId], events: &mut Vec<SimEvent>) {
        let mut raise = Vec::new();
        for obstacle in &mut self.obstacles {
            let Obstacle::Trigger(trigger) = obstacle else {
                continue;
            };
            if supports.contains(&trigger.id()) && trigger.activate() {
                info!(trigger = %trigger.id(), "trigger activated");
                events.push(SimEvent::TriggerActivated {
                    trigger: trigger.id(),
                });
                raise.extend_from_slice(trigger.bridges());
            }
        }
        for obstacle in &mut self.obstacles {
            let Obstacle::Bridge(bridge) = obstacle else {
                continue;
            };
            if raise.contains(&bridge.id()) && bridge.raise() {
                info!(bridge = %bridge.id(), "bridge raised");
                events.push(SimEvent::BridgeRaised {
                    bridge: bridge.id(),
                });
            }
        }
    }

    fn collect_pickups(&mut self, events: &mut Vec<SimEvent>) {
        let player = *self.player.world_box();
        for obstacle in &mut self.obstacles {
            let Obstacle::Collectable(item) = obstacle else {
                continue;
            };
            if !item.is_collected() && overlaps(&player, item.world_box()) && item.collect() {
                self.score += 1;
                info!(item = %item.id(), score = self.score, "collected");
                events.push(SimEvent::Collected {
                    item: item.id(),
                    score: self.score,
                });
            }
        }
    }
}

/// Player bottom level with the obstacle top and strictly overlapping on x and z.
fn stands_on(feet: &Aabb, below: &Aabb) -> bool {
    let level = (feet.min().y() - below.max().y()).abs() <= SUPPORT_TOLERANCE;
    level
        && [Axis::X, Axis::Z].into_iter().all(|axis| {
            feet.min().get(axis) < below.max().get(axis)
                && feet.max().get(axis) > below.min().get(axis)
        })
}

/// Rebuilds a body's world box, logging and keeping the last good state on failure.
fn refresh_logged(body: &mut impl Body) {
    if let Err(err) = body.refresh() {
        warn!(
            object = %body.id(),
            kind = %body.kind(),
            %err,
            "world box rebuild failed; keeping last good transform"
        );
    }
}

//! # Components
//!
//! Hot components are plain old data so every layout can pack them into
//! contiguous arrays. Cold data ([`Record`]) is touched only on kills and
//! by event logging.

use bytemuck::{Pod, Zeroable};

use crate::actor::ActorId;

/// Marker trait for hot, column-storable components.
///
/// Components must be:
/// - `Copy`: bitwise copyable, no heap ownership
/// - `Pod`: plain old data
/// - `Default`: used to pre-size columns
pub trait Component: Copy + Pod + Zeroable + Default + Send + Sync + 'static {
    /// Column name used in layout reports.
    const NAME: &'static str;
}

/// Health, visibility and the state timer of an actor.
///
/// `alive` is not stored: an actor is alive exactly when `health > 0`.
/// The single `timer` slot is the attack cooldown while alive and the
/// respawn countdown while dead; the accessors for each assert the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vitals {
    /// Remaining hit points. Zero means dead.
    pub health: u16,
    flags: u8,
    _padding: u8,
    timer: f32,
}

impl Component for Vitals {
    const NAME: &'static str = "vitals";
}

impl Vitals {
    const FLAG_VISIBLE: u8 = 1;

    /// An alive actor with the given health and attack cooldown.
    #[inline]
    #[must_use]
    pub const fn alive(health: u16, cooldown: f32) -> Self {
        debug_assert!(health > 0, "alive vitals need health");
        Self {
            health,
            flags: 0,
            _padding: 0,
            timer: cooldown,
        }
    }

    /// A dead actor waiting `respawn` seconds.
    #[inline]
    #[must_use]
    pub const fn dead(respawn: f32) -> Self {
        Self {
            health: 0,
            flags: 0,
            _padding: 0,
            timer: respawn,
        }
    }

    /// Returns true while health is above zero.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Visibility as of the last render pass.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.flags & Self::FLAG_VISIBLE != 0
    }

    /// Sets the visibility flag.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.flags |= Self::FLAG_VISIBLE;
        } else {
            self.flags &= !Self::FLAG_VISIBLE;
        }
    }

    /// Seconds until the next attack is possible.
    #[inline]
    #[must_use]
    pub fn cooldown(&self) -> f32 {
        debug_assert!(self.is_alive(), "cooldown read on a dead actor");
        self.timer
    }

    /// Returns true once the attack cooldown has elapsed.
    #[inline]
    #[must_use]
    pub fn cooldown_done(&self) -> bool {
        self.cooldown() <= 0.0
    }

    /// Resets the attack cooldown.
    #[inline]
    pub fn set_cooldown(&mut self, seconds: f32) {
        debug_assert!(self.is_alive(), "cooldown set on a dead actor");
        self.timer = seconds;
    }

    /// Counts the attack cooldown down by `dt`.
    #[inline]
    pub fn progress_cooldown(&mut self, dt: f32) {
        debug_assert!(self.is_alive(), "cooldown advanced on a dead actor");
        self.timer -= dt;
    }

    /// Seconds until this dead actor may respawn.
    #[inline]
    #[must_use]
    pub fn respawn_timer(&self) -> f32 {
        debug_assert!(!self.is_alive(), "respawn timer read on a living actor");
        self.timer
    }

    /// Returns true once the respawn countdown has elapsed.
    #[inline]
    #[must_use]
    pub fn can_respawn(&self) -> bool {
        self.respawn_timer() <= 0.0
    }

    /// Sets the respawn countdown.
    #[inline]
    pub fn set_respawn(&mut self, seconds: f32) {
        debug_assert!(!self.is_alive(), "respawn timer set on a living actor");
        self.timer = seconds;
    }

    /// Counts the respawn countdown down by `dt`.
    #[inline]
    pub fn progress_respawn(&mut self, dt: f32) {
        debug_assert!(!self.is_alive(), "respawn timer advanced on a living actor");
        self.timer -= dt;
    }

    /// Removes `amount` health. Returns true if this hit brought health to zero.
    #[inline]
    pub fn apply_damage(&mut self, amount: u16) -> bool {
        debug_assert!(self.is_alive(), "damage dealt to a dead actor");
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    /// Marks the actor dead and starts its respawn countdown.
    #[inline]
    pub fn kill(&mut self, respawn: f32) {
        self.health = 0;
        self.set_respawn(respawn);
    }

    /// Brings a dead actor back with full health and a fresh cooldown.
    #[inline]
    pub fn revive(&mut self, health: u16, cooldown: f32) {
        debug_assert!(health > 0, "revived with zero health");
        self.health = health;
        self.set_cooldown(cooldown);
    }
}

/// Position in the 2D arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Component for Position {
    const NAME: &'static str = "position";
}

impl Position {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the squared distance to another position.
    ///
    /// This avoids the sqrt call for distance comparisons.
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns true if both coordinates lie in `[-half_extent, half_extent]`.
    #[inline]
    #[must_use]
    pub fn within(self, half_extent: f32) -> bool {
        (-half_extent..=half_extent).contains(&self.x)
            && (-half_extent..=half_extent).contains(&self.y)
    }
}

/// Velocity in arena units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Velocity {
    /// X velocity component.
    pub x: f32,
    /// Y velocity component.
    pub y: f32,
}

impl Component for Velocity {
    const NAME: &'static str = "velocity";
}

impl Velocity {
    /// Creates a new velocity.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Optional attack target, stored as a raw actor index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct Target {
    raw: u32,
}

impl Component for Target {
    const NAME: &'static str = "target";
}

impl Default for Target {
    fn default() -> Self {
        Self::NONE
    }
}

impl Target {
    /// No target.
    pub const NONE: Self = Self {
        raw: ActorId::NULL.raw(),
    };

    /// A target pointing at `id`.
    #[inline]
    #[must_use]
    pub const fn some(id: ActorId) -> Self {
        Self { raw: id.raw() }
    }

    /// The targeted actor, if any.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<ActorId> {
        let id = ActorId::from_raw(self.raw);
        if id.is_null() {
            None
        } else {
            Some(id)
        }
    }

    /// Returns true if no target is set.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.raw == ActorId::NULL.raw()
    }

    /// Points this target at `id`.
    #[inline]
    pub fn set(&mut self, id: ActorId) {
        *self = Self::some(id);
    }

    /// Clears the target.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::NONE;
    }
}

/// Cold per-actor data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// Display name, e.g. `Entity #7`.
    pub name: String,
    /// Kills scored.
    pub xp: u32,
}

impl Record {
    /// Record for the actor at `index` with no experience.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self {
            name: format!("Entity #{index}"),
            xp: 0,
        }
    }
}

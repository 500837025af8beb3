//! Components the host attaches to actor entities which the gate inspects or
//! mutates when handling events
//!

use std::collections::HashSet;

use bevy::prelude::*;

/// Permission required to use the portal info view
pub const PERM_INFO: &str = "portalcontrol.info";
/// Permission required to reload the configuration
pub const PERM_RELOAD: &str = "portalcontrol.reload";
/// Permission required to toggle debug logging
pub const PERM_DEBUG: &str = "portalcontrol.debug";
/// Permission required to open the configuration menu
pub const PERM_MENU: &str = "portalcontrol.menu";

/// Stable unique identity of a human player. Presence of this component marks
/// an entity as a player and it keys the per-player traversal cooldown table
#[derive(Component, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Reflect)]
pub struct PlayerId(u64);

impl PlayerId {
	/// Create a new instance of [PlayerId]
	pub fn new(id: u64) -> Self {
		PlayerId(id)
	}
	/// Get the raw identity value
	pub fn get(&self) -> u64 {
		self.0
	}
}

/// Health of an actor, damaged slightly when a traversal is blocked
#[derive(Component, Clone, Copy, PartialEq, Debug, Reflect)]
pub struct Health(f32);

impl Health {
	/// Create a new instance of [Health]
	pub fn new(points: f32) -> Self {
		Health(points)
	}
	/// Get the current health points
	pub fn get(&self) -> f32 {
		self.0
	}
	/// Reduce health by `amount`, saturating at zero
	pub fn damage(&mut self, amount: f32) {
		self.0 = (self.0 - amount).max(0.0);
	}
}

/// Marks an actor as a projectile, blocked projectiles are despawned
#[derive(Component, Clone, Copy, Default, Debug, Reflect)]
pub struct Projectile;

/// Marks a player as currently sneaking
#[derive(Component, Clone, Copy, Default, Debug, Reflect)]
pub struct Sneaking;

/// Permission strings granted to an entity by the host's permission subsystem.
/// An entity without this component holds no permissions at all
#[derive(Component, Clone, Default, Debug)]
pub struct Permissions(HashSet<String>);

impl Permissions {
	/// Create a new instance of [Permissions] from a list of permission strings
	pub fn new<'a>(granted: impl IntoIterator<Item = &'a str>) -> Self {
		Permissions(granted.into_iter().map(String::from).collect())
	}
	/// Whether the permission string has been granted
	pub fn has(&self, permission: &str) -> bool {
		self.0.contains(permission)
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn damage_saturates_at_zero() {
		let mut health = Health::new(0.3);
		health.damage(0.5);
		assert_eq!(health.get(), 0.0);
	}
	#[test]
	fn damage_reduces() {
		let mut health = Health::new(10.0);
		health.damage(0.5);
		assert_eq!(health.get(), 9.5);
	}
	#[test]
	fn permissions_fail_closed() {
		let perms = Permissions::new([PERM_RELOAD]);
		assert!(perms.has(PERM_RELOAD));
		assert!(!perms.has(PERM_DEBUG));
		assert!(!Permissions::default().has(PERM_INFO));
	}
}

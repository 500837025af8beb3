//! The traversal decision: whether a portal-crossing attempt is allowed
//!
//! Rules are evaluated in order with the first match winning:
//!
//! 1. A human player is always allowed. A crossing within the cooldown window
//!    is treated as the tail of an earlier transition and leaves the cooldown
//!    table untouched, otherwise the crossing is counted and the table updated
//! 2. A whitelisted actor kind is allowed
//! 3. Any actor standing on a gateway block in the end realm is allowed
//! 4. Everything else is denied
//!
//! Only the player branch touches the cooldown table. Allows via the whitelist
//! or the gateway leave it alone even when the actor is somehow also a player
//!

use std::time::Duration;

use crate::prelude::*;
use bevy::prelude::*;

/// Damage applied to an actor with [Health] when its traversal is blocked,
/// acting as a visible signal that the portal rejected it
pub const BLOCKED_DAMAGE: f32 = 0.5;

/// Outcome of evaluating a [TraversalAttempt]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
	/// The actor may pass through the portal
	Allow,
	/// The traversal must be cancelled
	Deny,
}

/// A single portal-crossing attempt as delivered by the host runtime
#[derive(Clone, Copy, Debug)]
pub struct TraversalAttempt {
	/// The actor trying to cross
	actor: Entity,
	/// Player identity when the actor is a human player
	player: Option<PlayerId>,
	/// Kind of the actor
	kind: ActorKind,
	/// Realm the actor currently occupies
	realm: Realm,
	/// Block type at the actor's location
	block: BlockKind,
	/// Whether the host allows this event to be cancelled
	cancellable: bool,
}

impl TraversalAttempt {
	/// Create a new instance of [TraversalAttempt]
	pub fn new(
		actor: Entity,
		player: Option<PlayerId>,
		kind: ActorKind,
		realm: Realm,
		block: BlockKind,
		cancellable: bool,
	) -> Self {
		TraversalAttempt {
			actor,
			player,
			kind,
			realm,
			block,
			cancellable,
		}
	}
	/// Get the actor trying to cross
	pub fn get_actor(&self) -> Entity {
		self.actor
	}
	/// Get the player identity, if the actor is a human player
	pub fn get_player(&self) -> Option<PlayerId> {
		self.player
	}
	/// Get the actor kind
	pub fn get_kind(&self) -> ActorKind {
		self.kind
	}
	/// Get the realm of the attempt
	pub fn get_realm(&self) -> Realm {
		self.realm
	}
	/// Get the block type at the actor's location
	pub fn get_block(&self) -> BlockKind {
		self.block
	}
	/// Whether the host allows this event to be cancelled
	pub fn is_cancellable(&self) -> bool {
		self.cancellable
	}
}

/// Evaluate a traversal attempt against the configuration and cooldown state
/// where `now` is the engine-elapsed time of the event
pub fn decide(
	config: &GateConfig,
	cooldowns: &mut CooldownTable,
	attempt: &TraversalAttempt,
	now: Duration,
) -> Decision {
	if let Some(player) = attempt.get_player() {
		if let Some(last) = cooldowns.last_traversal(&player) {
			if now.saturating_sub(last) < config.get_cooldown() {
				if config.get_debug() {
					info!("Player {:?} used a portal within the cooldown window", player);
				}
				return Decision::Allow;
			}
		}
		cooldowns.record(player, now);
		return Decision::Allow;
	}
	if config.is_whitelisted(attempt.get_kind()) {
		if config.get_debug() {
			info!("Actor {} is whitelisted, allowing traversal", attempt.get_kind());
		}
		return Decision::Allow;
	}
	if attempt.get_realm() == Realm::End && attempt.get_block() == BlockKind::EndGateway {
		if config.get_debug() {
			info!("Actor {} is passing a gateway, allowing traversal", attempt.get_kind());
		}
		return Decision::Allow;
	}
	Decision::Deny
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Attempt by a non-player actor in the given realm on the given block
	fn actor_attempt(kind: ActorKind, realm: Realm, block: BlockKind) -> TraversalAttempt {
		TraversalAttempt::new(Entity::from_raw(11), None, kind, realm, block, true)
	}
	/// Attempt by a human player in the overworld
	fn player_attempt(player: PlayerId) -> TraversalAttempt {
		TraversalAttempt::new(
			Entity::from_raw(1),
			Some(player),
			ActorKind::Player,
			Realm::Overworld,
			BlockKind::NetherPortal,
			true,
		)
	}
	#[test]
	fn player_first_crossing_counted() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let player = PlayerId::new(1);
		let now = Duration::from_millis(500);
		let decision = decide(&config, &mut cooldowns, &player_attempt(player), now);
		assert_eq!(decision, Decision::Allow);
		assert_eq!(cooldowns.last_traversal(&player), Some(now));
	}
	#[test]
	fn player_rapid_crossing_not_recounted() {
		// cooldown is 3000ms, a second attempt at 1000ms must not reset the window
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let player = PlayerId::new(1);
		let attempt = player_attempt(player);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Allow);
		assert_eq!(
			decide(&config, &mut cooldowns, &attempt, Duration::from_millis(1000)),
			Decision::Allow
		);
		assert_eq!(cooldowns.last_traversal(&player), Some(Duration::ZERO));
	}
	#[test]
	fn player_crossing_after_cooldown_recounted() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let player = PlayerId::new(1);
		let attempt = player_attempt(player);
		decide(&config, &mut cooldowns, &attempt, Duration::ZERO);
		decide(&config, &mut cooldowns, &attempt, Duration::from_millis(1000));
		decide(&config, &mut cooldowns, &attempt, Duration::from_millis(3500));
		assert_eq!(cooldowns.last_traversal(&player), Some(Duration::from_millis(3500)));
	}
	#[test]
	fn whitelisted_actor_allowed_anywhere() {
		let mut config = GateConfig::default();
		config.set_whitelisted_actors([ActorKind::Zombie].into());
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::Overworld, BlockKind::NetherPortal);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Allow);
		let attempt = actor_attempt(ActorKind::Zombie, Realm::Nether, BlockKind::EndPortal);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Allow);
	}
	#[test]
	fn whitelist_allow_leaves_cooldowns_untouched() {
		let mut config = GateConfig::default();
		config.set_whitelisted_actors([ActorKind::Zombie].into());
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::Overworld, BlockKind::NetherPortal);
		decide(&config, &mut cooldowns, &attempt, Duration::from_millis(42));
		assert!(cooldowns.get().is_empty());
	}
	#[test]
	fn unlisted_actor_denied() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::Overworld, BlockKind::NetherPortal);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Deny);
	}
	#[test]
	fn gateway_in_end_realm_exempt() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::End, BlockKind::EndGateway);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Allow);
		assert!(cooldowns.get().is_empty());
	}
	#[test]
	fn gateway_block_outside_end_realm_not_exempt() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::Overworld, BlockKind::EndGateway);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Deny);
	}
	#[test]
	fn end_realm_on_ordinary_block_not_exempt() {
		let config = GateConfig::default();
		let mut cooldowns = CooldownTable::default();
		let attempt = actor_attempt(ActorKind::Zombie, Realm::End, BlockKind::EndPortal);
		assert_eq!(decide(&config, &mut cooldowns, &attempt, Duration::ZERO), Decision::Deny);
	}
}

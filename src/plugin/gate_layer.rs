//! Logic for handling portal-traversal attempts and the sneak-click portal
//! info view
//!

use crate::prelude::*;
use bevy::prelude::*;

/// An actor has attempted to cross a portal
#[derive(Event)]
pub struct EventPortalAttempt {
	/// The actor trying to cross
	actor: Entity,
	/// Kind of the actor
	kind: ActorKind,
	/// Realm the actor currently occupies
	realm: Realm,
	/// Block type at the actor's location
	block: BlockKind,
	/// Whether the host allows this event to be cancelled
	cancellable: bool,
}

impl EventPortalAttempt {
	/// Create a new instance of [EventPortalAttempt]
	pub fn new(
		actor: Entity,
		kind: ActorKind,
		realm: Realm,
		block: BlockKind,
		cancellable: bool,
	) -> Self {
		EventPortalAttempt {
			actor,
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

/// A player has interacted with a block
#[derive(Event)]
pub struct EventBlockInteract {
	/// The interacting player
	player: Entity,
	/// Kind of the clicked block
	block: BlockKind,
	/// Whether the host allows this event to be cancelled
	cancellable: bool,
}

impl EventBlockInteract {
	/// Create a new instance of [EventBlockInteract]
	pub fn new(player: Entity, block: BlockKind, cancellable: bool) -> Self {
		EventBlockInteract {
			player,
			block,
			cancellable,
		}
	}
	/// Get the interacting player
	pub fn get_player(&self) -> Entity {
		self.player
	}
	/// Get the kind of the clicked block
	pub fn get_block(&self) -> BlockKind {
		self.block
	}
	/// Whether the host allows this event to be cancelled
	pub fn is_cancellable(&self) -> bool {
		self.cancellable
	}
}

/// Instructs the host to cancel an actor's portal traversal
#[derive(Event)]
pub struct EventTraversalDenied(Entity);

impl EventTraversalDenied {
	/// Get the actor whose traversal must be cancelled
	pub fn get_actor(&self) -> Entity {
		self.0
	}
}

/// Instructs the host to suppress the default block interaction because the
/// info view handled the click
#[derive(Event)]
pub struct EventInteractionConsumed(Entity);

impl EventInteractionConsumed {
	/// Get the player whose interaction was consumed
	pub fn get_player(&self) -> Entity {
		self.0
	}
}

/// Read [EventPortalAttempt] and decide each traversal. Denied traversals are
/// cancelled, deal [BLOCKED_DAMAGE] to actors with [Health] and despawn
/// [Projectile] actors
#[cfg(not(tarpaulin_include))]
pub fn process_portal_attempts(
	mut events: EventReader<EventPortalAttempt>,
	mut q_gate: Query<(&GateConfig, &mut CooldownTable)>,
	q_player: Query<&PlayerId>,
	mut q_health: Query<&mut Health>,
	q_projectile: Query<(), With<Projectile>>,
	mut event_denied: EventWriter<EventTraversalDenied>,
	mut commands: Commands,
	time: Res<Time>,
) {
	for event in events.read() {
		for (config, mut cooldowns) in q_gate.iter_mut() {
			let attempt = TraversalAttempt::new(
				event.get_actor(),
				q_player.get(event.get_actor()).ok().copied(),
				event.get_kind(),
				event.get_realm(),
				event.get_block(),
				event.is_cancellable(),
			);
			match decide(config, &mut cooldowns, &attempt, time.elapsed()) {
				Decision::Allow => {}
				Decision::Deny => {
					if attempt.is_cancellable() {
						event_denied.send(EventTraversalDenied(attempt.get_actor()));
					}
					if let Ok(mut health) = q_health.get_mut(attempt.get_actor()) {
						health.damage(BLOCKED_DAMAGE);
					}
					if q_projectile.get(attempt.get_actor()).is_ok() {
						commands.entity(attempt.get_actor()).despawn();
					}
					if config.get_debug() {
						info!("Blocked {} from traversing a portal", attempt.get_kind());
					}
				}
			}
		}
	}
}

/// Read [EventBlockInteract] and serve the portal info view to sneaking
/// players holding the info permission. Holds no state, a click on anything
/// other than a protected portal block passes through untouched
#[cfg(not(tarpaulin_include))]
pub fn process_block_interactions(
	mut events: EventReader<EventBlockInteract>,
	q_gate: Query<&GateConfig>,
	q_viewer: Query<(Option<&Sneaking>, Option<&Permissions>)>,
	mut event_consumed: EventWriter<EventInteractionConsumed>,
	mut event_chat: EventWriter<EventChatMessage>,
	mut event_sound: EventWriter<EventPlaySound>,
) {
	for event in events.read() {
		for config in q_gate.iter() {
			if !config.is_portal_block(event.get_block()) {
				continue;
			}
			let Ok((sneaking, permissions)) = q_viewer.get(event.get_player()) else {
				continue;
			};
			if sneaking.is_none() {
				continue;
			}
			if !permissions.map(|p| p.has(PERM_INFO)).unwrap_or(false) {
				event_chat.send(EventChatMessage::new(
					event.get_player(),
					format!("{}You do not have permission to do that!", ChatColor::Red),
				));
				continue;
			}
			if event.is_cancellable() {
				event_consumed.send(EventInteractionConsumed(event.get_player()));
			}
			event_chat.send(EventChatMessage::new(
				event.get_player(),
				format!(
					"{}[{}Portal Info{}]",
					ChatColor::Gold,
					ChatColor::Yellow,
					ChatColor::Gold
				),
			));
			event_chat.send(EventChatMessage::new(
				event.get_player(),
				format!(
					"{}Kind: {}{}",
					ChatColor::Gray,
					ChatColor::Aqua,
					event.get_block().portal_name()
				),
			));
			event_chat.send(EventChatMessage::new(
				event.get_player(),
				format!(
					"{}Status: {}Protection enabled",
					ChatColor::Gray,
					ChatColor::Green
				),
			));
			event_sound.send(EventPlaySound::new(
				event.get_player(),
				SoundKind::BeaconActivate,
			));
		}
	}
}

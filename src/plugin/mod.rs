//! Defines the Bevy [Plugin] for portal control
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod admin_layer;
pub mod gate_layer;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	Gate,
	Admin,
}

/// A line of chat text to deliver to an entity
#[derive(Event)]
pub struct EventChatMessage {
	/// Recipient of the line
	to: Entity,
	/// Formatted text including colour codes
	text: String,
}

impl EventChatMessage {
	/// Create a new instance of [EventChatMessage]
	pub fn new(to: Entity, text: String) -> Self {
		EventChatMessage { to, text }
	}
	/// Get the recipient
	pub fn get_recipient(&self) -> Entity {
		self.to
	}
	/// Get the formatted text
	pub fn get_text(&self) -> &str {
		&self.text
	}
}

/// Sounds the host plays at an entity's location
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoundKind {
	/// Confirmation chime of the portal info view
	BeaconActivate,
	/// Feedback for a menu toggle
	ButtonClick,
	/// Feedback for closing the menu
	ChestClose,
}

/// A sound to play for an entity
#[derive(Event)]
pub struct EventPlaySound {
	/// Entity at whose location the sound plays
	to: Entity,
	/// Which sound to play
	sound: SoundKind,
}

impl EventPlaySound {
	/// Create a new instance of [EventPlaySound]
	pub fn new(to: Entity, sound: SoundKind) -> Self {
		EventPlaySound { to, sound }
	}
	/// Get the entity the sound plays for
	pub fn get_recipient(&self) -> Entity {
		self.to
	}
	/// Get the sound to play
	pub fn get_sound(&self) -> SoundKind {
		self.sound
	}
}

pub struct PortalControlPlugin;

impl Plugin for PortalControlPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<PlayerId>()
			.register_type::<Health>()
			.register_type::<Projectile>()
			.register_type::<Sneaking>()
			.register_type::<BlockKind>()
			.register_type::<ActorKind>()
			.register_type::<Realm>()
			.add_event::<gate_layer::EventPortalAttempt>()
			.add_event::<gate_layer::EventBlockInteract>()
			.add_event::<gate_layer::EventTraversalDenied>()
			.add_event::<gate_layer::EventInteractionConsumed>()
			.add_event::<admin_layer::EventAdminCommand>()
			.add_event::<admin_layer::EventMenuClick>()
			.add_event::<admin_layer::EventClickConsumed>()
			.add_event::<EventChatMessage>()
			.add_event::<EventPlaySound>()
			.configure_sets(Update, (OrderingSet::Gate, OrderingSet::Admin).chain())
			.add_systems(
				Update,
				(
					(
						gate_layer::process_portal_attempts,
						gate_layer::process_block_interactions,
					)
						.in_set(OrderingSet::Gate),
					(
						admin_layer::process_admin_commands,
						admin_layer::process_menu_clicks,
					)
						.chain()
						.in_set(OrderingSet::Admin),
				),
			);
		info!("Portal control plugin enabled");
		info!("Blocking non-player actors from nether and end portals (gateways exempt)");
	}
}

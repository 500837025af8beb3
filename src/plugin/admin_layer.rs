//! Logic for the administrative command surface and the configuration menu
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Root name of the command surface
pub const ROOT_COMMAND: &str = "portalcontrol";

/// A command line issued against the root command, `line` holds everything
/// after the root name
#[derive(Event)]
pub struct EventAdminCommand {
	/// Entity which issued the command, a console sender has no [PlayerId]
	sender: Entity,
	/// Argument text after the root command name
	line: String,
}

impl EventAdminCommand {
	/// Create a new instance of [EventAdminCommand]
	pub fn new(sender: Entity, line: &str) -> Self {
		EventAdminCommand {
			sender,
			line: line.to_string(),
		}
	}
	/// Get the issuing entity
	pub fn get_sender(&self) -> Entity {
		self.sender
	}
	/// Get the argument text
	pub fn get_line(&self) -> &str {
		&self.line
	}
}

/// A player has clicked a slot of their open configuration menu
#[derive(Event)]
pub struct EventMenuClick {
	/// The clicking player
	player: Entity,
	/// Clicked slot index
	slot: usize,
	/// Whether the host allows this event to be cancelled
	cancellable: bool,
}

impl EventMenuClick {
	/// Create a new instance of [EventMenuClick]
	pub fn new(player: Entity, slot: usize, cancellable: bool) -> Self {
		EventMenuClick {
			player,
			slot,
			cancellable,
		}
	}
	/// Get the clicking player
	pub fn get_player(&self) -> Entity {
		self.player
	}
	/// Get the clicked slot index
	pub fn get_slot(&self) -> usize {
		self.slot
	}
	/// Whether the host allows this event to be cancelled
	pub fn is_cancellable(&self) -> bool {
		self.cancellable
	}
}

/// Instructs the host to swallow a click which landed in the open menu, the
/// panel is read-only so nothing may be picked up from it
#[derive(Event)]
pub struct EventClickConsumed {
	/// The clicking player
	player: Entity,
	/// Clicked slot index
	slot: usize,
}

impl EventClickConsumed {
	/// Get the clicking player
	pub fn get_player(&self) -> Entity {
		self.player
	}
	/// Get the clicked slot index
	pub fn get_slot(&self) -> usize {
		self.slot
	}
}

/// The fail-closed denial line sent on any failed permission check
fn deny_message(to: Entity) -> EventChatMessage {
	EventChatMessage::new(
		to,
		format!(
			"{}You do not have permission to do that!",
			ChatColor::Red
		),
	)
}

/// Read [EventAdminCommand] and dispatch `reload`, `debug` and `menu`, falling
/// back to the help text for anything unrecognized. Every subcommand is gated
/// by its own permission and a failed check applies no state change at all
#[cfg(not(tarpaulin_include))]
pub fn process_admin_commands(
	mut events: EventReader<EventAdminCommand>,
	mut q_gate: Query<(&mut GateConfig, &ConfigPath)>,
	q_player: Query<&PlayerId>,
	q_perms: Query<&Permissions>,
	mut event_chat: EventWriter<EventChatMessage>,
	mut commands: Commands,
) {
	for event in events.read() {
		let sender = event.get_sender();
		let has_perm = |permission: &str| {
			q_perms
				.get(sender)
				.map(|p| p.has(permission))
				.unwrap_or(false)
		};
		let subcommand = event
			.get_line()
			.split_whitespace()
			.next()
			.map(|s| s.to_lowercase());
		match subcommand.as_deref() {
			Some("reload") => {
				if !has_perm(PERM_RELOAD) {
					event_chat.send(deny_message(sender));
					continue;
				}
				for (mut config, path) in q_gate.iter_mut() {
					config.reload_from(path.get());
				}
				event_chat.send(EventChatMessage::new(
					sender,
					format!("{}Configuration reloaded!", ChatColor::Green),
				));
			}
			Some("debug") => {
				if !has_perm(PERM_DEBUG) {
					event_chat.send(deny_message(sender));
					continue;
				}
				for (mut config, path) in q_gate.iter_mut() {
					let enabled = !config.get_debug();
					config.set_debug(enabled);
					config.save_to_ron(path.get());
					event_chat.send(EventChatMessage::new(
						sender,
						format!(
							"{}Debug mode: {}",
							ChatColor::Yellow,
							if enabled {
								format!("{}enabled", ChatColor::Green)
							} else {
								format!("{}disabled", ChatColor::Red)
							}
						),
					));
				}
			}
			Some("menu") => {
				if q_player.get(sender).is_err() || !has_perm(PERM_MENU) {
					event_chat.send(deny_message(sender));
					continue;
				}
				for (config, _path) in q_gate.iter() {
					commands
						.entity(sender)
						.insert(OpenMenu::new(ConfigMenu::build(config)));
				}
			}
			_ => {
				send_help(
					sender,
					q_player.get(sender).is_ok(),
					&has_perm,
					&mut event_chat,
				);
			}
		}
	}
}

/// Send the colourized help text, only advertising `debug` and `menu` to
/// senders who hold the matching permission
fn send_help(
	sender: Entity,
	is_player: bool,
	has_perm: &dyn Fn(&str) -> bool,
	event_chat: &mut EventWriter<EventChatMessage>,
) {
	event_chat.send(EventChatMessage::new(
		sender,
		format!(
			"{}===== {}Portal Control Help {}=====",
			ChatColor::Gold,
			ChatColor::Yellow,
			ChatColor::Gold
		),
	));
	event_chat.send(EventChatMessage::new(
		sender,
		format!(
			"{}/{} reload {}- reload the configuration",
			ChatColor::Gold,
			ROOT_COMMAND,
			ChatColor::Gray
		),
	));
	if has_perm(PERM_DEBUG) {
		event_chat.send(EventChatMessage::new(
			sender,
			format!(
				"{}/{} debug {}- toggle debug logging",
				ChatColor::Gold,
				ROOT_COMMAND,
				ChatColor::Gray
			),
		));
	}
	if is_player && has_perm(PERM_MENU) {
		event_chat.send(EventChatMessage::new(
			sender,
			format!(
				"{}/{} menu {}- open the configuration menu",
				ChatColor::Gold,
				ROOT_COMMAND,
				ChatColor::Gray
			),
		));
	}
	event_chat.send(EventChatMessage::new(
		sender,
		format!("{}==================================", ChatColor::Gold),
	));
}

/// Read [EventMenuClick] for players with an [OpenMenu]. Every click in the
/// panel is consumed, the debug slot flips and persists the flag then rebuilds
/// the panel, the close slot detaches it
#[cfg(not(tarpaulin_include))]
pub fn process_menu_clicks(
	mut events: EventReader<EventMenuClick>,
	mut q_gate: Query<(&mut GateConfig, &ConfigPath)>,
	mut q_menu: Query<&mut OpenMenu>,
	mut event_consumed: EventWriter<EventClickConsumed>,
	mut event_chat: EventWriter<EventChatMessage>,
	mut event_sound: EventWriter<EventPlaySound>,
	mut commands: Commands,
) {
	for event in events.read() {
		let player = event.get_player();
		let Ok(mut open_menu) = q_menu.get_mut(player) else {
			continue;
		};
		if event.is_cancellable() {
			event_consumed.send(EventClickConsumed {
				player,
				slot: event.get_slot(),
			});
		}
		match event.get_slot() {
			SLOT_DEBUG_TOGGLE => {
				for (mut config, path) in q_gate.iter_mut() {
					let enabled = !config.get_debug();
					config.set_debug(enabled);
					config.save_to_ron(path.get());
					event_chat.send(EventChatMessage::new(
						player,
						format!(
							"{}Debug mode: {}",
							ChatColor::Yellow,
							if enabled {
								format!("{}enabled", ChatColor::Green)
							} else {
								format!("{}disabled", ChatColor::Red)
							}
						),
					));
					event_sound.send(EventPlaySound::new(player, SoundKind::ButtonClick));
					*open_menu = OpenMenu::new(ConfigMenu::build(&config));
				}
			}
			SLOT_CLOSE => {
				commands.entity(player).remove::<OpenMenu>();
				event_sound.send(EventPlaySound::new(player, SoundKind::ChestClose));
			}
			_ => {}
		}
	}
}

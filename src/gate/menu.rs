//! The fixed-layout configuration menu
//!
//! A 27-slot panel which is read-only apart from the debug toggle. The host
//! renders whatever [ConfigMenu] is attached to a player as an [OpenMenu] and
//! delivers clicks back as events, every click is independently idempotent
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Title of the menu panel
pub const MENU_TITLE: &str = "Portal Control Settings";
/// Number of slots in the panel
pub const MENU_SIZE: usize = 27;
/// Slot of the debug-logging toggle
pub const SLOT_DEBUG_TOGGLE: usize = 11;
/// Slot of the protected-portal listing
pub const SLOT_PORTAL_LIST: usize = 13;
/// Slot of the whitelisted-actor listing
pub const SLOT_WHITELIST: usize = 15;
/// Slot of the close control
pub const SLOT_CLOSE: usize = 26;

/// Icon rendered for a menu item
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuIcon {
	/// Debug toggle while enabled
	RedstoneTorch,
	/// Debug toggle while disabled
	Lever,
	/// Protected-portal listing
	Obsidian,
	/// Whitelisted-actor listing
	NameTag,
	/// Close control
	Barrier,
}

/// A single rendered item occupying a menu slot
#[derive(Clone, PartialEq, Debug)]
pub struct MenuItem {
	/// Icon to render
	icon: MenuIcon,
	/// Display name of the item
	name: String,
	/// Description lines shown under the name
	lore: Vec<String>,
}

impl MenuItem {
	/// Create a new instance of [MenuItem]
	fn new(icon: MenuIcon, name: String, lore: Vec<String>) -> Self {
		MenuItem { icon, name, lore }
	}
	/// Get the icon to render
	pub fn get_icon(&self) -> MenuIcon {
		self.icon
	}
	/// Get the display name
	pub fn get_name(&self) -> &str {
		&self.name
	}
	/// Get the description lines
	pub fn get_lore(&self) -> &[String] {
		&self.lore
	}
}

/// Snapshot of the configuration laid out as a fixed panel of menu slots
#[derive(Clone, PartialEq, Debug)]
pub struct ConfigMenu {
	/// The panel slots, mostly empty
	slots: Vec<Option<MenuItem>>,
}

impl ConfigMenu {
	/// Build the panel from a configuration snapshot
	pub fn build(config: &GateConfig) -> Self {
		let mut slots: Vec<Option<MenuItem>> = vec![None; MENU_SIZE];
		let debug_state = if config.get_debug() {
			format!("{}ON", ChatColor::Green)
		} else {
			format!("{}OFF", ChatColor::Red)
		};
		slots[SLOT_DEBUG_TOGGLE] = Some(MenuItem::new(
			if config.get_debug() {
				MenuIcon::RedstoneTorch
			} else {
				MenuIcon::Lever
			},
			format!("{}Debug Mode", ChatColor::Yellow),
			vec![
				format!("{}Current state: {}", ChatColor::Gray, debug_state),
				String::new(),
				format!("{}Click to toggle", ChatColor::Gold),
			],
		));
		let mut portal_lore = vec![format!("{}Currently protected portals:", ChatColor::Gray)];
		for portal in config.get_portal_blocks().iter() {
			portal_lore.push(format!(
				"{} - {}",
				ChatColor::DarkPurple,
				portal.portal_name()
			));
		}
		portal_lore.push(String::new());
		portal_lore.push(format!("{}Edit via the config file", ChatColor::Gold));
		slots[SLOT_PORTAL_LIST] = Some(MenuItem::new(
			MenuIcon::Obsidian,
			format!("{}Protected Portals", ChatColor::LightPurple),
			portal_lore,
		));
		let mut whitelist_lore = vec![format!("{}Currently whitelisted actors:", ChatColor::Gray)];
		if config.get_whitelisted_actors().is_empty() {
			whitelist_lore.push(format!("{}None", ChatColor::Red));
		} else {
			for kind in config.get_whitelisted_actors().iter() {
				whitelist_lore.push(format!("{} - {}", ChatColor::Green, kind));
			}
		}
		whitelist_lore.push(String::new());
		whitelist_lore.push(format!("{}Edit via the config file", ChatColor::Gold));
		slots[SLOT_WHITELIST] = Some(MenuItem::new(
			MenuIcon::NameTag,
			format!("{}Whitelisted Actors", ChatColor::Green),
			whitelist_lore,
		));
		slots[SLOT_CLOSE] = Some(MenuItem::new(
			MenuIcon::Barrier,
			format!("{}Close Menu", ChatColor::Red),
			Vec::new(),
		));
		ConfigMenu { slots }
	}
	/// Get the item occupying `slot`, if any
	pub fn get_slot(&self, slot: usize) -> Option<&MenuItem> {
		self.slots.get(slot).and_then(|item| item.as_ref())
	}
	/// Number of slots in the panel
	pub fn get_size(&self) -> usize {
		self.slots.len()
	}
}

/// Attached to a player entity while they are viewing the configuration menu.
/// The host renders the contained panel and removes nothing itself, the click
/// handling detaches this component when the close control is used
#[derive(Component)]
pub struct OpenMenu(ConfigMenu);

impl OpenMenu {
	/// Create a new instance of [OpenMenu]
	pub fn new(menu: ConfigMenu) -> Self {
		OpenMenu(menu)
	}
	/// Get the panel to render
	pub fn get(&self) -> &ConfigMenu {
		&self.0
	}
}

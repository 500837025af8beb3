//! Per-player record of when a portal traversal was last counted
//!

use std::collections::BTreeMap;
use std::time::Duration;

use crate::prelude::*;
use bevy::prelude::*;

/// Maps each player to the engine-elapsed instant of their last counted
/// traversal. An entry is created the first time a player crosses a portal and
/// overwritten on each later counted crossing, entries are never evicted
#[derive(Component, Clone, Default)]
pub struct CooldownTable(BTreeMap<PlayerId, Duration>);

impl CooldownTable {
	/// Get a reference to the map of players and last-traversal instants
	pub fn get(&self) -> &BTreeMap<PlayerId, Duration> {
		&self.0
	}
	/// The instant the player last had a traversal counted, if any
	pub fn last_traversal(&self, player: &PlayerId) -> Option<Duration> {
		self.0.get(player).copied()
	}
	/// Record `instant` as the player's last counted traversal
	pub fn record(&mut self, player: PlayerId, instant: Duration) {
		self.0.insert(player, instant);
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn record_and_read_back() {
		let mut table = CooldownTable::default();
		let player = PlayerId::new(7);
		assert_eq!(table.last_traversal(&player), None);
		table.record(player, Duration::from_millis(250));
		assert_eq!(table.last_traversal(&player), Some(Duration::from_millis(250)));
	}
	#[test]
	fn record_overwrites() {
		let mut table = CooldownTable::default();
		let player = PlayerId::new(7);
		table.record(player, Duration::from_millis(250));
		table.record(player, Duration::from_millis(4000));
		assert_eq!(table.last_traversal(&player), Some(Duration::from_millis(4000)));
		assert_eq!(table.get().len(), 1);
	}
}

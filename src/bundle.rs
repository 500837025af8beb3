//!
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The gate state spawned as a single entity by the host, queried by every
/// system of the plugin
#[derive(Bundle)]
pub struct PortalControlBundle {
	/// Effective configuration
	config: GateConfig,
	/// Per-player traversal cooldown instants
	cooldowns: CooldownTable,
	/// Where the configuration document is persisted
	config_path: ConfigPath,
}

impl PortalControlBundle {
	/// Create a new instance of [PortalControlBundle] by loading the
	/// configuration document at `path`, creating it with built-in defaults
	/// when missing
	pub fn new(path: &str) -> Self {
		PortalControlBundle {
			config: GateConfig::from_ron(path),
			cooldowns: CooldownTable::default(),
			config_path: ConfigPath::new(path),
		}
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn new_bundle_creates_config_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.ron").to_str().unwrap().to_string();
		let _ = PortalControlBundle::new(&path);
		assert!(std::path::Path::new(&path).exists());
	}
}

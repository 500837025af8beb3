//! Loading, reloading and persisting the gate configuration
//!
//! The persisted document is a `ron` file of string identifiers which are
//! resolved against the host vocabulary on load. Unrecognized identifiers are
//! logged and skipped rather than aborting the load, and the effective
//! configuration is always written back so the file on disk reflects exactly
//! what the gate is enforcing
//!

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::prelude::*;
use bevy::prelude::*;

/// Default minimum elapsed time between a player's counted traversals
pub const DEFAULT_COOLDOWN_MS: u64 = 3000;

/// Portal blocks protected when the configured list is empty
const DEFAULT_PORTAL_BLOCKS: [BlockKind; 2] = [BlockKind::NetherPortal, BlockKind::EndPortal];

/// On-disk form of the configuration
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)]
struct ConfigDocument {
	/// Whether per-decision logging is enabled
	debug_mode: bool,
	/// Identifiers of the protected portal block kinds
	portal_blocks: Vec<String>,
	/// Identifiers of the whitelisted actor kinds
	whitelisted_entities: Vec<String>,
}

/// Effective gate configuration, immutable between loads apart from the debug
/// flag which the command surface and menu may flip
#[derive(Component, Clone)]
pub struct GateConfig {
	/// Gates the per-decision `info` log lines
	debug: bool,
	/// Block kinds treated as protected teleportation surfaces
	portal_blocks: BTreeSet<BlockKind>,
	/// Actor kinds permitted to traverse freely
	whitelisted_actors: BTreeSet<ActorKind>,
	/// Minimum elapsed time between a player's counted traversals. Not part of
	/// the persisted document, the host may override it after loading
	cooldown: Duration,
}

impl Default for GateConfig {
	fn default() -> Self {
		GateConfig {
			debug: false,
			portal_blocks: BTreeSet::from(DEFAULT_PORTAL_BLOCKS),
			whitelisted_actors: BTreeSet::new(),
			cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
		}
	}
}

impl GateConfig {
	/// Load the configuration from a `ron` file, creating the file with
	/// built-in defaults when it doesn't exist. The normalized effective
	/// configuration is written back to the same path
	pub fn from_ron(path: &str) -> Self {
		let mut config = GateConfig::default();
		config.reload_from(path);
		config
	}
	/// Re-read the configuration from `path`, rebuilding both kind sets from
	/// scratch, and write the normalized result back. Re-entrant: no state of
	/// a previous load survives
	pub fn reload_from(&mut self, path: &str) {
		let document = if Path::new(path).exists() {
			let file = std::fs::File::open(path).expect("Failed opening config file");
			match ron::de::from_reader(file) {
				Ok(document) => document,
				Err(e) => panic!("Failed deserializing config: {}", e),
			}
		} else {
			ConfigDocument::default()
		};
		self.apply_document(document);
		self.save_to_ron(path);
		if self.debug {
			info!("Loaded config");
			info!("Portal blocks: {:?}", self.portal_blocks);
			info!("Whitelisted actors: {:?}", self.whitelisted_actors);
		}
	}
	/// Persist the effective configuration to a `ron` file at `path`
	pub fn save_to_ron(&self, path: &str) {
		let pretty = ron::ser::PrettyConfig::default();
		let serialized = ron::ser::to_string_pretty(&self.to_document(), pretty)
			.expect("Failed serializing config");
		std::fs::write(path, serialized).expect("Failed writing config file");
	}
	/// Resolve a [ConfigDocument] into the effective configuration, skipping
	/// unrecognized identifiers with a warning and repopulating an empty
	/// portal-block set with the built-in defaults
	fn apply_document(&mut self, document: ConfigDocument) {
		self.debug = document.debug_mode;
		self.portal_blocks.clear();
		for identifier in document.portal_blocks.iter() {
			match BlockKind::from_str(identifier) {
				Ok(kind) => {
					self.portal_blocks.insert(kind);
				}
				Err(e) => warn!("Invalid block type: {}", e.get()),
			}
		}
		if self.portal_blocks.is_empty() {
			self.portal_blocks.extend(DEFAULT_PORTAL_BLOCKS);
		}
		self.whitelisted_actors.clear();
		for identifier in document.whitelisted_entities.iter() {
			match ActorKind::from_str(identifier) {
				Ok(kind) => {
					self.whitelisted_actors.insert(kind);
				}
				Err(e) => warn!("Invalid entity type: {}", e.get()),
			}
		}
	}
	/// Express the effective configuration as the on-disk document with
	/// canonical identifiers
	fn to_document(&self) -> ConfigDocument {
		ConfigDocument {
			debug_mode: self.debug,
			portal_blocks: self.portal_blocks.iter().map(|k| k.to_string()).collect(),
			whitelisted_entities: self
				.whitelisted_actors
				.iter()
				.map(|k| k.to_string())
				.collect(),
		}
	}
	/// Whether per-decision logging is enabled
	pub fn get_debug(&self) -> bool {
		self.debug
	}
	/// Enable or disable per-decision logging
	pub fn set_debug(&mut self, debug: bool) {
		self.debug = debug;
	}
	/// Whether `block` is a protected teleportation surface
	pub fn is_portal_block(&self, block: BlockKind) -> bool {
		self.portal_blocks.contains(&block)
	}
	/// Whether `kind` may traverse portals freely
	pub fn is_whitelisted(&self, kind: ActorKind) -> bool {
		self.whitelisted_actors.contains(&kind)
	}
	/// Get a reference to the protected portal block kinds
	pub fn get_portal_blocks(&self) -> &BTreeSet<BlockKind> {
		&self.portal_blocks
	}
	/// Get a reference to the whitelisted actor kinds
	pub fn get_whitelisted_actors(&self) -> &BTreeSet<ActorKind> {
		&self.whitelisted_actors
	}
	/// The minimum elapsed time between a player's counted traversals
	pub fn get_cooldown(&self) -> Duration {
		self.cooldown
	}
	/// Override the traversal cooldown duration
	pub fn set_cooldown(&mut self, cooldown: Duration) {
		self.cooldown = cooldown;
	}
	/// Replace the whitelisted actor kinds, used by hosts which manage the
	/// whitelist themselves rather than through the config file
	pub fn set_whitelisted_actors(&mut self, kinds: BTreeSet<ActorKind>) {
		self.whitelisted_actors = kinds;
	}
}

/// Where the configuration document lives on disk, kept alongside [GateConfig]
/// so the reload and debug-toggle operations can persist changes
#[derive(Component, Clone, Debug)]
pub struct ConfigPath(PathBuf);

impl ConfigPath {
	/// Create a new instance of [ConfigPath]
	pub fn new(path: &str) -> Self {
		ConfigPath(PathBuf::from(path))
	}
	/// The path as a string slice
	pub fn get(&self) -> &str {
		self.0.to_str().expect("Config path is not valid UTF-8")
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Write `contents` to a config file in a fresh temp dir, returning the dir
	/// handle (dropping it deletes the file) and the path
	fn temp_config(contents: &str) -> (tempfile::TempDir, String) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.ron").to_str().unwrap().to_string();
		std::fs::write(&path, contents).unwrap();
		(dir, path)
	}
	#[test]
	fn missing_file_creates_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.ron").to_str().unwrap().to_string();
		let config = GateConfig::from_ron(&path);
		assert!(!config.get_debug());
		assert!(config.is_portal_block(BlockKind::NetherPortal));
		assert!(config.is_portal_block(BlockKind::EndPortal));
		assert_eq!(config.get_portal_blocks().len(), 2);
		let written = std::fs::read_to_string(&path).unwrap();
		assert!(written.contains("NETHER_PORTAL"));
		assert!(written.contains("END_PORTAL"));
	}
	#[test]
	fn empty_portal_list_repopulated_with_defaults() {
		let (_dir, path) = temp_config(
			r#"(debug_mode: false, portal_blocks: [], whitelisted_entities: [])"#,
		);
		let config = GateConfig::from_ron(&path);
		assert_eq!(config.get_portal_blocks().len(), 2);
		assert!(config.is_portal_block(BlockKind::NetherPortal));
		assert!(config.is_portal_block(BlockKind::EndPortal));
	}
	#[test]
	fn invalid_identifiers_skipped() {
		let (_dir, path) = temp_config(
			r#"(
	debug_mode: true,
	portal_blocks: ["NETHER_PORTAL"],
	whitelisted_entities: ["ZOMBIE", "GOBLIN"],
)"#,
		);
		let config = GateConfig::from_ron(&path);
		assert!(config.get_debug());
		assert!(config.is_whitelisted(ActorKind::Zombie));
		assert_eq!(config.get_whitelisted_actors().len(), 1);
	}
	#[test]
	fn identifiers_normalized_on_write_back() {
		let (_dir, path) = temp_config(
			r#"(debug_mode: false, portal_blocks: ["nether_portal", "MAGMA"], whitelisted_entities: ["pig"])"#,
		);
		let _config = GateConfig::from_ron(&path);
		let written = std::fs::read_to_string(&path).unwrap();
		assert!(written.contains("NETHER_PORTAL"));
		assert!(written.contains("PIG"));
		assert!(!written.contains("MAGMA"));
	}
	#[test]
	fn reload_is_re_entrant() {
		let (_dir, path) = temp_config(
			r#"(debug_mode: false, portal_blocks: ["END_PORTAL"], whitelisted_entities: ["ZOMBIE"])"#,
		);
		let mut config = GateConfig::from_ron(&path);
		assert!(config.is_whitelisted(ActorKind::Zombie));
		std::fs::write(
			&path,
			r#"(debug_mode: false, portal_blocks: ["NETHER_PORTAL"], whitelisted_entities: ["PIG"])"#,
		)
		.unwrap();
		config.reload_from(&path);
		assert!(!config.is_whitelisted(ActorKind::Zombie));
		assert!(config.is_whitelisted(ActorKind::Pig));
		assert!(config.is_portal_block(BlockKind::NetherPortal));
		assert!(!config.is_portal_block(BlockKind::EndPortal));
	}
	#[test]
	fn missing_document_fields_defaulted() {
		let (_dir, path) = temp_config(r#"(debug_mode: true)"#);
		let config = GateConfig::from_ron(&path);
		assert!(config.get_debug());
		assert_eq!(config.get_portal_blocks().len(), 2);
		assert!(config.get_whitelisted_actors().is_empty());
	}
}

//! The host vocabulary of block, actor and realm kinds.
//!
//! Configuration files refer to kinds by their canonical SCREAMING_SNAKE
//! identifiers, e.g `NETHER_PORTAL` or `ZOMBIE`. Parsing is case-insensitive
//! and an unrecognized identifier is reported to the caller as an error so
//! that config loading can skip it without aborting
//!

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

/// World-block types known to the host runtime
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Reflect)]
pub enum BlockKind {
	/// The purple sheet filling a nether portal frame
	NetherPortal,
	/// The starfield sheet filling an end portal frame
	EndPortal,
	/// The beam block spawned in the end realm after defeating its boss, always
	/// exempt from portal blocking
	EndGateway,
	Obsidian,
	Bedrock,
	Netherrack,
	EndStone,
	Glowstone,
	Stone,
	Air,
}

impl BlockKind {
	/// Canonical SCREAMING_SNAKE identifier used in config files and chat
	pub fn identifier(&self) -> &'static str {
		match self {
			BlockKind::NetherPortal => "NETHER_PORTAL",
			BlockKind::EndPortal => "END_PORTAL",
			BlockKind::EndGateway => "END_GATEWAY",
			BlockKind::Obsidian => "OBSIDIAN",
			BlockKind::Bedrock => "BEDROCK",
			BlockKind::Netherrack => "NETHERRACK",
			BlockKind::EndStone => "END_STONE",
			BlockKind::Glowstone => "GLOWSTONE",
			BlockKind::Stone => "STONE",
			BlockKind::Air => "AIR",
		}
	}
	/// Short human-readable description of a portal kind shown in the info
	/// view and the config menu. Non-portal blocks fall back to the identifier
	pub fn portal_name(&self) -> &'static str {
		match self {
			BlockKind::NetherPortal => "Nether Portal",
			BlockKind::EndPortal => "End Portal",
			BlockKind::EndGateway => "End Gateway",
			other => other.identifier(),
		}
	}
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.identifier())
	}
}

impl FromStr for BlockKind {
	type Err = UnknownKind;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"NETHER_PORTAL" => Ok(BlockKind::NetherPortal),
			"END_PORTAL" => Ok(BlockKind::EndPortal),
			"END_GATEWAY" => Ok(BlockKind::EndGateway),
			"OBSIDIAN" => Ok(BlockKind::Obsidian),
			"BEDROCK" => Ok(BlockKind::Bedrock),
			"NETHERRACK" => Ok(BlockKind::Netherrack),
			"END_STONE" => Ok(BlockKind::EndStone),
			"GLOWSTONE" => Ok(BlockKind::Glowstone),
			"STONE" => Ok(BlockKind::Stone),
			"AIR" => Ok(BlockKind::Air),
			_ => Err(UnknownKind(s.to_string())),
		}
	}
}

/// Actor types known to the host runtime
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Reflect)]
pub enum ActorKind {
	/// A human player, never subject to whitelisting
	Player,
	Zombie,
	Skeleton,
	Creeper,
	Enderman,
	Spider,
	Villager,
	Pig,
	Cow,
	Chicken,
	Horse,
	IronGolem,
	/// Projectile fired from a bow
	Arrow,
	/// Thrown projectile
	Snowball,
	/// Thrown projectile which teleports its owner on impact
	EnderPearl,
	/// Projectile spat by nether mobs
	Fireball,
}

impl ActorKind {
	/// Canonical SCREAMING_SNAKE identifier used in config files and chat
	pub fn identifier(&self) -> &'static str {
		match self {
			ActorKind::Player => "PLAYER",
			ActorKind::Zombie => "ZOMBIE",
			ActorKind::Skeleton => "SKELETON",
			ActorKind::Creeper => "CREEPER",
			ActorKind::Enderman => "ENDERMAN",
			ActorKind::Spider => "SPIDER",
			ActorKind::Villager => "VILLAGER",
			ActorKind::Pig => "PIG",
			ActorKind::Cow => "COW",
			ActorKind::Chicken => "CHICKEN",
			ActorKind::Horse => "HORSE",
			ActorKind::IronGolem => "IRON_GOLEM",
			ActorKind::Arrow => "ARROW",
			ActorKind::Snowball => "SNOWBALL",
			ActorKind::EnderPearl => "ENDER_PEARL",
			ActorKind::Fireball => "FIREBALL",
		}
	}
}

impl fmt::Display for ActorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.identifier())
	}
}

impl FromStr for ActorKind {
	type Err = UnknownKind;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"PLAYER" => Ok(ActorKind::Player),
			"ZOMBIE" => Ok(ActorKind::Zombie),
			"SKELETON" => Ok(ActorKind::Skeleton),
			"CREEPER" => Ok(ActorKind::Creeper),
			"ENDERMAN" => Ok(ActorKind::Enderman),
			"SPIDER" => Ok(ActorKind::Spider),
			"VILLAGER" => Ok(ActorKind::Villager),
			"PIG" => Ok(ActorKind::Pig),
			"COW" => Ok(ActorKind::Cow),
			"CHICKEN" => Ok(ActorKind::Chicken),
			"HORSE" => Ok(ActorKind::Horse),
			"IRON_GOLEM" => Ok(ActorKind::IronGolem),
			"ARROW" => Ok(ActorKind::Arrow),
			"SNOWBALL" => Ok(ActorKind::Snowball),
			"ENDER_PEARL" => Ok(ActorKind::EnderPearl),
			"FIREBALL" => Ok(ActorKind::Fireball),
			_ => Err(UnknownKind(s.to_string())),
		}
	}
}

/// Realm (dimension) an actor currently occupies
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Reflect)]
pub enum Realm {
	#[default]
	Overworld,
	Nether,
	/// The end realm, home of the gateway portal variant
	End,
}

/// Raised when an identifier does not name any known kind
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownKind(String);

impl UnknownKind {
	/// The identifier which failed to parse
	pub fn get(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for UnknownKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "unknown kind identifier `{}`", self.0)
	}
}

impl std::error::Error for UnknownKind {}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn parse_block_kind_case_insensitive() {
		assert_eq!(BlockKind::from_str("nether_portal"), Ok(BlockKind::NetherPortal));
		assert_eq!(BlockKind::from_str("END_GATEWAY"), Ok(BlockKind::EndGateway));
	}
	#[test]
	fn parse_block_kind_unknown() {
		let result = BlockKind::from_str("LAVA_LAMP");
		assert_eq!(result, Err(UnknownKind("LAVA_LAMP".to_string())));
	}
	#[test]
	fn parse_actor_kind() {
		assert_eq!(ActorKind::from_str("zombie"), Ok(ActorKind::Zombie));
		assert!(ActorKind::from_str("GOBLIN").is_err());
	}
	#[test]
	fn identifier_round_trip() {
		for kind in [ActorKind::Zombie, ActorKind::IronGolem, ActorKind::EnderPearl] {
			assert_eq!(ActorKind::from_str(kind.identifier()), Ok(kind));
		}
	}
	#[test]
	fn portal_names() {
		assert_eq!(BlockKind::NetherPortal.portal_name(), "Nether Portal");
		assert_eq!(BlockKind::EndGateway.portal_name(), "End Gateway");
		assert_eq!(BlockKind::Obsidian.portal_name(), "OBSIDIAN");
	}
}

//! Portal gating restricts which actors may traverse teleportation portals.
//!
//! Human players are always allowed through, subject to a per-player cooldown
//! which stops a single crossing from being counted multiple times while the
//! engine re-fires the traversal event. Non-player actors are only allowed
//! through when their kind has been whitelisted by an administrator, with one
//! built-in exception: the gateway portal variant found in the end realm is
//! always exempt from blocking.
//!
//! Definitions:
//!
//! * Portal block - a world-block type recognized as a protected teleportation surface
//! * Gateway - a special portal-block type always exempt from blocking regardless of whitelist
//! * Cooldown - minimum elapsed time between a player's consecutive counted traversals
//! * Whitelist - administrator-configured set of non-player actor kinds permitted to traverse freely
//!

pub mod actors;
pub mod chat;
pub mod config;
pub mod cooldown;
pub mod decision;
pub mod kinds;
pub mod menu;

//! This is a plugin for the Bevy game engine which restricts which actors may
//! traverse teleportation portals
//!

pub mod bundle;
pub mod gate;
pub mod plugin;

pub mod prelude;

//! `use bevy_portal_control_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::gate::{
	actors::*, chat::*, config::*, cooldown::*, decision::*, kinds::*, menu::*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{admin_layer::*, gate_layer::*, *},
};

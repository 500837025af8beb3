//! Section-sign colour codes for chat text, matching the formatting codes the
//! host's chat renderer understands
//!

use std::fmt;

/// Colour prefix for a run of chat text
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChatColor {
	Red,
	Green,
	Yellow,
	Gold,
	Gray,
	Aqua,
	DarkPurple,
	LightPurple,
}

impl ChatColor {
	/// The single character code of the colour
	fn code(&self) -> char {
		match self {
			ChatColor::Red => 'c',
			ChatColor::Green => 'a',
			ChatColor::Yellow => 'e',
			ChatColor::Gold => '6',
			ChatColor::Gray => '7',
			ChatColor::Aqua => 'b',
			ChatColor::DarkPurple => '5',
			ChatColor::LightPurple => 'd',
		}
	}
}

impl fmt::Display for ChatColor {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "\u{00a7}{}", self.code())
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn colour_codes() {
		assert_eq!(ChatColor::Red.to_string(), "\u{00a7}c");
		assert_eq!(format!("{}hello", ChatColor::Gold), "\u{00a7}6hello");
	}
}

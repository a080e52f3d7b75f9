// src/config/consts.rs

// Roster page
pub const ROSTER_LOCATOR: &str = "https://bluearchive.wiki/wiki/Characters";
pub const ROSTER_WIDTH: usize = 15;
pub const RARITY_GLYPH: char = '★';

// Field normalization
pub const UNKNOWN_MARKER: &str = "??";
pub const UNKNOWN_SENTINEL: i32 = -1;

// Profile assembly
pub const BONUS_SUFFIX: &str = " (bonus)";

// Offline pages
pub const PAGE_EXT: &str = "html";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "students.json";

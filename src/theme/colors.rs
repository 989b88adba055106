//! Color constants for the CapFlow design system.

#![allow(dead_code)]

// === SURFACES ===
pub const PAPER: &str = "#ffffff";
pub const PAPER_TINT: &str = "#f6f8fa";
pub const BORDER: &str = "#e3e8ee";

// === INK (Text) ===
pub const INK: &str = "#12263a";
pub const INK_SECONDARY: &str = "rgba(18, 38, 58, 0.72)";
pub const INK_MUTED: &str = "rgba(18, 38, 58, 0.48)";

// === BLUE (Actions, Links) ===
pub const BLUE: &str = "#1a56db";
pub const BLUE_DEEP: &str = "#15449f";
pub const BLUE_TINT: &str = "rgba(26, 86, 219, 0.1)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#137a4d";
pub const SUCCESS_TINT: &str = "#e4f5ec";
pub const DANGER: &str = "#c2344a";
pub const DANGER_TINT: &str = "#fbeaed";
pub const WARNING: &str = "#b9730f";

//! Storage keys and bootstrap constants shared across the crate.

// ── Key-value storage keys ──────────────────────────────────────

/// Key holding the serialized current-user record.
pub const USER_KEY: &str = "whiteboard_user";

/// Key holding the onboarding-complete boolean flag.
pub const ONBOARDING_KEY: &str = "onboarding_complete";

// ── First-run sample board ──────────────────────────────────────

/// Name of the whiteboard seeded when storage is empty.
pub const SAMPLE_BOARD_NAME: &str = "My First Whiteboard";

/// Text content of the single seeded item.
pub const SAMPLE_ITEM_CONTENT: &str = "Welcome! Tap anywhere to add a note.";

/// Author id recorded on seeded content (no user may exist yet at first run).
pub const SAMPLE_AUTHOR: &str = "system";

/// Horizontal position of the seeded item in board coordinates.
pub const SAMPLE_ITEM_X: f64 = 120.0;

/// Vertical position of the seeded item in board coordinates.
pub const SAMPLE_ITEM_Y: f64 = 160.0;

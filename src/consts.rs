//! Shared numeric and styling constants for the widget set.

// ── Palette ─────────────────────────────────────────────────────

/// Accent teal used for quantum highlights.
pub const ACCENT: &str = "#29b2b2";

/// Accent at 90% opacity, used for filled plot geometry.
pub const ACCENT_SOFT: &str = "rgba(41,178,178,0.9)";

/// Faint accent for period connectors and glows.
pub const ACCENT_FAINT: &str = "rgba(41,178,178,0.3)";

/// Primary foreground on the dark page.
pub const INK: &str = "rgba(255,255,255,0.8)";

/// Canvas frame border.
pub const FRAME: &str = "rgba(255,255,255,0.2)";

/// Grid and axis lines.
pub const GRID: &str = "rgba(255,255,255,0.15)";

// ── Clamps ──────────────────────────────────────────────────────

/// Minimum harmonic count on the QFT comb.
pub const QFT_R_MIN: u32 = 3;

/// Maximum harmonic count on the QFT comb.
pub const QFT_R_MAX: u32 = 40;

/// Highest x sampled by the periodic-function plot (inclusive).
pub const PERIOD_X_MAX: u64 = 20;

/// Maximum number of continued-fraction terms computed per update.
pub const CF_MAX_TERMS: usize = 12;

/// Fallback numerator when the `y` field cannot be parsed.
pub const CF_FALLBACK_Y: u64 = 1;

/// Fallback denominator when the `N` field cannot be parsed.
pub const CF_FALLBACK_N: u64 = 128;

/// Number of outcome lines kept and shown by the entanglement demo.
pub const OUTCOME_LOG_CAP: usize = 8;

/// Default per-qubit flip probability of the repetition-code noise channel.
pub const ECC_FLIP_PROBABILITY: f64 = 0.25;

// ── Timing ──────────────────────────────────────────────────────

/// Cosmetic Bloch-sphere spin, in radians per millisecond (≈0.0025 rad/frame at 60 Hz).
pub const BLOCH_SPIN_RAD_PER_MS: f64 = 0.000_15;

/// How long the bit box stays scaled after a toggle.
pub const BIT_FLASH_MS: u32 = 160;

/// How long the qubit box stays flipped after a cycle.
pub const QUBIT_FLIP_MS: u32 = 220;

/// How long the RSA lock keeps shaking.
pub const RSA_SHAKE_MS: u32 = 900;

// ── Host-exposed control names ──────────────────────────────────

pub const CONTROL_SET_BLOCH_STATE: &str = "setState";
pub const CONTROL_UPDATE_QFT_R: &str = "updateR";
pub const CONTROL_TOGGLE_BIT: &str = "toggleBit";
pub const CONTROL_CYCLE_QUBIT: &str = "cycleQubit";

//! The widget set.
//!
//! Each module owns one widget: its state record, the operations its controls
//! trigger, and its render routine. Canvas widgets implement [`Draw`] and
//! produce a [`Scene`]; markup widgets return [`crate::effect::Effect`] lists
//! from their operations. No widget reads another's state.


pub mod bell;
pub mod bits;
pub mod bloch;
pub mod contfrac;
pub mod ecc;
pub mod entangle;
pub mod gcd;
pub mod interference;
pub mod periodic;
pub mod pipeline;
pub mod qft;
pub mod rsa;

use crate::camera::Viewport;
use crate::scene::Scene;

/// A widget that paints onto a canvas.
pub trait Draw {
    /// Build the frame for `viewport` at frame time `now_ms`. Static widgets
    /// ignore the clock.
    fn draw(&self, viewport: Viewport, now_ms: f64) -> Scene;
}

/// Read a leading integer the way form fields are read: surrounding
/// whitespace is ignored, an optional sign and digits are taken, and anything
/// after the digits is dropped (`"12px"` → 12, `"3.7"` → 3). Returns `None`
/// when no digit leads.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Read a float slider value; `None` for anything that is not a finite number.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

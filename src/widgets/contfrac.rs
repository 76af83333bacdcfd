//! Continued-fraction calculator: recover a period candidate from `y / N`.
//!
//! After measuring `y` the period `r` hides in the denominators of the
//! convergents of `y / N`.

#[cfg(test)]
#[path = "contfrac_test.rs"]
mod contfrac_test;

use crate::config::ContFracConfig;
use crate::consts::{ACCENT, CF_FALLBACK_N, CF_FALLBACK_Y};
use crate::effect::{Child, Effect};
use crate::widgets::parse_leading_int;

/// `h / k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergent {
    pub h: u64,
    pub k: u64,
}

/// Partial quotients of `num / den`, at most `max_terms` of them.
#[must_use]
pub fn expand(num: u64, den: u64, max_terms: usize) -> Vec<u64> {
    let mut terms = Vec::new();
    let (mut n, mut d) = (num, den);
    while d != 0 && terms.len() < max_terms {
        terms.push(n / d);
        (n, d) = (d, n % d);
    }
    terms
}

/// Convergents of a continued fraction.
#[must_use]
pub fn convergents(terms: &[u64]) -> Vec<Convergent> {
    // (h_{k-1}, h_{k-2}) and (k_{k-1}, k_{k-2}).
    let (mut h1, mut h0) = (1u64, 0u64);
    let (mut k1, mut k0) = (0u64, 1u64);
    terms
        .iter()
        .map(|&a| {
            let h = a.saturating_mul(h1).saturating_add(h0);
            let k = a.saturating_mul(k1).saturating_add(k0);
            (h0, h1) = (h1, h);
            (k0, k1) = (k1, k);
            Convergent { h, k }
        })
        .collect()
}

fn field(raw: &str, min: u64, fallback: u64) -> u64 {
    match parse_leading_int(raw) {
        Some(v) => u64::try_from(v).map_or(min, |v| v.max(min)),
        None => fallback,
    }
}

#[derive(Debug, Clone)]
pub struct ContFracCalc {
    list: String,
    max_terms: usize,
    y: u64,
    n: u64,
}

impl ContFracCalc {
    #[must_use]
    pub fn new(cfg: &ContFracConfig) -> Self {
        Self { list: cfg.list.clone(), max_terms: cfg.max_terms, y: CF_FALLBACK_Y, n: CF_FALLBACK_N }
    }

    #[must_use]
    pub fn inputs(&self) -> (u64, u64) {
        (self.y, self.n)
    }

    /// Read both fields. `y` is at least 1 and `N` at least 2; empty or
    /// unparsable text uses the fallbacks.
    pub fn set_inputs(&mut self, y_raw: &str, n_raw: &str) {
        self.y = field(y_raw, 1, CF_FALLBACK_Y);
        self.n = field(n_raw, 2, CF_FALLBACK_N);
    }

    #[must_use]
    pub fn convergents(&self) -> Vec<Convergent> {
        convergents(&expand(self.y, self.n, self.max_terms))
    }

    /// Rebuild the list from the current inputs.
    #[must_use]
    pub fn render(&self) -> Vec<Effect> {
        let mut items: Vec<Child> = self
            .convergents()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Child::text(None, format!("Convergent {}: {}/{}  → candidate r = {}", i + 1, c.h, c.k, c.k))
            })
            .collect();
        items.push(Child::html(
            None,
            format!(
                "<span style=\"color:{ACCENT}\">Hint:</span> test candidates r by checking if \
                 a<sup>r</sup> ≡ 1 (mod N) (in Shor)."
            ),
        ));
        vec![Effect::replace_children(&self.list, "li", items)]
    }

    /// Handle an edit to either field.
    pub fn update(&mut self, y_raw: &str, n_raw: &str) -> Vec<Effect> {
        self.set_inputs(y_raw, n_raw);
        self.render()
    }
}

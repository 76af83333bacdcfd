//! RSA story: multiplying is easy, factoring is hard.

#[cfg(test)]
#[path = "rsa_test.rs"]
mod rsa_test;

use crate::arith::trial_division;
use crate::config::RsaConfig;
use crate::consts::RSA_SHAKE_MS;
use crate::effect::Effect;

/// Which half of the story is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsaView {
    #[default]
    Multiply,
    Factor,
}

#[derive(Debug, Clone)]
pub struct RsaStory {
    output: String,
    p: u64,
    q: u64,
    view: RsaView,
}

impl RsaStory {
    #[must_use]
    pub fn new(cfg: &RsaConfig) -> Self {
        Self { output: cfg.output.clone(), p: cfg.p, q: cfg.q, view: RsaView::Multiply }
    }

    #[must_use]
    pub fn view(&self) -> RsaView {
        self.view
    }

    /// `p·q`. Validation rejects configurations that overflow.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.p.saturating_mul(self.q)
    }

    pub fn multiply(&mut self) -> Vec<Effect> {
        self.view = RsaView::Multiply;
        let (p, q, n) = (self.p, self.q, self.modulus());
        let html = format!(
            "<div style=\"display:flex;gap:12px;align-items:center;justify-content:center;\">\
             <div class=\"primeBox\">p = {p}</div>\
             <div style=\"opacity:.7;\">×</div>\
             <div class=\"primeBox\">q = {q}</div>\
             <div style=\"opacity:.7;\">→</div>\
             <div class=\"lockBox\">N = {n} 🔒</div></div>\
             <div class=\"caption\" style=\"margin-top:10px;\">Easy: one multiplication turns p and q into N.</div>"
        );
        vec![Effect::set_html(&self.output, html)]
    }

    /// Show the locked modulus with a shake that wears off.
    pub fn factor_try(&mut self) -> Vec<Effect> {
        self.view = RsaView::Factor;
        let n = self.modulus();
        let search = trial_division(n);
        let html = format!(
            "<div style=\"display:flex;gap:12px;align-items:center;justify-content:center;\">\
             <div class=\"lockBox shake\">N = {n} 🔒</div>\
             <div style=\"opacity:.7;\">→</div>\
             <div class=\"primeBox\">p ?</div>\
             <div class=\"primeBox\">q ?</div></div>\
             <div class=\"caption\" style=\"margin-top:10px;\">Hard (classically): given N, recover p and q. \
             Trial division needs {} tries here; the count grows with √N.</div>",
            search.steps
        );
        vec![
            Effect::set_html(&self.output, html),
            Effect::expire_class(&self.output, ".lockBox", "shake", RSA_SHAKE_MS),
        ]
    }
}

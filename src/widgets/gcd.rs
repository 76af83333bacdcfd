//! "From r to factors" reveal panel.

#[cfg(test)]
#[path = "gcd_test.rs"]
mod gcd_test;

use crate::arith::{mod_pow, shor_factors};
use crate::config::GcdConfig;
use crate::consts::ACCENT;
use crate::effect::Effect;

#[derive(Debug, Clone)]
pub struct GcdPanel {
    output: String,
    a: u64,
    n: u64,
    r: u64,
    revealed: bool,
}

impl GcdPanel {
    #[must_use]
    pub fn new(cfg: &GcdConfig) -> Self {
        Self {
            output: cfg.output.clone(),
            a: cfg.example_a,
            n: cfg.example_n,
            r: cfg.example_r,
            revealed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Show the recipe, plus the worked example when it factors.
    pub fn reveal(&mut self) -> Vec<Effect> {
        self.revealed = true;
        let mut html = recipe_html();
        if let Some(example) = self.example_html() {
            html.push_str(&example);
        }
        vec![Effect::set_html(&self.output, html)]
    }

    fn example_html(&self) -> Option<String> {
        let (p, q) = shor_factors(self.a, self.r, self.n)?;
        let half = mod_pow(self.a, self.r / 2, self.n);
        let (a, n, r) = (self.a, self.n, self.r);
        Some(format!(
            "\n<div style=\"margin-top:10px;opacity:.85;\">Example: a={a}, N={n}, r={r} → \
             a<sup>r/2</sup> mod N = {half}, gcd({}, {n}) = <span style=\"color:{ACCENT};\">{p}</span>, \
             gcd({}, {n}) = <span style=\"color:{ACCENT};\">{q}</span></div>",
            half - 1,
            half + 1,
        ))
    }
}

fn recipe_html() -> String {
    format!(
        "<div style=\"margin-top:10px;\">\
         <span style=\"color:{ACCENT};\">a<sup>r/2</sup> ± 1</span> → \
         <b>gcd</b>(a<sup>r/2</sup>−1, N), <b>gcd</b>(a<sup>r/2</sup>+1, N)</div>\n\
         <div style=\"margin-top:8px;\">⇓</div>\n\
         <div style=\"color:#fff;\">Found factors: <span style=\"color:{ACCENT};\">p</span>, \
         <span style=\"color:{ACCENT};\">q</span></div>"
    )
}

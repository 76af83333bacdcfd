//! Page configuration: anchor identifiers and widget parameters.
//!
//! Every section defaults to the identifiers used by the explainer page, so an
//! empty JSON object (or no configuration at all) mounts the stock page. Hosts
//! embedding the widgets elsewhere override only what differs:
//!
//! ```json
//! { "qft": { "canvas": "fourier", "n": 256 }, "ecc": { "flip_probability": 0.1 } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CF_MAX_TERMS, ECC_FLIP_PROBABILITY};

/// Error returned by [`PageConfig::from_json`] and [`PageConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`PageConfig`].
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is out of range.
    #[error("invalid widget config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// A config section that names the anchors its widget cannot run without.
pub trait Anchored {
    /// Widget name used in logs and mount reports.
    const WIDGET: &'static str;

    /// Anchor ids that must all resolve for the widget to go live.
    fn required(&self) -> Vec<&str>;
}

/// Top-level configuration for every widget on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub pipeline: PipelineConfig,
    pub bit: BitConfig,
    pub qubit: QubitConfig,
    pub bloch: BlochConfig,
    pub qft: QftConfig,
    pub periodic: PeriodicConfig,
    pub gcd: GcdConfig,
    pub entangle: EntangleConfig,
    pub bell: BellConfig,
    pub rsa: RsaConfig,
    pub interference: InterferenceConfig,
    pub ecc: EccConfig,
    pub contfrac: ContFracConfig,
}

impl PageConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qft.n == 0 {
            return Err(ConfigError::Invalid { field: "qft.n", reason: "must be positive" });
        }
        if self.periodic.n < 2 {
            return Err(ConfigError::Invalid { field: "periodic.n", reason: "must be at least 2" });
        }
        if self.gcd.example_n < 3 {
            return Err(ConfigError::Invalid { field: "gcd.example_n", reason: "must be at least 3" });
        }
        if self.rsa.p < 2 || self.rsa.q < 2 {
            return Err(ConfigError::Invalid { field: "rsa.p/rsa.q", reason: "must be at least 2" });
        }
        if self.rsa.p.checked_mul(self.rsa.q).is_none() {
            return Err(ConfigError::Invalid { field: "rsa.p/rsa.q", reason: "product overflows" });
        }
        if !(0.0..=1.0).contains(&self.ecc.flip_probability) {
            return Err(ConfigError::Invalid { field: "ecc.flip_probability", reason: "must be within [0, 1]" });
        }
        if self.contfrac.max_terms == 0 {
            return Err(ConfigError::Invalid { field: "contfrac.max_terms", reason: "must be positive" });
        }
        if !self.interference.phase_pi.is_finite() {
            return Err(ConfigError::Invalid { field: "interference.phase_pi", reason: "must be finite" });
        }
        Ok(())
    }
}

fn id(s: &str) -> String {
    s.to_owned()
}

// =============================================================
// Sections
// =============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub canvas: String,
    pub toggle: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { canvas: id("pipeline-canvas"), toggle: id("pipeline-toggle") }
    }
}

impl Anchored for PipelineConfig {
    const WIDGET: &'static str = "pipeline";

    fn required(&self) -> Vec<&str> {
        vec![self.canvas.as_str(), self.toggle.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitConfig {
    pub bit_box: String,
}

impl Default for BitConfig {
    fn default() -> Self {
        Self { bit_box: id("bit-box") }
    }
}

impl Anchored for BitConfig {
    const WIDGET: &'static str = "bit";

    fn required(&self) -> Vec<&str> {
        vec![self.bit_box.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QubitConfig {
    pub qubit_box: String,
}

impl Default for QubitConfig {
    fn default() -> Self {
        Self { qubit_box: id("qubit-box") }
    }
}

impl Anchored for QubitConfig {
    const WIDGET: &'static str = "qubit";

    fn required(&self) -> Vec<&str> {
        vec![self.qubit_box.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlochConfig {
    /// Container the sphere canvas is appended to.
    pub container: String,
}

impl Default for BlochConfig {
    fn default() -> Self {
        Self { container: id("bloch-container") }
    }
}

impl Anchored for BlochConfig {
    const WIDGET: &'static str = "bloch";

    fn required(&self) -> Vec<&str> {
        vec![self.container.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QftConfig {
    pub canvas: String,
    pub label: String,
    /// Initial harmonic count.
    pub r: u32,
    /// Domain size.
    pub n: u32,
}

impl Default for QftConfig {
    fn default() -> Self {
        Self { canvas: id("qft-canvas"), label: id("r-label"), r: 5, n: 128 }
    }
}

impl Anchored for QftConfig {
    const WIDGET: &'static str = "qft";

    fn required(&self) -> Vec<&str> {
        vec![self.canvas.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicConfig {
    pub canvas: String,
    pub slider: String,
    pub a: u64,
    pub n: u64,
}

impl Default for PeriodicConfig {
    fn default() -> Self {
        Self { canvas: id("period-canvas"), slider: id("a-slider"), a: 3, n: 15 }
    }
}

impl Anchored for PeriodicConfig {
    const WIDGET: &'static str = "periodic";

    fn required(&self) -> Vec<&str> {
        vec![self.canvas.as_str(), self.slider.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcdConfig {
    pub trigger: String,
    pub output: String,
    /// Worked example shown under the recipe.
    pub example_a: u64,
    pub example_n: u64,
    pub example_r: u64,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self { trigger: id("gcd-demo"), output: id("gcd-output"), example_a: 7, example_n: 15, example_r: 4 }
    }
}

impl Anchored for GcdConfig {
    const WIDGET: &'static str = "gcd";

    fn required(&self) -> Vec<&str> {
        vec![self.trigger.as_str(), self.output.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntangleConfig {
    pub canvas: String,
    pub entangle_button: String,
    pub separable_button: String,
    pub measure_button: String,
    pub reset_button: String,
}

impl Default for EntangleConfig {
    fn default() -> Self {
        Self {
            canvas: id("entangle-canvas"),
            entangle_button: id("btn-entangle"),
            separable_button: id("btn-separable"),
            measure_button: id("btn-measureZ"),
            reset_button: id("btn-reset-ent"),
        }
    }
}

impl Anchored for EntangleConfig {
    const WIDGET: &'static str = "entangle";

    fn required(&self) -> Vec<&str> {
        vec![self.canvas.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BellConfig {
    pub svg: String,
    pub label: String,
    pub next: String,
    pub prev: String,
    pub gate_h: String,
    pub gate_cnot: String,
    pub token_top: String,
    pub token_bottom: String,
    pub symbol_top: String,
    pub symbol_bottom: String,
    pub pulse: String,
}

impl Default for BellConfig {
    fn default() -> Self {
        Self {
            svg: id("bell-circuit"),
            label: id("bell-state-label"),
            next: id("bell-next"),
            prev: id("bell-prev"),
            gate_h: id("gateH"),
            gate_cnot: id("gateCNOT"),
            token_top: id("bell-token-top"),
            token_bottom: id("bell-token-bottom"),
            symbol_top: id("bell-symbol-top"),
            symbol_bottom: id("bell-symbol-bottom"),
            pulse: id("bell-pulse"),
        }
    }
}

impl Anchored for BellConfig {
    const WIDGET: &'static str = "bell";

    fn required(&self) -> Vec<&str> {
        vec![self.svg.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaConfig {
    pub scene: String,
    pub multiply: String,
    pub factor: String,
    pub output: String,
    pub p: u64,
    pub q: u64,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            scene: id("rsa-scene"),
            multiply: id("rsa-mul"),
            factor: id("rsa-fac"),
            output: id("rsa-output"),
            p: 61,
            q: 53,
        }
    }
}

impl Anchored for RsaConfig {
    const WIDGET: &'static str = "rsa";

    fn required(&self) -> Vec<&str> {
        vec![self.scene.as_str(), self.output.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterferenceConfig {
    pub canvas: String,
    pub slider: String,
    pub label: String,
    /// Initial phase difference as a multiple of π.
    pub phase_pi: f64,
}

impl Default for InterferenceConfig {
    fn default() -> Self {
        Self {
            canvas: id("interf-canvas"),
            slider: id("interf-phase"),
            label: id("interf-label"),
            phase_pi: 1.0 / 3.0,
        }
    }
}

impl Anchored for InterferenceConfig {
    const WIDGET: &'static str = "interference";

    fn required(&self) -> Vec<&str> {
        vec![self.canvas.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EccConfig {
    pub scene: String,
    pub noise: String,
    pub decode: String,
    pub reset: String,
    pub message: String,
    pub flip_probability: f64,
}

impl Default for EccConfig {
    fn default() -> Self {
        Self {
            scene: id("ecc-scene"),
            noise: id("ecc-noise"),
            decode: id("ecc-decode"),
            reset: id("ecc-reset"),
            message: id("ecc-msg"),
            flip_probability: ECC_FLIP_PROBABILITY,
        }
    }
}

impl Anchored for EccConfig {
    const WIDGET: &'static str = "ecc";

    fn required(&self) -> Vec<&str> {
        vec![self.scene.as_str(), self.message.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContFracConfig {
    pub y_input: String,
    pub n_input: String,
    pub list: String,
    pub max_terms: usize,
}

impl Default for ContFracConfig {
    fn default() -> Self {
        Self { y_input: id("cf-y"), n_input: id("cf-N"), list: id("cf-list"), max_terms: CF_MAX_TERMS }
    }
}

impl Anchored for ContFracConfig {
    const WIDGET: &'static str = "contfrac";

    fn required(&self) -> Vec<&str> {
        vec![self.y_input.as_str(), self.n_input.as_str(), self.list.as_str()]
    }
}

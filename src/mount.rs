//! Resolve every widget on a page at once.
//!
//! [`resolve`] runs anchor resolution for each widget section and builds the
//! state of the ones that go live. The browser glue binds events only for the
//! widgets present in the returned [`Widgets`].

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use crate::anchor::{AnchorLookup, Mount, MountReport};
use crate::config::{Anchored, PageConfig};
use crate::widgets::bell::BellCircuit;
use crate::widgets::bits::{BitToggle, QubitCycler};
use crate::widgets::bloch::BlochSphere;
use crate::widgets::contfrac::ContFracCalc;
use crate::widgets::ecc::RepetitionCode;
use crate::widgets::entangle::EntangleDemo;
use crate::widgets::gcd::GcdPanel;
use crate::widgets::interference::Interference;
use crate::widgets::periodic::PeriodicPlot;
use crate::widgets::pipeline::Pipeline;
use crate::widgets::qft::QftComb;
use crate::widgets::rsa::RsaStory;

/// State of every live widget; inert ones are `None`.
#[derive(Debug, Default)]
pub struct Widgets {
    pub pipeline: Option<Pipeline>,
    pub bit: Option<BitToggle>,
    pub qubit: Option<QubitCycler>,
    pub bloch: Option<BlochSphere>,
    pub qft: Option<QftComb>,
    pub periodic: Option<PeriodicPlot>,
    pub gcd: Option<GcdPanel>,
    pub entangle: Option<EntangleDemo>,
    pub bell: Option<BellCircuit>,
    pub rsa: Option<RsaStory>,
    pub interference: Option<Interference>,
    pub ecc: Option<RepetitionCode>,
    pub contfrac: Option<ContFracCalc>,
}

fn one<C, W, L>(report: &mut MountReport, lookup: &L, section: &C, build: impl FnOnce(&C) -> W) -> Option<W>
where
    C: Anchored,
    L: AnchorLookup + ?Sized,
{
    report.record(C::WIDGET, Mount::resolve(lookup, section, build))
}

/// Resolve all widgets in page order.
pub fn resolve<L>(lookup: &L, cfg: &PageConfig) -> (Widgets, MountReport)
where
    L: AnchorLookup + ?Sized,
{
    let mut report = MountReport::default();
    let widgets = Widgets {
        pipeline: one(&mut report, lookup, &cfg.pipeline, |_| Pipeline::new()),
        bit: one(&mut report, lookup, &cfg.bit, BitToggle::new),
        qubit: one(&mut report, lookup, &cfg.qubit, QubitCycler::new),
        bloch: one(&mut report, lookup, &cfg.bloch, |_| BlochSphere::new()),
        qft: one(&mut report, lookup, &cfg.qft, QftComb::new),
        periodic: one(&mut report, lookup, &cfg.periodic, PeriodicPlot::new),
        gcd: one(&mut report, lookup, &cfg.gcd, GcdPanel::new),
        entangle: one(&mut report, lookup, &cfg.entangle, |_| EntangleDemo::new()),
        bell: one(&mut report, lookup, &cfg.bell, BellCircuit::new),
        rsa: one(&mut report, lookup, &cfg.rsa, RsaStory::new),
        interference: one(&mut report, lookup, &cfg.interference, Interference::new),
        ecc: one(&mut report, lookup, &cfg.ecc, RepetitionCode::new),
        contfrac: one(&mut report, lookup, &cfg.contfrac, ContFracCalc::new),
    };
    log::info!("widgets: {}", report.summary());
    (widgets, report)
}

//! Anchor resolution: the first step of every widget's lifecycle.
//!
//! A widget goes live only when every anchor its config section lists as
//! required is present on the page. Otherwise it is [`Mount::Inert`], which is
//! a normal, inspectable outcome recorded in the [`MountReport`]. An inert
//! widget binds nothing and never touches the page.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use std::collections::HashSet;

use crate::config::Anchored;

/// Answers whether an element id exists on the host page.
pub trait AnchorLookup {
    fn exists(&self, id: &str) -> bool;
}

/// A fixed set of ids, for tests and server-side checks.
impl AnchorLookup for HashSet<String> {
    fn exists(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl AnchorLookup for [&str] {
    fn exists(&self, id: &str) -> bool {
        self.contains(&id)
    }
}

/// Why a widget did not go live.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("{widget}: missing anchor #{anchor}")]
    MissingAnchor { widget: &'static str, anchor: String },
}

impl MountError {
    /// The widget left inert.
    #[must_use]
    pub fn widget(&self) -> &'static str {
        match self {
            Self::MissingAnchor { widget, .. } => *widget,
        }
    }
}

/// Outcome of resolving one widget.
#[derive(Debug)]
pub enum Mount<W> {
    Live(W),
    Inert(MountError),
}

impl<W> Mount<W> {
    /// Resolve `section`'s required anchors against `lookup`; build the widget
    /// only if all of them exist.
    pub fn resolve<C, L>(lookup: &L, section: &C, build: impl FnOnce(&C) -> W) -> Self
    where
        C: Anchored,
        L: AnchorLookup + ?Sized,
    {
        match require(lookup, section) {
            Ok(()) => Self::Live(build(section)),
            Err(err) => {
                log::debug!("{err}; widget left inert");
                Self::Inert(err)
            }
        }
    }
}

/// Check that every required anchor of `section` exists.
///
/// # Errors
///
/// Returns [`MountError::MissingAnchor`] for the first absent id.
pub fn require<C, L>(lookup: &L, section: &C) -> Result<(), MountError>
where
    C: Anchored,
    L: AnchorLookup + ?Sized,
{
    match section.required().into_iter().find(|id| !lookup.exists(id)) {
        Some(missing) => Err(MountError::MissingAnchor { widget: C::WIDGET, anchor: missing.to_owned() }),
        None => Ok(()),
    }
}

/// Which widgets went live and which stayed inert, in mount order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MountReport {
    pub live: Vec<&'static str>,
    pub inert: Vec<MountError>,
}

impl MountReport {
    /// Record `mount` under `widget` and hand back the live widget, if any.
    pub fn record<W>(&mut self, widget: &'static str, mount: Mount<W>) -> Option<W> {
        match mount {
            Mount::Live(w) => {
                self.live.push(widget);
                Some(w)
            }
            Mount::Inert(err) => {
                self.inert.push(err);
                None
            }
        }
    }

    /// Names of the widgets that stayed inert, in mount order.
    #[must_use]
    pub fn inert_widgets(&self) -> Vec<&'static str> {
        self.inert.iter().map(MountError::widget).collect()
    }

    /// One-line summary for the mount log, naming each inert widget's cause.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!("{} live, {} inert", self.live.len(), self.inert.len());
        if !self.inert.is_empty() {
            let causes: Vec<String> = self.inert.iter().map(ToString::to_string).collect();
            line.push_str(&format!(" ({})", causes.join("; ")));
        }
        line
    }
}

//! Interactive widgets for a quantum-computing explainer page.
//!
//! Every widget is a plain state struct. Canvas widgets implement
//! [`widgets::Draw`] and produce a [`scene::Scene`]; markup widgets return
//! [`effect::Effect`] lists. Neither kind touches the DOM, so all behaviour is
//! testable natively. The `hydrate` feature adds the browser glue that
//! resolves anchors, binds events, drives animation frames and paints.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widgets`] | The thirteen widgets and the [`widgets::Draw`] trait |
//! | [`mount`] | Resolve every widget on a page into live state or an inert report |
//! | [`anchor`] | Anchor lookup, `Mount`, mount report |
//! | [`config`] | Page configuration (anchor ids and widget parameters) |
//! | [`camera`] | Points, viewport, 3D orbit projection |
//! | [`scene`] | Canvas display list |
//! | [`effect`] | DOM mutations emitted by markup widgets |
//! | [`tween`] | Easing and time-projected tweens |
//! | [`ticker`] | Repeating frame task with a cancel handle |
//! | [`registry`] | Named controls callable from page markup |
//! | [`rng`] | Injectable randomness |
//! | [`arith`] | Modular arithmetic for the Shor walkthrough |
//! | [`consts`] | Palette, clamps and timings |
//! | `render`, `web` | Browser glue (`hydrate` feature) |

pub mod anchor;
pub mod arith;
pub mod camera;
pub mod config;
pub mod consts;
pub mod effect;
pub mod mount;
pub mod registry;
pub mod rng;
pub mod scene;
pub mod ticker;
pub mod tween;
pub mod widgets;

#[cfg(feature = "hydrate")]
pub mod render;
#[cfg(feature = "hydrate")]
pub mod web;

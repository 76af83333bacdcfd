//! Per-widget event wiring.
//!
//! Each live widget's state moves into `Rc<RefCell<_>>` shared only by that
//! widget's own closures. Listeners live for the lifetime of the page, so the
//! closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::{
    BellConfig, BlochConfig, ContFracConfig, EccConfig, EntangleConfig, GcdConfig, InterferenceConfig,
    PageConfig, PeriodicConfig, PipelineConfig, QftConfig, RsaConfig,
};
use crate::consts::{CONTROL_CYCLE_QUBIT, CONTROL_SET_BLOCH_STATE, CONTROL_TOGGLE_BIT, CONTROL_UPDATE_QFT_R};
use crate::mount::Widgets;
use crate::registry::ControlRegistry;
use crate::render::Surface;
use crate::rng::BrowserRandom;
use crate::ticker::{CancelHandle, Schedule};
use crate::web::dom::Page;
use crate::web::frame_loop::{self, now_ms};
use crate::widgets::Draw;
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

/// Bind every live widget. A widget whose binding fails is logged and
/// skipped; the others are unaffected.
pub fn all(page: &Page, cfg: &PageConfig, widgets: Widgets, registry: &mut ControlRegistry) {
    let Widgets {
        pipeline: w_pipeline,
        bit: w_bit,
        qubit: w_qubit,
        bloch: w_bloch,
        qft: w_qft,
        periodic: w_periodic,
        gcd: w_gcd,
        entangle: w_entangle,
        bell: w_bell,
        rsa: w_rsa,
        interference: w_interference,
        ecc: w_ecc,
        contfrac: w_contfrac,
    } = widgets;

    let results = [
        ("pipeline", w_pipeline.map(|w| pipeline(page, &cfg.pipeline, w))),
        ("bit", w_bit.map(|w| bit(page, w, registry))),
        ("qubit", w_qubit.map(|w| qubit(page, w, registry))),
        ("bloch", w_bloch.map(|w| bloch(page, &cfg.bloch, w, registry))),
        ("qft", w_qft.map(|w| qft(page, &cfg.qft, w, registry))),
        ("periodic", w_periodic.map(|w| periodic(page, &cfg.periodic, w))),
        ("gcd", w_gcd.map(|w| gcd(page, &cfg.gcd, w))),
        ("entangle", w_entangle.map(|w| entangle(page, &cfg.entangle, w))),
        ("bell", w_bell.map(|w| bell(page, &cfg.bell, w))),
        ("rsa", w_rsa.map(|w| rsa(page, &cfg.rsa, w))),
        ("interference", w_interference.map(|w| interference(page, &cfg.interference, w))),
        ("ecc", w_ecc.map(|w| ecc(page, &cfg.ecc, w))),
        ("contfrac", w_contfrac.map(|w| contfrac(page, &cfg.contfrac, w))),
    ];
    for (name, result) in results {
        if let Some(Err(err)) = result {
            log::warn!("{name}: binding failed: {err:?}");
        }
    }
}

// =============================================================
// Helpers
// =============================================================

/// Attach `handler` to `event` on the element `id`, if present.
fn listen(page: &Page, id: &str, event: &str, handler: impl FnMut() + 'static) {
    let Some(el) = page.element(id) else {
        log::debug!("no #{id}; {event} handler not attached");
        return;
    };
    listen_on(&el, event, handler);
}

fn listen_on(target: &web_sys::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let cb = Closure::<dyn FnMut()>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("adding {event} listener failed: {err:?}");
    }
    cb.forget();
}

fn on_resize(handler: impl FnMut() + 'static) {
    match web_sys::window() {
        Some(window) => listen_on(&window, "resize", handler),
        None => log::debug!("no window; resize handler not attached"),
    }
}

fn surface(page: &Page, id: &str) -> Result<Surface, JsValue> {
    let canvas = page.canvas(id).ok_or_else(|| JsValue::from_str(&format!("#{id} is not a canvas")))?;
    Surface::new(canvas)
}

/// Match the backing store to `el`'s layout size.
fn fit(surface: &mut Surface, el: &Element) {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    let current = surface.viewport();
    let width = if el.client_width() > 0 { f64::from(el.client_width()) } else { current.width };
    let height = if el.client_height() > 0 { f64::from(el.client_height()) } else { current.height };
    surface.resize(width, height, dpr);
}

fn paint(surface: &Surface, widget: &impl Draw, now: f64) {
    if let Err(err) = surface.paint(&widget.draw(surface.viewport(), now)) {
        log::warn!("paint failed: {err:?}");
    }
}

/// Repaint `widget` on every animation frame.
fn animate<W: Draw + 'static>(surface: Rc<RefCell<Surface>>, widget: Rc<RefCell<W>>) {
    frame_loop::start(CancelHandle::new(), move |now| {
        paint(&surface.borrow(), &*widget.borrow(), now);
        Schedule::Continue
    });
}

// =============================================================
// Canvas widgets
// =============================================================

fn pipeline(page: &Page, cfg: &PipelineConfig, widget: Pipeline) -> Result<(), JsValue> {
    let surface = Rc::new(surface(page, &cfg.canvas)?);
    let state = Rc::new(RefCell::new(widget));
    paint(&surface, &*state.borrow(), now_ms());

    listen(page, &cfg.toggle, "click", move || {
        state.borrow_mut().toggle();
        paint(&surface, &*state.borrow(), now_ms());
    });
    Ok(())
}

fn bloch(page: &Page, cfg: &BlochConfig, widget: BlochSphere, registry: &mut ControlRegistry) -> Result<(), JsValue> {
    let container = page.element(&cfg.container).ok_or_else(|| JsValue::from_str("bloch container vanished"))?;
    let mut canvas_surface = Surface::new(page.append_canvas(&container)?)?;
    fit(&mut canvas_surface, &container);

    let surface = Rc::new(RefCell::new(canvas_surface));
    let state = Rc::new(RefCell::new(widget));

    {
        let surface = Rc::clone(&surface);
        on_resize(move || fit(&mut surface.borrow_mut(), &container));
    }
    {
        let state = Rc::clone(&state);
        registry.register(CONTROL_SET_BLOCH_STATE, move |name: &str| {
            state.borrow_mut().set_state(name);
        });
    }
    animate(surface, state);
    Ok(())
}

fn qft(page: &Page, cfg: &QftConfig, widget: QftComb, registry: &mut ControlRegistry) -> Result<(), JsValue> {
    let surface = surface(page, &cfg.canvas)?;
    paint(&surface, &widget, now_ms());

    let page = page.clone();
    let mut widget = widget;
    registry.register(CONTROL_UPDATE_QFT_R, move |raw: &str| {
        page.apply(&widget.update_r(raw));
        paint(&surface, &widget, now_ms());
    });
    Ok(())
}

fn periodic(page: &Page, cfg: &PeriodicConfig, widget: PeriodicPlot) -> Result<(), JsValue> {
    let surface = surface(page, &cfg.canvas)?;
    paint(&surface, &widget, now_ms());

    let reader = page.clone();
    let slider = cfg.slider.clone();
    let mut widget = widget;
    listen(page, &cfg.slider, "input", move || {
        let raw = reader.input_value(&slider).unwrap_or_default();
        if widget.set_a(&raw) {
            paint(&surface, &widget, now_ms());
        }
    });
    Ok(())
}

fn entangle(page: &Page, cfg: &EntangleConfig, widget: EntangleDemo) -> Result<(), JsValue> {
    let mut canvas_surface = surface(page, &cfg.canvas)?;
    let canvas: Element = canvas_surface.canvas().clone().into();
    fit(&mut canvas_surface, &canvas);

    let surface = Rc::new(RefCell::new(canvas_surface));
    let state = Rc::new(RefCell::new(widget));

    {
        let surface = Rc::clone(&surface);
        on_resize(move || fit(&mut surface.borrow_mut(), &canvas));
    }
    let bind = |id: &str, action: fn(&mut EntangleDemo)| {
        let state = Rc::clone(&state);
        listen(page, id, "click", move || action(&mut state.borrow_mut()));
    };
    bind(cfg.entangle_button.as_str(), |demo| demo.session.set_entangled(true));
    bind(cfg.separable_button.as_str(), |demo| demo.session.set_entangled(false));
    bind(cfg.measure_button.as_str(), |demo| {
        demo.session.measure(&mut BrowserRandom);
    });
    bind(cfg.reset_button.as_str(), |demo| demo.session.clear());

    animate(surface, state);
    Ok(())
}

fn interference(page: &Page, cfg: &InterferenceConfig, widget: Interference) -> Result<(), JsValue> {
    let surface = surface(page, &cfg.canvas)?;
    paint(&surface, &widget, now_ms());

    let reader = page.clone();
    let slider = cfg.slider.clone();
    let mut widget = widget;
    listen(page, &cfg.slider, "input", move || {
        let raw = reader.input_value(&slider).unwrap_or_default();
        let effects = widget.set_phase(&raw);
        if !effects.is_empty() {
            reader.apply(&effects);
            paint(&surface, &widget, now_ms());
        }
    });
    Ok(())
}

// =============================================================
// Markup widgets
// =============================================================

fn bit(page: &Page, widget: BitToggle, registry: &mut ControlRegistry) -> Result<(), JsValue> {
    let page = page.clone();
    let mut widget = widget;
    page.apply(&widget.view());
    registry.register(CONTROL_TOGGLE_BIT, move |_: &str| page.apply(&widget.toggle()));
    Ok(())
}

fn qubit(page: &Page, widget: QubitCycler, registry: &mut ControlRegistry) -> Result<(), JsValue> {
    let page = page.clone();
    let mut widget = widget;
    page.apply(&widget.view());
    registry.register(CONTROL_CYCLE_QUBIT, move |_: &str| page.apply(&widget.cycle()));
    Ok(())
}

fn gcd(page: &Page, cfg: &GcdConfig, widget: GcdPanel) -> Result<(), JsValue> {
    let target = page.clone();
    let mut widget = widget;
    listen(page, &cfg.trigger, "click", move || target.apply(&widget.reveal()));
    Ok(())
}

fn bell(page: &Page, cfg: &BellConfig, widget: BellCircuit) -> Result<(), JsValue> {
    page.apply(&widget.effects(now_ms()));
    let state = Rc::new(RefCell::new(widget));
    let running = Rc::new(RefCell::new(CancelHandle::new()));

    let step = |id: &str, forward: bool| {
        let (state, running, target) = (Rc::clone(&state), Rc::clone(&running), page.clone());
        listen(page, id, "click", move || {
            let now = now_ms();
            let moved = {
                let mut circuit = state.borrow_mut();
                if forward { circuit.stepper.next(now) } else { circuit.stepper.prev(now) }
            };
            if !moved {
                return;
            }
            running.borrow().cancel();
            let handle = CancelHandle::new();
            *running.borrow_mut() = handle.clone();

            target.apply(&state.borrow().effects(now));
            if !state.borrow().stepper.is_animating(now) {
                return;
            }
            let (state, target) = (Rc::clone(&state), target.clone());
            frame_loop::start(handle, move |ts| {
                let circuit = state.borrow();
                target.apply(&circuit.effects(ts));
                if circuit.stepper.is_animating(ts) { Schedule::Continue } else { Schedule::Stop }
            });
        });
    };
    step(cfg.next.as_str(), true);
    step(cfg.prev.as_str(), false);
    Ok(())
}

fn rsa(page: &Page, cfg: &RsaConfig, widget: RsaStory) -> Result<(), JsValue> {
    let state = Rc::new(RefCell::new(widget));
    page.apply(&state.borrow_mut().multiply());

    let (target, story) = (page.clone(), Rc::clone(&state));
    listen(page, &cfg.multiply, "click", move || target.apply(&story.borrow_mut().multiply()));
    let (target, story) = (page.clone(), state);
    listen(page, &cfg.factor, "click", move || target.apply(&story.borrow_mut().factor_try()));
    Ok(())
}

fn ecc(page: &Page, cfg: &EccConfig, widget: RepetitionCode) -> Result<(), JsValue> {
    page.apply(&[widget.boxes(false)]);
    let state = Rc::new(RefCell::new(widget));

    let (target, code) = (page.clone(), Rc::clone(&state));
    listen(page, &cfg.noise, "click", move || {
        target.apply(&code.borrow_mut().apply_noise(&mut BrowserRandom));
    });
    let (target, code) = (page.clone(), Rc::clone(&state));
    listen(page, &cfg.decode, "click", move || target.apply(&code.borrow().decode()));
    let (target, code) = (page.clone(), state);
    listen(page, &cfg.reset, "click", move || target.apply(&code.borrow_mut().reset()));
    Ok(())
}

fn contfrac(page: &Page, cfg: &ContFracConfig, widget: ContFracCalc) -> Result<(), JsValue> {
    let state = Rc::new(RefCell::new(widget));
    let refresh = {
        let (page, state) = (page.clone(), Rc::clone(&state));
        let (y_id, n_id) = (cfg.y_input.clone(), cfg.n_input.clone());
        move || {
            let y = page.input_value(&y_id).unwrap_or_default();
            let n = page.input_value(&n_id).unwrap_or_default();
            page.apply(&state.borrow_mut().update(&y, &n));
        }
    };
    refresh();
    listen(page, &cfg.y_input, "input", refresh.clone());
    listen(page, &cfg.n_input, "input", refresh);
    Ok(())
}

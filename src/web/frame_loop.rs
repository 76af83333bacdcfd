//! Drives a [`Ticker`] from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::ticker::{CancelHandle, Schedule, Ticker};

type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Current time on the animation-frame clock.
pub fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
}

fn request(holder: &FrameHolder) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let borrowed = holder.borrow();
    let Some(cb) = borrowed.as_ref() else {
        return false;
    };
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            false
        }
    }
}

/// Start `frame` on the next animation frame and keep it running until it
/// returns [`Schedule::Stop`] or `handle` is cancelled.
pub fn start<F>(handle: CancelHandle, frame: F)
where
    F: FnMut(f64) -> Schedule + 'static,
{
    let mut ticker = Ticker::new(handle, frame);
    let holder: FrameHolder = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let keep = ticker.step(ts) == Schedule::Continue && request(&holder_for_cb);
        if !keep {
            // Drops this closure once the call returns.
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    if !request(&holder) {
        holder.borrow_mut().take();
    }
}

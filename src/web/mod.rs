//! Browser entry points.
//!
//! The host page calls [`mount_widgets`] once after its markup is in place.
//! Controls registered by live widgets are published as `window` functions
//! so inline markup such as `onclick="setState('one')"` keeps working.

mod bind;
mod dom;
mod frame_loop;

use std::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::mount;
use crate::registry::ControlRegistry;

pub use dom::Page;
pub use frame_loop::now_ms;

/// Element whose text holds the page configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "quantum-widgets-config";

thread_local! {
    static CONTROLS: RefCell<ControlRegistry> = RefCell::new(ControlRegistry::new());
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

fn load_config(page: &Page, config_json: Option<String>) -> Result<PageConfig, JsValue> {
    let raw = config_json.or_else(|| page.text_of(CONFIG_ELEMENT_ID)).filter(|raw| !raw.trim().is_empty());
    match raw {
        Some(raw) => PageConfig::from_json(&raw).map_err(|err| JsValue::from_str(&err.to_string())),
        None => Ok(PageConfig::default()),
    }
}

/// Mount every widget whose anchors are present and return the names of the
/// widgets left inert, so the page can tell which anchors it is missing. A
/// repeated call mounts nothing and returns an empty list.
///
/// # Errors
///
/// Returns `Err` when there is no document or the configuration is invalid.
/// Missing anchors are not errors; the affected widget stays inert.
#[wasm_bindgen]
pub fn mount_widgets(config_json: Option<String>) -> Result<js_sys::Array, JsValue> {
    init_logging();
    if MOUNTED.with(Cell::get) {
        log::warn!("widgets already mounted");
        return Ok(js_sys::Array::new());
    }
    let page = Page::current().ok_or_else(|| JsValue::from_str("no document"))?;
    let cfg = load_config(&page, config_json)?;

    let (widgets, report) = mount::resolve(&page, &cfg);
    let names = CONTROLS.with(|controls| {
        let mut registry = controls.borrow_mut();
        bind::all(&page, &cfg, widgets, &mut registry);
        registry.names().into_iter().map(str::to_owned).collect::<Vec<_>>()
    });
    publish(&names)?;
    MOUNTED.with(|mounted| mounted.set(true));
    Ok(report.inert_widgets().into_iter().map(JsValue::from_str).collect())
}

/// Call a registered control. Returns `false` for unknown names.
#[wasm_bindgen]
pub fn invoke_control(name: &str, arg: &str) -> bool {
    CONTROLS.with(|controls| match controls.try_borrow_mut() {
        Ok(mut registry) => registry.invoke(name, arg),
        Err(_) => {
            log::warn!("control {name} invoked re-entrantly");
            false
        }
    })
}

fn publish(names: &[String]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    for name in names {
        let control = name.clone();
        let cb = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
            let arg = arg.as_string().or_else(|| arg.as_f64().map(|v| v.to_string())).unwrap_or_default();
            invoke_control(&control, &arg);
        });
        js_sys::Reflect::set(&window, &JsValue::from_str(name), cb.as_ref())?;
        cb.forget();
    }
    Ok(())
}

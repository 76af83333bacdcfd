//! The host page: anchor lookup and effect application.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use crate::anchor::AnchorLookup;
use crate::effect::{Content, Effect};

fn cast<T: JsCast>(el: Element) -> Option<T> {
    el.is_instance_of::<T>().then(|| el.unchecked_into::<T>())
}

/// The document the widgets are mounted into.
#[derive(Clone)]
pub struct Page {
    document: Document,
}

impl Page {
    /// The current window's document, if running in a browser.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    pub fn canvas(&self, id: &str) -> Option<HtmlCanvasElement> {
        cast(self.element(id)?)
    }

    /// Current value of an `<input>`, or `None` if absent.
    pub fn input_value(&self, id: &str) -> Option<String> {
        cast::<HtmlInputElement>(self.element(id)?).map(|el| el.value())
    }

    /// Text content of an element, for inline JSON blocks.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    /// Create a canvas and append it to the element `parent`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot be created or appended.
    pub fn append_canvas(&self, parent: &Element) -> Result<HtmlCanvasElement, JsValue> {
        let canvas = self.document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
        parent.append_child(&canvas)?;
        Ok(canvas)
    }

    /// Apply effects in order. Missing anchors are skipped; DOM failures are
    /// logged and do not stop later effects.
    pub fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            let Some(el) = self.element(effect.anchor()) else {
                log::debug!("skipping effect for absent anchor #{}", effect.anchor());
                continue;
            };
            if let Err(err) = self.apply_one(&el, effect) {
                log::warn!("effect on #{} failed: {err:?}", effect.anchor());
            }
        }
    }

    fn apply_one(&self, el: &Element, effect: &Effect) -> Result<(), JsValue> {
        match effect {
            Effect::SetText { text, .. } => el.set_text_content(Some(text.as_str())),
            Effect::SetHtml { html, .. } => el.set_inner_html(html),
            Effect::SetClass { class, on, .. } => {
                if *on {
                    el.class_list().add_1(class)?;
                } else {
                    el.class_list().remove_1(class)?;
                }
            }
            Effect::SetAttr { name, value, .. } => el.set_attribute(name, value)?,
            Effect::StyleFlash { property, value, rest, after_ms, .. } => {
                let style = el.clone().dyn_into::<HtmlElement>()?.style();
                style.set_property(property, value)?;
                let (property, rest) = (property.clone(), rest.clone());
                Timeout::new(*after_ms, move || {
                    if let Err(err) = style.set_property(&property, &rest) {
                        log::warn!("restoring {property} failed: {err:?}");
                    }
                })
                .forget();
            }
            Effect::ExpireClass { selector, class, after_ms, .. } => {
                let (el, selector, class) = (el.clone(), selector.clone(), class.clone());
                Timeout::new(*after_ms, move || match el.query_selector(&selector) {
                    Ok(Some(target)) => {
                        if let Err(err) = target.class_list().remove_1(&class) {
                            log::warn!("removing .{class} failed: {err:?}");
                        }
                    }
                    Ok(None) => {}
                    Err(err) => log::warn!("query {selector} failed: {err:?}"),
                })
                .forget();
            }
            Effect::ReplaceChildren { tag, children, .. } => {
                el.set_inner_html("");
                for child in children {
                    let node = self.document.create_element(tag)?;
                    if let Some(class) = &child.class {
                        node.set_class_name(class);
                    }
                    match &child.content {
                        Content::Text(text) => node.set_text_content(Some(text.as_str())),
                        Content::Html(html) => node.set_inner_html(html),
                    }
                    el.append_child(&node)?;
                }
            }
        }
        Ok(())
    }
}

impl AnchorLookup for Page {
    fn exists(&self, id: &str) -> bool {
        self.element(id).is_some()
    }
}

//! DOM mutations emitted by the text/markup widgets.
//!
//! Like canvas scenes, these are plain values: a widget operation returns the
//! list of changes the host page should see, and the browser glue applies them
//! to the addressed anchors. Effects addressed to an anchor that is not on the
//! page are skipped by the host.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

/// A child element appended by [`Effect::ReplaceChildren`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub class: Option<String>,
    pub content: Content,
}

/// Text or trusted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Child {
    #[must_use]
    pub fn text(class: Option<&str>, text: impl Into<String>) -> Self {
        Self { class: class.map(str::to_owned), content: Content::Text(text.into()) }
    }

    #[must_use]
    pub fn html(class: Option<&str>, html: impl Into<String>) -> Self {
        Self { class: class.map(str::to_owned), content: Content::Html(html.into()) }
    }
}

/// One change to an anchored element.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetText { anchor: String, text: String },
    /// Replace inner markup. Only widget-authored markup is ever passed here.
    SetHtml { anchor: String, html: String },
    /// Add (`on`) or remove a class.
    SetClass { anchor: String, class: String, on: bool },
    SetAttr { anchor: String, name: String, value: String },
    /// Set an inline style property now and restore it to `rest` after `after_ms`.
    StyleFlash { anchor: String, property: String, value: String, rest: String, after_ms: u32 },
    /// Remove `class` from the first descendant matching `selector` after `after_ms`.
    ExpireClass { anchor: String, selector: String, class: String, after_ms: u32 },
    /// Clear the anchor and append one `tag` element per child.
    ReplaceChildren { anchor: String, tag: String, children: Vec<Child> },
}

impl Effect {
    #[must_use]
    pub fn set_text(anchor: &str, text: impl Into<String>) -> Self {
        Self::SetText { anchor: anchor.to_owned(), text: text.into() }
    }

    #[must_use]
    pub fn set_html(anchor: &str, html: impl Into<String>) -> Self {
        Self::SetHtml { anchor: anchor.to_owned(), html: html.into() }
    }

    #[must_use]
    pub fn set_class(anchor: &str, class: &str, on: bool) -> Self {
        Self::SetClass { anchor: anchor.to_owned(), class: class.to_owned(), on }
    }

    #[must_use]
    pub fn set_attr(anchor: &str, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttr { anchor: anchor.to_owned(), name: name.to_owned(), value: value.into() }
    }

    #[must_use]
    pub fn style_flash(anchor: &str, property: &str, value: &str, rest: &str, after_ms: u32) -> Self {
        Self::StyleFlash {
            anchor: anchor.to_owned(),
            property: property.to_owned(),
            value: value.to_owned(),
            rest: rest.to_owned(),
            after_ms,
        }
    }

    #[must_use]
    pub fn expire_class(anchor: &str, selector: &str, class: &str, after_ms: u32) -> Self {
        Self::ExpireClass {
            anchor: anchor.to_owned(),
            selector: selector.to_owned(),
            class: class.to_owned(),
            after_ms,
        }
    }

    #[must_use]
    pub fn replace_children(anchor: &str, tag: &str, children: Vec<Child>) -> Self {
        Self::ReplaceChildren { anchor: anchor.to_owned(), tag: tag.to_owned(), children }
    }

    /// The anchor this effect writes to.
    #[must_use]
    pub fn anchor(&self) -> &str {
        match self {
            Self::SetText { anchor, .. }
            | Self::SetHtml { anchor, .. }
            | Self::SetClass { anchor, .. }
            | Self::SetAttr { anchor, .. }
            | Self::StyleFlash { anchor, .. }
            | Self::ExpireClass { anchor, .. }
            | Self::ReplaceChildren { anchor, .. } => anchor,
        }
    }
}

/// Text set on `anchor` by the last `SetText` in `effects`, if any.
#[must_use]
pub fn text_for<'a>(effects: &'a [Effect], anchor: &str) -> Option<&'a str> {
    effects.iter().rev().find_map(|effect| match effect {
        Effect::SetText { anchor: a, text } if a == anchor => Some(text.as_str()),
        _ => None,
    })
}

use super::*;

#[test]
fn anchor_is_reported_for_every_variant() {
    let effects = [
        Effect::set_text("a", "x"),
        Effect::set_html("a", "<b>x</b>"),
        Effect::set_class("a", "on", true),
        Effect::set_attr("a", "opacity", "1"),
        Effect::style_flash("a", "transform", "scale(2)", "scale(1)", 10),
        Effect::expire_class("a", ".lock", "shake", 10),
        Effect::replace_children("a", "li", Vec::new()),
    ];
    assert!(effects.iter().all(|e| e.anchor() == "a"));
}

#[test]
fn text_for_returns_last_write() {
    let effects = [
        Effect::set_text("label", "first"),
        Effect::set_class("label", "on", true),
        Effect::set_text("other", "ignored"),
        Effect::set_text("label", "second"),
    ];
    assert_eq!(text_for(&effects, "label"), Some("second"));
    assert_eq!(text_for(&effects, "missing"), None);
}

#[test]
fn text_for_ignores_markup() {
    let effects = [Effect::set_html("out", "<i>x</i>")];
    assert_eq!(text_for(&effects, "out"), None);
}

#[test]
fn child_constructors() {
    let c = Child::text(Some("eccQ"), "+1");
    assert_eq!(c.class.as_deref(), Some("eccQ"));
    assert_eq!(c.content, Content::Text("+1".to_owned()));
    let c = Child::html(None, "<span>hint</span>");
    assert_eq!(c.class, None);
    assert_eq!(c.content, Content::Html("<span>hint</span>".to_owned()));
}

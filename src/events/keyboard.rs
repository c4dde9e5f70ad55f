use crate::constants::PANEL_HIDE_KEY;
use crate::dom;
use crate::panel;
use web_sys as web;

// Toggle the control panel with 'h' unless a panel control has focus
pub fn wire_panel_toggle(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        if panel::contains_event_target(&ev) {
            return;
        }
        if ev.key().eq_ignore_ascii_case(PANEL_HIDE_KEY) {
            panel::toggle(&doc);
            ev.prevent_default();
        }
    });
}

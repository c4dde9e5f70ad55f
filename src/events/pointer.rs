use crate::audio::AudioPlayer;
use crate::core::{pixel_to_ndc, AppState, PlaybackAction};
use crate::dom;
use crate::panel;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub player: Rc<RefCell<AudioPlayer>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    wire_pointerdown(&window, &w);
    wire_pointerup(&window, &w);
    wire_pointermove(&window, &w);
    wire_mouseout(&window, &w);
    wire_contextmenu(&window);
    wire_click(&window, &w);
}

fn wire_pointerdown(window: &web::Window, w: &InputWiring) {
    let state = w.state.clone();
    dom::listen(window, "pointerdown", move |ev: web::PointerEvent| {
        if panel::contains_event_target(&ev) {
            return;
        }
        state.borrow_mut().pointer_down();
    });
}

fn wire_pointerup(window: &web::Window, w: &InputWiring) {
    let state = w.state.clone();
    dom::listen(window, "pointerup", move |_: web::PointerEvent| {
        state.borrow_mut().pointer_up();
    });
}

fn wire_pointermove(window: &web::Window, w: &InputWiring) {
    let state = w.state.clone();
    let canvas = w.canvas.clone();
    dom::listen(window, "pointermove", move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let ndc = pixel_to_ndc(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        state
            .borrow_mut()
            .pointer_move(ev.movement_x() as f32, ev.movement_y() as f32, ndc);
    });
}

// Leaving the window ends a drag even if the button is released outside.
fn wire_mouseout(window: &web::Window, w: &InputWiring) {
    let state = w.state.clone();
    dom::listen(window, "mouseout", move |ev: web::MouseEvent| {
        if ev.related_target().is_none() {
            state.borrow_mut().pointer_leave();
        }
    });
}

fn wire_contextmenu(window: &web::Window) {
    dom::listen(window, "contextmenu", move |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}

fn wire_click(window: &web::Window, w: &InputWiring) {
    let w = w.clone();
    dom::listen(window, "click", move |ev: web::MouseEvent| {
        if panel::contains_event_target(&ev) {
            return;
        }
        let action = w.state.borrow_mut().click(js_sys::Date::now());
        match action {
            PlaybackAction::Start => start_playback(&w),
            PlaybackAction::Stop => {
                w.player.borrow_mut().stop();
                w.state.borrow_mut().playback.stopped();
                log::info!("[input] double click: stopped");
                panel::set_status("Stopped; click to play");
            }
            PlaybackAction::None => {}
        }
    });
}

fn start_playback(w: &InputWiring) {
    let session = w.state.borrow_mut().playback.started();
    let state = w.state.clone();
    let result = w.player.borrow_mut().play(move || {
        if state.borrow_mut().playback.ended(session) {
            log::info!("[audio] track ended");
            panel::set_status("Ended; click to play");
        }
    });
    match result {
        Ok(()) => {
            log::info!("[input] click: playing");
            panel::set_status("Playing; double-click to stop");
        }
        Err(e) => {
            w.state.borrow_mut().playback.stopped();
            log::error!("[audio] {}", e);
            panel::set_status("Playback failed");
        }
    }
}

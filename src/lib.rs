#![cfg(target_arch = "wasm32")]
use crate::audio::AudioPlayer;
use crate::core::AppState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod panel;
mod render;

// Resize is applied synchronously so the next frame already uses the new size
fn wire_resize(canvas: &web::HtmlCanvasElement, frame_ctx: Rc<RefCell<frame::FrameContext<'static>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        frame_ctx.borrow_mut().resize(w, h);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("audio-cube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let state = Rc::new(RefCell::new(AppState::new(width, height)));
    let player = Rc::new(RefCell::new(
        AudioPlayer::new().map_err(|e| anyhow::anyhow!(e))?,
    ));

    panel::build(
        &document,
        &panel::PanelWiring {
            state: state.clone(),
            player: player.clone(),
        },
    )?;
    events::wire_panel_toggle(&document);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        player: player.clone(),
    });

    let viewport = state.borrow().viewport;
    let gpu = frame::init_gpu(&canvas, viewport).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        player: player.clone(),
        gpu,
        started: now,
        last_instant: now,
    }));
    wire_resize(&canvas, frame_ctx.clone());

    let first = state.borrow().catalog.first();
    if let Some(track) = first {
        loader::request_track(track.label, &state, &player);
    }

    frame::start_loop(frame_ctx);
    Ok(())
}

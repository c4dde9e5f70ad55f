use crate::audio::AudioPlayer;
use crate::core::{AppState, Viewport};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub player: Rc<RefCell<AudioPlayer>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One animation step: camera easing and uniforms, then one frame.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed_sec = (now - self.started).as_secs_f32();

        let avg_frequency = self.player.borrow_mut().average_frequency();
        let (eye, target) = {
            let mut state = self.state.borrow_mut();
            state.advance_frame(elapsed_sec, dt_sec, avg_frequency);
            (state.camera.eye, state.camera.target)
        };
        self.player.borrow().update_listener(eye, target);

        if let Some(g) = &mut self.gpu {
            match g.render(&self.state.borrow()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Apply a new output size to the camera and every render target.
    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        let viewport = self.state.borrow_mut().resize(width, height);
        if let Some(g) = &mut self.gpu {
            g.resize(viewport);
        }
        log::info!("[gpu] resize {}x{}", viewport.width, viewport.height);
        viewport
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    viewport: Viewport,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, viewport).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

use crate::core::{average_magnitude, ANALYSER_BIN_COUNT, ANALYSER_FFT_SIZE};
use glam::Vec3;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio context: {0}")]
    Context(String),
    #[error("fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("playback: {0}")]
    Playback(String),
}

#[inline]
fn js_reason(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Track playback routed through a frequency analyser:
/// source -> analyser -> output gain -> destination.
pub struct AudioPlayer {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    freq_buf: Vec<u8>,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
}

impl AudioPlayer {
    pub fn new() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Context(js_reason(e)))?;
        let output =
            web::GainNode::new(&ctx).map_err(|e| AudioError::Context(js_reason(e)))?;
        output.gain().set_value(1.0);
        let analyser = create_analyser(&ctx)?;
        analyser
            .connect_with_audio_node(&output)
            .map_err(|e| AudioError::Context(js_reason(e)))?;
        output
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| AudioError::Context(js_reason(e)))?;
        let bins = analyser.frequency_bin_count() as usize;
        log::info!("[audio] analyser fft={} bins={}", ANALYSER_FFT_SIZE, bins);
        if bins != ANALYSER_BIN_COUNT {
            log::warn!("[audio] expected {} bins", ANALYSER_BIN_COUNT);
        }
        Ok(Self {
            ctx,
            analyser,
            freq_buf: vec![0; bins],
            buffer: None,
            source: None,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// Replace the buffer used by the next `play`. A source that is already
    /// playing keeps its old buffer.
    pub fn set_buffer(&mut self, buffer: web::AudioBuffer) {
        self.buffer = Some(buffer);
    }

    /// Start a fresh source from the current buffer. `on_ended` fires once,
    /// when the source finishes or is stopped.
    pub fn play(&mut self, on_ended: impl FnOnce() + 'static) -> Result<(), AudioError> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| AudioError::Playback("no buffer loaded".into()))?;
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        let src = web::AudioBufferSourceNode::new(&self.ctx)
            .map_err(|e| AudioError::Playback(js_reason(e)))?;
        src.set_buffer(Some(buffer));
        src.connect_with_audio_node(&self.analyser)
            .map_err(|e| AudioError::Playback(js_reason(e)))?;
        let ended = wasm_bindgen::closure::Closure::once_into_js(on_ended);
        src.set_onended(Some(ended.unchecked_ref()));
        src.start().map_err(|e| AudioError::Playback(js_reason(e)))?;
        self.source = Some(src);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(src) = self.source.take() {
            if let Err(e) = src.stop() {
                log::warn!("[audio] stop error: {:?}", e);
            }
        }
    }

    /// Mean of the analyser's byte frequency data (0..=255), sampled now.
    pub fn average_frequency(&mut self) -> f32 {
        if self.freq_buf.is_empty() {
            return 0.0;
        }
        self.analyser.get_byte_frequency_data(&mut self.freq_buf);
        average_magnitude(&self.freq_buf)
    }

    /// Keep the listener on the camera so spatial audio follows the view.
    pub fn update_listener(&self, cam_eye: Vec3, cam_target: Vec3) {
        let listener = self.ctx.listener();
        let fwd = (cam_target - cam_eye).normalize_or_zero();
        listener.set_position(cam_eye.x as f64, cam_eye.y as f64, cam_eye.z as f64);
        _ = listener.set_orientation(fwd.x as f64, fwd.y as f64, fwd.z as f64, 0.0, 1.0, 0.0);
    }
}

fn create_analyser(ctx: &web::AudioContext) -> Result<web::AnalyserNode, AudioError> {
    let analyser = web::AnalyserNode::new(ctx).map_err(|e| AudioError::Context(js_reason(e)))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(analyser)
}

/// Fetch and decode one track.
pub async fn load_track(ctx: web::AudioContext, path: &str) -> Result<web::AudioBuffer, AudioError> {
    let fetch_err = |reason: String| AudioError::Fetch {
        path: path.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(js_reason(e)))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| fetch_err(js_reason(e)))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| fetch_err(js_reason(e)))?)
        .await
        .map_err(|e| fetch_err(js_reason(e)))?;
    let bytes: js_sys::ArrayBuffer = bytes.dyn_into().map_err(|e| fetch_err(js_reason(e)))?;

    let decode_err = |reason: String| AudioError::Decode {
        path: path.to_string(),
        reason,
    };
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&bytes)
            .map_err(|e| decode_err(js_reason(e)))?,
    )
    .await
    .map_err(|e| decode_err(js_reason(e)))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| decode_err(js_reason(e)))
}

use crate::audio::{self, AudioPlayer};
use crate::core::AppState;
use crate::panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Start loading the catalog track `label`. Returns immediately; when the
/// load completes its buffer replaces the current one unless a newer request
/// was made in the meantime. Playback is not interrupted.
pub fn request_track(label: &str, state: &Rc<RefCell<AppState>>, player: &Rc<RefCell<AudioPlayer>>) {
    let Some((track, ticket)) = state.borrow_mut().request_track(label) else {
        log::warn!("[load] unknown track {:?}", label);
        return;
    };
    log::info!("[load] {} <- {}", track.label, track.path);
    panel::set_status(&format!("Loading {}…", track.label));

    let ctx = player.borrow().context().clone();
    let state = state.clone();
    let player = player.clone();
    spawn_local(async move {
        match audio::load_track(ctx, track.path).await {
            Ok(buffer) => {
                if !state.borrow_mut().load_succeeded(ticket) {
                    log::info!("[load] {} finished after a newer request; dropped", track.label);
                    return;
                }
                player.borrow_mut().set_buffer(buffer);
                log::info!("[load] {} ready", track.label);
                if state.borrow().playback.is_playing {
                    panel::set_status(&format!("{} queued; double-click to stop", track.label));
                } else {
                    panel::set_status(&format!("{} ready; click to play", track.label));
                }
            }
            Err(e) => {
                if !state.borrow_mut().load_failed(ticket) {
                    log::info!("[load] stale failure for {}: {}", track.label, e);
                    return;
                }
                log::error!("[load] {} failed: {}", track.label, e);
                panel::set_status(&format!("Load failed: {}", track.label));
            }
        }
    });
}

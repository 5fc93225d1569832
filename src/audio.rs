use crate::constants::{
    BACKGROUND_MUSIC_ID, BACKGROUND_MUSIC_LOOPS, BACKGROUND_MUSIC_VOLUME, SECRET_MUSIC_ID,
    SECRET_MUSIC_LOOPS, SECRET_MUSIC_VOLUME,
};
use crate::playback::Playback;
use std::cell::Cell;
use std::rc::Rc;
use tree_core::AmbientMode;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("missing audio element #{0}")]
    Missing(&'static str),
    #[error("#{0} is not an <audio> element")]
    NotAudio(&'static str),
    #[error("#{id} rejected play(): {reason}")]
    Rejected { id: &'static str, reason: String },
}

/// One `<audio>` element from the host page.
pub struct Track {
    id: &'static str,
    element: web::HtmlAudioElement,
    state: Rc<Cell<Playback>>,
}

impl Track {
    pub fn lookup(document: &web::Document, id: &'static str) -> Result<Self, AudioError> {
        let element = document
            .get_element_by_id(id)
            .ok_or(AudioError::Missing(id))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|_| AudioError::NotAudio(id))?;
        Ok(Self {
            id,
            element,
            state: Rc::new(Cell::new(Playback::Idle)),
        })
    }

    pub fn configure(&self, volume: f64, looping: bool) {
        self.element.set_volume(volume);
        self.element.set_loop(looping);
    }

    pub fn state(&self) -> Playback {
        self.state.get()
    }

    /// Request playback. Resolution happens later; a refusal is logged and
    /// leaves the track `Blocked` for the gesture retry.
    pub fn play(&self) {
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                let err = AudioError::Rejected {
                    id: self.id,
                    reason: format!("{:?}", e),
                };
                log::warn!("{}", err);
                self.state.set(Playback::Blocked);
                return;
            }
        };
        self.state.set(Playback::Pending);
        let state = self.state.clone();
        let id = self.id;
        spawn_local(async move {
            let accepted = JsFuture::from(promise).await.is_ok();
            state.set(state.get().settle(accepted));
            if accepted {
                log::info!("[audio] #{} playing", id);
            } else {
                log::info!("[audio] autoplay prevented for #{}; waiting for user interaction", id);
            }
        });
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] #{} pause error: {:?}", self.id, e);
        }
        self.state.set(Playback::Idle);
    }
}

/// Both tracks of the page. Either may be missing, in which case the scene
/// simply runs silent.
pub struct Soundtrack {
    background: Option<Track>,
    secret: Option<Track>,
    mode: Cell<AmbientMode>,
}

impl Soundtrack {
    pub fn from_document(document: &web::Document) -> Self {
        let found = |id| match Track::lookup(document, id) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("[audio] {}", e);
                None
            }
        };
        Self {
            background: found(BACKGROUND_MUSIC_ID),
            secret: found(SECRET_MUSIC_ID),
            mode: Cell::new(AmbientMode::Normal),
        }
    }

    /// Configure both tracks and start the one the mode calls for.
    pub fn start(&self, mode: AmbientMode) {
        self.mode.set(mode);
        if let Some(bg) = &self.background {
            bg.configure(BACKGROUND_MUSIC_VOLUME, BACKGROUND_MUSIC_LOOPS);
        }
        if let Some(secret) = &self.secret {
            secret.configure(SECRET_MUSIC_VOLUME, SECRET_MUSIC_LOOPS);
        }
        match mode {
            AmbientMode::Normal => {
                if let Some(bg) = &self.background {
                    bg.play();
                }
            }
            AmbientMode::Secret => {
                if let Some(bg) = &self.background {
                    bg.pause();
                }
                if let Some(secret) = &self.secret {
                    secret.play();
                }
            }
        }
    }

    fn active(&self) -> Option<&Track> {
        match self.mode.get() {
            AmbientMode::Normal => self.background.as_ref(),
            AmbientMode::Secret => self.secret.as_ref(),
        }
    }

    /// Retry a refused autoplay from inside a user gesture.
    pub fn resume_active(&self) {
        if let Some(track) = self.active() {
            if track.state().wants_retry() {
                log::info!("[audio] retrying #{} after user gesture", track.id);
                track.play();
            }
        }
    }
}

// Playback gestures and track-load bookkeeping.
//
// Nothing in here touches WebAudio. The frontend feeds click timestamps and
// load completions in, and applies the returned `PlaybackAction` to the
// real audio graph.

use super::constants::DOUBLE_CLICK_WINDOW_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Double-click detector.
///
/// Every click moves the tracker to `Pending` with its own timestamp, so a
/// third rapid click is classified against the second one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClickTracker {
    #[default]
    Idle,
    Pending { at_ms: f64 },
}

impl ClickTracker {
    pub fn register(&mut self, now_ms: f64) -> ClickKind {
        let kind = match *self {
            ClickTracker::Pending { at_ms } if now_ms - at_ms < DOUBLE_CLICK_WINDOW_MS => {
                ClickKind::Double
            }
            _ => ClickKind::Single,
        };
        *self = ClickTracker::Pending { at_ms: now_ms };
        kind
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    Start,
    Stop,
    None,
}

/// Identifies one started source so late `ended` events can be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(u64);

#[derive(Clone, Debug, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub has_buffer: bool,
    clicks: ClickTracker,
    session: u64,
}

impl PlaybackState {
    /// Classify a click and decide what the audio graph should do.
    ///
    /// A double click stops only while playing; a single click starts only
    /// while stopped and once a buffer is available. Flags are not changed
    /// here, see [`PlaybackState::started`] and [`PlaybackState::stopped`].
    ///
    /// Clicks before any buffer has loaded are dropped without touching the
    /// double-click timer.
    pub fn click(&mut self, now_ms: f64) -> PlaybackAction {
        if !self.has_buffer {
            return PlaybackAction::None;
        }
        match self.clicks.register(now_ms) {
            ClickKind::Double if self.is_playing => PlaybackAction::Stop,
            ClickKind::Single if !self.is_playing && self.has_buffer => PlaybackAction::Start,
            _ => PlaybackAction::None,
        }
    }

    pub fn started(&mut self) -> SessionId {
        self.session += 1;
        self.is_playing = true;
        SessionId(self.session)
    }

    pub fn stopped(&mut self) {
        self.is_playing = false;
    }

    /// A source finished on its own. Returns false for stale sessions.
    pub fn ended(&mut self, session: SessionId) -> bool {
        if session.0 != self.session || !self.is_playing {
            return false;
        }
        self.is_playing = false;
        true
    }
}

/// Ticket handed out for each load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Keeps only the newest load request alive.
///
/// Starting a new load invalidates every earlier ticket, so whichever request
/// was made last wins regardless of completion order.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Resolve a load. Returns true when its result should be installed.
    pub fn finish(&self, ticket: LoadTicket) -> bool {
        self.is_current(ticket)
    }
}

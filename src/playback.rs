/// Where a track stands with respect to the browser's autoplay policy.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Idle,
    /// `play()` was called and its promise has not settled.
    Pending,
    Playing,
    /// The browser refused playback; retried on the next user gesture.
    Blocked,
}

impl Playback {
    /// State after a `play()` promise settles.
    pub fn settle(self, accepted: bool) -> Self {
        match (self, accepted) {
            (Playback::Pending, true) => Playback::Playing,
            (Playback::Pending, false) => Playback::Blocked,
            // paused or restarted while the promise was in flight
            (other, _) => other,
        }
    }

    #[inline]
    pub fn wants_retry(self) -> bool {
        self == Playback::Blocked
    }
}

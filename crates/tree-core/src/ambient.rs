use crate::constants::SECRET_MODE_CHANCE;
use rand::Rng;

/// Startup audiovisual mode. Decided once; there is no transition back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AmbientMode {
    #[default]
    Normal,
    Secret,
}

impl AmbientMode {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(SECRET_MODE_CHANCE) {
            AmbientMode::Secret
        } else {
            AmbientMode::Normal
        }
    }

    #[inline]
    pub fn is_secret(self) -> bool {
        self == AmbientMode::Secret
    }
}

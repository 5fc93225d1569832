use crate::constants::{PRIMARY_BUTTON, SECONDARY_BUTTON, WHEEL_LINE_PX, WHEEL_PAGE_PX};

/// Active pan drag, tracked per pointer so a second finger or pen cannot
/// hijack it.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        *self = DragState {
            active: true,
            pointer_id,
            last_x: x,
            last_y: y,
        };
    }

    /// Movement since the last sample, or `None` when this pointer is not
    /// dragging.
    pub fn drag_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || self.pointer_id != pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.pointer_id == pointer_id {
            self.active = false;
        }
    }
}

/// Right button, or primary button with shift held.
#[inline]
pub fn starts_pan(button: i16, shift: bool) -> bool {
    button == SECONDARY_BUTTON || (button == PRIMARY_BUTTON && shift)
}

/// Normalize a wheel delta to pixels (`deltaMode` 0 = pixel, 1 = line, 2 = page).
#[inline]
pub fn wheel_pixels(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        0 => d,
        1 => d * WHEEL_LINE_PX,
        _ => d * WHEEL_PAGE_PX,
    }
}

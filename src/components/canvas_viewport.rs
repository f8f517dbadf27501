use leptos::{batch, create_signal, ReadSignal, WriteSignal, SignalGet, SignalGetUntracked, SignalSet};
use web_sys::WheelEvent;
use crate::diagram::ViewportState;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 25.0;
const ZOOM_IN_FACTOR: f64 = 1.1;
const ZOOM_OUT_FACTOR: f64 = 0.9;
const WHEEL_PAN_SPEED: f64 = 0.5;

#[derive(Clone, Copy)]
pub struct ViewportSignals {
    pub zoom_level: ReadSignal<f64>,
    pub set_zoom_level: WriteSignal<f64>,
    pub zoom_level_x: ReadSignal<f64>,
    pub set_zoom_level_x: WriteSignal<f64>,
    pub pan_offset_x: ReadSignal<f64>,
    pub set_pan_offset_x: WriteSignal<f64>,
    pub pan_offset_y: ReadSignal<f64>,
    pub set_pan_offset_y: WriteSignal<f64>,
    pub is_panning: ReadSignal<bool>,
    pub set_is_panning: WriteSignal<bool>,
    pub last_mouse_pos: ReadSignal<(f64, f64)>,
    pub set_last_mouse_pos: WriteSignal<(f64, f64)>,
}

impl ViewportSignals {
    /// Current zoom and pan, tracked
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            zoom_level: self.zoom_level.get(),
            zoom_level_x: self.zoom_level_x.get(),
            pan_offset_x: self.pan_offset_x.get(),
            pan_offset_y: self.pan_offset_y.get(),
        }
    }

    #[must_use]
    pub fn state_untracked(&self) -> ViewportState {
        ViewportState {
            zoom_level: self.zoom_level.get_untracked(),
            zoom_level_x: self.zoom_level_x.get_untracked(),
            pan_offset_x: self.pan_offset_x.get_untracked(),
            pan_offset_y: self.pan_offset_y.get_untracked(),
        }
    }

    /// Back to the fitted view
    pub fn reset(&self) {
        let initial = ViewportState::default();
        batch(move || {
            self.set_zoom_level.set(initial.zoom_level);
            self.set_zoom_level_x.set(initial.zoom_level_x);
            self.set_pan_offset_x.set(initial.pan_offset_x);
            self.set_pan_offset_y.set(initial.pan_offset_y);
        });
    }
}

#[must_use]
pub fn create_viewport_signals() -> ViewportSignals {
    let initial = ViewportState::default();
    let (zoom_level, set_zoom_level) = create_signal(initial.zoom_level);
    let (zoom_level_x, set_zoom_level_x) = create_signal(initial.zoom_level_x);
    let (pan_offset_x, set_pan_offset_x) = create_signal(initial.pan_offset_x);
    let (pan_offset_y, set_pan_offset_y) = create_signal(initial.pan_offset_y);
    let (is_panning, set_is_panning) = create_signal(false);
    let (last_mouse_pos, set_last_mouse_pos) = create_signal((0.0, 0.0));

    ViewportSignals {
        zoom_level,
        set_zoom_level,
        zoom_level_x,
        set_zoom_level_x,
        pan_offset_x,
        set_pan_offset_x,
        pan_offset_y,
        set_pan_offset_y,
        is_panning,
        set_is_panning,
        last_mouse_pos,
        set_last_mouse_pos,
    }
}

pub fn handle_pan_start(x: f64, y: f64, viewport: &ViewportSignals) {
    viewport.set_is_panning.set(true);
    viewport.set_last_mouse_pos.set((x, y));
}

pub fn handle_pan_move(x: f64, y: f64, viewport: &ViewportSignals) {
    if !viewport.is_panning.get() {
        return;
    }

    let (last_x, last_y) = viewport.last_mouse_pos.get();
    let dx = x - last_x;
    let dy = y - last_y;

    let current_pan_x = viewport.pan_offset_x.get();
    let current_pan_y = viewport.pan_offset_y.get();

    batch(move || {
        viewport.set_pan_offset_x.set(current_pan_x + dx);
        viewport.set_pan_offset_y.set(current_pan_y + dy);
        viewport.set_last_mouse_pos.set((x, y));
    });
}

pub fn handle_pan_end(viewport: &ViewportSignals) {
    viewport.set_is_panning.set(false);
}

/// Wheel handling; `mouse_x`/`mouse_y` are relative to the graph area
///
/// No modifier zooms both axes, alt zooms the time axis only and shift pans
/// horizontally.
pub fn handle_zoom(ev: &WheelEvent, mouse_x: f64, mouse_y: f64, viewport: &ViewportSignals) {
    let delta = ev.delta_y();
    let shift_pressed = ev.shift_key();
    let alt_pressed = ev.alt_key();
    let zoom_factor = if delta < 0.0 { ZOOM_IN_FACTOR } else { ZOOM_OUT_FACTOR };

    if shift_pressed && !alt_pressed {
        let current_pan_x = viewport.pan_offset_x.get();
        viewport.set_pan_offset_x.set(current_pan_x - delta * WHEEL_PAN_SPEED);
    } else if alt_pressed && !shift_pressed {
        let (new_zoom_x, new_pan_x) = zoom_about(
            viewport.zoom_level_x.get(),
            zoom_factor,
            mouse_x,
            viewport.pan_offset_x.get(),
        );
        batch(move || {
            viewport.set_zoom_level_x.set(new_zoom_x);
            viewport.set_pan_offset_x.set(new_pan_x);
        });
    } else if !shift_pressed && !alt_pressed {
        let old_zoom = viewport.zoom_level.get();
        let (new_zoom, new_pan_x) = zoom_about(old_zoom, zoom_factor, mouse_x, viewport.pan_offset_x.get());
        let (_, new_pan_y) = zoom_about(old_zoom, zoom_factor, mouse_y, viewport.pan_offset_y.get());
        batch(move || {
            viewport.set_zoom_level.set(new_zoom);
            viewport.set_pan_offset_x.set(new_pan_x);
            viewport.set_pan_offset_y.set(new_pan_y);
        });
    }
}

/// Scale `zoom` by `factor` while keeping the content under `anchor` in place
///
/// Returns the clamped zoom and the pan offset that goes with it.
#[must_use]
pub fn zoom_about(zoom: f64, factor: f64, anchor: f64, pan: f64) -> (f64, f64) {
    let new_zoom = (zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    let new_pan = anchor - (anchor - pan) * (new_zoom / zoom);
    (new_zoom, new_pan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        // Content at graph x = 200 with pan 50 sits at unzoomed x = 150
        let (zoom, pan) = zoom_about(1.0, 2.0, 200.0, 50.0);
        assert_eq!(zoom, 2.0);
        assert_eq!(pan + 150.0 * zoom, 200.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let (zoom, _) = zoom_about(20.0, 2.0, 0.0, 0.0);
        assert_eq!(zoom, MAX_ZOOM);

        let (zoom, _) = zoom_about(0.1, 0.5, 0.0, 0.0);
        assert_eq!(zoom, MIN_ZOOM);
    }
}

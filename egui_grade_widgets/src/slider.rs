//! Horizontal value slider with a draggable knob.

use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, Vec2, pos2, vec2};

use crate::control::CanvasControl;
use crate::theme::GradeWidgetTheme;
use crate::types::{PointerEvent, RepaintHandle};

/// Default knob travel in pixels.
pub const DEFAULT_WIDTH: f32 = 120.0;

/// Track thickness.
const TRACK_HEIGHT: f32 = 6.0;
/// Knob radius; also widens the hit range past both track ends.
const KNOB_RADIUS: f32 = 6.0;
/// Vertical offset of the track below the control origin. Label and value
/// text render in the space above it.
const TRACK_TOP: f32 = 40.0;
/// Interactive body height below [`HIT_BAND_TOP`].
const BODY_HEIGHT: f32 = 20.0;
/// Top of the interactive band around the track.
const HIT_BAND_TOP: f32 = 30.0;
/// Label baseline.
const LABEL_Y: f32 = 10.0;
/// Value text baseline.
const VALUE_TEXT_Y: f32 = TRACK_HEIGHT + 25.0;

/// Value-changed callback, invoked synchronously after every drag update
/// and every non-silent programmatic set.
pub type SliderCallback = Box<dyn FnMut(f32)>;

/// Linear slider mapping a horizontal pointer offset into [min, max].
///
/// Positions are node-local, with `origin` at the top-left of the control;
/// the track spans `origin.x .. origin.x + width`.
pub struct ValueSlider {
    name: String,
    label: String,
    origin: Pos2,
    min: f32,
    max: f32,
    value: f32,
    width: f32,
    dragging: bool,
    callback: Option<SliderCallback>,
    repaint: Option<RepaintHandle>,
}

impl ValueSlider {
    pub fn new(name: impl Into<String>, value: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.into(),
            label: "Strength".to_string(),
            origin: Pos2::ZERO,
            min,
            max,
            value: value.clamp(min, max),
            width: DEFAULT_WIDTH,
            dragging: false,
            callback: None,
            repaint: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Register the value-changed callback.
    pub fn with_callback(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Register the owner's redraw request.
    pub fn with_repaint(mut self, repaint: impl Fn() + 'static) -> Self {
        self.repaint = Some(Box::new(repaint));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Map a pixel offset along the track into [min, max]. The offset is
    /// clamped to the track and the result re-clamped against float
    /// overshoot.
    pub fn value_from_pixel(&self, px: f32) -> f32 {
        let clamped = px.clamp(0.0, self.width);
        let normalized = clamped / self.width;
        (normalized * (self.max - self.min) + self.min).clamp(self.min, self.max)
    }

    /// External setter used when restoring state or syncing from a
    /// companion numeric control. Clamps to range; fires the callback with
    /// the clamped value unless `silent` (the caller may itself be reacting
    /// to a change, and silent avoids the feedback loop).
    pub fn set_value(&mut self, value: f32, silent: bool) {
        self.value = value.clamp(self.min, self.max);
        if !silent {
            let value = self.value;
            if let Some(callback) = &mut self.callback {
                callback(value);
            }
        }
        self.request_repaint();
    }

    fn local(&self, pos: Pos2) -> Vec2 {
        pos - self.origin
    }

    /// True within the knob travel range (± knob radius) and the vertical
    /// band around the track.
    fn hit_test(&self, local: Vec2) -> bool {
        let within_height =
            local.y >= HIT_BAND_TOP && local.y <= HIT_BAND_TOP + BODY_HEIGHT + KNOB_RADIUS;
        local.x >= -KNOB_RADIUS && local.x <= self.width + KNOB_RADIUS && within_height
    }

    fn update_from(&mut self, px: f32) {
        self.value = self.value_from_pixel(px);
        let value = self.value;
        if let Some(callback) = &mut self.callback {
            callback(value);
        }
    }

    fn request_repaint(&self) {
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

impl CanvasControl for ValueSlider {
    fn on_mouse_down(&mut self, event: &PointerEvent) -> bool {
        let local = self.local(event.pos);
        if !self.hit_test(local) {
            return false;
        }
        self.dragging = true;
        self.update_from(local.x);
        self.request_repaint();
        true
    }

    fn on_mouse_move(&mut self, event: &PointerEvent) -> bool {
        if !self.dragging {
            return false;
        }
        if !event.buttons.primary() {
            self.on_mouse_up();
            return false;
        }
        let local = self.local(event.pos);
        self.update_from(local.x);
        self.request_repaint();
        true
    }

    fn on_mouse_up(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.request_repaint();
        true
    }

    fn draw(&self, painter: &Painter, theme: &GradeWidgetTheme) {
        let center_x = self.origin.x + self.width / 2.0;

        painter.text(
            pos2(center_x, self.origin.y + LABEL_Y),
            Align2::CENTER_CENTER,
            &self.label,
            FontId::proportional(10.0),
            theme.label_color,
        );
        painter.text(
            pos2(center_x, self.origin.y + VALUE_TEXT_Y),
            Align2::CENTER_CENTER,
            format!("{:.2}", self.value),
            FontId::proportional(12.0),
            theme.value_text_color,
        );

        let track = Rect::from_min_size(
            self.origin + vec2(0.0, TRACK_TOP),
            vec2(self.width, TRACK_HEIGHT),
        );
        painter.rect_filled(track, 0.0, theme.track_color);

        let normalized = (self.value - self.min) / (self.max - self.min);
        let knob = pos2(
            self.origin.x + normalized * self.width,
            self.origin.y + TRACK_TOP + TRACK_HEIGHT / 2.0,
        );
        painter.circle_filled(knob, KNOB_RADIUS, theme.knob_color);
        painter.circle_stroke(knob, KNOB_RADIUS, Stroke::new(1.0, theme.knob_outline_color));
    }
}

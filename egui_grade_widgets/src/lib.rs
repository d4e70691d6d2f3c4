//! Standalone egui canvas controls for color-grading nodes.
//!
//! This crate provides a polar color wheel and a linear value slider that a
//! host draws directly onto a canvas via an [`egui::Painter`]. The host owns
//! placement and pointer translation; each control owns its drag state and
//! value mapping. Controls share the [`CanvasControl`] event surface so a
//! host can route pointer events through an ordered dispatch list and stop
//! at the first control that claims the event.

pub mod control;
pub mod slider;
pub mod theme;
pub mod types;
pub mod wheel;

pub use control::{CanvasControl, dispatch_mouse_down, dispatch_mouse_move, dispatch_mouse_up};
pub use slider::ValueSlider;
pub use theme::GradeWidgetTheme;
pub use types::{ButtonMask, PointerEvent, RepaintHandle, WheelValue};
pub use wheel::ColorWheel;

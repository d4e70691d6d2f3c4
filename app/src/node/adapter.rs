//! Node adapter wiring the canvas controls to the property bag.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Align2, FontId, Painter, Pos2, Vec2, pos2, vec2};
use log::warn;
use serde_json::Value;
use uuid::Uuid;

use egui_grade_widgets::{
    ButtonMask, CanvasControl, ColorWheel, GradeWidgetTheme, PointerEvent, ValueSlider,
    WheelValue, dispatch_mouse_down, dispatch_mouse_move, dispatch_mouse_up,
    wheel::WHEEL_DIAMETER,
};
use grading::{BandId, Grade, GradingError, grade_from_properties, grade_to_properties};

/// Horizontal padding between band sections.
const SECTION_PADDING: f32 = 20.0;
/// Height reserved for the band label above each wheel.
const BAND_LABEL_HEIGHT: f32 = 24.0;
/// Gap between the wheel bottom and the strength slider origin.
const STRENGTH_GAP: f32 = 10.0;
/// Gap between the strength and luma slider origins.
const LUMA_GAP: f32 = 50.0;
/// Space below the luma slider origin for its track and hit band.
const SLIDER_FOOTER: f32 = 60.0;

/// State shared between the node and its widget callbacks. Dispatch is
/// single-threaded; last write wins.
#[derive(Default)]
struct SharedValues {
    /// The node's property bag.
    grade: Grade,
    /// Copy held by the hidden numeric companion widgets.
    numeric: Grade,
}

/// The controls owned by one band.
struct BandControls {
    wheel: ColorWheel,
    strength: ValueSlider,
    luma: ValueSlider,
}

impl BandControls {
    fn new(band: BandId, shared: &Rc<RefCell<SharedValues>>, ctx: &egui::Context) -> Self {
        let (strength_min, strength_max) = band.strength_range();

        let wheel = {
            let shared = Rc::clone(shared);
            ColorWheel::new(format!("{}_wheel", band.key()), WheelValue::default())
                .with_callback(move |v| {
                    let mut values = shared.borrow_mut();
                    let bag = values.grade.band_mut(band);
                    bag.hue = v.hue;
                    bag.sat = v.sat;
                    let mirror = values.numeric.band_mut(band);
                    mirror.hue = v.hue;
                    mirror.sat = v.sat;
                })
                .with_repaint(repaint_handle(ctx))
        };

        let strength = {
            let shared = Rc::clone(shared);
            ValueSlider::new(
                format!("{}_strength", band.key()),
                1.0,
                strength_min,
                strength_max,
            )
            .with_callback(move |v| {
                let mut values = shared.borrow_mut();
                values.grade.band_mut(band).strength = v;
                values.numeric.band_mut(band).strength = v;
            })
            .with_repaint(repaint_handle(ctx))
        };

        let luma = {
            let shared = Rc::clone(shared);
            ValueSlider::new(format!("{}_luma", band.key()), 0.0, -1.0, 1.0)
                .with_label("Luminosity")
                .with_callback(move |v| {
                    let mut values = shared.borrow_mut();
                    values.grade.band_mut(band).luma = v;
                    values.numeric.band_mut(band).luma = v;
                })
                .with_repaint(repaint_handle(ctx))
        };

        Self {
            wheel,
            strength,
            luma,
        }
    }
}

fn repaint_handle(ctx: &egui::Context) -> impl Fn() + 'static {
    let ctx = ctx.clone();
    move || ctx.request_repaint()
}

/// A lift/gamma/gain grade node: three wheels and six sliders over one
/// property bag, exposing the event surface a node-graph host expects.
pub struct GradeNode {
    pub id: Uuid,
    shared: Rc<RefCell<SharedValues>>,
    lift: BandControls,
    gamma: BandControls,
    gain: BandControls,
    theme: GradeWidgetTheme,
}

impl GradeNode {
    pub fn new(ctx: &egui::Context) -> Self {
        let shared = Rc::new(RefCell::new(SharedValues::default()));
        Self {
            id: Uuid::new_v4(),
            lift: BandControls::new(BandId::Lift, &shared, ctx),
            gamma: BandControls::new(BandId::Gamma, &shared, ctx),
            gain: BandControls::new(BandId::Gain, &shared, ctx),
            shared,
            theme: GradeWidgetTheme::default(),
        }
    }

    fn band(&self, id: BandId) -> &BandControls {
        match id {
            BandId::Lift => &self.lift,
            BandId::Gamma => &self.gamma,
            BandId::Gain => &self.gain,
        }
    }

    fn band_mut(&mut self, id: BandId) -> &mut BandControls {
        match id {
            BandId::Lift => &mut self.lift,
            BandId::Gamma => &mut self.gamma,
            BandId::Gain => &mut self.gain,
        }
    }

    /// Current property bag contents.
    pub fn grade(&self) -> Grade {
        self.shared.borrow().grade
    }

    /// Values held by the numeric companion widgets.
    pub(crate) fn numeric_values(&self) -> Grade {
        self.shared.borrow().numeric
    }

    /// Every control in the fixed dispatch order: wheels first, then
    /// strength sliders, then luma sliders.
    fn controls_mut(&mut self) -> [&mut dyn CanvasControl; 9] {
        [
            &mut self.lift.wheel,
            &mut self.gamma.wheel,
            &mut self.gain.wheel,
            &mut self.lift.strength,
            &mut self.gamma.strength,
            &mut self.gain.strength,
            &mut self.lift.luma,
            &mut self.gamma.luma,
            &mut self.gain.luma,
        ]
    }

    // -----------------------------------------------------------------------
    // Event surface toward the host
    // -----------------------------------------------------------------------

    pub fn on_mouse_down(&mut self, event: &PointerEvent) -> bool {
        dispatch_mouse_down(&mut self.controls_mut(), event)
    }

    pub fn on_mouse_move(&mut self, event: &PointerEvent) -> bool {
        dispatch_mouse_move(&mut self.controls_mut(), event)
    }

    pub fn on_mouse_up(&mut self) -> bool {
        dispatch_mouse_up(&mut self.controls_mut())
    }

    // -----------------------------------------------------------------------
    // Layout & rendering
    // -----------------------------------------------------------------------

    /// Size of the node canvas.
    pub fn size() -> Vec2 {
        vec2(
            3.0 * (WHEEL_DIAMETER + SECTION_PADDING) - SECTION_PADDING,
            BAND_LABEL_HEIGHT + WHEEL_DIAMETER + STRENGTH_GAP + LUMA_GAP + SLIDER_FOOTER,
        )
    }

    /// Position every control relative to the canvas origin.
    pub fn place(&mut self, origin: Pos2) {
        for (i, band) in BandId::ALL.into_iter().enumerate() {
            let x = origin.x + i as f32 * (WHEEL_DIAMETER + SECTION_PADDING);
            let wheel_y = origin.y + BAND_LABEL_HEIGHT;
            let strength_y = wheel_y + WHEEL_DIAMETER + STRENGTH_GAP;
            let controls = self.band_mut(band);
            controls.wheel.set_origin(pos2(x, wheel_y));
            controls.strength.set_origin(pos2(x, strength_y));
            controls.luma.set_origin(pos2(x, strength_y + LUMA_GAP));
        }
    }

    /// Draw the node and route pointer events for this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) =
            ui.allocate_painter(Self::size(), egui::Sense::click_and_drag());
        self.place(response.rect.min);
        self.route_pointer(ui, &response);
        self.draw(&painter);
        response
    }

    /// Convert egui pointer input into the control event surface: press →
    /// down, motion → move, release or pointer-leave → up.
    fn route_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let pointer_pos = ui.input(|i| i.pointer.hover_pos());
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let released = ui.input(|i| i.pointer.primary_released());
        let buttons = if ui.input(|i| i.pointer.primary_down()) {
            ButtonMask::PRIMARY
        } else {
            ButtonMask::NONE
        };

        match pointer_pos {
            Some(pos) if pressed && response.rect.contains(pos) => {
                self.on_mouse_down(&PointerEvent::new(pos, ButtonMask::PRIMARY));
            }
            Some(pos) => {
                self.on_mouse_move(&PointerEvent::new(pos, buttons));
            }
            // Pointer left the surface; finish any active drag.
            None => {
                self.on_mouse_up();
            }
        }
        if released {
            self.on_mouse_up();
        }
    }

    fn draw(&self, painter: &Painter) {
        for band in BandId::ALL {
            let controls = self.band(band);
            let wheel_origin = controls.wheel.origin();
            painter.text(
                pos2(wheel_origin.x + WHEEL_DIAMETER / 2.0, wheel_origin.y - 10.0),
                Align2::CENTER_CENTER,
                band.label(),
                FontId::proportional(14.0),
                self.theme.label_color,
            );
            controls.wheel.draw(painter, &self.theme);
            controls.strength.draw(painter, &self.theme);
            controls.luma.draw(painter, &self.theme);
        }
    }

    // -----------------------------------------------------------------------
    // Persistence & programmatic sync
    // -----------------------------------------------------------------------

    /// Produce the flat property bag. Preset files contain exactly this.
    pub fn to_properties(&self) -> Result<Value, GradingError> {
        grade_to_properties(&self.shared.borrow().grade)
    }

    /// Restore from a property bag. Malformed payloads are logged and
    /// ignored so a running session keeps its current state.
    pub fn configure(&mut self, value: &Value) {
        match grade_from_properties(value) {
            Ok(grade) => self.apply_grade(grade),
            Err(e) => warn!("ignoring malformed grade properties: {}", e),
        }
    }

    /// Reset every band to its defaults.
    pub fn reset(&mut self) {
        self.apply_grade(Grade::neutral());
    }

    /// Push a grade into the bag, the numeric mirror and every control,
    /// without firing value-changed callbacks.
    fn apply_grade(&mut self, grade: Grade) {
        {
            let mut values = self.shared.borrow_mut();
            values.grade = grade;
            values.numeric = grade;
        }
        for band in BandId::ALL {
            let tone = *grade.band(band);
            let controls = self.band_mut(band);
            controls.wheel.set_value(WheelValue::new(tone.hue, tone.sat));
            controls.strength.set_value(tone.strength, true);
            controls.luma.set_value(tone.luma, true);
        }
    }

    /// Companion-widget sync: hue/sat edited numerically. The wheel setter
    /// never fires the callback, so the edit cannot echo back.
    pub(crate) fn set_wheel_from_numeric(&mut self, band: BandId, value: WheelValue) {
        self.band_mut(band).wheel.set_value(value);
        let value = self.band(band).wheel.value();
        let mut values = self.shared.borrow_mut();
        let bag = values.grade.band_mut(band);
        bag.hue = value.hue;
        bag.sat = value.sat;
        let mirror = values.numeric.band_mut(band);
        mirror.hue = value.hue;
        mirror.sat = value.sat;
    }

    /// Companion-widget sync: strength edited numerically, via the silent
    /// set path.
    pub(crate) fn set_strength_from_numeric(&mut self, band: BandId, value: f32) {
        self.band_mut(band).strength.set_value(value, true);
        let value = self.band(band).strength.value();
        let mut values = self.shared.borrow_mut();
        values.grade.band_mut(band).strength = value;
        values.numeric.band_mut(band).strength = value;
    }

    /// Companion-widget sync: luma edited numerically, via the silent set
    /// path.
    pub(crate) fn set_luma_from_numeric(&mut self, band: BandId, value: f32) {
        self.band_mut(band).luma.set_value(value, true);
        let value = self.band(band).luma.value();
        let mut values = self.shared.borrow_mut();
        values.grade.band_mut(band).luma = value;
        values.numeric.band_mut(band).luma = value;
    }
}

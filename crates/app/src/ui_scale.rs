//! Board zoom factor, adjustable at runtime with Ctrl +/-/0.

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 4.0;
pub const UI_SCALE_STEP: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    Increase,
    Decrease,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiScale {
    value: f32,
    baseline: f32,
}

impl UiScale {
    /// An explicit override wins over the display's DPI scale. Unparseable overrides are ignored.
    pub fn resolve(dpi_scale: f32, override_value: Option<&str>) -> Self {
        let baseline = override_value
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .map(clamp_ui_scale)
            .unwrap_or_else(|| {
                if dpi_scale.is_finite() && dpi_scale > 1.0 {
                    clamp_ui_scale(dpi_scale)
                } else {
                    DEFAULT_UI_SCALE
                }
            });
        Self { value: baseline, baseline }
    }

    pub fn value(self) -> f32 {
        self.value
    }

    /// Reset returns to the resolved startup scale, not to 1.0.
    pub fn apply(&mut self, action: UiScaleAction) {
        self.value = match action {
            UiScaleAction::Increase => clamp_ui_scale(self.value + UI_SCALE_STEP),
            UiScaleAction::Decrease => clamp_ui_scale(self.value - UI_SCALE_STEP),
            UiScaleAction::Reset => self.baseline,
        };
    }
}

impl Default for UiScale {
    fn default() -> Self {
        Self { value: DEFAULT_UI_SCALE, baseline: DEFAULT_UI_SCALE }
    }
}

pub fn clamp_ui_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_UI_SCALE;
    }
    value.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}

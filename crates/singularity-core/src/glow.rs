use crate::constants::GLOW_OFFSET_PX;

/// Position and visibility of the soft glow that trails the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

impl GlowState {
    /// Centre the glow on the pointer.
    pub fn on_move(&mut self, client_x: f64, client_y: f64) {
        self.left = client_x - GLOW_OFFSET_PX;
        self.top = client_y - GLOW_OFFSET_PX;
    }

    pub fn on_enter(&mut self) {
        self.visible = true;
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }

    pub fn style_position(&self) -> (String, String) {
        (format!("{}px", self.left), format!("{}px", self.top))
    }
}

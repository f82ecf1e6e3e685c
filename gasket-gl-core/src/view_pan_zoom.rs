//! 2D zoom and translation of the gasket view
//!
//! The vertex shader maps a point `p` to `(p - translation) * zoom`.

pub const ZOOM_STEP: f32 = 0.1;

/// the view is never shrunk below this factor
pub const ZOOM_MIN: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct PanZoom {
    pub zoom: f32,
    pub translation: [f32; 2],
}

impl Default for PanZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PanZoom {
    pub fn new() -> Self {
        PanZoom {
            zoom: 1.,
            translation: [0., 0.],
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom += ZOOM_STEP;
        log::info!("Zoom Percentage: {}", self.zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
        log::info!("Zoom Percentage: {}", self.zoom);
    }

    /// Shifts the view toward the clicked pixel. The shift shrinks as the zoom grows.
    pub fn pan_toward(&mut self, cursor_x: f64, cursor_y: f64, win_width: u32, win_height: u32) {
        if win_width == 0 || win_height == 0 {
            return;
        }
        let rx = (cursor_x / win_width as f64) as f32 - 0.5;
        let ry = (cursor_y / win_height as f64) as f32 - 0.5;
        self.translation[0] += rx / self.zoom;
        // window y points down
        self.translation[1] -= ry / self.zoom;
        log::info!("x: {} y: {}", rx + 0.5, ry + 0.5);
        log::info!(
            "translation x: {} translation y: {}",
            self.translation[0],
            self.translation[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-5
    }

    #[test]
    fn zoom_steps_and_floor() {
        let mut view = PanZoom::new();
        view.zoom_in();
        view.zoom_in();
        assert!(close(view.zoom, 1.2));
        for _ in 0..30 {
            view.zoom_out();
        }
        assert!(close(view.zoom, ZOOM_MIN));
        assert!(view.zoom > 0.);
    }

    #[test]
    fn click_at_center_does_not_move() {
        let mut view = PanZoom::new();
        view.pan_toward(250., 250., 500, 500);
        assert_eq!(view.translation, [0., 0.]);
    }

    #[test]
    fn pan_is_scaled_by_zoom() {
        let mut view = PanZoom::new();
        view.pan_toward(500., 0., 500, 500);
        assert!(close(view.translation[0], 0.5));
        assert!(close(view.translation[1], 0.5));
        let mut view = PanZoom {
            zoom: 2.,
            translation: [0., 0.],
        };
        view.pan_toward(0., 500., 500, 500);
        assert!(close(view.translation[0], -0.25));
        assert!(close(view.translation[1], -0.25));
    }

    #[test]
    fn degenerate_window_is_ignored() {
        let mut view = PanZoom::new();
        view.pan_toward(10., 10., 0, 500);
        assert_eq!(view, PanZoom::new());
    }
}

pub struct UiState {
    pub win_width: u32,
    pub win_height: u32,
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub is_left_btn: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        UiState {
            win_width: 500,
            win_height: 500,
            cursor_x: 0.,
            cursor_y: 0.,
            is_left_btn: false,
        }
    }

    /// cursor position in window pixels, origin at the top left
    pub fn update_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_keeps_the_latest_position() {
        let mut ui = UiState::new();
        assert_eq!((ui.win_width, ui.win_height), (500, 500));
        ui.update_cursor_position(10., 20.);
        ui.update_cursor_position(13., 15.);
        assert_eq!((ui.cursor_x, ui.cursor_y), (13., 15.));
        assert!(!ui.is_left_btn);
    }
}

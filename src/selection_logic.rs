// src/selection_logic.rs
// Pure state, no druid types here.

use crate::color_mapper::{Rgb, color_for_coordinate};
use crate::config::DEFAULT_SELECTION;

/// 方块内的坐标（像素），夹紧后满足 0 <= x, y <= size - 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }
}

/// 把数值夹到 [0, size - 1]
pub fn clamp_to_square(value: f64, size: u32) -> f64 {
    let max = size.saturating_sub(1) as f64;
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// 当前选中位置。只有一种状态："有一个当前选区"。
///
/// 存的是光标圆圈外接框的左上角，而不是鼠标本身的位置。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    current: Coordinate,
}

impl SelectionState {
    pub fn initialize(default_x: f64, default_y: f64, size: u32) -> Self {
        SelectionState {
            current: Coordinate::new(
                clamp_to_square(default_x, size),
                clamp_to_square(default_y, size),
            ),
        }
    }

    /// 启动时的默认选区：等价于在 75% 宽、25% 高处按下鼠标
    pub fn starting(size: u32, cursor_radius: f64) -> Self {
        let (fx, fy) = DEFAULT_SELECTION;
        let mut state = Self::initialize(0.0, 0.0, size);
        state.update(size as f64 * fx, size as f64 * fy, size, cursor_radius);
        state
    }

    /// 按鼠标位置更新，减去光标半径后夹紧。
    pub fn update(&mut self, raw_x: f64, raw_y: f64, size: u32, cursor_radius: f64) {
        self.current = Coordinate::new(
            clamp_to_square(raw_x - cursor_radius, size),
            clamp_to_square(raw_y - cursor_radius, size),
        );
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    pub fn color(&self, size: u32) -> Rgb {
        color_for_coordinate(self.current.x, self.current.y, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_clamps_below_zero() {
        let mut s = SelectionState::initialize(10.0, 10.0, 300);
        s.update(-50.0, -50.0, 300, 6.0);
        assert_eq!(s.current(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn update_clamps_above_size() {
        let mut s = SelectionState::initialize(10.0, 10.0, 300);
        s.update(10000.0, 10000.0, 300, 6.0);
        assert_eq!(s.current(), Coordinate::new(299.0, 299.0));
    }

    #[test]
    fn update_subtracts_radius() {
        let mut s = SelectionState::initialize(0.0, 0.0, 300);
        s.update(100.0, 40.5, 300, 6.0);
        assert_eq!(s.current(), Coordinate::new(94.0, 34.5));
    }

    #[test]
    fn update_is_idempotent() {
        let mut s = SelectionState::initialize(0.0, 0.0, 300);
        s.update(123.0, 77.0, 300, 6.0);
        let first = s.current();
        s.update(123.0, 77.0, 300, 6.0);
        assert_eq!(s.current(), first);
    }

    #[test]
    fn initialize_clamps() {
        let s = SelectionState::initialize(-1.0, 400.0, 300);
        assert_eq!(s.current(), Coordinate::new(0.0, 299.0));
    }

    #[test]
    fn starting_position_matches_first_press() {
        let s = SelectionState::starting(300, 6.0);
        assert_eq!(s.current(), Coordinate::new(219.0, 69.0));
    }

    #[test]
    fn color_follows_selection() {
        let mut s = SelectionState::initialize(0.0, 0.0, 300);
        s.update(6.0, 305.0, 300, 6.0);
        assert_eq!(s.color(300), Rgb::new(255, 0, 0));
    }

    #[test]
    fn nan_clamps_to_origin() {
        assert_eq!(clamp_to_square(f64::NAN, 300), 0.0);
    }
}

// src/color_mapper.rs

use crate::selection_logic::{Coordinate, clamp_to_square};

/// 8 位 RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// 实时显示用的 "R, G, B"
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    pub fn hex(&self) -> String {
        hex_for_color(self.r, self.g, self.b)
    }
}

/// HSB 转 RGB，返回 [0, 1] 范围内的三个通道。
///
/// 色相以度为单位，先归一化到 [0, 360)，所以 360 等价于 0。
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> (f64, f64, f64) {
    if saturation <= 0.0 {
        return (brightness, brightness, brightness);
    }

    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    match sector as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    }
}

/// RGB 转 HSB，色相单位为度，饱和度与亮度在 [0, 1]
pub fn rgb_to_hsb(color: Rgb) -> (f64, f64, f64) {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };
    if delta == 0.0 {
        return (0.0, saturation, max);
    }

    let hue = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (hue, saturation, max)
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// size <= 1 时没有可用的跨度，避免除零
fn span(size: u32) -> f64 {
    size.saturating_sub(1).max(1) as f64
}

/// 方块内坐标对应的颜色：x 决定色相，y 决定饱和度，亮度固定为 1。
///
/// 越界坐标会先被夹到 [0, size-1]，不会报错。
pub fn color_for_coordinate(x: f64, y: f64, size: u32) -> Rgb {
    let (hue, saturation) = if size <= 1 {
        (0.0, 0.0)
    } else {
        let x = clamp_to_square(x, size);
        let y = clamp_to_square(y, size);
        (x / span(size) * 360.0, y / span(size))
    };

    let (r, g, b) = hsb_to_rgb(hue, saturation, 1.0);
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// 反向映射：由颜色求方块内的位置。亮度信息被丢弃，所以只用于显示。
#[allow(dead_code)]
pub fn coordinate_for_color(color: Rgb, size: u32) -> Coordinate {
    let (hue, saturation, _) = rgb_to_hsb(color);
    Coordinate::new(
        clamp_to_square(hue / 360.0 * span(size), size),
        clamp_to_square(saturation * span(size), size),
    )
}

/// `#RRGGBB`，大写，两位补零
pub fn hex_for_color(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

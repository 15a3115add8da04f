// src/gradient.rs

use image::{ImageBuffer, Rgba};

use crate::color_mapper::color_for_coordinate;

/// 生成 size x size 的色相/饱和度渐变图。
///
/// 像素 (x, y) 的颜色为 HSB(x / (size-1) * 360, y / (size-1), 1.0)。
pub fn render_square(size: u32) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    ImageBuffer::from_fn(size, size, |x, y| {
        let c = color_for_coordinate(x as f64, y as f64, size);
        Rgba([c.r, c.g, c.b, 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_mapper::Rgb;

    #[test]
    fn dimensions_match() {
        let img = render_square(64);
        assert_eq!(img.dimensions(), (64, 64));
    }

    #[test]
    fn pixels_match_mapper() {
        let img = render_square(50);
        for (x, y) in [(0, 0), (49, 0), (0, 49), (17, 33), (49, 49)] {
            let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
            assert_eq!(Rgb::new(r, g, b), color_for_coordinate(x as f64, y as f64, 50));
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn corners() {
        let img = render_square(300);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 299), Rgba([255, 0, 0, 255]));
    }
}

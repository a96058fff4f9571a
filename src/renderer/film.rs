use crate::math::rgb_to_u32;

use image::RgbImage;

/// Row-major 2D buffer, one entry per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl Film<[u8; 3]> {
    /// Pack into the `0RGB` layout a window framebuffer expects.
    pub fn write_to_u32_buffer(&self, buffer: &mut [u32]) {
        for (dst, &[r, g, b]) in buffer.iter_mut().zip(self.buffer.iter()) {
            *dst = rgb_to_u32(r, g, b);
        }
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Rgb(self.at(x as usize, y as usize))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing_is_row_major() {
        let mut film = Film::new(3, 2, [0u8; 3]);
        film.buffer[5] = [1, 2, 3];
        assert_eq!(film.at(2, 1), [1, 2, 3]);
        assert_eq!(film.at(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_conversions() {
        let mut film = Film::new(2, 1, [0u8; 3]);
        film.buffer[1] = [0x12, 0x34, 0x56];
        let mut buffer = vec![0u32; 2];
        film.write_to_u32_buffer(&mut buffer);
        assert_eq!(buffer, vec![0, 0x123456]);

        let image = film.to_image();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(1, 0).0, [0x12, 0x34, 0x56]);
    }
}

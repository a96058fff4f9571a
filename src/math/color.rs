use super::Vec3;

/// Linear RGB color, one channel per component. Channels are unbounded until
/// converted to a pixel.
pub type Color = Vec3;

pub const WHITE: Color = Vec3::ONE;
pub const BLACK: Color = Vec3::ZERO;

fn to_channel(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (255.0 * c.clamp(0.0, 1.0)) as u8
}

/// Clamp each channel into [0, 1] and scale to 8 bits, truncating.
/// NaN channels become 0, infinities clamp to the nearest bound.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    [
        to_channel(color.x),
        to_channel(color.y),
        to_channel(color.z),
    ]
}

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb8_truncates() {
        assert_eq!(to_rgb8(Vec3::new(0.5, 1.0, 0.0)), [127, 255, 0]);
        assert_eq!(to_rgb8(Vec3::new(0.999, 0.004, 0.2)), [254, 1, 51]);
    }

    #[test]
    fn test_to_rgb8_clamps_out_of_range() {
        assert_eq!(to_rgb8(Vec3::new(7.5, -3.0, 1.0001)), [255, 0, 255]);
        assert_eq!(
            to_rgb8(Vec3::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY)),
            [0, 255, 0]
        );
    }

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(rgb_to_u32(0x12, 0x34, 0x56), 0x123456);
    }
}

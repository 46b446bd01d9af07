//! Copies the orb framebuffer into a softbuffer surface buffer.

use orb_core::Framebuffer;

/// Fill `dst` (`dst_width × dst_height`, row-major) from `src`.
///
/// Equal sizes are a straight copy. Otherwise the framebuffer is stretched
/// over the whole surface with nearest-neighbour sampling.
///
/// Returns `false` without touching `dst` when it holds fewer than
/// `dst_width × dst_height` pixels.
pub(crate) fn blit_stretched(
    src: &Framebuffer,
    dst: &mut [u32],
    dst_width: usize,
    dst_height: usize,
) -> bool {
    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let pixels = src.pixels();

    if dst.len() < dst_width * dst_height {
        return false;
    }
    if dst_width == 0 || dst_height == 0 {
        return true;
    }
    if src_w == 0 || src_h == 0 {
        dst.fill(0);
        return true;
    }

    if src_w == dst_width && src_h == dst_height {
        dst[..pixels.len()].copy_from_slice(pixels);
        return true;
    }

    for y in 0..dst_height {
        let sy = y * src_h / dst_height;
        let src_row = &pixels[sy * src_w..(sy + 1) * src_w];
        let dst_row = &mut dst[y * dst_width..(y + 1) * dst_width];
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[x * src_w / dst_width];
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_core::Color;

    fn checker() -> Framebuffer {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_pixel(0, 0, Color::RED);
        fb.set_pixel(1, 1, Color::GREEN);
        fb
    }

    #[test]
    fn same_size_is_copied() {
        let fb = checker();
        let mut dst = vec![0xFFFF_FFFF; 4];
        assert!(blit_stretched(&fb, &mut dst, 2, 2));
        assert_eq!(dst, fb.pixels());
    }

    #[test]
    fn larger_surface_is_stretched() {
        let mut dst = vec![0; 16];
        assert!(blit_stretched(&checker(), &mut dst, 4, 4));
        let red = Color::RED.to_pixel();
        let green = Color::GREEN.to_pixel();
        assert_eq!(&dst[0..4], &[red, red, 0, 0]);
        assert_eq!(&dst[4..8], &[red, red, 0, 0]);
        assert_eq!(&dst[8..12], &[0, 0, green, green]);
        assert_eq!(&dst[12..16], &[0, 0, green, green]);
    }

    #[test]
    fn smaller_surface_is_sampled() {
        let mut dst = vec![0xFFFF_FFFF; 1];
        assert!(blit_stretched(&checker(), &mut dst, 1, 1));
        assert_eq!(dst, vec![Color::RED.to_pixel()]);
    }

    #[test]
    fn empty_surface_is_left_alone() {
        let mut dst: Vec<u32> = Vec::new();
        assert!(blit_stretched(&checker(), &mut dst, 0, 0));
        assert!(dst.is_empty());
    }

    #[test]
    fn short_buffer_is_rejected_untouched() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::GREEN);
        let mut dst = vec![0xDEAD_BEEF; 4];
        assert!(!blit_stretched(&fb, &mut dst, 3, 3));
        assert_eq!(dst, vec![0xDEAD_BEEF; 4]);
    }
}

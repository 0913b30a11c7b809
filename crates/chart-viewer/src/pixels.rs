// File: crates/chart-viewer/src/pixels.rs
// Summary: RGBA8 -> softbuffer 0RGB conversion.

/// Pack RGBA8 pixels into softbuffer's `0x00RRGGBB` words. Copies as many
/// pixels as both buffers hold; returns that count.
pub fn pack_rgba_into(rgba: &[u8], frame: &mut [u32]) -> usize {
    let n = frame.len().min(rgba.len() / 4);
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)).take(n) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32);
    }
    n
}

//! Sobel gradient magnitude for a single pixel.
//!
//! Integer convolution of the 3×3 neighbourhood with the `X` and `Y` kernels,
//! then `round(sqrt(gx² + gy²))` clamped to `[0, 255]`. The largest possible
//! response on 8-bit input is `|gx| = |gy| = 1020`, so the sums fit in `i32`
//! with plenty of headroom.
use crate::image::{ImageU8, ImageView};

pub type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Raw `(gx, gy)` kernel responses at `(x, y)`.
///
/// Requires `1 <= x < width - 1` and `1 <= y < height - 1`; out-of-range
/// coordinates panic on the slice index.
#[inline]
pub fn sobel_response(input: &ImageU8<'_>, x: usize, y: usize) -> (i32, i32) {
    debug_assert!(x >= 1 && x + 1 < input.w, "x={x} outside interior");
    debug_assert!(y >= 1 && y + 1 < input.h, "y={y} outside interior");

    let rows = [input.row(y - 1), input.row(y), input.row(y + 1)];
    let mut sum_x = 0i32;
    let mut sum_y = 0i32;
    for (ky, row) in rows.iter().enumerate() {
        let window = &row[x - 1..=x + 1];
        let kx_row = &SOBEL_KERNEL_X[ky];
        let ky_row = &SOBEL_KERNEL_Y[ky];
        for (kx, &px) in window.iter().enumerate() {
            let px = i32::from(px);
            sum_x += px * kx_row[kx];
            sum_y += px * ky_row[kx];
        }
    }
    (sum_x, sum_y)
}

/// Gradient magnitude byte at interior pixel `(x, y)`.
#[inline]
pub fn gradient_at(input: &ImageU8<'_>, x: usize, y: usize) -> u8 {
    let (gx, gy) = sobel_response(input, x, y);
    magnitude_u8(gx, gy)
}

#[inline]
fn magnitude_u8(gx: i32, gy: i32) -> u8 {
    let squared = (gx * gx + gy * gy) as f64;
    squared.sqrt().round().clamp(0.0, 255.0) as u8
}

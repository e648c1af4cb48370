#![allow(dead_code)]

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Vertical step edge: columns `< split_x` are `low`, the rest `high`.
pub fn vertical_step_u8(width: usize, height: usize, split_x: usize, low: u8, high: u8) -> Vec<u8> {
    let mut img = vec![low; width * height];
    for y in 0..height {
        for x in split_x..width {
            img[y * width + x] = high;
        }
    }
    img
}

/// Deterministic pseudo-random texture (LCG), useful for exercising every
/// kernel tap with distinct values.
pub fn noise_u8(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

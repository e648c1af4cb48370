//! Edge operators on 8-bit grayscale images.
//!
//! - `sobel::gradient_at`: Sobel gradient magnitude of one interior pixel,
//!   rounded and saturated to a byte.
//!
//! Border pixels have no full 3×3 neighbourhood and are never passed to the
//! operator; callers decide what to store there (the filter writes 0).

pub mod sobel;

pub use sobel::{gradient_at, sobel_response, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};

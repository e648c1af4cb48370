#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod filter;
pub mod image;
pub mod partition;
pub mod worker;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{CodecError, SobelError};
pub use crate::filter::{apply_sobel, SobelFilter, SobelParams};
pub use crate::image::pgm::{decode, encode};
pub use crate::image::{GrayImageU8, ImageU8};
pub use crate::partition::{partition_rows, Partition};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_bands::prelude::*;
///
/// # fn main() -> Result<(), SobelError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = GrayImageU8::new(w, h, vec![0u8; w * h])?;
///
/// let edges = apply_sobel(gray.as_view(), 4)?;
/// let bytes = encode(&edges);
/// println!("encoded {} bytes", bytes.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageView};
    pub use crate::{apply_sobel, decode, encode, SobelError, SobelFilter, SobelParams};
}

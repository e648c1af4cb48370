//! Owned 8-bit grayscale buffer in row-major layout (stride == width).
use super::band::BandMut;
use super::{ImageU8, ImageView, ImageViewMut};
use crate::error::{CodecError, SobelError};
use std::ops::Range;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw row-major bytes. `data.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CodecError> {
        let expected = width
            .checked_mul(height)
            .ok_or(CodecError::DimensionOverflow { width, height })?;
        if data.len() != expected {
            return Err(CodecError::BufferMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a `width × height` buffer with every pixel set to `value`.
    ///
    /// Reservation goes through `try_reserve_exact`, so an oversized request
    /// surfaces as [`SobelError::AllocationFailure`] instead of aborting.
    pub fn try_filled(width: usize, height: usize, value: u8) -> Result<Self, SobelError> {
        let len = width
            .checked_mul(height)
            .ok_or(CodecError::DimensionOverflow { width, height })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SobelError::AllocationFailure { bytes: len })?;
        data.resize(len, value);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Raw row-major pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::new(self.width, self.height, &self.data)
    }

    /// Split the buffer into mutable bands, one per row range.
    ///
    /// Ranges must be sorted, non-overlapping and inside `0..height`; the
    /// returned bands borrow disjoint slices of the buffer and can be handed
    /// to separate threads. Rows not covered by any range stay untouched.
    pub fn bands_mut(&mut self, ranges: &[Range<usize>]) -> Vec<BandMut<'_>> {
        let width = self.width;
        let mut bands = Vec::with_capacity(ranges.len());
        let mut rest: &mut [u8] = &mut self.data;
        let mut consumed_rows = 0usize;

        for range in ranges {
            assert!(
                range.start >= consumed_rows
                    && range.start <= range.end
                    && range.end <= self.height,
                "band {range:?} overlaps a previous band or leaves the image"
            );
            let skip = (range.start - consumed_rows) * width;
            let (_, tail) = std::mem::take(&mut rest).split_at_mut(skip);
            let (band, tail) = tail.split_at_mut((range.end - range.start) * width);
            bands.push(BandMut::new(width, range.start, band));
            rest = tail;
            consumed_rows = range.end;
        }
        bands
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

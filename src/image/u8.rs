use crate::error::SobelError;

/// Borrowed, read-only 8-bit grayscale view.
///
/// This is the shape workers see: the input image is shared between all of
/// them for the whole run and never mutated, so the view is `Copy`-cheap to
/// hand out and needs no synchronization.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Check that every row `0..h` lies inside `data` and rows do not overlap.
    ///
    /// The fields are public, so a hand-built view can claim more pixels than
    /// it borrows; filters call this before touching any row.
    pub fn check_layout(&self) -> Result<(), SobelError> {
        if self.stride < self.w {
            return Err(SobelError::invalid_configuration(format!(
                "view stride {} is smaller than its width {}",
                self.stride, self.w
            )));
        }
        if self.h == 0 {
            return Ok(());
        }
        let required = (self.h - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.w))
            .ok_or_else(|| {
                SobelError::invalid_configuration(format!(
                    "view {}x{} with stride {} overflows the address space",
                    self.w, self.h, self.stride
                ))
            })?;
        if self.data.len() < required {
            return Err(SobelError::invalid_configuration(format!(
                "view {}x{} with stride {} needs {} bytes, got {}",
                self.w,
                self.h,
                self.stride,
                required,
                self.data.len()
            )));
        }
        Ok(())
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_and_padded_views_pass() {
        let data = [0u8; 24];
        assert!(ImageU8::new(4, 6, &data).check_layout().is_ok());
        // Last row needs only `w` bytes, not a full stride.
        let padded = ImageU8 {
            w: 4,
            h: 4,
            stride: 6,
            data: &data[..22],
        };
        assert!(padded.check_layout().is_ok());
        assert!(ImageU8::new(5, 0, &[]).check_layout().is_ok());
    }

    #[test]
    fn short_data_is_rejected() {
        let data = [0u8; 21];
        let view = ImageU8 {
            w: 4,
            h: 4,
            stride: 6,
            data: &data,
        };
        assert!(matches!(
            view.check_layout(),
            Err(SobelError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn stride_narrower_than_width_is_rejected() {
        let data = [0u8; 100];
        let view = ImageU8 {
            w: 10,
            h: 10,
            stride: 5,
            data: &data,
        };
        assert!(matches!(
            view.check_layout(),
            Err(SobelError::InvalidConfiguration { .. })
        ));
    }
}

//! Exclusive write view over a contiguous band of image rows.
use super::{ImageView, ImageViewMut};

/// Mutable band of whole rows borrowed from a [`GrayImageU8`](super::GrayImageU8).
///
/// Row indices passed to [`ImageView::row`] / [`ImageViewMut::row_mut`] are
/// local to the band; [`BandMut::first_row`] maps them back to image rows.
#[derive(Debug)]
pub struct BandMut<'a> {
    width: usize,
    first_row: usize,
    data: &'a mut [u8],
}

impl<'a> BandMut<'a> {
    pub(crate) fn new(width: usize, first_row: usize, data: &'a mut [u8]) -> Self {
        debug_assert!(width == 0 || data.len() % width == 0);
        Self {
            width,
            first_row,
            data,
        }
    }

    /// Image row stored at local row 0.
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Image rows covered by this band.
    pub fn rows_range(&self) -> std::ops::Range<usize> {
        self.first_row..self.first_row + self.height()
    }
}

impl<'a> ImageView for BandMut<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len() / self.width
        }
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

impl<'a> ImageViewMut for BandMut<'a> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

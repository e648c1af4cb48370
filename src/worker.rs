//! Per-band Sobel worker.
use crate::edges::sobel::gradient_at;
use crate::image::{BandMut, ImageU8, ImageViewMut};
use crate::partition::Partition;

/// Fill the interior columns of `band` with Sobel magnitudes of `input`.
///
/// `band` must cover exactly `partition.write_rows()`. Columns `0` and
/// `width - 1` of the band are left as they are. Reads of `input` extend one
/// row above and below the band; the input is shared and immutable so
/// concurrent workers need no synchronization.
pub fn run_band(input: &ImageU8<'_>, band: &mut BandMut<'_>, partition: &Partition) {
    let width = input.w;
    if width < 3 {
        return;
    }
    debug_assert_eq!(band.rows_range(), partition.write_rows());
    debug_assert_eq!(band.first_row(), partition.start_row + 1);

    for (local, y) in partition.write_rows().enumerate() {
        let out = band.row_mut(local);
        for (x, px) in out.iter_mut().enumerate().take(width - 1).skip(1) {
            *px = gradient_at(input, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{GrayImageU8, ImageView};
    use crate::partition::partition_rows;

    #[test]
    fn worker_writes_only_its_band_interior() {
        let (w, h) = (6usize, 12usize);
        let data: Vec<u8> = (0..w * h).map(|i| ((i % w) * 40) as u8).collect();
        let input = GrayImageU8::new(w, h, data).unwrap();
        let parts = partition_rows(h, 3).unwrap();
        let target = parts[1];

        let mut out = GrayImageU8::try_filled(w, h, 7).unwrap();
        {
            let mut bands = out.bands_mut(&[target.write_rows()]);
            run_band(&input.as_view(), &mut bands[0], &target);
        }

        for y in 0..h {
            let row = out.row(y);
            let inside = target.write_rows().contains(&y);
            for (x, &px) in row.iter().enumerate() {
                if inside && x > 0 && x < w - 1 {
                    assert_eq!(px, gradient_at(&input.as_view(), x, y));
                } else {
                    assert_eq!(px, 7, "pixel ({x}, {y}) outside the band was touched");
                }
            }
        }
    }

    #[test]
    fn narrow_image_has_no_interior_columns() {
        let input = GrayImageU8::new(2, 5, vec![200; 10]).unwrap();
        let part = partition_rows(5, 1).unwrap()[0];
        let mut out = GrayImageU8::try_filled(2, 5, 0).unwrap();
        {
            let mut bands = out.bands_mut(&[part.write_rows()]);
            run_band(&input.as_view(), &mut bands[0], &part);
        }
        assert!(out.as_bytes().iter().all(|&b| b == 0));
    }
}

mod common;

use common::synthetic_image::{checkerboard_u8, noise_u8};
use sobel_bands::image::io::{read_pgm, write_pgm};
use sobel_bands::{apply_sobel, decode, encode, CodecError, GrayImageU8};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("sobel_bands_{}", std::process::id()))
        .join(name)
}

#[test]
fn round_trip_preserves_image() {
    for (w, h) in [(1usize, 1usize), (3, 7), (64, 48), (255, 3)] {
        let img = GrayImageU8::new(w, h, noise_u8(w, h, (w * h) as u32)).unwrap();
        assert_eq!(decode(&encode(&img)).unwrap(), img, "{w}x{h}");
    }
}

#[test]
fn max_gray_above_255_is_rejected() {
    let mut bytes = b"P5\n4 4\n300\n".to_vec();
    bytes.extend(std::iter::repeat(0u8).take(32));
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedMaxGray(300)), "{err}");
}

#[test]
fn truncated_pixel_data_is_rejected() {
    let img = GrayImageU8::new(8, 8, checkerboard_u8(8, 8, 2)).unwrap();
    let bytes = encode(&img);
    let err = decode(&bytes[..bytes.len() - 10]).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { expected: 64, actual: 54 }));
}

#[test]
fn header_comments_are_skipped() {
    let mut bytes = b"P5\n# CREATOR: test\n3 1\n# depth\n255\n".to_vec();
    bytes.extend_from_slice(&[10, 20, 30]);
    let img = decode(&bytes).unwrap();
    assert_eq!(img.as_bytes(), &[10, 20, 30]);
}

#[test]
fn files_round_trip_through_filter() {
    let (w, h) = (40usize, 30usize);
    let input = GrayImageU8::new(w, h, checkerboard_u8(w, h, 5)).unwrap();
    let in_path = scratch_path("in/checker.pgm");
    let out_path = scratch_path("out/edges.pgm");

    write_pgm(&input, &in_path).unwrap();
    let loaded = read_pgm(&in_path).unwrap();
    assert_eq!(loaded, input);

    let edges = apply_sobel(loaded.as_view(), 4).unwrap();
    write_pgm(&edges, &out_path).unwrap();
    assert_eq!(read_pgm(&out_path).unwrap(), edges);

    let _ = std::fs::remove_dir_all(scratch_path(""));
}

#[test]
fn missing_file_reports_path() {
    let path = scratch_path("does/not/exist.pgm");
    match read_pgm(&path) {
        Err(CodecError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

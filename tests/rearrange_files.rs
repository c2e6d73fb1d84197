//! End-to-end runs of `rearrange_tiles` against files on disk.

use std::path::Path;

use imgref::ImgVec;
use retile::raster::{load_raster, save_raster};
use retile::{ImageSize, TileError, TileSize, rearrange_tiles, valid_input};
use rgb::Rgb;

const RED: Rgb<u8> = Rgb { r: 255, g: 0, b: 0 };

fn write_image(path: &Path, img: &ImgVec<Rgb<u8>>) {
    save_raster(img.as_ref(), path).unwrap();
}

fn numbered(width: usize, height: usize) -> ImgVec<Rgb<u8>> {
    let buf = (0..width * height)
        .map(|i| Rgb::new((i % 256) as u8, (i / 256) as u8, 77))
        .collect();
    ImgVec::new(buf, width, height)
}

/// Pixels of the tile at diagonal index `index`.
fn diagonal_tile(img: &ImgVec<Rgb<u8>>, tile: TileSize, index: usize) -> Vec<Rgb<u8>> {
    img.as_ref()
        .sub_image(index * tile.width, index * tile.height, tile.width, tile.height)
        .pixels()
        .collect()
}

#[test]
fn solid_red_identity_fills_diagonal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("red.png");
    let output = dir.path().join("out.png");
    write_image(&input, &ImgVec::new(vec![RED; 16], 4, 4));

    rearrange_tiles(&input, TileSize::new(2, 2), &[0, 1, 2, 3], &output).unwrap();

    let out = load_raster(&output).unwrap();
    for (y, row) in out.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            let on_diagonal = (x < 2) == (y < 2);
            let expected = if on_diagonal { RED } else { Rgb::default() };
            assert_eq!(*px, expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn single_tile_identity_is_pixel_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let src = numbered(7, 5);
    write_image(&input, &src);

    rearrange_tiles(&input, TileSize::new(7, 5), &[0], &output).unwrap();

    assert_eq!(load_raster(&output).unwrap().buf(), src.buf());
}

#[test]
fn inverse_ordering_restores_diagonal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let shuffled = dir.path().join("shuffled.png");
    let restored = dir.path().join("restored.png");
    let tile = TileSize::new(4, 3);
    let src = numbered(16, 12);
    write_image(&input, &src);

    let ordering = [3, 1, 0, 2];
    let mut inverse = [0; 4];
    for (position, &order) in ordering.iter().enumerate() {
        inverse[order] = position;
    }
    rearrange_tiles(&input, tile, &ordering, &shuffled).unwrap();
    rearrange_tiles(&shuffled, tile, &inverse, &restored).unwrap();

    let back = load_raster(&restored).unwrap();
    for index in 0..4 {
        assert_eq!(
            diagonal_tile(&back, tile, index),
            diagonal_tile(&src, tile, index),
            "tile {index}"
        );
    }
}

#[test]
fn duplicate_ordering_is_rejected_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_image(&input, &numbered(4, 4));

    assert!(!valid_input(
        ImageSize::new(4, 4),
        TileSize::new(2, 2),
        &[0, 0, 1, 2]
    ));
    let err = rearrange_tiles(&input, TileSize::new(2, 2), &[0, 0, 1, 2], &output).unwrap_err();
    assert!(matches!(err, TileError::InvalidArrangement));
    assert_eq!(
        err.to_string(),
        "The tile size or ordering are not valid for the given image"
    );
    assert!(!output.exists());
}

#[test]
fn indivisible_area_is_rejected_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_image(&input, &numbered(5, 5));

    let err = rearrange_tiles(&input, TileSize::new(2, 2), &[1, 0], &output).unwrap_err();
    assert!(matches!(err, TileError::InvalidArrangement));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails_before_validation() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    // The arrangement itself would also be rejected; decoding wins.
    let err = rearrange_tiles(
        dir.path().join("missing.png"),
        TileSize::new(0, 0),
        &[1, 1],
        &output,
    )
    .unwrap_err();
    assert!(matches!(err, TileError::Decode { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn output_matches_input_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.png");
    write_image(&input, &numbered(12, 8));

    rearrange_tiles(&input, TileSize::new(4, 4), &[1, 0], &output).unwrap();

    let out = load_raster(&output).unwrap();
    assert_eq!((out.width(), out.height()), (12, 8));
}

#[test]
fn unwritable_output_is_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_image(&input, &numbered(4, 4));

    let no_dir = dir.path().join("no-such-dir").join("out.png");
    let err = rearrange_tiles(&input, TileSize::new(2, 2), &[0, 1], &no_dir).unwrap_err();
    assert!(matches!(err, TileError::Encode { .. }), "{err:?}");

    let bad_ext = dir.path().join("out.xyz");
    let err = rearrange_tiles(&input, TileSize::new(2, 2), &[0, 1], &bad_ext).unwrap_err();
    assert!(matches!(err, TileError::Encode { .. }), "{err:?}");
}

#[test]
fn source_that_cannot_fill_destination_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_image(&input, &numbered(5, 4));

    let err = rearrange_tiles(&input, TileSize::new(2, 2), &[0, 2], &output).unwrap_err();
    assert!(matches!(err, TileError::ShapeMismatch { position: 1, order: 2, .. }));
    assert!(!output.exists());
}

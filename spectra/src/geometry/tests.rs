use super::*;
use crate::test_utils::{assert_grids_close, random_grid};
use crate::transform::{forward, TransformMethod};

// =============================================================================
// Translation
// =============================================================================

#[test]
fn translate_fills_exposed_area_with_white() {
    let image = Grid::from_fn(4, 3, |x, y| (y * 4 + x) as f64);
    let shifted = translate(&image, 1.0, 0.0, &WarpOptions::default());

    for y in 0..3 {
        assert_eq!(shifted[(0, y)], WHITE);
        for x in 1..4 {
            assert_eq!(shifted[(x, y)], image[(x - 1, y)]);
        }
    }
}

#[test]
fn translate_up_and_left() {
    let image = Grid::from_fn(4, 4, |x, y| (y * 4 + x) as f64);
    let shifted = translate(&image, -2.0, -1.0, &WarpOptions::default());

    assert_eq!(shifted[(0, 0)], image[(2, 1)]);
    assert_eq!(shifted[(1, 2)], image[(3, 3)]);
    assert_eq!(shifted[(2, 0)], WHITE);
    assert_eq!(shifted[(0, 3)], WHITE);
    assert_eq!(shifted.dimensions(), image.dimensions());
}

#[test]
fn translate_uses_custom_border() {
    let image = Grid::new_filled(3, 3, 1.0);
    let options = WarpOptions::new().border(Border::Constant(0.0));
    let shifted = translate(&image, 0.0, 2.0, &options);
    assert_eq!(&shifted.samples()[..6], &[0.0; 6]);
    assert_eq!(&shifted.samples()[6..], &[1.0; 3]);
}

#[test]
fn wrapped_translation_is_circular_shift() {
    let image = random_grid(6, 5, 9);
    let options = WarpOptions::new().border(Border::Wrap);
    let shifted = translate(&image, 4.0, -2.0, &options);
    assert_eq!(shifted, image.circular_shift(4, -2));
}

#[test]
fn wrapped_translation_keeps_magnitude_spectrum() {
    let image = Grid::from_fn(8, 6, |x, y| ((x * 3 + y * 5) % 7) as f64 * 30.0);
    let options = WarpOptions::new().border(Border::Wrap);
    let shifted = translate(&image, 3.0, 0.0, &options);

    let before = forward(TransformMethod::Fast, &image).unwrap().magnitude();
    let after = forward(TransformMethod::Fast, &shifted).unwrap().magnitude();
    assert_grids_close(&after, &before, 1e-9);
}

#[test]
fn half_pixel_translation_averages_neighbours() {
    let image = Grid::new(3, 1, vec![0.0, 10.0, 20.0]);
    let options = WarpOptions::new().border(Border::Constant(0.0));
    let shifted = translate(&image, 0.5, 0.0, &options);
    assert_eq!(shifted.samples(), &[0.0, 5.0, 15.0]);

    let nearest = translate(&image, 1.0, 0.0, &options.filter(FilterMode::Nearest));
    assert_eq!(nearest.samples(), &[0.0, 0.0, 10.0]);
}

#[test]
fn huge_and_infinite_offsets_leave_only_border() {
    let image = Grid::new_filled(3, 3, 1.0);
    let offsets = [1e300, -1e300, f64::INFINITY, f64::NEG_INFINITY];
    for filter in [FilterMode::Bilinear, FilterMode::Nearest] {
        let options = WarpOptions::new().filter(filter);
        for offset in offsets {
            for (tx, ty) in [(offset, 0.0), (0.0, offset), (offset, offset)] {
                let shifted = translate(&image, tx, ty, &options);
                assert!(
                    shifted.iter().all(|&v| v == WHITE),
                    "{} by ({}, {})",
                    filter,
                    tx,
                    ty
                );
            }
        }
    }
}

#[test]
fn huge_wrapped_offset_stays_in_range() {
    let image = Grid::from_fn(3, 3, |x, y| (y * 3 + x) as f64);
    let options = WarpOptions::new().border(Border::Wrap);
    let shifted = translate(&image, -1e300, 0.0, &options);
    assert!(shifted.iter().all(|&v| (0.0..9.0).contains(&v)));

    let shifted = translate(&image, f64::INFINITY, 0.0, &options);
    assert!(shifted.iter().all(|v| v.is_nan()));
}

// =============================================================================
// Rotation
// =============================================================================

#[test]
fn rotate_by_zero_is_exact_identity() {
    for (w, h) in [(1, 1), (4, 4), (7, 3), (3, 8)] {
        let image = random_grid(w, h, 17);
        for angle in [0.0, 360.0, -360.0, 720.0] {
            let rotated = rotate(&image, &Rotation::degrees(angle), &WarpOptions::default());
            assert_eq!(rotated.unwrap(), image, "{}x{} by {}", w, h, angle);
        }
    }
}

#[test]
fn rotate_keeps_dimensions() {
    for (w, h) in [(9, 5), (5, 9), (100, 10), (16, 16)] {
        let image = random_grid(w, h, 3);
        for angle in [15.0, 30.0, 45.0, 90.0, 135.0, 180.0, 270.0, 333.0, -45.0] {
            let rotated = rotate(&image, &Rotation::degrees(angle), &WarpOptions::default());
            assert_eq!(rotated.unwrap().dimensions(), (w, h));
        }
    }
}

#[test]
fn rotate_90_is_counter_clockwise() {
    let image = Grid::from_fn(5, 5, |x, y| (y * 5 + x) as f64);
    let rotated = rotate(&image, &Rotation::degrees(90.0), &WarpOptions::default()).unwrap();

    // dst(x, y) = src(4 - y, x): the top-right corner moves to the top-left.
    let expected = Grid::from_fn(5, 5, |x, y| image[(4 - y, x)]);
    assert_grids_close(&rotated, &expected, 1e-9);
}

#[test]
fn rotate_180_on_odd_grid_turns_samples() {
    let image = random_grid(7, 5, 23);
    let rotated = rotate(&image, &Rotation::degrees(180.0), &WarpOptions::default()).unwrap();
    assert_grids_close(&rotated, &image.rotated_180(), 1e-9);
}

#[test]
fn rotate_45_fills_corners_with_border() {
    let image = Grid::new_filled(9, 9, 100.0);
    let rotated = rotate(&image, &Rotation::degrees(45.0), &WarpOptions::default()).unwrap();

    assert!((rotated[(4, 4)] - 100.0).abs() < 1e-9);
    for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
        assert_eq!(rotated[(x, y)], WHITE);
    }
}

#[test]
fn rotate_with_scale_zooms_about_center() {
    let image = Grid::from_fn(5, 5, |x, y| (y * 5 + x) as f64);
    let rotation = Rotation::degrees(0.0).scale(2.0);
    let zoomed = rotate(&image, &rotation, &WarpOptions::default()).unwrap();

    // dst(x) = src(2 + (x - 2) / 2)
    assert_eq!(zoomed[(2, 2)], image[(2, 2)]);
    assert_eq!(zoomed[(4, 2)], image[(3, 2)]);
    assert_eq!(zoomed[(0, 0)], image[(1, 1)]);
}

#[test]
fn rotate_around_custom_center() {
    let image = Grid::from_fn(3, 3, |x, y| (y * 3 + x) as f64);
    let rotation = Rotation::degrees(180.0).around(DVec2::ZERO);
    let options = WarpOptions::new().filter(FilterMode::Nearest);
    let rotated = rotate(&image, &rotation, &options).unwrap();

    // The pivot (0, 0) lands on the canvas center (1, 1): dst(x, y) = src(1 - x, 1 - y).
    assert_eq!(rotated[(1, 1)], image[(0, 0)]);
    assert_eq!(rotated[(0, 0)], image[(1, 1)]);
    assert_eq!(rotated[(2, 2)], WHITE);
}

#[test]
fn rotate_rejects_invalid_scale() {
    let image = Grid::new_filled(2, 2, 0.0);
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let rotation = Rotation::degrees(10.0).scale(scale);
        let result = rotate(&image, &rotation, &WarpOptions::default());
        assert!(matches!(result, Err(Error::InvalidScale(_))));
    }
}

#[test]
fn canvas_size_holds_rotated_corners() {
    assert_eq!(rotated_canvas_size(10, 10, 0.0), (10, 10));
    assert_eq!(rotated_canvas_size(10, 10, 30.0), (13, 13));
    assert_eq!(rotated_canvas_size(4, 2, 90.0), (4, 4));
    assert_eq!(rotated_canvas_size(20, 10, 45.0), (21, 21));
    // Long thin images never shrink below the input.
    let (w, h) = rotated_canvas_size(100, 10, 45.0);
    assert!(w >= 100 && h >= 10);
}

#[test]
fn config_names_round_trip_through_display() {
    assert_eq!(FilterMode::Bilinear.to_string(), "bilinear");
    assert_eq!(Border::default(), Border::Constant(WHITE));
}

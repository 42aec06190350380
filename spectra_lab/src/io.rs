//! Loading grayscale images as sample grids.

use std::path::{Path, PathBuf};

use spectra::Grid;
use thiserror::Error;

/// Errors that can occur when loading the input image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load image '{path}': {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image '{path}' has no pixels")]
    Empty { path: PathBuf },
}

/// Reads any format `image` can decode and converts it to 8-bit luma promoted to `f64`.
pub fn load_grayscale(path: &Path) -> Result<Grid<f64>, LoadError> {
    let decoded = image::open(path).map_err(|source| LoadError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let luma = decoded.into_luma8();
    let (width, height) = (luma.width() as usize, luma.height() as usize);
    if width == 0 || height == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let samples = luma.into_raw().into_iter().map(f64::from).collect();
    Ok(Grid::new(width, height, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_utils::test_output_path;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn loads_gray_png_row_major() {
        let path = test_output_path("io_gray_3x2.png");
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(y * 3 + x) as u8 * 10]));
        img.save(&path).unwrap();

        let grid = load_grayscale(&path).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.samples(), &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn converts_colour_to_luma() {
        let path = test_output_path("io_rgb_white.png");
        RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let grid = load_grayscale(&path).unwrap();
        assert!(grid.iter().all(|&v| v == 255.0));
    }

    #[test]
    fn missing_file_is_load_error() {
        let result = load_grayscale(Path::new("/nonexistent/fingerprint.tif"));
        match result {
            Err(LoadError::Image { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/fingerprint.tif"))
            }
            other => panic!("expected LoadError::Image, got {:?}", other),
        }
    }

    #[test]
    fn undecodable_file_is_load_error() {
        let path = test_output_path("io_not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_grayscale(&path),
            Err(LoadError::Image { .. })
        ));
    }
}

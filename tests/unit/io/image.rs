//! Tests for the PNG outline preview

#[cfg(test)]
mod tests {
    use gradtile::AlgorithmError;
    use gradtile::io::image::{export_layout_as_png, preview_size, rasterize_outlines};
    use gradtile::spatial::{Canvas, GradientDirection, Tile};
    use tempfile::TempDir;

    const CANVAS: Canvas = Canvas {
        width: 2.0,
        height: 1.0,
    };

    // Tests the outline of the root tile
    // Verified by filling tiles instead of outlining them
    #[test]
    fn test_root_outline() {
        let labels =
            rasterize_outlines(&[CANVAS.root_tile()], &CANVAS, 20).unwrap_or_default();
        assert_eq!(labels.dim(), (10, 20));
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[9, 19]], 1);
        assert_eq!(labels[[0, 10]], 1);
        assert_eq!(labels[[5, 10]], 0);
    }

    // Tests later tiles draw over earlier ones
    // Verified by drawing in reverse order
    #[test]
    fn test_later_tiles_on_top() {
        let right = Tile {
            x: 1.0,
            width: 1.0,
            direction: GradientDirection::Left,
            ..CANVAS.root_tile()
        };
        let labels =
            rasterize_outlines(&[CANVAS.root_tile(), right], &CANVAS, 20).unwrap_or_default();
        assert_eq!(labels[[0, 19]], 4);
        assert_eq!(labels[[5, 10]], 4);
        assert_eq!(labels[[5, 0]], 1);
    }

    // Tests the written image size
    // Verified by swapping width and height
    #[test]
    fn test_export_png() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
        let path = dir.path().join("preview").join("layout.png");
        assert!(export_layout_as_png(&[CANVAS.root_tile()], &CANVAS, 64, &path).is_ok());
        assert_eq!(image::image_dimensions(&path).ok(), Some((64, 32)));
    }

    // Tests rejected inputs
    // Verified by accepting a zero width
    #[test]
    fn test_export_rejects_bad_input() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
        let path = dir.path().join("layout.png");

        let empty = export_layout_as_png(&[], &CANVAS, 64, &path);
        assert!(matches!(empty, Err(AlgorithmError::EmptyLayout)));

        let zero = export_layout_as_png(&[CANVAS.root_tile()], &CANVAS, 0, &path);
        assert!(matches!(
            zero,
            Err(AlgorithmError::InvalidParameter {
                parameter: "preview_width",
                ..
            })
        ));
        assert!(!path.exists());
    }

    // Tests a narrow canvas cannot scale the preview past its height limit
    // Verified by bounding only the requested width
    #[test]
    fn test_narrow_canvas_is_rejected() {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
        let path = dir.path().join("narrow.png");
        let narrow = Canvas::normalized(0.0001).unwrap_or(CANVAS);

        assert!(preview_size(&narrow, 8192).is_err());
        assert!(rasterize_outlines(&[narrow.root_tile()], &narrow, 1024).is_err());
        let result = export_layout_as_png(&[narrow.root_tile()], &narrow, 8192, &path);
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "preview_width",
                ..
            })
        ));
        assert!(!path.exists());
    }

    // Tests preview sizes follow the aspect ratio up to the limit
    // Verified by truncating the height instead of rounding it
    #[test]
    fn test_preview_size() {
        assert_eq!(preview_size(&CANVAS, 64).ok(), Some((64, 32)));
        let tall = Canvas::normalized(0.5).unwrap_or(CANVAS);
        assert_eq!(preview_size(&tall, 4096).ok(), Some((4096, 8192)));
        assert!(preview_size(&tall, 4097).is_err());
        let wide = Canvas::normalized(1e6).unwrap_or(CANVAS);
        assert_eq!(preview_size(&wide, 10).ok(), Some((10, 1)));
    }
}

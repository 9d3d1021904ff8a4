//! Tests for canvas construction and containment

#[cfg(test)]
mod tests {
    use gradtile::spatial::{Axis, Canvas, Tile};

    // Tests rejection of unusable dimensions
    // Verified by removing the positivity check
    #[test]
    fn test_new_rejects_degenerate_dimensions() {
        assert!(Canvas::new(0.0, 1.0).is_err());
        assert!(Canvas::new(1.0, -2.0).is_err());
        assert!(Canvas::new(f64::NAN, 1.0).is_err());
        assert!(Canvas::new(1.0, f64::INFINITY).is_err());
        assert!(Canvas::new(2.0, 1.0).is_ok());
    }

    // Tests aspect ratio normalization to unit height
    // Verified by swapping width and height
    #[test]
    fn test_normalized_has_unit_height() {
        let canvas = Canvas::normalized(1.5).unwrap_or(Canvas {
            width: 0.0,
            height: 0.0,
        });
        assert!((canvas.width - 1.5).abs() < f64::EPSILON);
        assert!((canvas.height - 1.0).abs() < f64::EPSILON);
        assert!((canvas.extent(Axis::Width) - 1.5).abs() < f64::EPSILON);
        assert!((canvas.area() - 1.5).abs() < f64::EPSILON);
    }

    // Tests the root tile spans the whole canvas at level 0
    // Verified by offsetting the root tile
    #[test]
    fn test_root_tile_covers_canvas() {
        let canvas = Canvas {
            width: 2.0,
            height: 1.0,
        };
        let root = canvas.root_tile();
        assert_eq!(root, Tile::root(2.0, 1.0));
        assert_eq!(root.level, 0);
        assert!(canvas.contains(&root, 0.0));
    }

    // Tests containment tolerance on every edge
    // Verified by dropping the tolerance term
    #[test]
    fn test_contains_respects_tolerance() {
        let canvas = Canvas {
            width: 1.0,
            height: 1.0,
        };
        let mut tile = Tile::root(1.0, 1.0);
        tile.x = 1e-9;
        assert!(canvas.contains(&tile, 1e-6));
        assert!(!canvas.contains(&tile, 0.0));

        tile.x = -0.1;
        assert!(!canvas.contains(&tile, 1e-6));

        let mut negative = Tile::root(1.0, 1.0);
        negative.height = -0.5;
        assert!(!canvas.contains(&negative, 1e-6));
    }
}

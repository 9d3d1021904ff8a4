//! Tests for release-before-rebuild of layer instance data

#[cfg(test)]
mod tests {
    use gradtile::algorithm::parameters::ParameterSet;
    use gradtile::algorithm::random::SeededRandom;
    use gradtile::mesh::layer::TileLayer;
    use gradtile::spatial::Canvas;

    const CANVAS: Canvas = Canvas {
        width: 1.5,
        height: 1.0,
    };

    // Tests a fresh layer holds nothing
    // Verified by building on construction
    #[test]
    fn test_new_layer_is_empty() {
        let layer = TileLayer::new(CANVAS);
        assert!(layer.buffer().is_none());
        assert!(layer.tiles().is_empty());
        assert_eq!(layer.build_count(), 0);
        assert_eq!(layer.canvas(), &CANVAS);
    }

    // Tests regeneration installs one instance per tile
    // Verified by keeping instances of the previous build
    #[test]
    fn test_regenerate_replaces_buffer() {
        let mut layer = TileLayer::new(CANVAS);
        let params = ParameterSet::default();

        let first = layer
            .regenerate(&params, &mut SeededRandom::new(1))
            .map(|buffer| buffer.len())
            .unwrap_or(0);
        assert_eq!(first, layer.tiles().len());

        let second = layer
            .regenerate(&params, &mut SeededRandom::new(2))
            .map(|buffer| buffer.len())
            .unwrap_or(0);
        assert_eq!(second, layer.tiles().len());
        assert_eq!(layer.buffer().map(|b| b.len()), Some(second));
        assert_eq!(layer.build_count(), 2);
    }

    // Tests rejected parameters still release the old layout
    // Verified by validating before releasing
    #[test]
    fn test_invalid_parameters_leave_layer_empty() {
        let mut layer = TileLayer::new(CANVAS);
        let good = ParameterSet::default();
        assert!(layer.regenerate(&good, &mut SeededRandom::new(3)).is_ok());
        assert!(layer.buffer().is_some());

        let bad = ParameterSet {
            thinnest_tile_size: -1.0,
            ..ParameterSet::default()
        };
        assert!(layer.regenerate(&bad, &mut SeededRandom::new(3)).is_err());
        assert!(layer.buffer().is_none());
        assert!(layer.tiles().is_empty());
        assert_eq!(layer.build_count(), 1);
    }

    // Tests rebuilding from caller tiles and explicit release
    // Verified by leaving tiles behind on release
    #[test]
    fn test_rebuild_and_release() {
        let mut layer = TileLayer::new(CANVAS);
        let tiles = vec![CANVAS.root_tile()];
        assert_eq!(layer.rebuild_from_tiles(tiles).len(), 1);
        assert_eq!(layer.tiles().len(), 1);

        layer.release();
        assert!(layer.buffer().is_none());
        assert!(layer.tiles().is_empty());
    }
}

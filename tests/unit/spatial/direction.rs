//! Tests for gradient direction tags and tagging helpers

#[cfg(test)]
mod tests {
    use gradtile::algorithm::random::ScriptedRandom;
    use gradtile::spatial::direction::{
        alternating, conform_to_extent, dominant_axis, random_along,
    };
    use gradtile::spatial::{Axis, GradientDirection};

    // Tests shader payload values
    // Verified by swapping the LEFT and RIGHT payloads
    #[test]
    fn test_payload_values() {
        assert!((GradientDirection::Up.payload() - 0.0).abs() < f32::EPSILON);
        assert!((GradientDirection::Down.payload() - 0.25).abs() < f32::EPSILON);
        assert!((GradientDirection::Right.payload() - 0.5).abs() < f32::EPSILON);
        assert!((GradientDirection::Left.payload() - 0.75).abs() < f32::EPSILON);
    }

    // Tests the index of every tag matches its position in ALL
    // Verified by reordering ALL
    #[test]
    fn test_index_matches_all_order() {
        for (position, direction) in GradientDirection::ALL.iter().enumerate() {
            assert_eq!(direction.index(), position);
        }
    }

    // Tests axis membership and pairs
    // Verified by mapping UP to the width axis
    #[test]
    fn test_axis_pairs() {
        assert_eq!(GradientDirection::Left.axis(), Axis::Width);
        assert_eq!(GradientDirection::Up.axis(), Axis::Height);
        assert_eq!(
            Axis::Width.directions(),
            (GradientDirection::Right, GradientDirection::Left)
        );
        assert_eq!(
            Axis::Height.directions(),
            (GradientDirection::Down, GradientDirection::Up)
        );
        assert_eq!(Axis::Width.other(), Axis::Height);
        assert_eq!(Axis::Height.other(), Axis::Width);
    }

    // Tests parity alternation
    // Verified by alternating on index / 2
    #[test]
    fn test_alternating_by_parity() {
        assert_eq!(alternating(Axis::Width, 0), GradientDirection::Right);
        assert_eq!(alternating(Axis::Width, 1), GradientDirection::Left);
        assert_eq!(alternating(Axis::Width, 4), GradientDirection::Right);
        assert_eq!(alternating(Axis::Height, 3), GradientDirection::Up);
    }

    // Tests squares count as tall
    // Verified by using >= in the comparison
    #[test]
    fn test_dominant_axis_square_is_tall() {
        assert_eq!(dominant_axis(2.0, 1.0), Axis::Width);
        assert_eq!(dominant_axis(1.0, 2.0), Axis::Height);
        assert_eq!(dominant_axis(1.0, 1.0), Axis::Height);
    }

    // Tests random tags stay on the requested axis
    // Verified by drawing from the wrong pair
    #[test]
    fn test_random_along_uses_scripted_pick() {
        let mut rng = ScriptedRandom::new().with_ints([1, 0]);
        assert_eq!(random_along(Axis::Width, &mut rng), GradientDirection::Left);
        assert_eq!(random_along(Axis::Height, &mut rng), GradientDirection::Down);
    }

    // Tests conflicting tags are redrawn along the dominant axis
    // Verified by keeping the inherited tag unconditionally
    #[test]
    fn test_conform_to_extent() {
        let mut rng = ScriptedRandom::new().with_ints([1, 1]);

        // Wide tile with a vertical tag gets a horizontal one
        let redrawn = conform_to_extent(GradientDirection::Up, 2.0, 1.0, &mut rng);
        assert_eq!(redrawn, GradientDirection::Left);

        // Tall tile with a horizontal tag gets a vertical one
        let redrawn = conform_to_extent(GradientDirection::Right, 1.0, 2.0, &mut rng);
        assert_eq!(redrawn, GradientDirection::Up);

        // Matching tags and squares keep what they have without drawing
        assert_eq!(
            conform_to_extent(GradientDirection::Right, 2.0, 1.0, &mut rng),
            GradientDirection::Right
        );
        assert_eq!(
            conform_to_extent(GradientDirection::Left, 1.0, 1.0, &mut rng),
            GradientDirection::Left
        );
        assert_eq!(rng.remaining(), 0);
    }
}

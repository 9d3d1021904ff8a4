//! Tests for seeded, scripted and recording random sources

#[cfg(test)]
mod tests {
    use gradtile::algorithm::random::{
        RandomSource, RecordingRandom, ScriptedRandom, SeededRandom,
    };

    fn draw_mix<R: RandomSource>(rng: &mut R) -> (bool, u32, Option<usize>, Vec<usize>) {
        let flag = rng.uniform_bool(0.5);
        let int = rng.uniform_int(2, 9);
        let index = rng.weighted_index(&[0.2, 0.0, 0.8]);
        let order = rng.permutation(4);
        (flag, int, index, order)
    }

    // Tests identical seeds yield identical draw sequences
    // Verified by seeding from the system clock
    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut first = SeededRandom::new(7);
        let mut second = SeededRandom::new(7);
        for _ in 0..50 {
            assert_eq!(draw_mix(&mut first), draw_mix(&mut second));
        }
    }

    // Tests seeded draws respect their ranges
    // Verified by using an inclusive upper bound
    #[test]
    fn test_seeded_random_ranges() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..500 {
            let value = rng.uniform_int(2, 5);
            assert!((2..5).contains(&value));
            let index = rng.weighted_index(&[0.0, 1.0, 0.0, 2.0]);
            assert!(matches!(index, Some(1 | 3)));
        }
        assert_eq!(rng.uniform_int(4, 4), 4);
        assert_eq!(rng.weighted_index(&[0.0, 0.0]), None);
        assert!(!rng.uniform_bool(0.0));
        assert!(rng.uniform_bool(1.0));
        assert!(rng.uniform_bool(7.0));
    }

    // Tests seeded permutations are permutations
    // Verified by returning a truncated order
    #[test]
    fn test_seeded_permutation_is_complete() {
        let mut rng = SeededRandom::new(11);
        let mut order = rng.permutation(6);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    // Tests scripted fallbacks once queues run dry
    // Verified by defaulting scripted bools to false
    #[test]
    fn test_scripted_fallbacks() {
        let mut rng = ScriptedRandom::new();
        assert!(rng.uniform_bool(0.1));
        assert_eq!(rng.uniform_int(3, 9), 3);
        assert_eq!(rng.weighted_index(&[0.5, 0.5]), Some(0));
        assert_eq!(rng.permutation(3), vec![0, 1, 2]);
    }

    // Tests scripted values are clamped and validated
    // Verified by returning scripted values unchecked
    #[test]
    fn test_scripted_values_are_sanitized() {
        let mut rng = ScriptedRandom::new()
            .with_ints([40, 0])
            .with_indices([9])
            .with_permutations([vec![0, 0, 1], vec![2, 0, 1]]);

        assert_eq!(rng.uniform_int(2, 5), 4);
        assert_eq!(rng.uniform_int(2, 5), 2);
        assert_eq!(rng.weighted_index(&[1.0, 1.0]), Some(1));
        assert_eq!(rng.permutation(3), vec![0, 1, 2]);
        assert_eq!(rng.permutation(3), vec![2, 0, 1]);
        assert_eq!(rng.remaining(), 0);
    }

    // Tests derived operations on top of the primitives
    // Verified by ignoring the drawn permutation in shuffle
    #[test]
    fn test_derived_operations() {
        let mut rng = ScriptedRandom::new()
            .with_indices([1])
            .with_permutations([vec![1, 0]])
            .with_ints([1]);

        let picked = rng.weighted_pick(&[(1.0, 'a'), (1.0, 'b')]);
        assert_eq!(picked, Some('b'));

        let mut items = [10, 20];
        rng.shuffle(&mut items);
        assert_eq!(items, [20, 10]);

        assert_eq!(rng.choose_pair(("first", "second")), "second");
        assert_eq!(rng.weighted_pick::<char>(&[]), None);
    }

    // Tests a recording replays the exact same draws
    // Verified by recording draws in reverse order
    #[test]
    fn test_recording_replays_identically() {
        let mut recorder = RecordingRandom::new(SeededRandom::new(99));
        let live: Vec<_> = (0..20).map(|_| draw_mix(&mut recorder)).collect();
        assert_eq!(recorder.draw_count(), 80);

        let mut replay = recorder.into_replay();
        let replayed: Vec<_> = (0..20).map(|_| draw_mix(&mut replay)).collect();
        assert_eq!(live, replayed);
        assert_eq!(replay.remaining(), 0);
    }
}

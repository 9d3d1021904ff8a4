//! Tests for batch progress counting

#[cfg(test)]
mod tests {
    use gradtile::io::progress::ProgressManager;

    // Tests generated and skipped layouts are counted apart
    // Verified by counting skips as generated
    #[test]
    fn test_counts() {
        let mut progress = ProgressManager::hidden(3);
        progress.complete_layout(1, 12);
        progress.skip_layout(2);
        progress.complete_layout(3, 40);
        progress.finish();

        assert_eq!(progress.generated(), 2);
        assert_eq!(progress.skipped(), 1);
    }

    // Tests a fresh manager starts at zero
    // Verified by starting the count at one
    #[test]
    fn test_starts_empty() {
        let progress = ProgressManager::new(5);
        assert_eq!(progress.generated(), 0);
        assert_eq!(progress.skipped(), 0);
    }
}

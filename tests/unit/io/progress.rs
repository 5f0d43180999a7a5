//! Tests for batch progress tracking and stage display

#[cfg(test)]
mod tests {
    use camoforge::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use camoforge::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    // Tests the full lifecycle of a single tracked file
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        pm.start_file(0, Path::new("photo.png"), 5);
        pm.update_stage(0, 1, "woodland");
        pm.update_stage(0, 2, "digital");
        pm.complete_file(0, Duration::from_millis(100));
        pm.finish();
    }

    // Tests the default construction matches the explicit constructor
    // Verified by diverging the default state
    #[test]
    fn test_progress_manager_default() {
        let mut pm1 = ProgressManager::new();
        let mut pm2 = ProgressManager::default();

        pm1.initialize(2);
        pm2.initialize(2);

        pm1.start_file(0, Path::new("a.png"), 4);
        pm2.start_file(0, Path::new("a.png"), 4);

        pm1.update_stage(0, 1, "tiger");
        pm2.update_stage(0, 1, "tiger");

        pm1.complete_file(0, Duration::from_millis(10));
        pm2.complete_file(0, Duration::from_millis(10));

        pm1.finish();
        pm2.finish();
    }

    // Tests per-file bars below the batching threshold
    // Verified by creating one bar too few
    #[test]
    fn test_individual_bars_under_limit() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS - 1;
        pm.initialize(file_count);

        for index in 0..file_count {
            pm.start_file(index, Path::new(&format!("file{index}.png")), 5);
            pm.update_stage(index, 1, "woodland");
            pm.complete_file(index, Duration::from_millis(20));
        }

        pm.finish();
    }

    // Tests batch mode activates for large file sets
    // Verified by disabling the batch bar
    #[test]
    fn test_batch_mode_over_limit() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS * 3;
        pm.initialize(file_count);

        for index in 0..file_count {
            pm.start_file(index, Path::new(&format!("file{index}.png")), 2);
            pm.update_stage(index, 1, "shadow");
            pm.complete_file(index, Duration::from_millis(5));
        }

        pm.finish();
    }

    // Tests stage updates for files beyond the allocated state window
    // Verified by removing the state resize
    #[test]
    fn test_out_of_order_file_indices() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        pm.start_file(2, Path::new("late.png"), 4);
        pm.update_stage(2, 1, "digital");
        pm.update_stage(0, 1, "digital");
        pm.complete_file(2, Duration::from_millis(1));
        pm.finish();
    }
}

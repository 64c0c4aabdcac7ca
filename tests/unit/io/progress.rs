//! Tests for tick progress bars across batch sizes

#[cfg(test)]
mod tests {
    use antpaint::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use antpaint::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a single file run through its whole lifecycle
    // Verified by indexing bars past the number created
    #[test]
    fn test_single_file_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_file(0, Path::new("single.png"), 100);
        for tick in (0..=100).step_by(25) {
            pm.update_tick(0, tick, 3);
        }
        pm.complete_file(0);
        pm.finish();
    }

    // Tests default construction behaves like new
    // Verified by creating bars eagerly in Default
    #[test]
    fn test_default() {
        let mut pm = ProgressManager::default();
        pm.initialize(0);
        pm.finish();
    }

    // Tests more files than bars switches to batch mode and recycles bars
    // Verified by creating one bar per file
    #[test]
    fn test_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(file_count);
        for index in 0..file_count {
            pm.start_file(index, Path::new(&format!("file{index}.png")), 10);
            pm.update_tick(index, 5, 10);
            pm.complete_file(index);
        }
        pm.finish();
    }

    // Tests updates for files that never started are ignored
    // Verified by growing state on every update
    #[test]
    fn test_unknown_file_updates() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        pm.update_tick(7, 3, 1);
        pm.complete_file(7);
        pm.start_file(1, Path::new("late.png"), 4);
        pm.finish();
    }
}

//! Tests for progress tracking across single and batch runs

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;
    use vectorizer::io::progress::{FileStage, ProgressManager};

    // Tests a small run walks a file through every stage
    // Verified by panicking on stage updates for unknown files
    #[test]
    fn test_individual_progress() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        assert_eq!(manager.file_count(), 2);

        manager.start_file(0, Path::new("images/a.png"));
        manager.update_stage(0, FileStage::Decomposing);
        manager.update_stage(0, FileStage::Writing);
        manager.complete_file(0, 12, Duration::from_millis(3));

        // Stage for a file never started is ignored
        manager.update_stage(7, FileStage::Writing);
        manager.finish();
    }

    // Tests a large run switches to batch mode without failing
    // Verified by creating a bar per file
    #[test]
    fn test_batch_progress() {
        let mut manager = ProgressManager::default();
        manager.initialize(20);

        for index in 0..20 {
            manager.start_file(index, Path::new("frame.png"));
            manager.complete_file(index, index, Duration::ZERO);
        }
        manager.finish();
        assert_eq!(manager.file_count(), 20);
    }

    // Tests stages compare by value including rectangle counts
    // Verified by deriving equality on the variant only
    #[test]
    fn test_stage_equality() {
        assert_eq!(FileStage::Done(3), FileStage::Done(3));
        assert_ne!(FileStage::Done(3), FileStage::Done(4));
        assert_ne!(FileStage::Loading, FileStage::Writing);
    }
}

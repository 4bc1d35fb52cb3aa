use intake_core::{WizardBuilder, WizardController};
use tempfile::TempDir;

/// Helper function to create a wizard backed by a state file in a temp dir.
pub fn create_test_wizard() -> (TempDir, WizardController) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let wizard = reopen_wizard(&temp_dir);
    (temp_dir, wizard)
}

/// Opens a fresh controller over the state file in `temp_dir`.
pub fn reopen_wizard(temp_dir: &TempDir) -> WizardController {
    WizardBuilder::new()
        .with_database_path(Some(temp_dir.path().join("intake.db")))
        .build()
        .expect("Failed to create wizard")
}

//! Wizard progress display.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::wizard::WizardController;

/// Per-step marker in the progress list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    /// The step the wizard is on
    Current,
    /// Passed via `advance()`
    Completed,
    /// Reachable but not completed
    Open,
    /// Not reachable yet
    Locked,
}

impl StepMarker {
    /// Icon and label, e.g. `✓ Done`.
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepMarker::Current => "➤ Current",
            StepMarker::Completed => "✓ Done",
            StepMarker::Open => "○ Open",
            StepMarker::Locked => "✗ Locked",
        }
    }
}

/// Markdown overview of every step, the completion percentage and when the
/// form was last saved.
pub struct WizardProgress<'a>(pub &'a WizardController);

impl WizardProgress<'_> {
    /// Marker for a step id.
    pub fn marker(&self, id: u32) -> StepMarker {
        let wizard = self.0;
        if wizard.current_step().id == id {
            StepMarker::Current
        } else if wizard.is_completed(id) {
            StepMarker::Completed
        } else if wizard.is_accessible(id) {
            StepMarker::Open
        } else {
            StepMarker::Locked
        }
    }
}

impl fmt::Display for WizardProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        writeln!(f, "# Notarization request ({}% complete)", wizard.progress_percent())?;
        writeln!(f)?;
        for step in wizard.registry().iter() {
            writeln!(f, "- {} {step}", self.marker(step.id).with_icon())?;
        }
        if let Some(saved) = wizard.last_saved() {
            writeln!(f)?;
            writeln!(f, "Last saved: {}", LocalDateTime(&saved))?;
        }
        Ok(())
    }
}

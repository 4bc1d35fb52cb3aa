//! Display of navigation and submission outcomes.

use std::fmt;

use crate::wizard::{AdvanceOutcome, GuardDecision};

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardDecision::Allow(step) => writeln!(f, "On step {step}."),
            GuardDecision::Redirect { step, route } => {
                writeln!(f, "Redirected to step {step} ({route}).")
            }
        }
    }
}

impl fmt::Display for AdvanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceOutcome::Moved { to, route } => writeln!(f, "Moved to step {to} ({route})."),
            AdvanceOutcome::Blocked(errors) => {
                writeln!(f, "Please fix the following before continuing:")?;
                writeln!(f)?;
                write!(f, "{errors}")
            }
            AdvanceOutcome::Submitted {
                response,
                destination,
            } => {
                match &response.submission_id {
                    Some(id) => writeln!(f, "Submitted! Your request number is {id}.")?,
                    None => writeln!(f, "Submitted!")?,
                }
                if response.account_created == Some(true) {
                    writeln!(f, "An account was created for you; check your email.")?;
                }
                writeln!(f, "Continue at {destination}")
            }
            AdvanceOutcome::SubmissionFailed(message) => {
                writeln!(f, "Submission failed: {message}")?;
                writeln!(f, "Your answers were kept; you can try again.")
            }
            AdvanceOutcome::Busy => writeln!(f, "A submission is already in progress."),
            AdvanceOutcome::Discarded => writeln!(f, "A stale submission result was ignored."),
        }
    }
}

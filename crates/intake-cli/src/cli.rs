//! Command handling for the intake CLI.
//!
//! Each invocation plays one UI turn: the last route is restored and run
//! through the access guard (the "mount"), the command performs its action
//! and the resulting route is saved for the next invocation.
//!
//! ```text
//! router.location → on_route_change → command → router.location
//! ```
//!
//! Argument wrappers convert into core types the same way throughout: clap
//! concerns stay here, validation stays in `intake_core`.

use anyhow::{Context, Result};
use clap::Args;
use intake_core::{
    display::{OperationStatus, WizardProgress},
    models::{DocumentEntry, PersonalInfoField, StepKind},
    AdvanceOutcome, FormStateStore, GuardDecision, WizardController,
};
use jiff::civil::{Date, Time};
use log::debug;

use crate::{args::Commands, profile::ProfileFile, renderer::TerminalRenderer};

/// Store key of the route the user was last on.
pub const ROUTER_LOCATION_KEY: &str = "router.location";

/// Set or clear the appointment
///
/// Any of date, time and timezone can be given on its own; fields left out
/// keep their current value.
#[derive(Args)]
pub struct BookArgs {
    /// Appointment date, e.g. 2026-11-03
    #[arg(long)]
    pub date: Option<Date>,
    /// Appointment time, e.g. 14:30
    #[arg(long)]
    pub time: Option<Time>,
    /// IANA timezone name, e.g. Europe/Berlin
    #[arg(long)]
    pub timezone: Option<String>,
    /// Clear the booked date and time
    #[arg(long, conflicts_with_all = ["date", "time"])]
    pub clear: bool,
}

/// Set a personal info field
#[derive(Args)]
pub struct SetFieldArgs {
    /// Field name, e.g. first-name, email, postal-code
    pub field: PersonalInfoField,
    /// New value; an empty string clears the field
    pub value: String,
}

pub struct Cli {
    wizard: WizardController,
    router: FormStateStore,
    renderer: TerminalRenderer,
    profile: Option<ProfileFile>,
    location: String,
}

impl Cli {
    pub fn new(
        wizard: WizardController,
        router: FormStateStore,
        renderer: TerminalRenderer,
        profile: Option<ProfileFile>,
    ) -> Self {
        let location = router.load(
            ROUTER_LOCATION_KEY,
            wizard.registry().first().route.clone(),
        );
        Self {
            wizard,
            router,
            renderer,
            profile,
            location,
        }
    }

    /// Runs one turn and saves where the user ended up.
    pub async fn run(mut self, command: Option<Commands>) -> Result<()> {
        let restored = self.location.clone();
        if let GuardDecision::Redirect { route, .. } = self.wizard.on_route_change(&restored) {
            debug!("Saved location '{restored}' is not reachable, mounting '{route}'");
        }
        self.location = self.wizard.current_step().route.clone();

        let result = self.dispatch(command.unwrap_or(Commands::Status)).await;
        self.router.save(ROUTER_LOCATION_KEY, &self.location);
        result
    }

    async fn dispatch(&mut self, command: Commands) -> Result<()> {
        use Commands::*;

        match command {
            Status => self.status(),
            Goto { route } => self.goto(&route).await,
            Next => self.next().await,
            Back => self.back().await,
            Jump { step } => self.jump(step).await,
            AddDocument { path } => {
                let entry = DocumentEntry::from_path(&path)
                    .with_context(|| format!("Cannot add {}", path.display()))?;
                let name = entry.name.clone();
                self.wizard.add_document(entry)?;
                self.report(OperationStatus::success(format!("Added {name}")))
            }
            RemoveDocument { index } => {
                let removed = index
                    .checked_sub(1)
                    .and_then(|i| self.wizard.remove_document(i));
                match removed {
                    Some(entry) => {
                        self.report(OperationStatus::success(format!("Removed {}", entry.name)))
                    }
                    None => self.report(OperationStatus::failure(format!(
                        "No document at position {index}"
                    ))),
                }
            }
            Select { id } => {
                self.wizard.select_service(&id)?;
                self.report(OperationStatus::success(format!("Selected {id}")))
            }
            Deselect { id } => {
                if self.wizard.deselect_service(&id) {
                    self.report(OperationStatus::success(format!("Deselected {id}")))
                } else {
                    self.report(OperationStatus::failure(format!("{id} was not selected")))
                }
            }
            Book(args) => self.book(args),
            Set(SetFieldArgs { field, value }) => {
                self.wizard.set_personal_field(field, value);
                self.report(OperationStatus::success(format!("Updated {}", field.label())))
            }
            Notes { text } => {
                self.wizard.set_notes(text);
                self.report(OperationStatus::success("Notes updated"))
            }
            Show => self.show(),
            Quote => self.renderer.render(&format!("## Quote\n\n{}", self.wizard.quote())),
            Catalog => self
                .renderer
                .render(&format!("## Services\n\n{}", self.wizard.catalog())),
            Reset => {
                self.wizard.reset();
                self.location = self.wizard.current_step().route.clone();
                self.report(OperationStatus::success("All progress discarded"))
            }
        }
    }

    fn status(&self) -> Result<()> {
        self.renderer
            .render(&WizardProgress(&self.wizard).to_string())
    }

    fn show(&self) -> Result<()> {
        self.renderer.render(&format!(
            "# {}\n\n{}\n## Quote\n\n{}",
            self.wizard.current_step(),
            self.wizard.get(),
            self.wizard.quote()
        ))
    }

    async fn goto(&mut self, route: &str) -> Result<()> {
        let decision = self.wizard.on_route_change(route);
        self.renderer.render(&decision.to_string())?;
        self.entered().await;
        self.status()
    }

    async fn next(&mut self) -> Result<()> {
        let outcome = self.wizard.advance().await;
        self.renderer.render(&outcome.to_string())?;
        match outcome {
            AdvanceOutcome::Submitted { destination, .. } => {
                self.location = destination;
                Ok(())
            }
            AdvanceOutcome::Moved { .. } => {
                self.entered().await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn back(&mut self) -> Result<()> {
        match self.wizard.retreat() {
            Some(_) => {
                self.entered().await;
                self.status()
            }
            None => self.report(OperationStatus::failure("Already on the first step")),
        }
    }

    async fn jump(&mut self, step: u32) -> Result<()> {
        match self.wizard.jump_to(step) {
            Some(_) => {
                self.entered().await;
                self.status()
            }
            None => self.report(OperationStatus::failure(format!(
                "Step {step} is not reachable yet"
            ))),
        }
    }

    fn book(&mut self, args: BookArgs) -> Result<()> {
        if args.clear {
            self.wizard.clear_appointment();
            return self.report(OperationStatus::success("Appointment cleared"));
        }
        self.wizard
            .book_appointment(args.date, args.time, args.timezone.as_deref())?;
        self.report(OperationStatus::success(format!(
            "Appointment: {}",
            intake_core::display::AppointmentSlot(&self.wizard.get().appointment)
        )))
    }

    /// Called after a navigation landed somewhere; mounts the new step.
    async fn entered(&mut self) {
        let step = self.wizard.current_step().clone();
        if step.route == self.location {
            return;
        }
        self.location = step.route;

        if step.kind == StepKind::PersonalInfo {
            if let Some(profile) = &self.profile {
                if self.wizard.prefetch_profile(profile).await {
                    debug!("Personal info pre-filled from profile");
                }
            }
        }
    }

    fn report(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }
}

#[cfg(test)]
mod tests {
    use intake_core::WizardBuilder;

    use super::*;

    fn test_cli() -> Cli {
        let wizard = WizardBuilder::new()
            .in_memory()
            .build()
            .expect("Failed to build wizard");
        Cli::new(
            wizard,
            FormStateStore::in_memory(),
            TerminalRenderer::new(false),
            None,
        )
    }

    #[test]
    fn test_fresh_cli_starts_on_first_route() {
        let cli = test_cli();
        assert_eq!(cli.location, "/documents");
    }

    #[tokio::test]
    async fn test_next_updates_location() {
        let mut cli = test_cli();
        cli.dispatch(Commands::Next).await.expect("next succeeds");
        assert_eq!(cli.location, "/choose-option");

        cli.dispatch(Commands::Back).await.expect("back succeeds");
        assert_eq!(cli.location, "/documents");
    }

    #[tokio::test]
    async fn test_goto_locked_route_stays_put() {
        let mut cli = test_cli();
        cli.dispatch(Commands::Goto {
            route: "/summary".to_string(),
        })
        .await
        .expect("goto succeeds");
        assert_eq!(cli.location, "/documents");
    }

    #[tokio::test]
    async fn test_unknown_service_is_an_error() {
        let mut cli = test_cli();
        let result = cli
            .dispatch(Commands::Select {
                id: "teleport".to_string(),
            })
            .await;
        assert!(result.is_err());
    }
}

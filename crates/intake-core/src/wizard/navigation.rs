//! Step transitions and the route access guard.

use log::{debug, info};

use super::{FrontierPolicy, WizardController};
use crate::{
    models::SubmissionResponse,
    validation::{self, FieldErrors},
};

/// Result of running the access guard against a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The route may be shown; the wizard is now on this step.
    Allow(u32),

    /// The route is not reachable (or is the bare root); the router must
    /// navigate to `route` instead.
    Redirect { step: u32, route: String },
}

impl GuardDecision {
    /// The step the wizard ends up on.
    pub fn step(&self) -> u32 {
        match self {
            GuardDecision::Allow(step) => *step,
            GuardDecision::Redirect { step, .. } => *step,
        }
    }
}

/// Result of `advance()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The current step was completed and the wizard moved on.
    Moved { to: u32, route: String },

    /// Validation failed; nothing changed.
    Blocked(FieldErrors),

    /// The terminal submission succeeded; state was cleared and the router
    /// must leave the wizard for `destination`.
    Submitted {
        response: SubmissionResponse,
        destination: String,
    },

    /// The terminal submission failed; state is intact and the wizard stays
    /// on the terminal step so the user can retry.
    SubmissionFailed(String),

    /// A submission is already pending.
    Busy,

    /// A submission resolved after it was abandoned; its result was ignored.
    Discarded,
}

impl WizardController {
    /// Whether step `id` may be visited given the completed set.
    pub fn is_accessible(&self, id: u32) -> bool {
        if self.registry.step(id).is_none() {
            return false;
        }
        if id == self.registry.first().id {
            return true;
        }
        match self.frontier_policy {
            FrontierPolicy::Highest => self.completed.contains(id - 1),
            FrontierPolicy::Contiguous => id <= self.completed.contiguous_prefix() + 1,
        }
    }

    /// The furthest step the guard sends a user to.
    pub fn frontier(&self) -> u32 {
        let next = match self.frontier_policy {
            FrontierPolicy::Highest => self.completed.max().map_or(1, |max| max.saturating_add(1)),
            FrontierPolicy::Contiguous => self.completed.contiguous_prefix() + 1,
        };
        next.clamp(self.registry.first().id, self.registry.last().id)
    }

    /// Evaluates the guard for `path` without changing state.
    ///
    /// The bare root and paths outside the wizard redirect to step 1. A step
    /// that is not accessible redirects to the [`frontier`](Self::frontier);
    /// when the frontier is that same step the route is allowed, so the
    /// guard never redirects a route onto itself.
    pub fn check_access(&self, path: &str) -> GuardDecision {
        let Some(step) = self.registry.find_route(path) else {
            let first = self.registry.first();
            return GuardDecision::Redirect {
                step: first.id,
                route: first.route.clone(),
            };
        };

        if self.is_accessible(step.id) {
            return GuardDecision::Allow(step.id);
        }

        let frontier = self.frontier();
        if frontier == step.id {
            return GuardDecision::Allow(step.id);
        }
        let target = self
            .registry
            .step(frontier)
            .unwrap_or_else(|| self.registry.first());
        GuardDecision::Redirect {
            step: target.id,
            route: target.route.clone(),
        }
    }

    /// Runs the access guard for a committed route change and moves the
    /// wizard to the resulting step. Idempotent for unchanged state.
    pub fn on_route_change(&mut self, path: &str) -> GuardDecision {
        let decision = self.check_access(path);
        if let GuardDecision::Redirect { route, .. } = &decision {
            debug!("Route '{path}' not reachable, redirecting to '{route}'");
        }
        self.current = decision.step();
        decision
    }

    /// Completes the current step and moves forward, or submits on the last
    /// step.
    pub async fn advance(&mut self) -> AdvanceOutcome {
        let step = self.current_step().clone();

        let errors = validation::validate_step(step.kind, &self.payload);
        if !errors.is_empty() {
            debug!("Advance from '{}' blocked by {} field error(s)", step.route, errors.len());
            return AdvanceOutcome::Blocked(errors);
        }

        if self.registry.is_last(step.id) {
            if self.pending.is_some() {
                return AdvanceOutcome::Busy;
            }
            self.completed.insert(step.id);
            self.persist();
            return self.submit().await;
        }

        self.completed.insert(step.id);
        self.persist();

        let next = self
            .registry
            .step_after(step.id)
            .cloned()
            .unwrap_or_else(|| step.clone());
        info!("Completed step {} ({}), moving to {}", step.id, step.name, next.route);
        self.current = next.id;
        AdvanceOutcome::Moved {
            to: next.id,
            route: next.route,
        }
    }

    /// Moves to the previous step, if any. Completed steps stay completed.
    /// Returns the new route, or `None` on the first step.
    pub fn retreat(&mut self) -> Option<String> {
        let previous = self.registry.step_before(self.current)?;
        self.current = previous.id;
        Some(previous.route.clone())
    }

    /// Jumps to `target` if it is reachable. A denied jump is a silent no-op
    /// and returns `None`.
    pub fn jump_to(&mut self, target: u32) -> Option<String> {
        if !self.is_accessible(target) {
            debug!("Jump to step {target} denied");
            return None;
        }
        let route = self.registry.step(target)?.route.clone();
        self.current = target;
        self.persist();
        Some(route)
    }
}

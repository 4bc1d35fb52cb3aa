//! The fixed, ordered catalog of wizard steps.

use crate::models::{Step, StepKind};

/// Ordered, immutable list of wizard steps with lookups by route and id.
///
/// Ids are 1-based and dense: the step at index `i` has id `i + 1`. The
/// registry always holds at least one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    /// Builds a registry from `(name, route, kind)` triples, assigning ids in
    /// order. Returns `None` for an empty list or duplicate routes.
    pub fn from_steps<I, N, R>(steps: I) -> Option<Self>
    where
        I: IntoIterator<Item = (N, R, StepKind)>,
        N: Into<String>,
        R: Into<String>,
    {
        let steps: Vec<Step> = steps
            .into_iter()
            .zip(1u32..)
            .map(|((name, route, kind), id)| {
                let route: String = route.into();
                Step::new(id, name, normalize(&route), kind)
            })
            .collect();

        if steps.is_empty() {
            return None;
        }
        let mut routes: Vec<&str> = steps.iter().map(|s| s.route.as_str()).collect();
        routes.sort_unstable();
        routes.dedup();
        if routes.len() != steps.len() {
            return None;
        }
        Some(Self { steps })
    }

    /// Resolves a route to its step. Unmatched paths resolve to step 1.
    pub fn resolve_step_for_route(&self, path: &str) -> &Step {
        self.find_route(path).unwrap_or_else(|| self.first())
    }

    /// Exact route lookup without the step-1 fallback.
    pub fn find_route(&self, path: &str) -> Option<&Step> {
        let path = normalize(path);
        self.steps.iter().find(|s| s.route == path)
    }

    /// The step following `id`, or `None` if `id` is the last step.
    pub fn step_after(&self, id: u32) -> Option<&Step> {
        id.checked_add(1).and_then(|next| self.step(next))
    }

    /// The step preceding `id`, or `None` if `id` is the first step.
    pub fn step_before(&self, id: u32) -> Option<&Step> {
        id.checked_sub(1).and_then(|prev| self.step(prev))
    }

    /// Looks up a step by id.
    pub fn step(&self, id: u32) -> Option<&Step> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn is_last(&self, id: u32) -> bool {
        self.last().id == id
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

impl Default for StepRegistry {
    /// The five-step notarization intake flow.
    fn default() -> Self {
        Self {
            steps: vec![
                Step::new(1, "Documents", "/documents", StepKind::Documents),
                Step::new(2, "Choose option", "/choose-option", StepKind::ChooseOption),
                Step::new(3, "Book appointment", "/book-appointment", StepKind::BookAppointment),
                Step::new(4, "Personal info", "/personal-info", StepKind::PersonalInfo),
                Step::new(5, "Summary", "/summary", StepKind::Summary),
            ],
        }
    }
}

/// Strips a trailing slash (except for the root itself) and any query or
/// fragment.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = StepRegistry::default();
        let routes: Vec<&str> = registry.iter().map(|s| s.route.as_str()).collect();
        assert_eq!(
            routes,
            [
                "/documents",
                "/choose-option",
                "/book-appointment",
                "/personal-info",
                "/summary"
            ]
        );
        assert!(registry.iter().zip(1u32..).all(|(s, id)| s.id == id));
    }

    #[test]
    fn test_resolve_step_for_route() {
        let registry = StepRegistry::default();
        assert_eq!(registry.resolve_step_for_route("/book-appointment").id, 3);
        assert_eq!(registry.resolve_step_for_route("/summary/").id, 5);
        assert_eq!(registry.resolve_step_for_route("/personal-info?ref=mail").id, 4);
    }

    #[test]
    fn test_unmatched_route_defaults_to_first_step() {
        let registry = StepRegistry::default();
        assert_eq!(registry.resolve_step_for_route("/").id, 1);
        assert_eq!(registry.resolve_step_for_route("/blog/post").id, 1);
        assert!(registry.find_route("/").is_none());
    }

    #[test]
    fn test_step_after_and_before() {
        let registry = StepRegistry::default();
        assert_eq!(registry.step_after(1).map(|s| s.id), Some(2));
        assert!(registry.step_after(5).is_none());
        assert_eq!(registry.step_before(5).map(|s| s.id), Some(4));
        assert!(registry.step_before(1).is_none());
        assert!(registry.step_before(0).is_none());
        assert!(registry.step_after(u32::MAX).is_none());
    }

    #[test]
    fn test_from_steps_rejects_empty_and_duplicates() {
        let empty: Vec<(&str, &str, StepKind)> = vec![];
        assert!(StepRegistry::from_steps(empty).is_none());

        let duplicate = vec![
            ("A", "/a", StepKind::Documents),
            ("B", "/a/", StepKind::Summary),
        ];
        assert!(StepRegistry::from_steps(duplicate).is_none());

        let custom = StepRegistry::from_steps(vec![
            ("Upload", "upload", StepKind::Documents),
            ("Review", "/review", StepKind::Summary),
        ])
        .expect("valid registry");
        assert_eq!(custom.first().route, "/upload");
        assert!(custom.is_last(2));
    }
}

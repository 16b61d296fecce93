//! Outcome of a name-collision check, and of a create guarded by one.
use crate::model::Resource;

pub const NAME_IN_USE: &str = "Name in use";
pub const WOULD_OVERRIDE: &str = "Resource would override another resource";

/// Verdict of [`ResourceRegistry::check_name_collision`](super::ResourceRegistry::check_name_collision).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionResult {
    /// The name is free everywhere it matters.
    Clear,
    /// The name is already used in the same source. Creating it would be ambiguous.
    Error(String),
    /// A less specific source already uses the name; the new resource would shadow it.
    Warning(String),
}

impl CollisionResult {
    pub fn name_in_use() -> Self {
        CollisionResult::Error(NAME_IN_USE.to_string())
    }

    pub fn would_override() -> Self {
        CollisionResult::Warning(WOULD_OVERRIDE.to_string())
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, CollisionResult::Clear)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, CollisionResult::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CollisionResult::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CollisionResult::Clear => None,
            CollisionResult::Error(message) | CollisionResult::Warning(message) => Some(message),
        }
    }
}

/// What to do when a new name would shadow a resource in a less specific scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverridePolicy {
    /// Create anyway and report the warning.
    #[default]
    Allow,
    /// Refuse, leaving the caller to pick another name.
    Deny,
}

impl OverridePolicy {
    /// Whether a create may go ahead after `verdict`.
    pub fn permits(self, verdict: &CollisionResult) -> bool {
        match verdict {
            CollisionResult::Clear => true,
            CollisionResult::Warning(_) => self == OverridePolicy::Allow,
            CollisionResult::Error(_) => false,
        }
    }
}

/// Result of a collision-checked create.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The resource was created. `warning` holds the override message, if any.
    Created {
        resource: Resource,
        warning: Option<String>,
    },
    /// Nothing was created; the collision check said no.
    Rejected(CollisionResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_permits() {
        let clear = CollisionResult::Clear;
        let warning = CollisionResult::would_override();
        let error = CollisionResult::name_in_use();

        assert!(OverridePolicy::Allow.permits(&clear));
        assert!(OverridePolicy::Deny.permits(&clear));
        assert!(OverridePolicy::Allow.permits(&warning));
        assert!(!OverridePolicy::Deny.permits(&warning));
        assert!(!OverridePolicy::Allow.permits(&error));
        assert_eq!(warning.message(), Some(WOULD_OVERRIDE));
    }
}

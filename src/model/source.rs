//! Resource sources and their specificity ranking.
use super::target::{Target, TargetRef};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// The kind of scope a [`ResourceSource`] represents.
///
/// Kinds are ranked by specificity. Shadowing and collision checks walk
/// [`SourceKind::BY_PRIORITY`] (most specific first); listings use the reverse,
/// [`SourceKind::BY_LISTING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    System,
    Application,
    SharedDictionary,
    Document,
    Object,
}

impl SourceKind {
    pub const BY_PRIORITY: [SourceKind; 5] = [
        SourceKind::Object,
        SourceKind::Document,
        SourceKind::SharedDictionary,
        SourceKind::Application,
        SourceKind::System,
    ];

    pub const BY_LISTING: [SourceKind; 5] = [
        SourceKind::System,
        SourceKind::Application,
        SourceKind::SharedDictionary,
        SourceKind::Document,
        SourceKind::Object,
    ];

    /// Position in [`SourceKind::BY_PRIORITY`]; lower is more specific.
    pub fn priority(self) -> usize {
        match self {
            SourceKind::Object => 0,
            SourceKind::Document => 1,
            SourceKind::SharedDictionary => 2,
            SourceKind::Application => 3,
            SourceKind::System => 4,
        }
    }

    /// Position in [`SourceKind::BY_LISTING`].
    pub fn listing_rank(self) -> usize {
        Self::BY_PRIORITY.len() - 1 - self.priority()
    }

    /// Every kind strictly less specific than `self`, nearest first.
    pub fn less_specific(self) -> &'static [SourceKind] {
        &Self::BY_PRIORITY[self.priority() + 1..]
    }
}

/// Origin scope of a resource.
///
/// Scope sources are identified by kind and name. Object sources are identified by kind and
/// the identity of their owning target; their name is only for display.
#[derive(Debug, Clone)]
pub struct ResourceSource {
    name: String,
    kind: SourceKind,
    owner: Option<TargetRef>,
}

impl ResourceSource {
    fn scope(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            owner: None,
        }
    }

    pub fn system(name: impl Into<String>) -> Self {
        Self::scope(name, SourceKind::System)
    }

    pub fn application(name: impl Into<String>) -> Self {
        Self::scope(name, SourceKind::Application)
    }

    pub fn shared_dictionary(name: impl Into<String>) -> Self {
        Self::scope(name, SourceKind::SharedDictionary)
    }

    pub fn document(name: impl Into<String>) -> Self {
        Self::scope(name, SourceKind::Document)
    }

    /// The source holding resources private to `target`, named after its type.
    pub fn for_target(target: &Target) -> Self {
        Self {
            name: target.type_name().to_string(),
            kind: SourceKind::Object,
            owner: Some(target.downgrade()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The owning target for object sources.
    pub fn owner(&self) -> Option<&TargetRef> {
        self.owner.as_ref()
    }

    /// Scope sources are visible to everyone; object sources only to their owner.
    pub fn is_visible_to(&self, target: &Target) -> bool {
        match &self.owner {
            Some(owner) => owner.refers_to(target),
            None => true,
        }
    }
}

impl PartialEq for ResourceSource {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match (&self.owner, &other.owner) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}

impl Eq for ResourceSource {}

impl Hash for ResourceSource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        match &self.owner {
            Some(owner) => owner.hash(state),
            None => self.name.hash(state),
        }
    }
}

impl Display for ResourceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_reverse_priority() {
        let mut reversed = SourceKind::BY_PRIORITY;
        reversed.reverse();
        assert_eq!(reversed, SourceKind::BY_LISTING);
        for (rank, kind) in SourceKind::BY_LISTING.iter().enumerate() {
            assert_eq!(kind.listing_rank(), rank);
        }
    }

    #[test]
    fn test_less_specific_kinds() {
        assert_eq!(
            SourceKind::Application.less_specific(),
            &[SourceKind::System]
        );
        assert_eq!(
            SourceKind::Object.less_specific(),
            &[
                SourceKind::Document,
                SourceKind::SharedDictionary,
                SourceKind::Application,
                SourceKind::System
            ]
        );
        assert!(SourceKind::System.less_specific().is_empty());
    }

    #[test]
    fn test_object_source_equality_is_by_owner() {
        let button = Target::new("Button");
        let other = Target::new("Button");
        assert_eq!(
            ResourceSource::for_target(&button),
            ResourceSource::for_target(&button)
        );
        assert_ne!(
            ResourceSource::for_target(&button),
            ResourceSource::for_target(&other)
        );
    }

    #[test]
    fn test_scope_source_equality_is_by_kind_and_name() {
        assert_eq!(ResourceSource::system("A"), ResourceSource::system("A"));
        assert_ne!(ResourceSource::system("A"), ResourceSource::application("A"));
        assert_ne!(ResourceSource::document("A"), ResourceSource::document("B"));
    }
}

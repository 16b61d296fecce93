//! The synchronous resource store.
//!
//! [`ResourceRegistry`] holds every resource grouped by source and answers the visibility,
//! assignability and collision questions. It has no internal locking: it is owned by the
//! [`RegistryActor`](crate::framework::RegistryActor), which serializes access.
use super::collision::{CollisionResult, CreateOutcome, OverridePolicy};
use super::error::RegistryError;
use super::seed;
use crate::model::{
    PropertyInfo, Resource, ResourceSource, ResourceValue, SourceKind, Target, ValueType,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Resources indexed by source, with shadow-aware queries.
///
/// # Ordering
///
/// Listings are grouped by source kind from least to most specific
/// (System, Application, SharedDictionary, Document, Object). Sources of the same kind keep
/// the order in which they were first registered, and resources keep their insertion order
/// within a source. Collision checks walk the same ranking in the opposite direction.
#[derive(Debug)]
pub struct ResourceRegistry {
    groups: HashMap<ResourceSource, Vec<Resource>>,
    registration: Vec<ResourceSource>,
    system: ResourceSource,
    application: ResourceSource,
    shared_dictionary: ResourceSource,
    document: ResourceSource,
    can_create: bool,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    /// A registry with the four built-in scope sources and no resources.
    pub fn new() -> Self {
        let system = ResourceSource::system(seed::SYSTEM_SOURCE_NAME);
        let application = ResourceSource::application(seed::APPLICATION_SOURCE_NAME);
        let shared_dictionary =
            ResourceSource::shared_dictionary(seed::SHARED_DICTIONARY_SOURCE_NAME);
        let document = ResourceSource::document(seed::DOCUMENT_SOURCE_NAME);

        let mut registry = Self {
            groups: HashMap::new(),
            registration: Vec::new(),
            system: system.clone(),
            application: application.clone(),
            shared_dictionary: shared_dictionary.clone(),
            document: document.clone(),
            can_create: true,
        };
        for source in [system, application, shared_dictionary, document] {
            registry.register(source);
        }
        registry
    }

    /// A registry populated with the built-in system and application resources.
    pub fn with_builtin_seed() -> Self {
        let mut registry = Self::new();
        let resources = seed::builtin_resources(&registry.system, &registry.application);
        registry.seed(resources);
        registry
    }

    /// A registry populated with exactly `resources`.
    pub fn seeded(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut registry = Self::new();
        registry.seed(resources);
        registry
    }

    /// Appends seed resources. Unlike [`create_resource`](Self::create_resource) this ignores
    /// the creation switch: seeds are configuration, not user edits.
    pub fn seed(&mut self, resources: impl IntoIterator<Item = Resource>) {
        for resource in resources {
            self.append(resource);
        }
    }

    pub fn system_source(&self) -> &ResourceSource {
        &self.system
    }

    pub fn application_source(&self) -> &ResourceSource {
        &self.application
    }

    pub fn shared_dictionary_source(&self) -> &ResourceSource {
        &self.shared_dictionary
    }

    pub fn document_source(&self) -> &ResourceSource {
        &self.document
    }

    pub fn can_create_resources(&self) -> bool {
        self.can_create
    }

    pub fn set_can_create_resources(&mut self, enabled: bool) {
        self.can_create = enabled;
    }

    /// Total number of resources across all sources.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source_count(&self) -> usize {
        self.registration.len()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The sources a resource for `target` may be created in, least specific first.
    pub fn list_sources(&self, target: &Target) -> Vec<ResourceSource> {
        vec![
            self.system.clone(),
            self.application.clone(),
            self.shared_dictionary.clone(),
            self.document.clone(),
            ResourceSource::for_target(target),
        ]
    }

    /// Sources offered when editing `property`. Untyped properties are rejected.
    pub fn list_sources_for_property(
        &self,
        target: &Target,
        property: &PropertyInfo,
    ) -> Result<Vec<ResourceSource>, RegistryError> {
        property.require_type()?;
        Ok(self.list_sources(target))
    }

    /// Every resource visible to `target`.
    ///
    /// Resources private to other objects are skipped.
    pub fn resources_for_target(&self, target: &Target) -> Vec<Resource> {
        self.visible(target).cloned().collect()
    }

    /// Resources visible to `target` whose type is assignable to `property`'s declared type.
    pub fn resources_for_property(
        &self,
        target: &Target,
        property: &PropertyInfo,
    ) -> Result<Vec<Resource>, RegistryError> {
        let declared = property.require_type()?;
        Ok(self
            .visible(target)
            .filter(|resource| declared.is_assignable_from(resource.value_type()))
            .cloned()
            .collect())
    }

    /// Checks whether `name` can be created in `source` without ambiguity.
    ///
    /// Returns [`CollisionResult::Error`] when `source` already holds `name`, and
    /// [`CollisionResult::Warning`] when any less specific source does. The verdict depends
    /// only on `source`; `target` is the object being edited and is recorded in the trace.
    pub fn check_name_collision(
        &self,
        target: &Target,
        source: &ResourceSource,
        name: &str,
    ) -> Result<CollisionResult, RegistryError> {
        validate_name(name)?;
        validate_owner(source)?;

        let in_source = self
            .groups
            .get(source)
            .is_some_and(|group| group.iter().any(|r| r.name() == name));
        if in_source {
            debug!(%target, %source, name, "Name in use");
            return Ok(CollisionResult::name_in_use());
        }

        for kind in source.kind().less_specific() {
            if let Some(shadowed) = self.resources_of_kind(*kind).find(|r| r.name() == name) {
                debug!(%target, %source, name, shadowed = %shadowed.source(), "Would override");
                return Ok(CollisionResult::would_override());
            }
        }

        Ok(CollisionResult::Clear)
    }

    /// First of `base1`, `base2`, ... not used by an application resource.
    pub fn suggest_name(&self, base: &str) -> Result<String, RegistryError> {
        validate_name(base)?;
        let taken: HashSet<&str> = self
            .groups
            .get(&self.application)
            .map(|group| group.iter().map(Resource::name).collect())
            .unwrap_or_default();

        let mut index: usize = 1;
        loop {
            let candidate = format!("{base}{index}");
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
            index += 1;
        }
    }

    pub fn suggest_name_for_type(&self, ty: ValueType) -> Result<String, RegistryError> {
        self.suggest_name(ty.name())
    }

    pub fn suggest_name_for_property(
        &self,
        property: &PropertyInfo,
    ) -> Result<String, RegistryError> {
        self.suggest_name_for_type(property.require_type()?)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Appends a new resource to `source`, registering the source on first use.
    ///
    /// Uniqueness is the caller's responsibility: run
    /// [`check_name_collision`](Self::check_name_collision) first, or go through
    /// [`ResourceProvider::create_checked`](crate::clients::ResourceProvider::create_checked).
    pub fn create_resource(
        &mut self,
        source: ResourceSource,
        name: impl Into<String>,
        value: impl Into<ResourceValue>,
    ) -> Result<Resource, RegistryError> {
        if !self.can_create {
            return Err(RegistryError::InvalidArgument(
                "resource creation is disabled for this registry".to_string(),
            ));
        }
        let name = name.into();
        validate_name(&name)?;
        validate_owner(&source)?;

        let resource = Resource::new(source, name, value);
        self.append(resource.clone());
        Ok(resource)
    }

    /// Runs the collision check and creates only if `policy` permits the verdict.
    ///
    /// Same-scope collisions are always rejected. Override warnings are rejected under
    /// [`OverridePolicy::Deny`] and reported alongside the created resource otherwise.
    pub fn create_checked(
        &mut self,
        target: &Target,
        source: ResourceSource,
        name: impl Into<String>,
        value: impl Into<ResourceValue>,
        policy: OverridePolicy,
    ) -> Result<CreateOutcome, RegistryError> {
        let name = name.into();
        let verdict = self.check_name_collision(target, &source, &name)?;
        if !policy.permits(&verdict) {
            debug!(%source, %name, ?verdict, ?policy, "Refusing to create");
            return Ok(CreateOutcome::Rejected(verdict));
        }

        let resource = self.create_resource(source, name, value)?;
        let warning = verdict.message().map(str::to_string);
        Ok(CreateOutcome::Created { resource, warning })
    }

    /// Drops object sources whose target is gone, with their resources.
    ///
    /// Returns how many sources were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.registration.len();
        self.registration.retain(is_reachable);
        self.groups.retain(|source, _| is_reachable(source));
        before - self.registration.len()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn register(&mut self, source: ResourceSource) -> &mut Vec<Resource> {
        if !self.groups.contains_key(&source) {
            self.registration.push(source.clone());
        }
        self.groups.entry(source).or_default()
    }

    fn append(&mut self, resource: Resource) {
        self.register(resource.source().clone()).push(resource);
    }

    fn group(&self, source: &ResourceSource) -> impl Iterator<Item = &Resource> {
        self.groups.get(source).into_iter().flatten()
    }

    fn listing_order(&self) -> Vec<&ResourceSource> {
        let mut sources: Vec<&ResourceSource> = self.registration.iter().collect();
        sources.sort_by_key(|source| source.kind().listing_rank());
        sources
    }

    fn visible<'a>(&'a self, target: &'a Target) -> impl Iterator<Item = &'a Resource> + 'a {
        self.listing_order()
            .into_iter()
            .filter(move |source| source.is_visible_to(target))
            .flat_map(move |source| self.group(source))
    }

    fn resources_of_kind(&self, kind: SourceKind) -> impl Iterator<Item = &Resource> {
        self.registration
            .iter()
            .filter(move |source| source.kind() == kind)
            .flat_map(move |source| self.group(source))
    }
}

fn is_reachable(source: &ResourceSource) -> bool {
    source.owner().map_or(true, |owner| owner.is_alive())
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::InvalidArgument(
            "resource name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_owner(source: &ResourceSource) -> Result<(), RegistryError> {
    match source.owner() {
        Some(owner) if !owner.is_alive() => Err(RegistryError::InvalidArgument(format!(
            "target of source '{}' is no longer reachable",
            source
        ))),
        _ => Ok(()),
    }
}

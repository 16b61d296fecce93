//! # Mock Registry & Testing Guide
//!
//! The [`MockClient`] hands out a real [`RegistryClient`] whose requests are answered from a
//! queue of expectations instead of a running registry. It lets you test code built *on top
//! of* the client (a [`ResourceProvider`](crate::clients::ResourceProvider) flow, an
//! inspector) fast and deterministically.
//!
//! ## When to use Mocks vs the Real Actor
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real registry |
//! | **Use Case** | Logic *around* the client | The registry itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Pattern 0: Client Logic Test (Pure Mock)
//!
//! ```rust
//! use resource_registry::framework::mock::MockClient;
//! use resource_registry::registry::CollisionResult;
//! use resource_registry::model::{ResourceSource, Target};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::new();
//!     mock.expect_check_name().return_ok(CollisionResult::would_override());
//!
//!     let client = mock.client();
//!     let verdict = client
//!         .check_name_collision(
//!             Target::new("Button"),
//!             ResourceSource::application("App"),
//!             "Accent",
//!         )
//!         .await
//!         .unwrap();
//!     assert!(verdict.is_warning());
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use resource_registry::framework::mock::MockClient;
//! use resource_registry::framework::FrameworkError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::new();
//!     mock.expect_suggest_name().return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().suggest_name("Color").await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or the fluent
//! [`MockClient`] API.

use super::client::RegistryClient;
use super::error::FrameworkError;
use super::events::RegistryEvent;
use super::message::{RegistryRequest, Response};
use crate::model::{Resource, ResourceSource, ResourceValue, Target};
use crate::registry::{CollisionResult, CreateOutcome, OverridePolicy};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation {
    ListSources(Result<Vec<ResourceSource>, FrameworkError>),
    ResourcesForTarget(Result<Vec<Resource>, FrameworkError>),
    ResourcesForProperty(Result<Vec<Resource>, FrameworkError>),
    CheckName(Result<CollisionResult, FrameworkError>),
    Create(Result<Resource, FrameworkError>),
    CreateChecked(Result<CreateOutcome, FrameworkError>),
    Prune(Result<usize, FrameworkError>),
    SuggestName(Result<String, FrameworkError>),
    CanCreate(Result<bool, FrameworkError>),
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock registry with expectation tracking for fluent testing.
///
/// Expectations are consumed in order; a request that does not match the next expectation
/// panics the mock task, which surfaces in the test as [`FrameworkError::ActorDropped`].
/// `SuggestName` expectations answer both `suggest_name` and `suggest_name_for_type`.
pub struct MockClient {
    client: RegistryClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest>(100);
        let (events, _) = broadcast::channel::<RegistryEvent>(16);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        RegistryRequest::ListSources { respond_to, .. },
                        Some(Expectation::ListSources(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::ResourcesForTarget { respond_to, .. },
                        Some(Expectation::ResourcesForTarget(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::ResourcesForProperty { respond_to, .. },
                        Some(Expectation::ResourcesForProperty(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::CheckName { respond_to, .. },
                        Some(Expectation::CheckName(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::CreateChecked { respond_to, .. },
                        Some(Expectation::CreateChecked(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Prune { respond_to },
                        Some(Expectation::Prune(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::SuggestName { respond_to, .. }
                        | RegistryRequest::SuggestNameForType { respond_to, .. },
                        Some(Expectation::SuggestName(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::CanCreate { respond_to },
                        Some(Expectation::CanCreate(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: RegistryClient::new(sender, events),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RegistryClient {
        self.client.clone()
    }

    fn expect<T>(
        &mut self,
        wrap: fn(Result<T, FrameworkError>) -> Expectation,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list_sources(&mut self) -> ExpectationBuilder<Vec<ResourceSource>> {
        self.expect(Expectation::ListSources)
    }

    pub fn expect_resources_for_target(&mut self) -> ExpectationBuilder<Vec<Resource>> {
        self.expect(Expectation::ResourcesForTarget)
    }

    pub fn expect_resources_for_property(&mut self) -> ExpectationBuilder<Vec<Resource>> {
        self.expect(Expectation::ResourcesForProperty)
    }

    pub fn expect_check_name(&mut self) -> ExpectationBuilder<CollisionResult> {
        self.expect(Expectation::CheckName)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<Resource> {
        self.expect(Expectation::Create)
    }

    pub fn expect_create_checked(&mut self) -> ExpectationBuilder<CreateOutcome> {
        self.expect(Expectation::CreateChecked)
    }

    pub fn expect_prune(&mut self) -> ExpectationBuilder<usize> {
        self.expect(Expectation::Prune)
    }

    pub fn expect_suggest_name(&mut self) -> ExpectationBuilder<String> {
        self.expect(Expectation::SuggestName)
    }

    pub fn expect_can_create(&mut self) -> ExpectationBuilder<bool> {
        self.expect(Expectation::CanCreate)
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T> {
    wrap: fn(Result<T, FrameworkError>) -> Expectation,
    expectations: Expectations,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to inspect the request payloads themselves. Pair it with the
/// `expect_*` helpers below and answer through the returned responder.
pub fn create_mock_client(
    buffer_size: usize,
) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (events, _) = broadcast::channel(16);
    (RegistryClient::new(sender, events), receiver)
}

/// Helper to verify that the next message is a `Create` request.
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(ResourceSource, String, ResourceValue, Response<Resource>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Create {
            source,
            name,
            value,
            respond_to,
        }) => Some((source, name, value, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a `CheckName` request.
pub async fn expect_check_name(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(Target, ResourceSource, String, Response<CollisionResult>)> {
    match receiver.recv().await {
        Some(RegistryRequest::CheckName {
            target,
            source,
            name,
            respond_to,
        }) => Some((target, source, name, respond_to)),
        _ => None,
    }
}

/// A `CreateChecked` request taken apart.
pub type CreateCheckedRequest = (
    Target,
    ResourceSource,
    String,
    ResourceValue,
    OverridePolicy,
    Response<CreateOutcome>,
);

/// Helper to verify that the next message is a `CreateChecked` request.
pub async fn expect_create_checked(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<CreateCheckedRequest> {
    match receiver.recv().await {
        Some(RegistryRequest::CreateChecked {
            target,
            source,
            name,
            value,
            policy,
            respond_to,
        }) => Some((target, source, name, value, policy, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, SolidBrush, ValueType};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);
        let source = ResourceSource::application("App resources");

        let create_task = tokio::spawn({
            let source = source.clone();
            async move {
                client
                    .create_resource(source, "Accent", SolidBrush::rgb(1, 2, 3))
                    .await
            }
        });

        let (got_source, name, value, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(got_source, source);
        assert_eq!(name, "Accent");
        assert_eq!(value.value_type(), ValueType::SolidBrush);
        responder
            .send(Ok(Resource::new(got_source, name, value)))
            .unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.name(), "Accent");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::new();
        let source = ResourceSource::application("App resources");
        let accent = Resource::new(source.clone(), "Color1", Color::rgb(0, 120, 215));
        mock.expect_can_create().return_ok(true);
        mock.expect_suggest_name().return_ok("Color1".to_string());
        mock.expect_create().return_ok(accent.clone());

        let client = mock.client();
        assert!(client.can_create_resources().await.unwrap());
        assert_eq!(
            client.suggest_name_for_type(ValueType::Color).await.unwrap(),
            "Color1"
        );
        let created = client
            .create_resource(source, "Color1", Color::rgb(0, 120, 215))
            .await
            .unwrap();
        assert_eq!(created, accent);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_the_mock() {
        let mut mock = MockClient::new();
        mock.expect_can_create().return_ok(true);

        let result = mock.client().suggest_name("Color").await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
    }
}

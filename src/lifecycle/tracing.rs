//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! The module path is hidden (`with_target(false)`); the structured fields carry the context.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the number of sources and resources, shutdown with the
//!   final size
//! - **Creates**: every accepted resource at `info`, rejected ones at `warn`
//! - **Queries**: listings, name checks and suggestions at `debug`
//! - **Checked creates**: a `create_checked` span around the check and the create
//!
//! ## Usage Examples
//!
//! ```bash
//! # Creates and lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every request, with payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor
//! RUST_LOG=resource_registry::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a checked create in the demo reads:
//!
//! ```text
//! DEBUG CheckName source=App resources name="HighlightBrush" verdict=Warning("Resource would override another resource")
//! DEBUG create_checked: Create source=App resources name="HighlightBrush" value=SolidBrush(..)
//! INFO create_checked: Created source=App resources name="HighlightBrush" size=16
//! INFO create_checked: Created checked resource overrides=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

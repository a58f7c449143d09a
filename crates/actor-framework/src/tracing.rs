//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The framework logs with structured fields rather than formatted strings:
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with the repository size
//! - **Operations**: `Create`, `Get`, `Update`, `Delete` at `debug`, outcomes at `info`/`warn`
//! - **Pipelines**: each failing stage at `debug` with `stage` and `error` fields
//!
//! ```bash
//! RUST_LOG=info cargo run      # outcomes only
//! RUST_LOG=debug cargo run     # payloads and failing stages
//! RUST_LOG=trace cargo run     # every passing stage too
//! ```
//!
//! With `RUST_LOG=info` a create followed by a rejected update reads:
//!
//! ```text
//! INFO Created entity_type="Order" id="order_1" size=1
//! WARN Update failed entity_type="Order" id="order_1" error=A delivered order cannot be changed
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling it again after a subscriber is installed is a no-op, so tests and binaries can
/// both call it.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already names the source
        .compact()
        .try_init();
}

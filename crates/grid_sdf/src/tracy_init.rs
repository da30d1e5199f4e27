//! Tracy profiler initialization.

use tracing_subscriber::prelude::*;
use tracing_tracy::TracyLayer;

/// Initialize Tracy profiling.
///
/// Call this once before generating fields. Seeding, propagation and
/// finalization each record a span; connect the Tracy profiler to see them.
pub fn init_tracy() {
  tracing_subscriber::registry()
    .with(TracyLayer::default())
    .init();
}

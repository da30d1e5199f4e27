//! Hooks into the seeding and propagation loop.

/// Receives events from the wavefront as it runs.
///
/// All methods default to no-ops; `()` is the observer used when none is
/// supplied. Indices are linear cell indices and distances are unscaled, in
/// cell units.
pub trait FrontierObserver {
  /// A surface cell was queued with its initial distance.
  fn on_seed(&mut self, _index: usize, _distance: f32) {}

  /// A cell was frozen at `distance`. Called in pop order.
  fn on_freeze(&mut self, _index: usize, _distance: f32) {}

  /// A popped candidate was discarded because its cell was already frozen.
  fn on_stale(&mut self, _index: usize, _distance: f32) {}
}

impl FrontierObserver for () {}

impl<O: FrontierObserver + ?Sized> FrontierObserver for &mut O {
  fn on_seed(&mut self, index: usize, distance: f32) {
    (**self).on_seed(index, distance);
  }

  fn on_freeze(&mut self, index: usize, distance: f32) {
    (**self).on_freeze(index, distance);
  }

  fn on_stale(&mut self, index: usize, distance: f32) {
    (**self).on_stale(index, distance);
  }
}

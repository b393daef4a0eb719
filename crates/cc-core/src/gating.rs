//! One-shot latch deciding when an ad slot may initialize.
//!
//! Each slot instance owns its own latch. It fires at most once, only in
//! production builds and only once user content is on screen.

#[derive(Debug, Default)]
pub struct AdSlotLatch {
    fired: bool,
}

impl AdSlotLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once: on the first call where content is
    /// present in a production build.
    pub fn try_fire(&mut self, has_content: bool, production: bool) -> bool {
        if self.fired || !has_content || !production {
            return false;
        }
        self.fired = true;
        #[cfg(feature = "tracing")]
        tracing::debug!("ad slot latch fired");
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

//! The video subsystem seam and its teardown guard.

use tracing::info;

use crate::error::InitResult;

/// A process-wide video subsystem with global setup and teardown.
pub trait VideoSubsystem {
    /// Initialize the video subsystem.
    fn init(&mut self) -> InitResult<()>;

    /// Shut the subsystem down.
    fn quit(&mut self);
}

/// Holds an initialized subsystem and calls [`VideoSubsystem::quit`] on drop.
///
/// A guard only exists after a successful `init`, so a failed init never
/// reaches teardown.
#[must_use = "dropping the guard shuts the subsystem down immediately"]
pub struct InitGuard<'a, S: VideoSubsystem + ?Sized> {
    subsystem: &'a mut S,
}

impl<'a, S: VideoSubsystem + ?Sized> InitGuard<'a, S> {
    /// Initialize `subsystem`, returning a guard that owns its teardown.
    pub fn acquire(subsystem: &'a mut S) -> InitResult<Self> {
        subsystem.init()?;
        info!("video subsystem initialized");
        Ok(Self { subsystem })
    }
}

impl<S: VideoSubsystem + ?Sized> Drop for InitGuard<'_, S> {
    fn drop(&mut self) {
        self.subsystem.quit();
        info!("video subsystem shut down");
    }
}

pub mod spin_mutex;

pub use spin_mutex::{SpinMutex, SpinMutexGuard};

/// Plain compare-and-swap spin lock. Used to serialize whole console calls
/// across harts.
pub type SpinLock<T> = SpinMutex<T, Spin>;

/// Hooks run around the critical section of a [`SpinMutex`].
///
/// `GuardData` lives for as long as the lock is held, so an implementation can
/// stash state in `before_lock` and restore it in `after_unlock`.
pub trait MutexSupport {
    type GuardData;
    /// Runs before the first acquisition attempt.
    fn before_lock() -> Self::GuardData;
    /// Runs after the lock has been released.
    fn after_unlock(_: &mut Self::GuardData);
}

/// No hooks: the lock only spins.
#[derive(Debug)]
pub struct Spin;

impl MutexSupport for Spin {
    type GuardData = ();
    #[inline(always)]
    fn before_lock() -> Self::GuardData {}
    #[inline(always)]
    fn after_unlock(_: &mut Self::GuardData) {}
}

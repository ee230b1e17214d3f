use core::{
    cell::UnsafeCell,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

use super::MutexSupport;

/// Spins this many times on a held lock before declaring a deadlock.
const DEADLOCK_SPINS: usize = 0x1000_0000;

/// `SpinMutex` can include different `MutexSupport` type
#[derive(Debug)]
pub struct SpinMutex<T: ?Sized, S: MutexSupport> {
    lock: AtomicBool,
    _marker: PhantomData<S>,
    data: UnsafeCell<T>,
}

/// Releases the lock it was created from when dropped.
pub struct SpinMutexGuard<'a, T: ?Sized, S: MutexSupport> {
    mutex: &'a SpinMutex<T, S>,
    support_guard: S::GuardData,
}

unsafe impl<T: ?Sized + Send, S: MutexSupport> Sync for SpinMutex<T, S> {}
unsafe impl<T: ?Sized + Send, S: MutexSupport> Send for SpinMutex<T, S> {}

impl<T, S: MutexSupport> SpinMutex<T, S> {
    pub const fn new(user_data: T) -> Self {
        SpinMutex {
            lock: AtomicBool::new(false),
            _marker: PhantomData,
            data: UnsafeCell::new(user_data),
        }
    }
}

impl<T: ?Sized, S: MutexSupport> SpinMutex<T, S> {
    /// Wait until the lock looks unlocked before retrying
    #[inline(always)]
    fn wait_unlock(&self) {
        let mut try_count = 0usize;
        while self.lock.load(Ordering::Relaxed) {
            core::hint::spin_loop();
            try_count += 1;
            if try_count == DEADLOCK_SPINS {
                panic!("SpinMutex: deadlock detected! try_count > {:#x}", try_count);
            }
        }
    }

    #[inline(always)]
    fn acquire(&self) -> bool {
        self.lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Spin until the lock is ours.
    #[inline(always)]
    pub fn lock(&self) -> SpinMutexGuard<'_, T, S> {
        let support_guard = S::before_lock();
        loop {
            self.wait_unlock();
            if self.acquire() {
                break;
            }
        }
        SpinMutexGuard {
            mutex: self,
            support_guard,
        }
    }

}

impl<T: ?Sized, S: MutexSupport> Deref for SpinMutexGuard<'_, T, S> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T: ?Sized, S: MutexSupport> DerefMut for SpinMutexGuard<'_, T, S> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.mutex.data.get() }
    }
}

impl<T: ?Sized, S: MutexSupport> Drop for SpinMutexGuard<'_, T, S> {
    #[inline(always)]
    fn drop(&mut self) {
        self.mutex.lock.store(false, Ordering::Release);
        S::after_unlock(&mut self.support_guard);
    }
}

//! A minimal spinlock used internally to serialize access to the free list.
//!
//! Two implementations exist behind the same interface, selected at compile
//! time by whether a byte-sized atomic is lock-free on the target:
//!
//! - **Fast path** (`target_has_atomic = "8"`): a test-and-test-and-set
//!   loop. The flag is polled with a plain acquire load first, and the
//!   acquire compare-exchange is only attempted once the load suggests the
//!   lock is free. This avoids every waiting core hammering the cache line
//!   that backs the flag with exclusive-state requests.
//! - **Fallback path**: a plain test-and-set loop. No pre-check, since on
//!   these targets polling buys nothing over attempting the exchange
//!   directly.
//!
//! The choice never leaks through [`RawLock`]'s API.

use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) struct RawLock(AtomicBool);

impl RawLock {
  pub(crate) const fn new() -> Self {
    Self(AtomicBool::new(false))
  }

  #[cfg(target_has_atomic = "8")]
  pub(crate) fn acquire(
    &self,
  ) {
    loop {
      if !self.0.load(Ordering::Acquire)
        && self
          .0
          .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
          .is_ok()
      {
        return;
      }
      std::hint::spin_loop();
    }
  }

  #[cfg(not(target_has_atomic = "8"))]
  pub(crate) fn acquire(
    &self,
  ) {
    while self.0.swap(true, Ordering::Acquire) {
      std::hint::spin_loop();
    }
  }

  pub(crate) fn release(
    &self,
  ) {
    self.0.store(false, Ordering::Release);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;
  use std::sync::atomic::AtomicUsize;
  use std::thread;

  #[test]
  fn excludes_concurrent_critical_sections() {
    let lock = Arc::new(RawLock::new());
    let counter = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::new();

    for _ in 0..8 {
      let lock = Arc::clone(&lock);
      let counter = Arc::clone(&counter);
      handles.push(thread::spawn(move || {
        for _ in 0..1000 {
          lock.acquire();
          let before = counter.load(Ordering::Relaxed);
          counter.store(before + 1, Ordering::Relaxed);
          lock.release();
        }
      }));
    }

    for handle in handles {
      handle.join().unwrap();
    }

    assert_eq!(counter.load(Ordering::Relaxed), 8000);
  }

  #[test]
  fn lock_then_release_allows_reacquisition() {
    let lock = RawLock::new();
    lock.acquire();
    lock.release();
    lock.acquire();
    lock.release();
  }
}

//! Shared traversal counters: directories processed and concurrency slots.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Number of directories whose children have been scheduled.
///
/// Written by walker tasks, read by whoever renders progress.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    directories: AtomicU64,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.directories.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.directories.load(Ordering::Relaxed)
    }
}

/// Fixed number of slots for concurrently running walker tasks.
///
/// Acquisition never waits: either a slot is free right now or the caller
/// does the work itself.
#[derive(Debug)]
pub struct SlotPool {
    capacity: usize,
    in_use: AtomicUsize,
    peak: AtomicUsize,
}

impl SlotPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            in_use: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Take a slot if one is free. The slot is returned when the guard drops.
    pub fn try_acquire(&self) -> Option<SlotGuard<'_>> {
        let mut current = self.in_use.load(Ordering::Acquire);
        loop {
            if current >= self.capacity {
                return None;
            }
            match self.in_use.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    self.peak.fetch_max(current + 1, Ordering::AcqRel);
                    return Some(SlotGuard { pool: self });
                }
                Err(actual) => current = actual,
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::Acquire)
    }

    /// Highest number of slots ever held at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Acquire)
    }
}

/// A held slot of a [`SlotPool`].
#[derive(Debug)]
pub struct SlotGuard<'a> {
    pool: &'a SlotPool,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.pool.in_use.fetch_sub(1, Ordering::AcqRel);
    }
}

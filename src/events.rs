//! Module: events
//!
//! Purpose: Edge event transport between interrupt context and the main
//! loop. The edge ISR timestamps button transitions and pushes them here;
//! the main loop drains them into the edge timer.
//!
//! Architecture:
//! - Lock-free SPSC ring buffer (power-of-two capacity)
//! - Push never blocks: drops the edge and counts it if the ring is full
//! - Single producer (ISR), single consumer (main loop), atomic indices
//!
//! Safety: `UnsafeCell` slots, coordinated through atomic read/write
//! indices. Safe under the single-producer/single-consumer rule.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

/// Default queue size. Edges arrive at human keying speed; 64 is plenty.
pub const DEFAULT_QUEUE_SIZE: usize = 64;

/// Button edge direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Falling edge: button pressed.
    Press,
    /// Rising edge: button released.
    Release,
}

/// One timestamped button edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub kind: EdgeKind,
    /// Monotonic millisecond timestamp from the edge source.
    pub at_ms: i64,
}

impl Edge {
    pub const fn press(at_ms: i64) -> Self {
        Self {
            kind: EdgeKind::Press,
            at_ms,
        }
    }

    pub const fn release(at_ms: i64) -> Self {
        Self {
            kind: EdgeKind::Release,
            at_ms,
        }
    }
}

/// Lock-free SPSC ring of button edges.
///
/// # Memory Ordering
///
/// - Producer stores the slot, then publishes with `Release` on `write_idx`
/// - Consumer loads `write_idx` with `Acquire` before reading the slot
pub struct EdgeQueue<const N: usize = DEFAULT_QUEUE_SIZE> {
    slots: UnsafeCell<[Edge; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: Single producer (ISR), single consumer (main loop), all
// coordination through atomic indices. No mutable aliasing possible
// within that rule.
unsafe impl<const N: usize> Sync for EdgeQueue<N> {}
unsafe impl<const N: usize> Send for EdgeQueue<N> {}

impl<const N: usize> EdgeQueue<N> {
    const MASK: usize = N - 1;

    /// Create a new empty queue.
    ///
    /// # Panics
    ///
    /// Panics at compile time if N is not a power of 2.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Queue size must be power of 2");

        Self {
            slots: UnsafeCell::new([Edge::press(0); N]),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push an edge (ISR-safe, never blocks).
    ///
    /// Returns `false` if the ring was full and the edge was dropped.
    #[inline]
    pub fn push(&self, edge: Edge) -> bool {
        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);

        if write.wrapping_sub(read) >= N as u32 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        // SAFETY: Single producer; this slot is not visible to the
        // consumer until write_idx is published below.
        unsafe {
            (*self.slots.get())[(write as usize) & Self::MASK] = edge;
        }

        self.write_idx.store(write.wrapping_add(1), Ordering::Release);
        true
    }

    /// Pop the next edge, oldest first.
    #[inline]
    pub fn pop(&self) -> Option<Edge> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        // SAFETY: Single consumer, index below the published write head.
        let edge = unsafe { (*self.slots.get())[(read as usize) & Self::MASK] };

        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(edge)
    }

    /// Number of edges waiting.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }

    /// Count of edges dropped because the ring was full.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<const N: usize> Default for EdgeQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let queue = EdgeQueue::<8>::new();

        assert!(queue.push(Edge::press(10)));
        assert!(queue.push(Edge::release(120)));

        assert_eq!(queue.pop(), Some(Edge::press(10)));
        assert_eq!(queue.pop(), Some(Edge::release(120)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_full_queue_drops() {
        let queue = EdgeQueue::<4>::new();

        for t in 0..4 {
            assert!(queue.push(Edge::press(t)));
        }
        assert!(!queue.push(Edge::press(99)));
        assert_eq!(queue.dropped(), 1);

        // Draining one makes room again.
        queue.pop();
        assert!(queue.push(Edge::press(100)));
    }

    #[test]
    fn test_pending() {
        let queue = EdgeQueue::<8>::new();
        assert_eq!(queue.pending(), 0);
        queue.push(Edge::press(0));
        queue.push(Edge::release(50));
        assert_eq!(queue.pending(), 2);
        queue.pop();
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_indices_wrap() {
        let queue = EdgeQueue::<4>::new();
        for round in 0..20 {
            assert!(queue.push(Edge::press(round)));
            assert_eq!(queue.pop(), Some(Edge::press(round)));
        }
    }
}

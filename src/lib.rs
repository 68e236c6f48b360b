//! # poolalloc - A Pool Memory Allocator
//!
//! This crate provides a general-purpose **pool allocator**: it manages one
//! or more caller-supplied contiguous memory regions and serves variable-
//! sized allocation, free, and reallocation requests out of them.
//!
//! ## Overview
//!
//! Free memory is tracked as an intrusive, circular, singly linked list of
//! blocks kept in ascending address order:
//!
//! ```text
//!   Pool Allocator Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      SEEDED REGION(S)                                │
//!   │                                                                      │
//!   │   ┌─────┬───────────┬─────┬──────────────────┬─────┬───────────────┐ │
//!   │   │ A1  │ free block│ A2  │   free block     │ A3  │  free block   │ │
//!   │   └─────┴───────────┴─────┴──────────────────┴─────┴───────────────┘ │
//!   │                ▲                                                    │
//!   │              cursor (next-fit search start)                         │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Freeing A2 coalesces it with its free-list neighbors if their
//!   addresses touch. Allocation splits a matched block from its
//!   high-address end, so the free list's existing links never need
//!   rewiring.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   poolalloc
//!   ├── align      - Alignment offset primitive
//!   ├── block      - Block header layout (internal)
//!   ├── lock       - Spinlock used to guard the free list (internal)
//!   └── pool       - PoolAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use poolalloc::PoolAllocator;
//!
//! let pool = PoolAllocator::new();
//!
//! let mut backing = [0u8; 4096];
//!
//! unsafe {
//!     pool.add(backing.as_mut_ptr(), backing.len());
//!
//!     let ptr = pool.alloc(64) as *mut u8;
//!     assert!(!ptr.is_null());
//!
//!     *ptr = 42;
//!     assert_eq!(*ptr, 42);
//!
//!     pool.free(ptr);
//! }
//! ```
//!
//! ## How It Works
//!
//! Every block, free or live, is prefixed by a fixed-size header sized and
//! aligned to a "unit", a multiple of the platform's strictest scalar
//! alignment, so any unit-aligned header always yields a unit-aligned
//! payload immediately after it.
//!
//! `alloc` walks the free ring using **next-fit**: search resumes from the
//! cursor left by the previous operation rather than always starting at
//! the head, and a matched block is split from its tail so the low-address
//! remainder keeps its existing position in the list. `free` walks the
//! ring to find where the freed block belongs in address order and
//! coalesces it with either or both address-adjacent neighbors.
//!
//! ## Features
//!
//! - **Reuse**: freed blocks are coalesced and made available to later
//!   allocations, unlike a bump allocator.
//! - **Caller-owned memory**: the allocator never calls into the OS; all
//!   backing memory is supplied via [`PoolAllocator::add`].
//! - **Thread safety**: a spinlock serializes the five mutating operations
//!   and the block-iteration hook; [`PoolAllocator::allocsz`] is lock-free.
//! - **Fixed alignment**: every allocation is aligned to the platform's
//!   widest common scalar type; there is no per-request alignment control.
//!
//! ## Limitations
//!
//! - **Policy is next-fit**, not best-fit: fragmentation is not optimized.
//! - **No hardened security mitigations**: no canaries, no double-free
//!   detection. Misuse of the five operations is undefined behavior.
//! - **No alignment requests larger than the platform's maximum-aligned
//!   scalar type.**
//!
//! ## Safety
//!
//! This crate is inherently unsafe as it deals with raw memory management.
//! Every operation that touches caller memory is `unsafe`.

pub mod align;
mod block;
mod lock;
mod pool;

pub use pool::PoolAllocator;

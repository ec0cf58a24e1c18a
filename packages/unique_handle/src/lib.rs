//! A move-only ownership wrapper for raw resource handles.
//!
//! This crate provides [`UniqueHandle`], a generic owner for a single resource
//! identified by an opaque scalar value - a file descriptor, an OS handle, a
//! slot index. The resource's semantics are supplied by a caller-defined
//! policy type implementing [`HandleKind`] (and optionally [`AcquireHandle`]),
//! which fixes the value type, the null sentinel and the destroy operation at
//! compile time.
//!
//! The wrapper guarantees that the destroy operation runs exactly once per
//! owned resource, no matter how control leaves the owning scope, and makes
//! duplicated ownership unrepresentable: the type cannot be copied or cloned,
//! only moved.
//!
//! # Key Features
//!
//! - **Exactly-once cleanup**: destruction runs at the earliest of explicit
//!   [`reset()`](UniqueHandle::reset), explicit handoff via
//!   [`release()`](UniqueHandle::release), or end of scope - and never twice
//! - **Move-only ownership**: no [`Copy`], no [`Clone`]; transfer is a move
//! - **Pluggable policies**: value type, sentinel, destroy and acquire
//!   operations are bound at compile time with zero runtime indirection
//! - **Value-identity adapters**: equality, ordering, hashing and formatting
//!   delegate to the held value
//! - **Fallible acquisition**: the [`UniqueHandle::acquire()`] factory
//!   passes the policy's error through without partial construction
//!
//! # Example
//!
//! ```rust
//! use unique_handle::{AcquireHandle, HandleKind, UniqueHandle};
//!
//! /// Handles to slots in some external table.
//! struct SlotKind;
//!
//! impl HandleKind for SlotKind {
//!     type Raw = u32;
//!     const NULL: Self::Raw = u32::MAX;
//!
//!     fn destroy(_raw: u32) {
//!         // Return the slot to its allocator here.
//!     }
//! }
//!
//! impl AcquireHandle<u32> for SlotKind {
//!     type Error = std::convert::Infallible;
//!
//!     fn acquire(slot: u32) -> Result<u32, Self::Error> {
//!         // Claim the slot from the allocator here.
//!         Ok(slot)
//!     }
//! }
//!
//! fn main() -> Result<(), std::convert::Infallible> {
//!     let mut handle = UniqueHandle::<SlotKind>::acquire(7)?;
//!     assert_eq!(handle.get(), 7);
//!
//!     // Adopting a new slot destroys the old one, exactly once.
//!     handle.reset_to(8);
//!     assert_eq!(handle.get(), 8);
//!
//!     // Hand the slot out instead of destroying it.
//!     let raw = handle.release();
//!     assert_eq!(raw, 8);
//!     assert!(handle.is_null());
//!     Ok(())
//! }
//! ```
//!
//! # What this crate is not
//!
//! There is no shared or reference-counted ownership, no pooling and no
//! multi-resource container - one wrapper owns one resource. The wrapper also
//! performs no allocation of its own: acquiring the underlying resource is
//! entirely the policy's business.
//!
//! # Thread safety
//!
//! The wrapper has no interior mutability and no locking; it is an ordinary
//! value type. It is [`Send`]/[`Sync`] whenever the raw value and the kind
//! marker are, so policies whose destroy operation is tied to one thread can
//! opt out of cross-thread moves by making the kind type `!Send`.

mod acquire;
mod handle;
mod kind;

#[cfg(test)]
mod testing;

pub use acquire::AcquireHandle;
pub use handle::UniqueHandle;
pub use kind::HandleKind;

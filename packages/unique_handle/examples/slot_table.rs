//! Plugging a fallible allocator into `UniqueHandle`.
//!
//! A fixed-size slot table hands out slot indexes; acquisition fails once the
//! table is full, and destroying a handle returns its slot to the table.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use unique_handle::{AcquireHandle, HandleKind, UniqueHandle};

const SLOT_COUNT: usize = 3;

/// `true` means the slot is in use.
static SLOTS: Mutex<[bool; SLOT_COUNT]> = Mutex::new([false; SLOT_COUNT]);

struct SlotKind;

#[derive(Debug, Error)]
enum SlotError {
    #[error("all slots are in use")]
    Exhausted,
}

impl HandleKind for SlotKind {
    type Raw = usize;
    const NULL: Self::Raw = usize::MAX;

    fn destroy(raw: usize) {
        // Destruction must not fail, so a poisoned lock is used anyway - the
        // table is a plain bool array and cannot be left inconsistent.
        let mut slots = SLOTS.lock().unwrap_or_else(PoisonError::into_inner);
        slots[raw] = false;
    }
}

impl AcquireHandle<()> for SlotKind {
    type Error = SlotError;

    fn acquire((): ()) -> Result<usize, SlotError> {
        let mut slots = SLOTS.lock().unwrap_or_else(PoisonError::into_inner);

        let free = slots
            .iter()
            .position(|in_use| !*in_use)
            .ok_or(SlotError::Exhausted)?;

        slots[free] = true;
        Ok(free)
    }
}

type SlotHandle = UniqueHandle<SlotKind>;

fn main() -> Result<(), SlotError> {
    println!("=== Slot table: fallible acquisition, automatic release ===");

    let first = SlotHandle::acquire(())?;
    let second = SlotHandle::acquire(())?;
    let third = SlotHandle::acquire(())?;

    println!("Acquired slots {first}, {second} and {third}");

    // The table is full now, so the next acquisition fails cleanly.
    match SlotHandle::acquire(()) {
        Ok(extra) => println!("Unexpectedly acquired slot {extra}"),
        Err(error) => println!("Fourth acquisition failed: {error}"),
    }

    // Dropping a handle returns its slot to the table.
    drop(second);
    let reused = SlotHandle::acquire(())?;
    println!("After releasing one slot, acquired slot {reused} again");

    // Handing a slot out of the wrapper transfers cleanup responsibility.
    let raw = first.into_raw();
    println!("Slot {raw} is now the caller's problem");
    SlotKind::destroy(raw);

    Ok(())
}

//! Test-only handle kinds with observable acquisition and destruction.

use std::cell::RefCell;

use thiserror::Error;

use crate::{AcquireHandle, HandleKind};

thread_local! {
    static DESTROYED: RefCell<Vec<i32>> = const { RefCell::new(Vec::new()) };
    static ACQUIRED: RefCell<Vec<i32>> = const { RefCell::new(Vec::new()) };
}

/// The values destroyed so far on the current thread, in destruction order.
///
/// The standard test harness runs every test on its own thread, so tests
/// never observe each other's journals.
pub(crate) fn destroyed() -> Vec<i32> {
    DESTROYED.with(|journal| journal.borrow().clone())
}

/// The values acquired so far on the current thread, in acquisition order.
pub(crate) fn acquired() -> Vec<i32> {
    ACQUIRED.with(|journal| journal.borrow().clone())
}

/// Kind over `i32` with `-1` as the sentinel, journaling every destruction.
pub(crate) struct JournalKind;

impl HandleKind for JournalKind {
    type Raw = i32;
    const NULL: Self::Raw = -1;

    fn destroy(raw: i32) {
        DESTROYED.with(|journal| journal.borrow_mut().push(raw));
    }
}

/// Error produced by [`JournalKind`] acquisition when asked to fail.
#[derive(Debug, Error)]
pub(crate) enum AcquireError {
    /// The test policy was instructed to refuse the acquisition.
    #[error("acquisition refused by test policy")]
    Refused,
}

/// Acquisition takes the raw value to produce plus a switch that forces the
/// failure path, so tests can exercise both outcomes of the factory.
impl AcquireHandle<(i32, bool)> for JournalKind {
    type Error = AcquireError;

    fn acquire((raw, fail): (i32, bool)) -> Result<i32, AcquireError> {
        if fail {
            return Err(AcquireError::Refused);
        }

        ACQUIRED.with(|journal| journal.borrow_mut().push(raw));
        Ok(raw)
    }
}

use crate::{HandleKind, UniqueHandle};

/// Acquisition half of a handle policy: how to obtain a fresh resource.
///
/// Split out of [`HandleKind`] so that kinds without a canonical constructor
/// (say, descriptors received over a socket) still plug into
/// [`UniqueHandle`] - destruction is mandatory, acquisition is opt-in.
///
/// `Args` is whatever the acquisition operation needs; an operation taking
/// several inputs uses a tuple. A kind may implement the trait for several
/// argument types, one per way of acquiring the resource.
///
/// # Example
///
/// ```rust
/// use unique_handle::{AcquireHandle, HandleKind, UniqueHandle};
///
/// struct SlotKind;
///
/// impl HandleKind for SlotKind {
///     type Raw = u32;
///     const NULL: Self::Raw = u32::MAX;
///
///     fn destroy(_raw: u32) {}
/// }
///
/// impl AcquireHandle<u32> for SlotKind {
///     type Error = std::convert::Infallible;
///
///     fn acquire(slot: u32) -> Result<u32, Self::Error> {
///         Ok(slot)
///     }
/// }
///
/// let handle = UniqueHandle::<SlotKind>::acquire(7)?;
/// assert_eq!(handle.get(), 7);
/// # Ok::<(), std::convert::Infallible>(())
/// ```
pub trait AcquireHandle<Args>: HandleKind {
    /// Error returned when no resource could be acquired.
    type Error;

    /// Acquires a new resource, returning the raw value that identifies it.
    ///
    /// On success the caller owns the returned value and is responsible for
    /// eventually passing it to [`HandleKind::destroy()`] - typically by
    /// wrapping it via [`UniqueHandle::acquire()`], which does so
    /// automatically.
    fn acquire(args: Args) -> Result<Self::Raw, Self::Error>;
}

impl<K: HandleKind> UniqueHandle<K> {
    /// Acquires a new resource through the kind's acquisition operation and
    /// returns a wrapper that owns it.
    ///
    /// On failure the policy's error passes through untouched: nothing was
    /// acquired, so there is nothing to clean up and no wrapper to hand out.
    /// This function adds no failure cases of its own.
    ///
    /// # Errors
    ///
    /// Whatever the kind's [`AcquireHandle::acquire()`] returns.
    pub fn acquire<Args>(args: Args) -> Result<Self, <K as AcquireHandle<Args>>::Error>
    where
        K: AcquireHandle<Args>,
    {
        <K as AcquireHandle<Args>>::acquire(args).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AcquireError, JournalKind, acquired, destroyed};

    type Handle = UniqueHandle<JournalKind>;

    #[test]
    fn acquire_wraps_freshly_acquired_value() {
        let handle = Handle::acquire((1, false)).unwrap();

        assert!(!handle.is_null());
        assert_eq!(handle.get(), 1);

        // The acquisition operation ran exactly once.
        assert_eq!(acquired(), vec![1]);
    }

    #[test]
    fn acquired_value_is_destroyed_on_drop() {
        {
            let _handle = Handle::acquire((1, false)).unwrap();
        }

        assert_eq!(destroyed(), vec![1]);
    }

    #[test]
    fn acquire_failure_propagates_without_cleanup() {
        let result = Handle::acquire((1, true));

        assert!(matches!(result, Err(AcquireError::Refused)));

        // Nothing was acquired, so nothing may be destroyed.
        assert_eq!(acquired(), vec![]);
        assert_eq!(destroyed(), vec![]);
    }
}

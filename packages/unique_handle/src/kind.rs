/// Policy that plugs a raw resource type into [`UniqueHandle`][crate::UniqueHandle].
///
/// A handle kind is a compile-time strategy, not a runtime object: it is never
/// instantiated, only named as a type parameter. It fixes three things for every
/// wrapper built over it:
///
/// - [`Raw`][Self::Raw] - the scalar value that identifies a resource (a file
///   descriptor, an OS handle, a slot index).
/// - [`NULL`][Self::NULL] - the designated value of that type meaning "no
///   resource". The wrapper uses it to decide whether teardown has anything
///   to do.
/// - [`destroy()`][Self::destroy] - how to release a live resource.
///
/// Kinds whose resources can also be acquired through a canonical operation
/// additionally implement [`AcquireHandle`][crate::AcquireHandle].
///
/// # Thread mobility
///
/// A wrapper can be moved to another thread whenever both the raw value and the
/// kind type itself are [`Send`]. If `destroy()` must run on the thread that
/// acquired the resource, make the kind type `!Send` (for example by giving the
/// marker a raw pointer field) and the compiler will pin every wrapper built
/// over it to its origin thread.
///
/// # Example
///
/// ```rust
/// use unique_handle::{HandleKind, UniqueHandle};
///
/// struct SlotKind;
///
/// impl HandleKind for SlotKind {
///     type Raw = u32;
///     const NULL: Self::Raw = u32::MAX;
///
///     fn destroy(_raw: u32) {
///         // Return the slot to its allocator here.
///     }
/// }
///
/// let handle = UniqueHandle::<SlotKind>::new(7);
/// assert_eq!(handle.get(), 7);
/// ```
pub trait HandleKind {
    /// The scalar value that identifies one resource.
    ///
    /// Copying the value does not copy ownership - the wrapper is what makes
    /// ownership exclusive, the raw value is just a name for the resource.
    type Raw: Copy + Eq;

    /// The value of [`Raw`][Self::Raw] that means "no resource".
    ///
    /// Must be distinguishable from every value [`destroy()`][Self::destroy]
    /// can validly receive.
    const NULL: Self::Raw;

    /// Releases the resource identified by `raw`.
    ///
    /// The wrapper calls this at most once per owned value and never with
    /// [`NULL`][Self::NULL].
    ///
    /// # Failure is not an option
    ///
    /// This operation has no error channel on purpose: it runs from the
    /// wrapper's `Drop` implementation, where there is nobody left to hand an
    /// error to. An implementation that panics will unwind like any panic;
    /// if that happens while the wrapper is itself being dropped during an
    /// unwind already in progress, the process aborts. Violations are loud,
    /// never swallowed.
    fn destroy(raw: Self::Raw);
}

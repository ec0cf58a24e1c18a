//! Owning a real operating system resource: a Unix file descriptor.
//!
//! The policy maps straight onto the C API: `open()` acquires, `close()`
//! destroys, `-1` is the sentinel.

#[cfg(unix)]
mod fd {
    use std::ffi::CStr;
    use std::io;

    use unique_handle::{AcquireHandle, HandleKind, UniqueHandle};

    pub(crate) struct FdKind;

    impl HandleKind for FdKind {
        type Raw = libc::c_int;
        const NULL: Self::Raw = -1;

        fn destroy(raw: libc::c_int) {
            // Nothing useful can be done about a failed close; the descriptor
            // is gone either way.
            // SAFETY: The wrapper only ever passes descriptors previously
            // returned by open(), and each exactly once.
            unsafe {
                libc::close(raw);
            }
        }
    }

    impl AcquireHandle<&CStr> for FdKind {
        type Error = io::Error;

        fn acquire(path: &CStr) -> Result<libc::c_int, io::Error> {
            // SAFETY: The path is a valid NUL-terminated string for the
            // duration of the call.
            let fd = unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) };

            if fd == -1 {
                return Err(io::Error::last_os_error());
            }

            Ok(fd)
        }
    }

    pub(crate) type FdHandle = UniqueHandle<FdKind>;
}

#[cfg(unix)]
fn main() -> Result<(), std::io::Error> {
    use fd::FdHandle;

    println!("=== File descriptors: open() acquires, close() destroys ===");

    let mut file = FdHandle::acquire(c"/dev/null")?;
    println!("Opened /dev/null as descriptor {file}");

    // Opening a missing file fails before any wrapper exists.
    match FdHandle::acquire(c"/no/such/file") {
        Ok(unexpected) => println!("Unexpectedly opened descriptor {unexpected}"),
        Err(error) => println!("Opening a missing file failed cleanly: {error}"),
    }

    // Swapping in a second descriptor; both stay singly owned.
    let mut other = FdHandle::acquire(c"/dev/zero")?;
    file.swap(&mut other);
    println!("After swap: {file} and {other}");

    // Both descriptors close automatically here.
    Ok(())
}

#[cfg(not(unix))]
fn main() {
    println!("This example only runs on Unix targets.");
}

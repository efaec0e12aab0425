// platform.rs
use std::cell::RefCell;
use std::io::{self, Write};

use crate::console::{Console, Handle, STD_ERROR_SELECTOR};

#[cfg(windows)]
pub type NativeConsole = WindowsConsole;
#[cfg(not(windows))]
pub type NativeConsole = StdioConsole;

/// Writes through the Win32 console API.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsConsole;

#[cfg(windows)]
impl Console for WindowsConsole {
    fn std_handle(&self, selector: i32) -> Handle {
        use windows_sys::Win32::System::Console::{GetStdHandle, STD_HANDLE};

        let raw = unsafe { GetStdHandle(selector as STD_HANDLE) };
        Handle::from_raw(raw as isize)
    }

    fn write_bytes(&self, handle: Handle, bytes: &[u8]) {
        use windows_sys::Win32::Foundation::HANDLE;
        use windows_sys::Win32::System::Console::WriteConsoleA;

        let status = unsafe {
            WriteConsoleA(
                handle.as_raw() as HANDLE,
                bytes.as_ptr().cast(),
                // Truncates past u32::MAX; callers keep writes below that.
                bytes.len() as u32,
                std::ptr::null_mut(),
                std::ptr::null(),
            )
        };
        if status == 0 {
            log::trace!("WriteConsoleA failed on {:?}", handle);
        }
    }

    fn write_wide(&self, handle: Handle, units: &[u16]) {
        use windows_sys::Win32::Foundation::HANDLE;
        use windows_sys::Win32::System::Console::WriteConsoleW;

        let status = unsafe {
            WriteConsoleW(
                handle.as_raw() as HANDLE,
                units.as_ptr().cast(),
                // Truncates past u32::MAX; callers keep writes below that.
                units.len() as u32,
                std::ptr::null_mut(),
                std::ptr::null(),
            )
        };
        if status == 0 {
            log::trace!("WriteConsoleW failed on {:?}", handle);
        }
    }
}

/// Maps the console selectors onto two byte streams, by default the
/// process's stdout and stderr.
///
/// Selector -12 goes to the error stream and every other handle to the output
/// stream. Wide writes are transcoded to UTF-8; a surrogate that arrives
/// without its partner becomes U+FFFD.
#[derive(Debug)]
pub struct StdioConsole<O = io::Stdout, E = io::Stderr> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::with_streams(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> StdioConsole<O, E> {
    pub fn with_streams(out: O, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    pub fn into_streams(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn write_all(&self, handle: Handle, bytes: &[u8]) {
        let result = if handle.as_raw() == STD_ERROR_SELECTOR as isize {
            self.err.borrow_mut().write_all(bytes)
        } else {
            self.out.borrow_mut().write_all(bytes)
        };
        if let Err(err) = result {
            log::trace!("write to {:?} failed: {}", handle, err);
        }
    }
}

impl<O: Write, E: Write> Console for StdioConsole<O, E> {
    fn std_handle(&self, selector: i32) -> Handle {
        Handle::from_raw(selector as isize)
    }

    fn write_bytes(&self, handle: Handle, bytes: &[u8]) {
        self.write_all(handle, bytes);
    }

    fn write_wide(&self, handle: Handle, units: &[u16]) {
        self.write_all(handle, wide_to_utf8(units).as_bytes());
    }
}

pub(crate) fn wide_to_utf8(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

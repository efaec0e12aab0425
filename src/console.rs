// console.rs
use crate::utf16::{encode_scalar, Utf16Units};

/// Selector the platform understands as "standard output".
pub const STD_OUTPUT_SELECTOR: i32 = -11;
/// Selector the platform understands as "standard error".
pub const STD_ERROR_SELECTOR: i32 = -12;

/// Opaque platform handle to a console-backed stream.
///
/// Never owned here: it is looked up on demand and never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(isize);

impl Handle {
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> isize {
        self.0
    }
}

/// The platform primitives this crate writes through.
///
/// Every call is blocking and fire-and-forget: implementations swallow the
/// platform status, so a bad handle or a partial write is never reported.
pub trait Console {
    /// Looks up the handle for a well-known stream selector.
    fn std_handle(&self, selector: i32) -> Handle;

    /// Writes `bytes.len()` single-byte characters.
    fn write_bytes(&self, handle: Handle, bytes: &[u8]);

    /// Writes `units.len()` UTF-16 code units.
    fn write_wide(&self, handle: Handle, units: &[u16]);
}

pub fn get_standard_output<C: Console + ?Sized>(console: &C) -> Handle {
    console.std_handle(STD_OUTPUT_SELECTOR)
}

/// Writes `buffer` as-is. Each byte must be ASCII; that is not checked.
pub fn print_ascii_sized<C: Console + ?Sized>(console: &C, handle: Handle, buffer: &[u8]) {
    debug_assert!(
        u32::try_from(buffer.len()).is_ok(),
        "console writes are limited to u32::MAX characters"
    );
    console.write_bytes(handle, buffer);
}

/// Writes a single ASCII byte; values above 0x7F are not rejected.
pub fn print_ascii_char<C: Console + ?Sized>(console: &C, handle: Handle, byte: u8) {
    let buf = [byte];
    console.write_bytes(handle, &buf);
}

pub fn print_char<C: Console + ?Sized>(console: &C, handle: Handle, c: char) {
    print_scalar(console, handle, c as u32);
}

/// Writes one Unicode scalar value as UTF-16.
///
/// `scalar` is trusted to be in `0..=0xD7FF` or `0xE000..=0x10FFFF`; other
/// values write unspecified code units.
pub fn print_scalar<C: Console + ?Sized>(console: &C, handle: Handle, scalar: u32) {
    match encode_scalar(scalar) {
        Utf16Units::Single(unit) => {
            let buf = [unit];
            console.write_wide(handle, &buf);
        }
        Utf16Units::Pair(high, low) => {
            let buf = [high, low];
            console.write_wide(handle, &buf);
        }
    }
}

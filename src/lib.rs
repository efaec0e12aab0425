//! Text output to the platform console in single-byte and UTF-16 form.
//!
//! Get a handle with [`get_standard_output`], then write through it with
//! [`print_ascii_sized`], [`print_ascii_char`] or [`print_char`]. Every call
//! is unchecked and fire-and-forget: the caller guarantees the handle is
//! writable, ASCII paths only see ASCII, and scalars are real Unicode
//! scalar values.

pub mod console;
pub mod platform;
#[doc(hidden)]
pub mod recording;
pub mod utf16;
pub mod writer;

pub use console::{
    get_standard_output, print_ascii_char, print_ascii_sized, print_char, print_scalar, Console,
    Handle, STD_ERROR_SELECTOR, STD_OUTPUT_SELECTOR,
};
pub use platform::NativeConsole;
pub use writer::ConsoleWriter;

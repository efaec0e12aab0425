// writer.rs
use std::fmt;

use crate::console::{print_ascii_char, print_ascii_sized, print_char, Console, Handle};

/// Formatting front end over a [`Console`] and one of its handles.
///
/// ASCII text takes the single-byte path; everything else goes out one
/// scalar value at a time as UTF-16.
pub struct ConsoleWriter<'a, C: Console + ?Sized> {
    console: &'a C,
    handle: Handle,
    ascii_only: bool,
}

impl<'a, C: Console + ?Sized> ConsoleWriter<'a, C> {
    pub fn new(console: &'a C, handle: Handle) -> Self {
        Self {
            console,
            handle,
            ascii_only: false,
        }
    }

    /// Replace every non-ASCII char with `?` so only the single-byte path is used.
    pub fn ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    pub fn write_char(&mut self, c: char) {
        if c.is_ascii() {
            print_ascii_char(self.console, self.handle, c as u8);
        } else if self.ascii_only {
            print_ascii_char(self.console, self.handle, b'?');
        } else {
            print_char(self.console, self.handle, c);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        if s.is_ascii() {
            if !s.is_empty() {
                print_ascii_sized(self.console, self.handle, s.as_bytes());
            }
            return;
        }
        for c in s.chars() {
            self.write_char(c);
        }
    }
}

impl<C: Console + ?Sized> fmt::Write for ConsoleWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        ConsoleWriter::write_str(self, s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        ConsoleWriter::write_char(self, c);
        Ok(())
    }
}

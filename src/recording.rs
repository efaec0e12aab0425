// recording.rs
use std::cell::RefCell;

use crate::console::{Console, Handle};
use crate::platform::wide_to_utf8;

/// One platform call as seen by [`RecordingConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StdHandle { selector: i32 },
    WriteBytes { handle: Handle, bytes: Vec<u8> },
    WriteWide { handle: Handle, units: Vec<u16> },
}

/// A [`Console`] that writes nowhere and remembers every call in order.
///
/// Handles it hands out are the requested selector widened to `isize`.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    calls: RefCell<Vec<Call>>,
}

impl RecordingConsole {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Concatenates every wide write, in order.
    pub fn wide_units(&self) -> Vec<u16> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::WriteWide { units, .. } => Some(units.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Decodes all writes (byte and wide) back into text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut pending: Vec<u16> = Vec::new();
        for call in self.calls.borrow().iter() {
            match call {
                Call::StdHandle { .. } => {}
                Call::WriteBytes { bytes, .. } => {
                    out.push_str(&wide_to_utf8(&pending));
                    pending.clear();
                    out.push_str(&String::from_utf8_lossy(bytes));
                }
                Call::WriteWide { units, .. } => pending.extend_from_slice(units),
            }
        }
        out.push_str(&wide_to_utf8(&pending));
        out
    }
}

impl Console for RecordingConsole {
    fn std_handle(&self, selector: i32) -> Handle {
        self.calls.borrow_mut().push(Call::StdHandle { selector });
        Handle::from_raw(selector as isize)
    }

    fn write_bytes(&self, handle: Handle, bytes: &[u8]) {
        self.calls.borrow_mut().push(Call::WriteBytes {
            handle,
            bytes: bytes.to_vec(),
        });
    }

    fn write_wide(&self, handle: Handle, units: &[u16]) {
        self.calls.borrow_mut().push(Call::WriteWide {
            handle,
            units: units.to_vec(),
        });
    }
}

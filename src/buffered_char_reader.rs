// buffered_char_reader.rs
use std::io::{self, BufRead, BufReader, Read};

pub struct BufferedCharReader<R: Read> {
    reader: BufReader<R>,
    buf: String,
    pos: usize,
}

impl<R: Read> BufferedCharReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(4096, reader),
            buf: String::new(),
            pos: 0,
        }
    }

    fn fill_buf_if_needed(&mut self) -> io::Result<()> {
        while self.pos >= self.buf.len() {
            self.buf.clear();
            self.pos = 0;
            let bytes_read = self.reader.read_line(&mut self.buf)?;
            if bytes_read == 0 {
                break;
            }
        }
        Ok(())
    }

    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        self.fill_buf_if_needed()?;
        let Some(c) = self.buf[self.pos..].chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();
        Ok(Some(c))
    }

    /// Returns the rest of the current line, pulling a new one if needed.
    pub fn next_chunk(&mut self) -> io::Result<Option<&str>> {
        self.fill_buf_if_needed()?;
        if self.pos >= self.buf.len() {
            return Ok(None);
        }
        let start = self.pos;
        self.pos = self.buf.len();
        Ok(Some(&self.buf[start..]))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_char_walks_multibyte_text() {
        let mut fixture = BufferedCharReader::new(Cursor::new("a€\n😀"));

        let mut actual = Vec::new();
        while let Some(c) = fixture.next_char().unwrap() {
            actual.push(c);
        }

        assert_eq!(actual, vec!['a', '€', '\n', '😀']);
    }

    #[test]
    fn test_next_chunk_yields_lines() {
        let mut fixture = BufferedCharReader::new(Cursor::new("one\ntwo"));

        assert_eq!(fixture.next_chunk().unwrap(), Some("one\n"));
        assert_eq!(fixture.next_chunk().unwrap(), Some("two"));
        assert_eq!(fixture.next_chunk().unwrap(), None);
    }

    #[test]
    fn test_chunk_after_char_returns_remainder() {
        let mut fixture = BufferedCharReader::new(Cursor::new("xyz\n"));

        assert_eq!(fixture.next_char().unwrap(), Some('x'));
        assert_eq!(fixture.next_chunk().unwrap(), Some("yz\n"));
    }

    #[test]
    fn test_empty_input() {
        let mut fixture = BufferedCharReader::new(Cursor::new(""));
        assert_eq!(fixture.next_char().unwrap(), None);
        assert_eq!(fixture.next_chunk().unwrap(), None);
    }
}

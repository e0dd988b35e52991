//! In-memory triplet source over a string

use crate::traits::TripletSource;
use crate::SpmvError;

/// Triplet source reading lines from an in-memory string
#[derive(Debug, Clone)]
pub struct TextSource<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TextSource<'a> {
    /// Create a source over the full contents of a triplet file
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl TripletSource for TextSource<'_> {
    type Error = SpmvError;

    fn next_line(&mut self) -> Result<Option<&str>, SpmvError> {
        if self.pos >= self.text.len() {
            return Ok(None);
        }

        let rest = &self.text[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }

    fn rewind(&mut self) -> Result<(), SpmvError> {
        self.pos = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_rewind() {
        let mut source = TextSource::new("2 2 1\r\n1 1 3.0\n\nlast");
        assert_eq!(source.next_line(), Ok(Some("2 2 1")));
        assert_eq!(source.next_line(), Ok(Some("1 1 3.0")));
        assert_eq!(source.next_line(), Ok(Some("")));
        assert_eq!(source.next_line(), Ok(Some("last")));
        assert_eq!(source.next_line(), Ok(None));

        source.rewind().unwrap();
        assert_eq!(source.next_line(), Ok(Some("2 2 1")));
    }

    #[test]
    fn test_empty() {
        let mut source = TextSource::new("");
        assert_eq!(source.next_line(), Ok(None));
    }
}

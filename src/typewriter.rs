//! Typewriter text reveal.
//!
//! Yields the text one more character at a time; the page renders each
//! frame `speed_ms` after the previous one.

pub const DEFAULT_SPEED_MS: u32 = 50;

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    speed_ms: u32,
    /// Byte offset of the end of the current frame
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed_ms: u32) -> Self {
        Self {
            text: text.into(),
            speed_ms,
            cursor: 0,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Number of frames the full reveal takes
    pub fn frame_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let c = self.text[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(self.text[..self.cursor].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_grow_by_one_char() {
        let frames: Vec<_> = Typewriter::new("Hola", DEFAULT_SPEED_MS).collect();
        assert_eq!(frames, vec!["H", "Ho", "Hol", "Hola"]);
    }

    #[test]
    fn test_multibyte_text() {
        let writer = Typewriter::new("Año ✓", 10);
        assert_eq!(writer.frame_count(), 5);
        let frames: Vec<_> = writer.collect();
        assert_eq!(frames[1], "Añ");
        assert_eq!(frames.last().unwrap(), "Año ✓");
    }

    #[test]
    fn test_empty_text_has_no_frames() {
        let mut writer = Typewriter::new("", DEFAULT_SPEED_MS);
        assert!(writer.is_done());
        assert_eq!(writer.next(), None);
    }
}

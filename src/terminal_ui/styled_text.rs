use crossterm::{
    cursor, queue,
    style::{PrintStyledContent, StyledContent},
};
use std::io::Write;

/// A line made of differently styled fragments.
#[derive(Clone, Default)]
pub struct StyledText {
    text: Vec<StyledContent<String>>,
}

impl StyledText {
    pub fn new() -> Self {
        Self { text: vec![] }
    }

    pub fn from(text: Vec<StyledContent<String>>) -> Self {
        Self { text }
    }

    pub fn push(&mut self, content: StyledContent<String>) {
        self.text.push(content);
    }

    /// Prints whole fragments at `pos` while they fit in `max_len` columns and
    /// returns the number of columns written.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        pos: cursor::MoveTo,
        max_len: u16,
    ) -> crossterm::Result<u16> {
        queue!(out, pos)?;
        let mut total_len = 0;
        for elem in &self.text {
            let elem_len = elem.content().chars().count();
            if total_len + elem_len > (max_len as usize) {
                break;
            }
            queue!(out, PrintStyledContent(elem.clone()))?;
            total_len += elem_len
        }
        Ok(total_len as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::style;

    #[test]
    fn draw_counts_characters_not_bytes() {
        let mut text = StyledText::new();
        text.push(style(String::from("Gen: ")));
        text.push(style(String::from("42 ▶")));
        let mut out = Vec::new();
        let written = text.draw(&mut out, cursor::MoveTo(0, 0), 20).unwrap();
        assert_eq!(written, 9);
        assert_eq!(StyledText::new().draw(&mut out, cursor::MoveTo(0, 1), 20).unwrap(), 0);
    }

    #[test]
    fn draw_stops_at_first_fragment_that_overflows() {
        let text = StyledText::from(vec![
            style(String::from("abc")),
            style(String::from("defg")),
            style(String::from("h")),
        ]);
        let mut out = Vec::new();
        let written = text.draw(&mut out, cursor::MoveTo(0, 0), 5).unwrap();
        assert_eq!(written, 3);
    }
}

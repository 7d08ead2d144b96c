use crossterm::{cursor::MoveTo, queue, style::Print};
use std::io::Write;

use super::styled_text::StyledText;
use super::Size;

/// A titled, bordered rectangle of the terminal.
pub struct Module {
    title: StyledText,
    pos: Size,
    size: Size,
}

impl Module {
    /// Sizes below 3x3 (no room for content) are grown to 3x3.
    pub fn new(title: StyledText, pos: Size, size: Size) -> Self {
        Module {
            title,
            pos,
            size: (size.0.max(3), size.1.max(3)),
        }
    }

    pub fn title(&self) -> &StyledText {
        &self.title
    }

    pub fn set_title(&mut self, title: StyledText) {
        self.title = title;
    }

    pub fn clear_content<W: Write>(&self, out: &mut W) -> crossterm::Result<()> {
        let content_pos = self.render_pos();
        let content_size = self.render_size();
        let empty_line = " ".repeat(content_size.0 as usize);
        for y in 0..content_size.1 {
            queue!(
                out,
                MoveTo(content_pos.0, content_pos.1 + y),
                Print(empty_line.clone())
            )?;
        }
        Ok(())
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> crossterm::Result<()> {
        let hline = "─".repeat(self.size.0 as usize - 2);

        // Top and bottom borders
        queue!(
            out,
            MoveTo(self.pos.0, self.pos.1),
            Print('┌'),
            Print(hline.clone()),
            Print('┐'),
            MoveTo(self.pos.0, self.pos.1 + self.size.1 - 1),
            Print('└'),
            Print(hline),
            Print('┘')
        )?;

        for row in (self.pos.1 + 1)..(self.pos.1 + self.size.1 - 1) {
            queue!(
                out,
                MoveTo(self.pos.0, row),
                Print('│'),
                MoveTo(self.pos.0 + self.size.0 - 1, row),
                Print('│')
            )?;
        }

        self.draw_title(out)
    }

    /// Redraws the title over the top border, padding the rest with `─`.
    pub fn draw_title<W: Write>(&self, out: &mut W) -> crossterm::Result<()> {
        if self.size.0 < 6 {
            return Ok(());
        }
        let max_len = self.size.0 - 5;
        let base_pos = self.pos.0 + 3;
        queue!(out, MoveTo(base_pos - 1, self.pos.1), Print(' '))?;
        let nb_written = self.title.draw(out, MoveTo(base_pos, self.pos.1), max_len)?;
        let mut top_line = String::from(" ");
        top_line.push_str(&"─".repeat((max_len - nb_written) as usize));
        queue!(out, MoveTo(base_pos + nb_written, self.pos.1), Print(top_line))
    }

    pub fn render_pos(&self) -> Size {
        (self.pos.0 + 1, self.pos.1 + 1)
    }

    pub fn render_size(&self) -> Size {
        (self.size.0 - 2, self.size.1 - 2)
    }

    /// Whether terminal coordinates `(x, y)` fall inside the content area.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let (px, py) = self.render_pos();
        let (w, h) = self.render_size();
        px <= x && x < px + w && py <= y && y < py + h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_area_excludes_border() {
        let module = Module::new(StyledText::new(), (2, 1), (10, 5));
        assert_eq!(module.render_pos(), (3, 2));
        assert_eq!(module.render_size(), (8, 3));
        assert!(module.contains(3, 2));
        assert!(module.contains(10, 4));
        assert!(!module.contains(2, 2));
        assert!(!module.contains(11, 2));
        assert!(!module.contains(3, 5));
    }

    #[test]
    fn tiny_modules_are_grown() {
        let module = Module::new(StyledText::new(), (0, 0), (1, 0));
        assert_eq!(module.render_size(), (1, 1));
    }
}

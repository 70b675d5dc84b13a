//! Focusable text editor drawn inside a [`FrameContext`].
//!
//! The editor owns a [`TextInputState`], consumes key events while focused,
//! and draws either its text (optionally masked) or a hint. It never grows
//! past the number of visible lines it was configured with; multi-line
//! content scrolls to keep the cursor in view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Rect, Size},
    style::{Color, Style},
};
use tracing::trace;
use unicode_width::UnicodeWidthChar;

use crate::ui::{
    components::common::text_input::TextInputState,
    host::{events::Tag, frame::FrameContext},
    theme::Theme,
};

/// Colors and hint text used when drawing an [`Editor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStyle {
    pub hint: String,
    pub hint_color: Color,
    /// Cursor cell background.
    pub selection_color: Color,
    pub text_color: Color,
}

impl EditorStyle {
    /// Theme hint and selection colors with the default text color.
    pub fn themed<T: Theme + ?Sized>(theme: &T, hint: impl Into<String>) -> Self {
        let roles = theme.roles();
        Self {
            hint: hint.into(),
            hint_color: roles.hint_text,
            selection_color: roles.text_selection,
            text_color: roles.default_text,
        }
    }
}

#[derive(Debug)]
pub struct Editor {
    tag: Tag,
    state: TextInputState,
    single_line: bool,
    read_only: bool,
    mask: Option<char>,
    lines: u16,
    scroll: usize,
}

impl Editor {
    pub fn new(single_line: bool) -> Self {
        Self {
            tag: Tag::next(),
            state: TextInputState::new(),
            single_line,
            read_only: false,
            mask: None,
            lines: 1,
            scroll: 0,
        }
    }

    /// Focus and key-routing identity.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn text(&self) -> &str {
        self.state.input()
    }

    /// Replaces the content and moves the cursor to its end. Line breaks are
    /// flattened to spaces in single-line mode.
    pub fn set_text(&mut self, text: &str) {
        let text = if self.single_line { text.replace('\n', " ") } else { text.to_owned() };
        let end = text.len();
        self.state.set_input(text);
        self.state.set_cursor(end);
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn mask(&self) -> Option<char> {
        self.mask
    }

    pub fn set_mask(&mut self, mask: Option<char>) {
        self.mask = mask;
    }

    /// Visible line count; the editor is always exactly this tall.
    pub fn set_lines(&mut self, lines: u16) {
        self.lines = lines.max(1);
    }

    /// Applies key events routed to the editor while focused.
    /// Returns whether the text changed.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) -> bool {
        let mut changed = false;
        for key in ctx.drain_keys(self.tag) {
            changed |= self.handle_key(key);
        }
        changed
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let editable = !self.read_only;
        match key.code {
            KeyCode::Left => self.state.move_left(),
            KeyCode::Right => self.state.move_right(),
            KeyCode::Home => self.state.move_home(),
            KeyCode::End => self.state.move_end(),
            KeyCode::Up if !self.single_line => self.state.move_up(),
            KeyCode::Down if !self.single_line => self.state.move_down(),
            KeyCode::Backspace if editable => {
                self.state.backspace();
                return true;
            }
            KeyCode::Delete if editable => {
                self.state.delete();
                return true;
            }
            KeyCode::Enter if editable && !self.single_line => {
                self.state.insert_newline();
                return true;
            }
            KeyCode::Char(c) if editable && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.state.insert_char(c);
                return true;
            }
            _ => trace!(code = ?key.code, "editor ignored key"),
        }
        false
    }

    fn display_line(&self, line: &str) -> String {
        match self.mask {
            Some(mask) => line.chars().map(|_| mask).collect(),
            None => line.to_owned(),
        }
    }

    fn columns(&self, text: &str) -> u16 {
        let width: usize = match self.mask {
            Some(mask) => text.chars().count() * mask.width().unwrap_or(1),
            None => text.chars().map(|c| c.width().unwrap_or(0)).sum(),
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Draws the visible lines and, when focused and editable, the cursor.
    pub fn layout(&mut self, ctx: &mut FrameContext<'_>, style: &EditorStyle) -> Size {
        self.update(ctx);
        let width = ctx.constraints.max.width;
        let size = ctx.constraints.constrain(Size::new(width, self.lines));
        let visible = usize::from(size.height.max(1));

        let (cursor_line, prefix) = self.state.cursor_line();
        let cursor_x = self.columns(prefix);
        if cursor_line < self.scroll {
            self.scroll = cursor_line;
        } else if cursor_line >= self.scroll + visible {
            self.scroll = cursor_line + 1 - visible;
        }
        self.scroll = self.scroll.min(self.state.line_count().saturating_sub(visible));
        let h_offset = cursor_x.saturating_sub(width.saturating_sub(1));

        if self.state.is_empty() {
            ctx.set_string(0, 0, &style.hint, Style::default().fg(style.hint_color));
        } else {
            let text_style = Style::default().fg(style.text_color);
            let ranges = self.state.line_ranges();
            for (row, range) in ranges.into_iter().skip(self.scroll).take(visible).enumerate() {
                let shown = self.display_line(&self.state.input()[range]);
                let clipped = skip_columns(&shown, h_offset);
                ctx.set_string(0, row as u16, clipped, text_style);
            }
        }

        if ctx.focused(self.tag) && !self.read_only {
            let y = u16::try_from(cursor_line - self.scroll).unwrap_or(u16::MAX);
            let x = cursor_x - h_offset;
            ctx.set_style(Rect::new(x, y, 1, 1), Style::default().bg(style.selection_color));
        }
        size
    }
}

fn skip_columns(text: &str, columns: u16) -> &str {
    let mut skipped = 0u16;
    for (index, c) in text.char_indices() {
        if skipped >= columns {
            return &text[index..];
        }
        skipped = skipped.saturating_add(c.width().unwrap_or(0) as u16);
    }
    ""
}

#[cfg(test)]
mod tests {
    use crossterm::event::Event;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::ui::{
        host::{
            events::EventSource,
            frame::{Constraints, Ops},
        },
        theme::DraculaTheme,
    };

    fn style() -> EditorStyle {
        EditorStyle::themed(&DraculaTheme::new(), "Email")
    }

    fn draw(editor: &mut Editor, source: Option<&mut EventSource>, area: Rect) -> Buffer {
        let mut ops = Ops::new(area);
        {
            let mut ctx = FrameContext::new(Constraints::loose(area.as_size()), source, &mut ops);
            editor.layout(&mut ctx, &style());
        }
        ops.buffer().clone()
    }

    fn type_keys(source: &mut EventSource, keys: &[KeyCode]) {
        for code in keys {
            source.push(Event::Key(KeyEvent::new(*code, KeyModifiers::NONE)));
        }
        source.begin_frame();
    }

    #[test]
    fn empty_editor_shows_hint() {
        let mut editor = Editor::new(true);
        let buffer = draw(&mut editor, None, Rect::new(0, 0, 10, 1));
        assert_eq!(buffer[(0, 0)].symbol(), "E");
        assert_eq!(buffer[(4, 0)].symbol(), "l");
    }

    #[test]
    fn focused_editor_accepts_typing() {
        let mut editor = Editor::new(true);
        let mut source = EventSource::new();
        source.focus_mut().request(editor.tag());
        type_keys(&mut source, &[KeyCode::Char('h'), KeyCode::Char('i'), KeyCode::Enter, KeyCode::Char('!')]);
        let buffer = draw(&mut editor, Some(&mut source), Rect::new(0, 0, 10, 1));

        assert_eq!(editor.text(), "hi!", "enter is ignored in single-line mode");
        assert_eq!(buffer[(2, 0)].symbol(), "!");
        assert_eq!(buffer[(3, 0)].bg, style().selection_color);
    }

    #[test]
    fn read_only_editor_ignores_edits() {
        let mut editor = Editor::new(true);
        editor.set_text("fixed");
        editor.set_read_only(true);
        let mut source = EventSource::new();
        source.focus_mut().request(editor.tag());
        type_keys(&mut source, &[KeyCode::Backspace, KeyCode::Char('x')]);
        let buffer = draw(&mut editor, Some(&mut source), Rect::new(0, 0, 10, 1));
        assert_eq!(buffer[(0, 0)].symbol(), "f");
        assert_eq!(editor.text(), "fixed");
    }

    #[test]
    fn mask_replaces_every_character() {
        let mut editor = Editor::new(true);
        editor.set_text("pw1");
        editor.set_mask(Some('*'));
        let buffer = draw(&mut editor, None, Rect::new(0, 0, 10, 1));
        assert_eq!(buffer[(0, 0)].symbol(), "*");
        assert_eq!(buffer[(2, 0)].symbol(), "*");
        assert_eq!(editor.text(), "pw1");
    }

    #[test]
    fn multi_line_content_scrolls_without_growing() {
        let mut editor = Editor::new(false);
        editor.set_lines(2);
        editor.set_text("one\ntwo\nthree");
        let mut ops = Ops::new(Rect::new(0, 0, 10, 5));
        let size = {
            let mut ctx = FrameContext::new(Constraints::loose(Size::new(10, 5)), None, &mut ops);
            editor.layout(&mut ctx, &style())
        };

        assert_eq!(size, Size::new(10, 2));
        assert_eq!(ops.buffer()[(0, 0)].symbol(), "t");
        assert_eq!(ops.buffer()[(1, 1)].symbol(), "h");
    }
}

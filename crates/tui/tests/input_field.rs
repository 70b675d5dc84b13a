use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gridfield_tui::{
    Host, InputField, VisualState,
    theme::{DraculaTheme, Theme},
};
use ratatui::{buffer::Buffer, layout::Rect};

const AREA: Rect = Rect::new(0, 0, 30, 10);

fn theme() -> Arc<dyn Theme> {
    Arc::new(DraculaTheme::new())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn click(host: &mut Host, column: u16, row: u16) {
    host.push(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    host.push(mouse(MouseEventKind::Up(MouseButton::Left), column, row));
}

fn type_text(host: &mut Host, text: &str) {
    for c in text.chars() {
        host.push(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
}

fn draw(host: &mut Host, field: &mut InputField) -> Buffer {
    let mut buffer = Buffer::empty(AREA);
    host.frame(&mut buffer, |ctx| field.layout(ctx));
    buffer
}

fn row_text(buffer: &Buffer, y: u16, from: u16, to: u16) -> String {
    (from..to).map(|x| buffer[(x, y)].symbol()).collect()
}

#[test]
fn email_field_walks_through_hover_focus_and_typing() {
    let roles = *theme().roles();
    let mut host = Host::new();
    let mut field = InputField::new(theme(), "Email", None);
    field.set_width(20);

    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Inactive);
    assert_eq!(field.hint(), "Email");
    assert_eq!(buffer[(0, 0)].fg, roles.default_border);
    assert_eq!(row_text(&buffer, 1, 2, 7), "Email");

    host.push(mouse(MouseEventKind::Moved, 3, 1));
    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Hovered);
    assert_eq!(buffer[(0, 0)].fg, roles.hovered_border);
    field.set_text("a@b.com");
    assert_eq!(field.text(), "a@b.com");
    field.set_text("");

    click(&mut host, 3, 1);
    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Focused);
    assert_eq!(field.border_color(), roles.focused_border);
    assert_eq!(field.bg_color(), roles.focused_bg);
    assert_eq!(buffer[(0, 0)].fg, roles.focused_border);

    type_text(&mut host, "ann@x.io");
    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.text(), "ann@x.io");
    assert_eq!(row_text(&buffer, 1, 2, 10), "ann@x.io");

    field.set_text("a@b.com");
    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Focused);
    assert_eq!(field.text(), "a@b.com");
    assert_eq!(row_text(&buffer, 1, 2, 9), "a@b.com");
}

#[test]
fn pressing_elsewhere_drops_focus_and_keys() {
    let roles = *theme().roles();
    let mut host = Host::new();
    let mut field = InputField::new(theme(), "Email", Some("a"));
    field.set_width(20);
    draw(&mut host, &mut field);

    click(&mut host, 5, 1);
    draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Focused);

    click(&mut host, 25, 8);
    type_text(&mut host, "zz");
    draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Inactive);
    assert_eq!(field.border_color(), roles.default_border);
    assert_eq!(field.bg_color(), roles.default_bg);
    assert_eq!(field.text(), "a");
}

#[test]
fn password_field_masks_until_revealed() {
    let mut host = Host::new();
    let mut field = InputField::new(theme(), "Password", None);
    field.set_width(20).password();
    draw(&mut host, &mut field);

    click(&mut host, 3, 1);
    type_text(&mut host, "hunter2");
    let buffer = draw(&mut host, &mut field);
    assert_eq!(field.text(), "hunter2");
    assert_eq!(row_text(&buffer, 1, 2, 9), "*******");

    click(&mut host, 17, 1);
    draw(&mut host, &mut field);
    let buffer = draw(&mut host, &mut field);
    assert!(field.is_password_revealed());
    assert_eq!(row_text(&buffer, 1, 2, 9), "hunter2");
}

#[test]
fn read_only_field_ignores_typing_even_when_focused() {
    let mut host = Host::new();
    let mut field = InputField::new(theme(), "", Some("fixed"));
    field.set_width(20).read_only();
    draw(&mut host, &mut field);

    click(&mut host, 3, 1);
    type_text(&mut host, "x");
    draw(&mut host, &mut field);
    assert_eq!(field.visual_state(), VisualState::Focused);
    assert_eq!(field.border_color(), theme().roles().default_border);
    assert_eq!(field.text(), "fixed");
}

#[test]
fn leading_decoration_shifts_the_editor() {
    let mut host = Host::new();
    let mut field = InputField::new(theme(), "", Some("hi"));
    field.set_width(20).set_leading(|ctx| {
        ctx.set_string(0, 0, "@ ", ratatui::style::Style::default());
        ratatui::layout::Size::new(2, 1)
    });
    let buffer = draw(&mut host, &mut field);
    assert_eq!(row_text(&buffer, 1, 2, 6), "@ hi");
}

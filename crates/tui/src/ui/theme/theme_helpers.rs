use ratatui::{
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

use super::roles::Theme;

/// Rounded glyphs for any non-zero radius, square corners otherwise.
pub fn border_type_for_radius(radius: u16) -> BorderType {
    if radius > 0 { BorderType::Rounded } else { BorderType::Plain }
}

/// Bordered, filled block used as the input field frame.
pub fn field_block<T: Theme + ?Sized>(theme: &T, border: Color, background: Color, radius: u16) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type_for_radius(radius))
        .border_style(theme.border_style_for(border).bg(background))
        .style(Style::default().bg(background))
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (f32::from(channel) * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Move an RGB color toward white by `factor` (0.0..=1.0).
pub fn lighten_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let lift = |channel: u8| {
                let channel = f32::from(channel);
                (channel + (255.0 - channel) * f).round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_adjustments_leave_indexed_colors_alone() {
        assert_eq!(darken_rgb(Color::Rgb(100, 50, 10), 0.5), Color::Rgb(50, 25, 5));
        assert_eq!(lighten_rgb(Color::Rgb(0, 0, 255), 0.5), Color::Rgb(128, 128, 255));
        assert_eq!(lighten_rgb(Color::Indexed(236), 0.5), Color::Indexed(236));
    }

    #[test]
    fn radius_selects_corner_glyphs() {
        assert_eq!(border_type_for_radius(0), BorderType::Plain);
        assert_eq!(border_type_for_radius(3), BorderType::Rounded);
    }
}

//! Status bar UI component.

use super::formatters::{format_number, format_stat_value};
use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(crate) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let dataset = &app.dataset;
    let count = dataset.len();
    let mut text = format!(
        " {} | {} {}",
        dataset.display_name(),
        format_number(count),
        if count == 1 { "point" } else { "points" }
    );

    if let (Some((x_min, x_max)), Some((y_min, y_max))) = (dataset.x_range(), dataset.y_range()) {
        text.push_str(&format!(
            " | x: {} .. {} | y: {} .. {}",
            format_stat_value(x_min),
            format_stat_value(x_max),
            format_stat_value(y_min),
            format_stat_value(y_max)
        ));
    }

    text.push_str(&format!(" | {}", app.status));

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

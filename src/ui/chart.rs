//! Line chart of the dataset.

use super::formatters::format_axis_label;
use crate::app::App;
use crate::ui::ThemeColors;
use crate::util::{axis_bounds, bounds::label_positions};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Smallest area the chart is drawn into; below this only a note is shown.
const MIN_CHART_WIDTH: u16 = 12;
const MIN_CHART_HEIGHT: u16 = 5;

/// Draw the line chart, or a placeholder when there is nothing to draw.
pub(crate) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let dataset = &app.dataset;
    let name = dataset.display_name();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", name))
        .title_style(Style::default().fg(colors.heading));

    let series = dataset.chart_points();
    if series.is_empty() || area.width < MIN_CHART_WIDTH || area.height < MIN_CHART_HEIGHT {
        let message = if series.is_empty() {
            "No data to display"
        } else {
            "Terminal too small"
        };
        let para = Paragraph::new(message)
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let layout = &app.layout;
    let x_bounds = axis_bounds(dataset.x_range(), layout);
    let y_bounds = axis_bounds(dataset.y_range(), layout);

    let datasets = vec![Dataset::default()
        .name(name.as_str())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.line))
        .data(&series)];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.label))
        .bounds(x_bounds)
        .labels(axis_labels(x_bounds, layout.label_count));

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.label))
        .bounds(y_bounds)
        .labels(axis_labels(y_bounds, layout.label_count));

    let chart = Chart::new(datasets)
        .block(block)
        .style(Style::default().fg(colors.text))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn axis_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    label_positions(bounds, count)
        .into_iter()
        .map(format_axis_label)
        .collect()
}

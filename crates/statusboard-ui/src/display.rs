use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::digits;
use crate::layout::DisplayLayout;
use crate::palette;
use crate::view::DisplayView;

fn centered_line(f: &mut Frame, area: Rect, line: Line<'_>) {
    if area.is_empty() {
        return;
    }
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Draw `text` in block letters when `big`, else as one bold line.
fn block_or_line(f: &mut Frame, area: Rect, text: &str, big: bool, style: Style) {
    match digits::render(text).filter(|_| big) {
        Some(rows) => {
            let lines: Vec<Line> = rows.into_iter().map(|r| Line::styled(r, style)).collect();
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        }
        None => centered_line(f, area, Line::styled(text, style)),
    }
}

/// Draw the full-screen status: background in the status color, gear in the
/// corner, then icon, label, date, clock and the last-updated line. Label and
/// clock use block letters when the layout made room for them.
pub fn render_display(f: &mut Frame, layout: &DisplayLayout, view: &DisplayView<'_>) {
    let style = &view.status.style;
    let bg = palette::color(&style.background);
    let fg = palette::color(&style.text);
    let accent = palette::color(&style.accent);
    let shadow = palette::color(&style.shadow);

    f.render_widget(
        Block::default().style(Style::default().bg(bg).fg(fg)),
        f.area(),
    );

    if let Some(gear) = layout.gear {
        let button = Paragraph::new(Line::from(view.gear))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(accent)),
            )
            .style(Style::default().bg(shadow).fg(fg));
        f.render_widget(button, gear);
    }

    let bold = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    centered_line(f, layout.icon, Line::from(view.icon));
    block_or_line(f, layout.label, &layout.headline, layout.big_label, bold);
    centered_line(f, layout.date, Line::from(view.date_line.as_str()));
    block_or_line(f, layout.time, &view.time_line, layout.big_time, bold);

    if let (Some(area), Some(updated)) = (layout.updated, view.updated_line.as_deref()) {
        let line = Line::from(vec![
            Span::raw(view.clock_icon),
            Span::raw(" "),
            Span::raw(updated),
        ])
        .style(Style::default().bg(shadow).fg(fg));
        centered_line(f, area, line);
    }

    if let Some(hint) = layout.hint {
        centered_line(
            f,
            hint,
            Line::styled(
                view.hint,
                Style::default().fg(accent).add_modifier(Modifier::DIM),
            ),
        );
    }
}

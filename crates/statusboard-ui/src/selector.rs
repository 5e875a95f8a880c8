use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::layout::SelectorLayout;
use crate::palette::{self, SELECTOR_BACKGROUND, SELECTOR_MUTED, SELECTOR_PANEL, SELECTOR_TEXT};
use crate::view::{SelectorEntry, SelectorView, CLEAR_LABEL};

/// Draw the status picker: a panel of colored tiles plus the clear button
/// when a status is set. `highlight` is the keyboard cursor.
pub fn render_selector(
    f: &mut Frame,
    layout: &SelectorLayout,
    view: &SelectorView<'_>,
    highlight: Option<usize>,
) {
    let text = palette::color(SELECTOR_TEXT);
    let muted = palette::color(SELECTOR_MUTED);

    f.render_widget(
        Block::default().style(Style::default().bg(palette::color(SELECTOR_BACKGROUND))),
        f.area(),
    );
    if layout.panel.is_empty() {
        return;
    }

    let panel = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(muted))
        .style(Style::default().bg(palette::color(SELECTOR_PANEL)).fg(text));
    f.render_widget(panel, layout.panel);

    f.render_widget(
        Paragraph::new(Line::from(view.title))
            .alignment(Alignment::Center)
            .style(Style::default().fg(text).add_modifier(Modifier::BOLD)),
        layout.title,
    );
    f.render_widget(
        Paragraph::new(Line::from(view.subtitle))
            .alignment(Alignment::Center)
            .style(Style::default().fg(muted)),
        layout.subtitle,
    );

    for (entry, rect) in view.entries.iter().zip(&layout.tiles) {
        if rect.is_empty() {
            continue;
        }
        render_tile(f, *rect, entry, highlight == Some(entry.index));
    }

    if let Some(rect) = layout.clear.filter(|r| view.show_clear && !r.is_empty()) {
        let label = Line::from(format!("[c] {CLEAR_LABEL}"));
        let bold = Style::default().fg(text).add_modifier(Modifier::BOLD);
        // Too short for a border: a filled bar instead.
        let button = if rect.height >= 3 {
            Paragraph::new(label).style(bold).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(muted)),
            )
        } else {
            Paragraph::new(label).style(bold.bg(muted))
        }
        .alignment(Alignment::Center);
        f.render_widget(button, rect);
    }
}

fn render_tile(f: &mut Frame, area: Rect, entry: &SelectorEntry<'_>, highlighted: bool) {
    let style = &entry.status.style;
    let bg = palette::color(&style.background);
    let fg = palette::color(&style.text);

    if area.height < 3 {
        render_flat_tile(f, area, entry, highlighted, bg, fg);
        return;
    }

    let (border_type, border_fg) = if highlighted {
        (BorderType::Thick, Color::White)
    } else {
        (BorderType::Rounded, palette::color(&style.accent))
    };

    let mut block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(border_fg))
        .style(Style::default().bg(bg).fg(fg));
    if let Some(key) = entry.key {
        block = block.title(Line::from(format!(" {key} ")));
    }
    if entry.current {
        block = block.title(Line::from(" ● ").right_aligned());
    }

    // Tall tiles stack icon over label; short ones put them on one line.
    let lines = if area.height >= 5 {
        vec![
            Line::from(entry.icon),
            Line::from(""),
            Line::from(entry.status.label.as_str()),
        ]
    } else {
        // Keep the label whole when icon and label do not both fit.
        let both = format!("{} {}", entry.icon, entry.status.label);
        if both.width() > area.width.saturating_sub(2) as usize {
            vec![Line::from(entry.status.label.as_str())]
        } else {
            vec![Line::from(both)]
        }
    };

    let mut label_style = Style::default().fg(fg);
    if highlighted {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(label_style)
            .block(block),
        area,
    );
}

/// Single-row tile without a border: `▸ 1 🚻 In Washroom ●`.
fn render_flat_tile(
    f: &mut Frame,
    area: Rect,
    entry: &SelectorEntry<'_>,
    highlighted: bool,
    bg: Color,
    fg: Color,
) {
    let mut text = String::from(if highlighted { "▸ " } else { "  " });
    if let Some(key) = entry.key {
        text.push(key);
        text.push(' ');
    }
    text.push_str(entry.icon);
    text.push(' ');
    text.push_str(&entry.status.label);
    if entry.current {
        text.push_str(" ●");
    }

    let mut style = Style::default().bg(bg).fg(fg);
    if highlighted {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    f.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

//! Screen geometry and hit regions.
//!
//! Layouts are computed before drawing and kept by the app so mouse clicks
//! can be mapped back to actions with [`ScreenLayout::hit`]. Both screens
//! pick the roomiest arrangement that fits the terminal, giving up spacing
//! and chrome before any status text is clipped.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::digits;
use crate::view::{DisplayView, SelectorView, View, CLEAR_LABEL};

pub const GEAR_WIDTH: u16 = 7;
pub const GEAR_HEIGHT: u16 = 3;

const PANEL_MAX_WIDTH: u16 = 96;
const TILE_TALL: u16 = 5;
const TILE_SHORT: u16 = 3;
/// Borderless single-line tile.
pub const TILE_FLAT: u16 = 1;
const WIDE_TILE_MIN: u16 = 18;
const NARROW_TILE_MIN: u16 = 12;
const TILE_GAP: u16 = 1;
const CLEAR_HEIGHT: u16 = 3;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Status(usize),
    Clear,
    Settings,
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLayout {
    pub panel: Rect,
    pub title: Rect,
    pub subtitle: Rect,
    pub tiles: Vec<Rect>,
    pub columns: u16,
    pub tile_height: u16,
    pub clear: Option<Rect>,
}

#[derive(Debug, Clone, Copy)]
struct SelectorPlan {
    tile_height: u16,
    row_gap: u16,
    clear_height: u16,
    /// Blank rows under the subtitle and above the clear button.
    spacer: u16,
}

const fn selector_plan(
    tile_height: u16,
    row_gap: u16,
    clear_height: u16,
    spacer: u16,
) -> SelectorPlan {
    SelectorPlan {
        tile_height,
        row_gap,
        clear_height,
        spacer,
    }
}

const SELECTOR_PLANS: [SelectorPlan; 6] = [
    selector_plan(TILE_TALL, TILE_GAP, CLEAR_HEIGHT, 1),
    selector_plan(TILE_SHORT, TILE_GAP, CLEAR_HEIGHT, 1),
    selector_plan(TILE_SHORT, 0, CLEAR_HEIGHT, 1),
    selector_plan(TILE_SHORT, 0, 1, 0),
    selector_plan(TILE_FLAT, 0, CLEAR_HEIGHT, 1),
    selector_plan(TILE_FLAT, 0, 1, 0),
];

impl SelectorPlan {
    fn grid_height(&self, rows: u16) -> u16 {
        rows * self.tile_height + rows.saturating_sub(1) * self.row_gap
    }

    fn panel_height(&self, rows: u16, show_clear: bool) -> u16 {
        let clear = if show_clear {
            self.spacer + self.clear_height
        } else {
            0
        };
        // borders + title + subtitle
        2 + 2 + self.spacer + self.grid_height(rows) + clear
    }
}

fn columns_for(inner_width: u16, entries: usize) -> u16 {
    let fits = |cols: u16, min: u16| inner_width >= cols * min + (cols - 1) * TILE_GAP;
    let cols = if entries >= 4 && fits(4, WIDE_TILE_MIN) {
        4
    } else if entries >= 2 && fits(2, NARROW_TILE_MIN) {
        2
    } else {
        1
    };
    cols.min(entries.max(1) as u16)
}

/// Panel with title, subtitle, a grid of tiles (4 columns when wide enough,
/// else 2, else 1) and an optional clear button underneath.
///
/// Tiles shrink from tall to short to a single borderless row, and the
/// spacing and clear button tighten, until the whole catalog fits.
pub fn selector_layout(area: Rect, entries: usize, show_clear: bool) -> SelectorLayout {
    let panel_width = area.width.saturating_sub(2).min(PANEL_MAX_WIDTH);
    let inner_width = panel_width.saturating_sub(4);
    let columns = columns_for(inner_width, entries);
    let rows = entries.div_ceil(columns as usize) as u16;

    let plan = SELECTOR_PLANS
        .iter()
        .copied()
        .find(|p| p.panel_height(rows, show_clear) <= area.height)
        .unwrap_or(SELECTOR_PLANS[SELECTOR_PLANS.len() - 1]);

    let panel = centered(area, panel_width, plan.panel_height(rows, show_clear));
    let inner = Rect {
        x: panel.x + 2,
        y: panel.y + 1,
        width: inner_width.min(panel.width.saturating_sub(4)),
        height: panel.height.saturating_sub(2),
    };

    let (clear_spacer, clear_height) = if show_clear {
        (plan.spacer, plan.clear_height)
    } else {
        (0, 0)
    };
    let chunks = Layout::vertical([
        Constraint::Length(1),           // title
        Constraint::Length(1),           // subtitle
        Constraint::Length(plan.spacer), // blank
        Constraint::Length(plan.grid_height(rows)),
        Constraint::Length(clear_spacer),
        Constraint::Length(clear_height),
        Constraint::Min(0),
    ])
    .split(inner);

    let grid = chunks[3];
    let tile_width = grid.width.saturating_sub((columns - 1) * TILE_GAP) / columns;
    let tiles = (0..entries)
        .map(|i| {
            let col = (i % columns as usize) as u16;
            let row = (i / columns as usize) as u16;
            Rect {
                x: grid.x + col * (tile_width + TILE_GAP),
                y: grid.y + row * (plan.tile_height + plan.row_gap),
                width: tile_width,
                height: plan.tile_height,
            }
            .intersection(grid)
        })
        .collect();

    let clear = show_clear.then(|| {
        let width = CLEAR_LABEL.width() as u16 + 10;
        centered(chunks[5], width, plan.clear_height)
    });

    SelectorLayout {
        panel,
        title: chunks[0],
        subtitle: chunks[1],
        tiles,
        columns,
        tile_height: plan.tile_height,
        clear,
    }
}

impl SelectorLayout {
    pub fn hit(&self, pos: Position) -> Option<HitTarget> {
        if let Some(i) = self.tiles.iter().position(|t| t.contains(pos)) {
            return Some(HitTarget::Status(i));
        }
        match self.clear {
            Some(clear) if clear.contains(pos) => Some(HitTarget::Clear),
            _ => None,
        }
    }
}

/// Label drawn on the display screen: spaced capitals when they fit,
/// plain capitals otherwise.
pub fn headline(label: &str, max_width: u16) -> String {
    let upper = label.to_uppercase();
    let spaced = upper
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    if spaced.width() <= max_width as usize {
        spaced
    } else {
        upper
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLayout {
    pub gear: Option<Rect>,
    /// Everything from the icon down to the updated line; clicking it opens
    /// the selector.
    pub status_block: Rect,
    pub icon: Rect,
    pub label: Rect,
    /// Label drawn in block letters rather than plain text.
    pub big_label: bool,
    pub date: Rect,
    pub time: Rect,
    /// Clock drawn in block digits rather than plain text.
    pub big_time: bool,
    pub updated: Option<Rect>,
    pub hint: Option<Rect>,
    pub headline: String,
}

#[derive(Debug, Clone, Copy)]
struct DisplayPlan {
    big_label: bool,
    big_time: bool,
    /// Blank row between consecutive lines of the status block.
    gaps: bool,
    gear: bool,
    hint: bool,
}

const fn display_plan(
    big_label: bool,
    big_time: bool,
    gaps: bool,
    gear: bool,
    hint: bool,
) -> DisplayPlan {
    DisplayPlan {
        big_label,
        big_time,
        gaps,
        gear,
        hint,
    }
}

// Block letters go first, then the blank rows, then the gear band, then the
// hint. The status lines themselves are never dropped.
const DISPLAY_PLANS: [DisplayPlan; 7] = [
    display_plan(true, true, true, true, true),
    display_plan(true, false, true, true, true),
    display_plan(false, true, true, true, true),
    display_plan(false, false, true, true, true),
    display_plan(false, false, false, true, true),
    display_plan(false, false, false, false, true),
    display_plan(false, false, false, false, false),
];

impl DisplayPlan {
    /// Heights of icon, label, date, time and (if shown) the updated line.
    fn line_heights(&self, has_updated: bool) -> Vec<u16> {
        let big = |on: bool| if on { digits::GLYPH_ROWS as u16 } else { 1 };
        let mut heights = vec![1, big(self.big_label), 1, big(self.big_time)];
        if has_updated {
            heights.push(1);
        }
        heights
    }

    fn gap(&self) -> u16 {
        u16::from(self.gaps)
    }

    fn block_height(&self, has_updated: bool) -> u16 {
        let heights = self.line_heights(has_updated);
        let gaps = (heights.len() as u16 - 1) * self.gap();
        heights.iter().sum::<u16>() + gaps
    }

    fn top(&self) -> u16 {
        if self.gear {
            GEAR_HEIGHT + 1
        } else {
            0
        }
    }

    fn bottom(&self) -> u16 {
        if self.hint {
            2
        } else {
            0
        }
    }

    fn height(&self, has_updated: bool) -> u16 {
        self.top() + self.block_height(has_updated) + self.bottom()
    }
}

pub fn display_layout(area: Rect, view: &DisplayView<'_>) -> DisplayLayout {
    let upper = view.status.label.to_uppercase();
    let big_label_width = digits::width(&upper);
    let big_time_width = digits::width(&view.time_line);
    let has_updated = view.updated_line.is_some();

    let wide_enough = |w: Option<u16>| w.is_some_and(|w| w + 4 <= area.width);
    let plan = DISPLAY_PLANS
        .iter()
        .copied()
        .find(|p| {
            (!p.big_label || wide_enough(big_label_width))
                && (!p.big_time || wide_enough(big_time_width))
                && (!p.gear || area.width >= GEAR_WIDTH + 4)
                && p.height(has_updated) <= area.height
        })
        .unwrap_or(DISPLAY_PLANS[DISPLAY_PLANS.len() - 1]);

    let gear = plan.gear.then(|| Rect {
        x: area.x + area.width - GEAR_WIDTH - 2,
        y: area.y + 1,
        width: GEAR_WIDTH,
        height: GEAR_HEIGHT,
    });
    let hint = (plan.hint && area.height >= 2).then(|| Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    });

    let top = plan.top().min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: area.height.saturating_sub(top + plan.bottom()),
    };

    let headline_text = if plan.big_label {
        upper
    } else {
        headline(&view.status.label, body.width.saturating_sub(4))
    };
    let label_width = match big_label_width.filter(|_| plan.big_label) {
        Some(w) => w,
        None => headline_text.width() as u16,
    };
    let time_width = match big_time_width.filter(|_| plan.big_time) {
        Some(w) => w,
        None => view.time_line.width() as u16,
    };
    let updated_width = view
        .updated_line
        .as_ref()
        .map(|l| l.width() + view.clock_icon.width() + 1)
        .unwrap_or(0) as u16;
    let widest = [
        view.icon.width() as u16,
        label_width,
        view.date_line.width() as u16,
        time_width,
        updated_width,
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    let status_block = centered(body, widest + 4, plan.block_height(has_updated));
    let mut lines = plan
        .line_heights(has_updated)
        .into_iter()
        .scan(status_block.y, |y, height| {
            let rect = Rect {
                x: status_block.x,
                y: *y,
                width: status_block.width,
                height,
            }
            .intersection(status_block);
            *y = y.saturating_add(height + plan.gap());
            Some(rect)
        });
    let icon = lines.next().unwrap_or_default();
    let label = lines.next().unwrap_or_default();
    let date = lines.next().unwrap_or_default();
    let time = lines.next().unwrap_or_default();
    let updated = lines.next();

    DisplayLayout {
        gear,
        status_block,
        icon,
        label,
        big_label: plan.big_label,
        date,
        time,
        big_time: plan.big_time,
        updated,
        hint,
        headline: headline_text,
    }
}

impl DisplayLayout {
    pub fn hit(&self, pos: Position) -> Option<HitTarget> {
        let on_gear = self.gear.is_some_and(|g| g.contains(pos));
        if on_gear || self.status_block.contains(pos) {
            Some(HitTarget::Settings)
        } else {
            None
        }
    }
}

/// Geometry of whichever screen was last drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenLayout {
    Selector(SelectorLayout),
    Display(DisplayLayout),
}

impl ScreenLayout {
    pub fn compute(area: Rect, view: &View<'_>) -> Self {
        match view {
            View::Selector(sel) => ScreenLayout::Selector(selector_for(area, sel)),
            View::Display(d) => ScreenLayout::Display(display_layout(area, d)),
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        match self {
            ScreenLayout::Selector(l) => l.hit(pos),
            ScreenLayout::Display(l) => l.hit(pos),
        }
    }
}

fn selector_for(area: Rect, view: &SelectorView<'_>) -> SelectorLayout {
    selector_layout(area, view.entries.len(), view.show_clear)
}

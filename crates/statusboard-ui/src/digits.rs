//! Block-letter rendering for the large clock and label on the display
//! screen.

use unicode_width::UnicodeWidthStr;

/// Rows in every glyph.
pub const GLYPH_ROWS: usize = 5;

fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        ' ' => ["  ", "  ", "  ", "  ", "  "],
        '-' => ["   ", "   ", "███", "   ", "   "],
        '.' => [" ", " ", " ", " ", "█"],
        '!' => ["█", "█", "█", " ", "█"],
        '\'' => ["█", "█", " ", " ", " "],
        '/' => ["  █", "  █", " █ ", "█  ", "█  "],
        'A' => ["███", "█ █", "███", "█ █", "█ █"],
        'B' => ["██ ", "█ █", "██ ", "█ █", "██ "],
        'C' => ["███", "█  ", "█  ", "█  ", "███"],
        'D' => ["██ ", "█ █", "█ █", "█ █", "██ "],
        'E' => ["███", "█  ", "██ ", "█  ", "███"],
        'F' => ["███", "█  ", "██ ", "█  ", "█  "],
        'G' => ["███", "█  ", "█ █", "█ █", "███"],
        'H' => ["█ █", "█ █", "███", "█ █", "█ █"],
        'I' => ["███", " █ ", " █ ", " █ ", "███"],
        'J' => ["  █", "  █", "  █", "█ █", "███"],
        'K' => ["█ █", "█ █", "██ ", "█ █", "█ █"],
        'L' => ["█  ", "█  ", "█  ", "█  ", "███"],
        'M' => ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'N' => ["█  █", "██ █", "█ ██", "█  █", "█  █"],
        'O' => ["███", "█ █", "█ █", "█ █", "███"],
        'P' => ["███", "█ █", "███", "█  ", "█  "],
        'Q' => ["███", "█ █", "█ █", "███", "  █"],
        'R' => ["███", "█ █", "██ ", "█ █", "█ █"],
        'S' => ["███", "█  ", "███", "  █", "███"],
        'T' => ["███", " █ ", " █ ", " █ ", " █ "],
        'U' => ["█ █", "█ █", "█ █", "█ █", "███"],
        'V' => ["█ █", "█ █", "█ █", "█ █", " █ "],
        'W' => ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
        'X' => ["█ █", "█ █", " █ ", "█ █", "█ █"],
        'Y' => ["█ █", "█ █", " █ ", " █ ", " █ "],
        'Z' => ["███", "  █", " █ ", "█  ", "███"],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as five rows of block glyphs, one column of space between
/// glyphs. Returns `None` if any character has no glyph, so callers can fall
/// back to plain text.
pub fn render(text: &str) -> Option<Vec<String>> {
    let glyphs = text
        .chars()
        .map(|ch| glyph(ch.to_ascii_uppercase()))
        .collect::<Option<Vec<_>>>()?;

    let mut rows = vec![String::new(); GLYPH_ROWS];
    for (i, g) in glyphs.iter().enumerate() {
        for (row, line) in rows.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(g[row]);
        }
    }
    Some(rows)
}

/// Display width of the block rendering, or `None` if it cannot be rendered.
pub fn width(text: &str) -> Option<u16> {
    let rows = render(text)?;
    let widest = rows.iter().map(|r| r.width()).max().unwrap_or(0);
    Some(widest as u16)
}

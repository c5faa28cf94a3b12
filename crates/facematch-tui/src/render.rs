use crate::app::{App, Focus, PICKER_ROWS};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use facematch_core::{
    assets, messages, Attribute, ColorFilter, ValueIndex, ATTRIBUTE_VALUES, TARGET_TILE,
    TILE_COUNT,
};
use std::io;

/// Width of one tile in columns
const CELL_WIDTH: u16 = 6;

/// Shape glyphs, by shape index: circle, hexagon, rhombus, square
const SHAPE_GLYPHS: [&str; 4] = ["●", "⬢", "◆", "■"];

/// Faces, by expression index: angry, glasses, happy, tongue
const FACE_TEXT: [&str; 4] = [">:(", "B-)", ":-)", ":-P"];

fn shape_glyph(shape: ValueIndex) -> &'static str {
    SHAPE_GLYPHS[shape.as_usize()]
}

fn face_text(expression: ValueIndex) -> &'static str {
    FACE_TEXT[expression.as_usize()]
}

fn tint(color: ValueIndex) -> Color {
    let (r, g, b) = ColorFilter::for_color(color).rgb();
    Color::Rgb { r, g, b }
}

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    let mystery_width = TILE_COUNT as u16 * CELL_WIDTH + 2;
    let start_x = term_width.saturating_sub(mystery_width) / 2;
    let start_y = 1;

    render_mystery_row(stdout, app, start_x, start_y)?;

    let picker_y = start_y + 4;
    render_picker(stdout, app, start_x + 4, picker_y)?;

    let preview_x = start_x + mystery_width.saturating_sub(16);
    render_preview(stdout, app, preview_x, picker_y)?;

    let bottom_y = picker_y + PICKER_ROWS as u16 + 3;
    if app.puzzle.is_complete() {
        render_celebration(stdout, app, start_x, bottom_y, mystery_width)?;
    }

    render_controls(stdout, app, start_x, bottom_y + 2)?;
    render_status(stdout, app, term_width, term_height)?;

    if app.show_help {
        render_help(stdout, app, term_width, term_height)?;
    }

    execute!(stdout, ResetColor, Show)?;
    Ok(())
}

fn render_box(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    inner_width: u16,
    inner_height: u16,
    title: &str,
) -> io::Result<()> {
    let horizontal = "─".repeat(inner_width as usize);
    execute!(
        stdout,
        SetForegroundColor(app.theme.border),
        MoveTo(x, y),
        Print(format!("┌{}┐", horizontal)),
        MoveTo(x + 2, y),
        SetForegroundColor(app.theme.title),
        Print(format!(" {} ", title)),
        SetForegroundColor(app.theme.border),
    )?;
    for row in 0..inner_height {
        execute!(
            stdout,
            MoveTo(x, y + 1 + row),
            Print("│"),
            MoveTo(x + inner_width + 1, y + 1 + row),
            Print("│"),
        )?;
    }
    execute!(
        stdout,
        MoveTo(x, y + inner_height + 1),
        Print(format!("└{}┘", horizontal))
    )
}

fn render_mystery_row(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    render_box(
        stdout,
        app,
        x,
        y,
        TILE_COUNT as u16 * CELL_WIDTH,
        1,
        &format!("{} {}", messages::LEVEL, app.puzzle.display_level()),
    )?;

    for index in 0..TILE_COUNT {
        let cell_x = x + 1 + index as u16 * CELL_WIDTH;
        let focused = index == TARGET_TILE && app.focus == Focus::Target;
        let bg = if focused { theme.cursor_bg } else { theme.bg };
        execute!(stdout, MoveTo(cell_x, y + 1), SetBackgroundColor(bg))?;

        match app.puzzle.revealed_solution(index) {
            Some(solution) => execute!(
                stdout,
                Print(" "),
                SetForegroundColor(tint(solution.color)),
                Print(shape_glyph(solution.shape)),
                SetForegroundColor(theme.fg),
                Print(face_text(solution.expression)),
                Print(" "),
            )?,
            None => {
                // The question mark leans with the wobble
                let angle = app.puzzle.wobble_angle();
                let text = if angle > 0.0 {
                    "   ?  "
                } else if angle < 0.0 {
                    " ?    "
                } else {
                    "  ?   "
                };
                execute!(stdout, SetForegroundColor(theme.mystery), Print(text))?;
            }
        }
    }
    execute!(stdout, SetBackgroundColor(theme.bg))
}

fn render_picker(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    render_box(
        stdout,
        app,
        x,
        y,
        ATTRIBUTE_VALUES as u16 * CELL_WIDTH,
        PICKER_ROWS as u16,
        messages::PICKER_TITLE,
    )?;

    let selection = app.puzzle.combination();
    for attribute in Attribute::ALL {
        let row = attribute.index();
        for value in ValueIndex::ALL {
            let col = value.as_usize();
            let focused = app.focus == Focus::Picker { row, col };
            let chosen = selection.get(attribute) == Some(value);
            let bg = if focused { theme.cursor_bg } else { theme.bg };
            let marker = if chosen { "›" } else { " " };

            execute!(
                stdout,
                MoveTo(x + 1 + col as u16 * CELL_WIDTH, y + 1 + row as u16),
                SetBackgroundColor(bg),
                SetForegroundColor(theme.key),
                Print(marker),
            )?;
            match attribute {
                Attribute::Shape => execute!(
                    stdout,
                    SetForegroundColor(theme.fg),
                    Print(format!(" {}   ", shape_glyph(value)))
                )?,
                Attribute::Color => execute!(
                    stdout,
                    SetForegroundColor(tint(value)),
                    Print(format!(" {}   ", shape_glyph(ValueIndex::ALL[0])))
                )?,
                Attribute::Expression => execute!(
                    stdout,
                    SetForegroundColor(theme.fg),
                    Print(format!("{}  ", face_text(value)))
                )?,
            }
        }
    }
    execute!(stdout, SetBackgroundColor(theme.bg))
}

fn render_preview(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let preview = app.puzzle.preview();
    render_box(stdout, app, x, y, 12, PICKER_ROWS as u16, "?")?;

    execute!(stdout, MoveTo(x + 4, y + 2))?;
    if preview.try_again {
        execute!(stdout, SetForegroundColor(theme.error), Print("✗ ✗"))?;
    } else {
        let color = preview.color.map(tint).unwrap_or(theme.fg);
        let shape = preview.shape.map(shape_glyph).unwrap_or(" ");
        let face = preview.expression.map(face_text).unwrap_or("   ");
        execute!(
            stdout,
            SetForegroundColor(color),
            Print(shape),
            SetForegroundColor(theme.fg),
            Print(face),
        )?;
    }
    Ok(())
}

fn render_celebration(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    width: u16,
) -> io::Result<()> {
    let mut banner = match app.puzzle.success_image() {
        image if image == assets::SUCCESS_IMAGES[1] => format!("🦁  {}  🦁", messages::BRAVO),
        _ => format!("❀  {}  ❀", messages::BRAVO),
    };
    if app.advance_pending() {
        banner.push_str("  →");
    }
    let banner_width = banner.chars().count() as u16;
    execute!(
        stdout,
        MoveTo(x + width.saturating_sub(banner_width) / 2, y),
        SetForegroundColor(app.theme.success),
        Print(&banner)
    )
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let keys = ["←↑↓→", "Enter", "Space", "n/p", "?", "a", "q"];
    execute!(stdout, MoveTo(x, y))?;
    for (key, label) in keys.into_iter().zip(messages::CONTROL_LABELS) {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}  ", label)),
        )?;
    }
    Ok(())
}

/// Level status in the bottom-right corner, any message at the bottom left
fn render_status(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let y = term_height.saturating_sub(1);
    let status = messages::level_status(app.puzzle.display_level());
    let status_width = status.chars().count() as u16;
    execute!(
        stdout,
        MoveTo(term_width.saturating_sub(status_width + 1), y),
        SetForegroundColor(app.theme.info),
        Print(&status),
    )?;
    if let Some(ref msg) = app.message {
        execute!(
            stdout,
            MoveTo(1, y),
            SetForegroundColor(app.theme.fg),
            Print(msg)
        )?;
    }
    Ok(())
}

fn render_help(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let width = term_width.saturating_sub(8).clamp(20, 60);
    let lines = wrap(messages::HELP, width as usize - 2);
    let height = lines.len() as u16;
    let x = term_width.saturating_sub(width + 2) / 2;
    let y = term_height.saturating_sub(height + 2) / 2;

    for row in 0..height + 2 {
        execute!(
            stdout,
            MoveTo(x, y + row),
            Print(" ".repeat(width as usize + 2))
        )?;
    }
    render_box(stdout, app, x, y, width, height, messages::HELP_TITLE)?;
    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x + 2, y + 1 + i as u16),
            SetForegroundColor(app.theme.fg),
            Print(line)
        )?;
    }
    Ok(())
}

/// Greedy word wrap by character count
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap(messages::HELP, 30);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.chars().count() <= 30));
        assert_eq!(lines.join(" "), messages::HELP);
    }

    #[test]
    fn test_tints_follow_color_filter() {
        assert_eq!(
            tint(ValueIndex::ALL[0]),
            Color::Rgb {
                r: 255,
                g: 128,
                b: 128
            }
        );
        assert_eq!(
            tint(ValueIndex::ALL[3]),
            Color::Rgb {
                r: 255,
                g: 255,
                b: 128
            }
        );
    }

    #[test]
    fn test_glyph_tables_cover_every_value() {
        for value in ValueIndex::ALL {
            assert!(!shape_glyph(value).is_empty());
            assert_eq!(face_text(value).chars().count(), 3);
        }
    }
}

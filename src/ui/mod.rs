pub mod header;
pub mod lists;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::render::RegionId;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &app.page, &app.theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(chunks[1]);

    for (region, area) in RegionId::LISTS.into_iter().zip(columns.iter()) {
        lists::render(
            frame,
            *area,
            lists::ListView {
                region,
                items: app.page.list(region).unwrap_or_default(),
                offset: app.scroll_offset(region),
                focused: app.focus == region,
            },
            &app.theme,
        );
    }

    statusbar::render(frame, chunks[2], &app.endpoint, app.interval, &app.theme);
}

#[cfg(test)]
mod tests;

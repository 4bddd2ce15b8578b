use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::render::RegionId;
use crate::ui::theme::Theme;

pub struct ListView<'a> {
    pub region: RegionId,
    pub items: &'a [String],
    pub offset: usize,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, view: ListView<'_>, theme: &Theme) {
    let border_color = if view.focused {
        theme.focus_border
    } else {
        theme.overlay_border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ({}) ", view.region.title(), view.items.len()),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = visible_lines(view.items, view.offset, inner.width, inner.height);
    let paragraph = Paragraph::new(lines).style(Style::default().fg(theme.text_primary));
    frame.render_widget(paragraph, inner);
}

fn visible_lines(items: &[String], offset: usize, width: u16, height: u16) -> Vec<Line<'static>> {
    let max_width = (width as usize).saturating_sub(1);
    items
        .iter()
        .skip(offset)
        .take(height as usize)
        .map(|item| Line::from(format!(" {}", truncate_unicode(item, max_width))))
        .collect()
}

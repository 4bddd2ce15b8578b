use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::render::{Page, RegionId};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        " sysmonitor ",
        Style::default()
            .fg(theme.header_accent_fg)
            .bg(theme.header_accent_bg)
            .add_modifier(Modifier::BOLD),
    )];

    for region in [RegionId::TotalMemory, RegionId::UsedMemory] {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{}: ", region.title()),
            Style::default().fg(theme.text_secondary),
        ));
        spans.push(Span::styled(
            page.text(region).unwrap_or_default().to_string(),
            Style::default()
                .fg(theme.value_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

use promptgenius_core::about::{AboutPage, Section};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Render the about page into `area`, scrolled down by `scroll` lines.
pub fn render(frame: &mut Frame, page: &AboutPage, scroll: u16, area: Rect) {
    let heading = Style::default().fg(Color::Cyan).bold();
    let mut lines = vec![
        Line::from(Span::styled(page.title, heading)),
        Line::from(Span::styled(page.tagline, Style::default().fg(Color::Gray))),
        Line::raw(""),
        Line::from(Span::styled(page.mission.title, heading)),
        Line::raw(page.mission.body),
        Line::raw(""),
    ];
    push_sections(&mut lines, page.features);
    lines.push(Line::from(Span::styled(page.values_heading, heading)));
    lines.push(Line::raw(""));
    push_sections(&mut lines, page.values);

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_sections(lines: &mut Vec<Line<'static>>, sections: &'static [Section]) {
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default().fg(Color::Yellow).bold(),
        )));
        lines.push(Line::raw(section.body));
        lines.push(Line::raw(""));
    }
}

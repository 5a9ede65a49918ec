use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::game::game_lines;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::loader::loader_widget;
use crate::ui::quiz::Status;
use crate::ui::result::result_line;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, INCORRECT, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    let category = state
        .question
        .as_ref()
        .map(|q| q.question.category.as_str());
    frame.render_widget(Header::new().widget(state.score, category), header);
    frame.render_widget(Clear, body);

    match app.status() {
        Status::Idle | Status::Fetching => {
            let area = centered_rect_by_size(body, body.width, 1);
            frame.render_widget(loader_widget(app.spinner_tick()), area);
        }
        Status::Error => draw_error(frame, body, app.last_error()),
        Status::Ready | Status::Answered => {
            let mut lines = game_lines(state, app.selection());
            if let Some(result) = result_line(state) {
                lines.push(Line::from(""));
                lines.push(result);
            }
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .padding(Padding::horizontal(1));
            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
                body,
            );
        }
    }

    frame.render_widget(Footer::new().widget(footer, app.status()), footer);
}

fn draw_error(frame: &mut Frame<'_>, body: Rect, detail: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        "Something went wrong while fetching a question.",
        Style::default().fg(INCORRECT).add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(TEXT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press r to reload or q to quit.",
        Style::default().fg(TEXT).add_modifier(Modifier::DIM),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, content_width.saturating_add(4), height);

    let block = Block::default()
        .title(Span::styled(" Error ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(INCORRECT));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

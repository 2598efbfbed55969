//! Panel rendering: header, announcements, submission form, works.
//!
//! Draws the core's `ListView` values verbatim: placeholder slots while a
//! collection loads, the empty indicator when there is nothing to show,
//! otherwise the items in backend order.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use karya_core::view::{tag_chip, ListView};
use karya_core::{Announcement, DraftField, StatusKind, Work};

use crate::app::{Focus, RenderModel, FORM_ROWS, SUBMIT_ROW};

const PLACEHOLDER_BAR: &str = "░░░░░░░░░░░░░░░░░░░░░░░░";
const FORM_LABEL_WIDTH: usize = 23;
const SEARCH_PREFIX: &str = "Cari judul/penulis: ";

pub fn draw(frame: &mut Frame, model: &RenderModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(frame.area());

    draw_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_announcements(frame, body[0], model);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_ROWS as u16 + 2), Constraint::Min(5)])
        .split(body[1]);

    draw_form(frame, right[0], model);
    draw_works(frame, right[1], model);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "KIR",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "Komunitas Karya Ilmiah Remaja",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        "Pengumuman terbaru & wadah unggah karya anak muda | Tab pindah fokus, Esc keluar",
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(
        Paragraph::new(vec![title, subtitle]).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_announcements(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default().borders(Borders::ALL).title("Pengumuman");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = list_lines(&model.announcements, announcement_lines);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_works(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default().borders(Borders::ALL).title("Eksplor Karya");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let search_style = if model.focus == Focus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search_line = Line::from(vec![
        Span::styled(SEARCH_PREFIX, Style::default().add_modifier(Modifier::DIM)),
        Span::styled(model.search.clone(), search_style),
    ]);
    frame.render_widget(Paragraph::new(search_line), rows[0]);

    if model.focus == Focus::Search {
        let x = rows[0].x + (SEARCH_PREFIX.width() + model.search.width()) as u16;
        frame.set_cursor_position((x.min(rows[0].right().saturating_sub(1)), rows[0].y));
    }

    let lines = list_lines(&model.works, work_lines);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);
}

fn draw_form(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default().borders(Borders::ALL).title("Unggah Karya");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(FORM_ROWS);
    for (row, field) in DraftField::ALL.iter().enumerate() {
        let selected = model.focus == Focus::Form && model.form_row == row;
        let label_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", field_label(*field), width = FORM_LABEL_WIDTH),
                label_style,
            ),
            Span::raw(model.submission.draft.get(*field).to_string()),
        ]));
    }

    let submitting = model.submission.submitting;
    let button = if submitting { "Mengirim..." } else { "Kirim Karya" };
    let mut button_style = if submitting {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    };
    if model.focus == Focus::Form && model.form_row == SUBMIT_ROW {
        button_style = button_style.fg(Color::Yellow);
    }

    let mut submit_spans = vec![Span::styled(format!("[ {} ]", button), button_style)];
    if let Some(message) = &model.submission.message {
        let color = match message.kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        submit_spans.push(Span::raw("  "));
        submit_spans.push(Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        ));
    }
    lines.push(Line::from(submit_spans));

    frame.render_widget(Paragraph::new(lines), inner);

    if model.focus == Focus::Form && model.form_row < SUBMIT_ROW {
        let field = DraftField::ALL[model.form_row];
        let value = model.submission.draft.get(field);
        let x = inner.x + (FORM_LABEL_WIDTH + value.width()) as u16;
        let y = inner.y + model.form_row as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), y));
    }
}

fn list_lines<T>(view: &ListView<T>, item_lines: fn(&T) -> Vec<Line<'static>>) -> Vec<Line<'static>> {
    match view {
        ListView::Placeholders(slots) => (0..*slots)
            .map(|_| {
                Line::from(Span::styled(
                    PLACEHOLDER_BAR,
                    Style::default().add_modifier(Modifier::DIM),
                ))
            })
            .collect(),
        ListView::Empty(label) => vec![Line::from(Span::styled(
            *label,
            Style::default().fg(Color::DarkGray),
        ))],
        ListView::Items(items) => items.iter().flat_map(item_lines).collect(),
    }
}

fn announcement_lines(announcement: &Announcement) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            announcement.display_author().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            announcement.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(announcement.content.clone()),
    ];
    if !announcement.tags.is_empty() {
        let chips = announcement
            .tags
            .iter()
            .map(|tag| tag_chip(tag))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            chips,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn work_lines(work: &Work) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            work.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            work.byline(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !work.description.is_empty() {
        lines.push(Line::from(work.description.clone()));
    }
    if let Some(url) = work.file_url.as_deref().filter(|url| !url.is_empty()) {
        lines.push(Line::from(Span::styled(
            url.to_string(),
            Style::default().fg(Color::Blue),
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => "Judul",
        DraftField::Author => "Penulis/Tim",
        DraftField::Email => "Email",
        DraftField::Description => "Deskripsi",
        DraftField::Category => "Kategori",
        DraftField::FileUrl => "Link File (Drive, dll)",
        DraftField::ThumbnailUrl => "Thumbnail (opsional)",
    }
}

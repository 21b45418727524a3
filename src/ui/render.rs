use crate::api::JobPosting;
use crate::ui::app::{App, FocusPane};
use crate::ui::card::{CardView, TagKind, EMPTY_RESULTS_MESSAGE, LOGO_PLACEHOLDER};
use crate::ui::feedback::{spinner_frame, ToastKind};
use crate::ui::form::FormField;
use crate::ui::modal::{ModalContent, OpenModal, SummaryModal, SUMMARY_CONFIG_HINT, SUMMARY_LOADING_MESSAGE};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rows taken by one card, borders included.
const CARD_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Header + Form + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, theme, main_chunks[0]);
    render_form(frame, app, main_chunks[1]);

    if app.results.is_some() {
        render_results(frame, app, main_chunks[2]);
    } else {
        render_welcome(frame, app, main_chunks[2]);
    }

    render_footer(frame, app, main_chunks[3]);

    if app.loading_overlay {
        render_loading_overlay(frame, app, main_chunks[2]);
    }
    if let SummaryModal::Open(open) = &app.modal {
        render_modal(frame, app, open);
    }
    if app.toast.is_visible() {
        let area = frame.area();
        render_toast(frame, app, area);
    }
}

/// Content rectangle of the summary modal. Clicks outside it close the modal.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(area, 70, 80)
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg_dim)
    }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  🔍 Job Scout",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Find jobs and let AI summarize them",
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form = &app.form;
    let form_focused = app.focus == FocusPane::Form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Min(16),
        ])
        .split(area);

    let is_focused = |field: FormField| form_focused && form.focused == field;

    let text_input = |title: &'static str, value: &str, field: FormField| {
        let mut spans = vec![Span::raw(value.to_string())];
        if is_focused(field) {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(theme, is_focused(field))),
        )
    };

    frame.render_widget(text_input("Job title", &form.query, FormField::Query), chunks[0]);
    frame.render_widget(
        text_input("Location", &form.location, FormField::Location),
        chunks[1],
    );

    let num_jobs = Paragraph::new(format!("◀ {} ▶", form.num_jobs())).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Jobs")
            .border_style(border_style(theme, is_focused(FormField::NumJobs))),
    );
    frame.render_widget(num_jobs, chunks[2]);

    let checkbox = if form.remote_only { "[x]" } else { "[ ]" };
    let remote = Paragraph::new(format!("{checkbox} Remote only")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme, is_focused(FormField::RemoteOnly))),
    );
    frame.render_widget(remote, chunks[3]);

    let label = if app.button.is_loading() {
        Span::styled(
            format!("{} Searching", spinner_frame(app.tick)),
            Style::default().fg(theme.secondary),
        )
    } else {
        Span::styled(
            "Search Jobs",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(Line::from(label))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(theme, is_focused(FormField::SearchButton))),
        );
    frame.render_widget(button, chunks[4]);
}

fn render_welcome(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let elapsed = app.elapsed();
    let buf = frame.buffer_mut();
    if area.width > 0 && area.height > 0 {
        for particle in &app.particles {
            let x = area.x + ((particle.left / 100.0) * f32::from(area.width)) as u16;
            let y = area.y + ((particle.position_at(elapsed) / 100.0) * f32::from(area.height)) as u16;
            if x < area.right() && y < area.bottom() {
                buf[(x, y)]
                    .set_symbol("·")
                    .set_style(Style::default().fg(theme.particle));
            }
        }
    }

    let text = vec![
        Line::from(Span::styled(
            "Find your next job",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter a job title and a location, then press Enter",
            Style::default().fg(theme.fg_dim),
        )),
    ];
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(text).centered(), middle);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(results) = &app.results else {
        return;
    };

    let [summary_area, cards_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let summary = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} jobs found", results.total),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", results.query_line()),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(summary), summary_area);

    if app.cards.is_empty() {
        let empty = Paragraph::new(EMPTY_RESULTS_MESSAGE)
            .style(Style::default().fg(theme.fg_dim))
            .centered()
            .block(Block::default().borders(Borders::ALL).border_style(border_style(theme, false)));
        frame.render_widget(empty, cards_area);
        return;
    }

    let visible = usize::from((cards_area.height / CARD_HEIGHT).max(1));
    let first = app.selected_card.saturating_sub(visible - 1);
    let results_focused = app.focus == FocusPane::Results;

    for (slot, (index, card)) in app.cards.iter().enumerate().skip(first).take(visible).enumerate() {
        let y = cards_area.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(cards_area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(cards_area.x, y, cards_area.width, height);
        let selected = results_focused && index == app.selected_card;
        render_card(frame, theme, card, selected, card_area);
    }
}

fn tag_style(theme: &Theme, kind: TagKind) -> Style {
    let fg = match kind {
        TagKind::Remote => theme.success,
        TagKind::Salary => theme.secondary,
        _ => theme.fg,
    };
    Style::default().fg(fg).bg(theme.surface)
}

fn render_card(frame: &mut Frame, theme: &Theme, card: &CardView, selected: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme, selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [head, tags, description, actions] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Thumbnails cannot be drawn in a terminal, so every card gets the
    // glyph a failed image load falls back to.
    let head_lines = vec![
        Line::from(vec![
            Span::raw(format!("{LOGO_PLACEHOLDER} ")),
            Span::styled(
                card.title.clone(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", card.company),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(head_lines), head);

    let mut chips = Vec::new();
    for tag in &card.tags {
        chips.push(Span::styled(format!(" {} ", tag.label()), tag_style(theme, tag.kind)));
        chips.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), tags);

    frame.render_widget(
        Paragraph::new(card.description.clone())
            .style(Style::default().fg(theme.fg_dim))
            .wrap(Wrap { trim: true }),
        description,
    );

    let action_line = Line::from(vec![
        Span::styled("✨ AI Summary", Style::default().fg(theme.accent)),
        Span::raw("   "),
        Span::styled(
            format!("Apply → {}", card.apply_href()),
            Style::default().fg(theme.fg_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(action_line), actions);
}

fn render_loading_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let popup = centered_rect(area, 40, 30);
    frame.render_widget(Clear, popup);
    let text = Paragraph::new(Line::from(vec![
        Span::styled(spinner_frame(app.tick), Style::default().fg(theme.secondary)),
        Span::raw(" Searching for jobs..."),
    ]))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg)),
    );
    frame.render_widget(text, popup);
}

fn render_toast(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let message = app.toast.message();
    let color = match app.toast.kind() {
        ToastKind::Error => theme.error,
        ToastKind::Notice => theme.success,
    };

    // Borders plus one column of slack on each side
    let len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let max_width = (area.width / 3 * 2).max(area.width.min(40));
    let width = len.saturating_add(4).min(max_width);
    let max_height = (area.height / 2).max(3.min(area.height));
    let mut lines = wrapped_line_count(message, width.saturating_sub(2));
    // The widget's own wrapping can spill one row past the estimate
    if lines > 1 {
        lines += 1;
    }
    let height = u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(max_height);

    let toast_area = Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height.saturating_add(1)),
        width,
        height,
    );
    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(toast, toast_area);
}

/// Greedy word-wrap estimate of how many rows `text` takes at `width`.
fn wrapped_line_count(text: &str, width: u16) -> usize {
    let width = usize::from(width.max(1));
    let mut lines = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        // Words longer than a row are split across rows
        lines += (len.max(1) - 1) / width;
        used = (len - 1) % width + 1;
    }
    lines
}

fn section(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ))
}

fn bullets(items: &[String]) -> impl Iterator<Item = Line<'static>> + '_ {
    items.iter().map(|item| Line::from(format!("  • {item}")))
}

fn posting_details(theme: &Theme, posting: &JobPosting) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(highlights) = posting.highlights.as_ref().filter(|h| !h.is_empty()) {
        for (title, items) in [
            ("Qualifications", &highlights.qualifications),
            ("Responsibilities", &highlights.responsibilities),
        ] {
            if !items.is_empty() {
                lines.push(Line::from(""));
                lines.push(section(theme, title));
                lines.extend(bullets(items));
            }
        }
    }
    for link in posting.apply_links.iter().flatten() {
        let platform = link.platform.as_deref().unwrap_or("Apply");
        lines.push(Line::from(vec![
            Span::styled(format!("{platform}: "), Style::default().fg(theme.fg_dim)),
            Span::raw(link.url.clone()),
        ]));
    }
    lines
}

fn render_modal(frame: &mut Frame, app: &App, open: &OpenModal) {
    let theme = &app.theme;
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let mut lines = match &open.content {
        ModalContent::Loading => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(spinner_frame(app.tick), Style::default().fg(theme.accent)),
                Span::raw(format!(" {SUMMARY_LOADING_MESSAGE}")),
            ]),
        ],
        ModalContent::Loaded(view) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    view.title.clone(),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(view.company.clone(), Style::default().fg(theme.fg_dim))),
                Line::from(""),
                section(theme, "Summary"),
                Line::from(view.summary.clone()),
                Line::from(""),
                section(theme, "Key Skills"),
            ];
            lines.extend(bullets(&view.key_skills));
            lines.push(Line::from(""));
            lines.push(section(theme, "Benefits"));
            lines.extend(bullets(&view.benefits));
            lines
        }
        ModalContent::Failed { message } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(SUMMARY_CONFIG_HINT, Style::default().fg(theme.fg_dim))),
        ],
    };

    let details = posting_details(theme, &open.posting);
    if !details.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("────────────────────────────────────────"));
        lines.extend(details);
    }

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((open.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✨ AI Job Summary ")
                .title_bottom(" [Esc] Close  [j/k] Scroll ")
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg)),
        );
    frame.render_widget(modal, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.modal.is_open() {
        "[Esc/q] Close  [j/k] Scroll  [Click outside] Close"
    } else {
        match app.focus {
            FocusPane::Form => {
                "[Tab] Next field  [Enter] Search  [←→] Jobs  [Space] Remote  [Esc] Results  [Ctrl+C] Quit"
            }
            FocusPane::Results => {
                "[↑↓/jk] Select  [Enter] Summarize  [y] Copy link  [/] Search  [t] Theme  [Ctrl+E] Export  [q] Quit"
            }
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SearchResponse, SummaryResponse};
    use crate::ui::form::SearchForm;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with_jobs(titles: &[&str]) -> App {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        app.form.query = "rust".to_string();
        app.form.location = "Oslo".to_string();
        let ticket = app.submit_search(Instant::now()).unwrap();
        let response = SearchResponse {
            total: titles.len() as u32,
            search_query: "rust".to_string(),
            location: "Oslo".to_string(),
            jobs: titles
                .iter()
                .map(|t| JobPosting {
                    title: (*t).to_string(),
                    company: "Acme".to_string(),
                    ..JobPosting::default()
                })
                .collect(),
        };
        app.apply_search(ticket.generation, Ok(response), Instant::now());
        app
    }

    #[test]
    fn test_welcome_before_first_search() {
        let app = App::new(SearchForm::default(), Theme::default_theme().clone());
        let text = screen(&app);
        assert!(text.contains("Find your next job"));
        assert!(!text.contains("jobs found"));
    }

    #[test]
    fn test_one_card_per_job() {
        let text = screen(&app_with_jobs(&["First", "Second", "Third"]));
        assert_eq!(text.matches("AI Summary").count(), 3);
        assert!(text.contains("3 jobs found"));
        assert!(text.contains("Showing results for \"rust\" in Oslo"));
    }

    #[test]
    fn test_empty_results_message() {
        let text = screen(&app_with_jobs(&[]));
        assert!(text.contains(EMPTY_RESULTS_MESSAGE));
        assert!(!text.contains("AI Summary"));
    }

    #[test]
    fn test_markup_is_shown_literally() {
        let text = screen(&app_with_jobs(&["<b>Bold</b>"]));
        assert!(text.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_loading_overlay_and_spinner() {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        app.form.query = "rust".to_string();
        app.form.location = "Oslo".to_string();
        app.submit_search(Instant::now());
        let text = screen(&app);
        assert!(text.contains("Searching for jobs..."));
        assert!(!text.contains("Search Jobs"));
    }

    #[test]
    fn test_modal_loading_and_loaded() {
        let mut app = app_with_jobs(&["Engineer"]);
        let ticket = app.summarize_selected().unwrap();
        assert!(screen(&app).contains(SUMMARY_LOADING_MESSAGE));

        app.apply_summary(ticket.generation, ticket.job, Ok(SummaryResponse::default()));
        let text = screen(&app);
        assert!(text.contains("Key Skills"));
        assert!(text.contains("No specific skills extracted"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        app.show_error("Something broke", Instant::now());
        assert!(screen(&app).contains("Something broke"));
    }

    #[test]
    fn test_long_toast_wraps_to_its_end() {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        let message = format!(
            "SERP API request failed: {} END-OF-MESSAGE",
            "upstream returned an unexpected payload ".repeat(5)
        );
        app.show_error(message, Instant::now());

        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("SERP API request failed:"));
        assert!(text.contains("END-OF-MESSAGE"));
    }

    #[test]
    fn test_huge_toast_does_not_overflow() {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        app.show_error("x".repeat(65_533), Instant::now());
        assert!(screen(&app).contains("xxxx"));

        app.show_error("y".repeat(70_000), Instant::now());
        assert!(screen(&app).contains("yyyy"));
    }

    #[test]
    fn test_notice_toast_uses_success_colour() {
        let mut app = App::new(SearchForm::default(), Theme::default_theme().clone());
        app.show_notice("Apply link copied to clipboard", Instant::now());

        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let cell = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buffer[(x, y)].symbol() == "A" && buffer[(x + 1, y)].symbol() == "p")
            .unwrap();
        assert_eq!(buffer[cell].fg, app.theme.success);
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("one two", 10), 1);
        assert_eq!(wrapped_line_count("one two three", 10), 2);
        assert_eq!(wrapped_line_count(&"x".repeat(25), 10), 3);
        assert_eq!(wrapped_line_count("ab", 0), 2);
    }

    #[test]
    fn test_modal_area_is_inside_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        let modal = modal_area(frame);
        assert!(modal.width > 0 && modal.height > 0);
        assert_eq!(frame.intersection(modal), modal);
        assert!(modal.x > 0 && modal.y > 0);
    }
}

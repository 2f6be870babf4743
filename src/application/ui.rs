use std::io;
use std::path;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::has_supported_extension;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::MessageType;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AnalysisState;
use crate::domain::services::AppState;
use crate::domain::services::Notice;
use crate::domain::services::Tab;

const CHAT_INPUT_TITLE: &str = "Ask a question about your documents";
const UPLOAD_INPUT_TITLE: &str = "File path or URL";

fn render_tabs<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let selected = match app_state.active_tab {
        Tab::Upload => 0,
        Tab::Chat => 1,
        Tab::Summary => 2,
    };

    let tabs = Tabs::new(vec!["Upload", "Chat", "Summary"])
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rect);
}

fn render_documents<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &AppState,
    list_state: &mut ListState,
) {
    let block = Block::default().borders(Borders::ALL).title("Documents");

    if app_state.documents.is_empty() {
        frame.render_widget(
            Paragraph::new("No documents uploaded yet")
                .block(block)
                .wrap(Wrap { trim: false }),
            rect,
        );
        return;
    }

    let items = app_state
        .documents
        .iter()
        .map(|document| {
            return ListItem::new(format!("{} ({})", document.filename, document.status));
        })
        .collect::<Vec<ListItem>>();

    list_state.select(app_state.selected);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, rect, list_state);
}

fn render_upload<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let mut lines: Vec<Line> = vec![
        Line::from("Type the path of a document to upload it,"),
        Line::from("or paste a web page URL to analyze it."),
        Line::from(" "),
        Line::from(Span::styled(
            "Supports PDF, Excel, and CSV files",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(notice) = &app_state.upload_notice {
        let mut style = Style::default().fg(Color::Green);
        if notice.error {
            style = Style::default().fg(Color::Red);
        }

        lines.push(Line::from(" "));
        lines.push(Line::from(Span::styled(notice.text.to_string(), style)));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }),
    );
}

fn render_chat<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let line_width = rect.width.saturating_sub(4).max(10) as usize;
    let mut lines: Vec<Line> = vec![];

    if app_state.session.messages().is_empty() {
        lines.push(Line::from("Ask questions about your documents"));
        lines.push(Line::from(Span::styled(
            "Upload a document first, then ask me anything about it!",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for message in app_state.session.messages() {
        let mut text_style = Style::default();
        if message.message_type() == MessageType::Error {
            text_style = Style::default().fg(Color::Red);
        }

        lines.push(Line::from(Span::styled(
            message.author.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for text_line in message.as_string_lines(line_width) {
            lines.push(Line::from(Span::styled(text_line, text_style)));
        }
        if !message.sources.is_empty() {
            lines.push(Line::from(Span::styled(
                "Sources:",
                Style::default().fg(Color::DarkGray),
            )));
            for source in &message.sources {
                lines.push(Line::from(Span::styled(
                    format!("- {source}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(" "));
    }

    app_state.scroll.set_state(lines.len() as u16, rect.height);

    frame.render_widget(
        Paragraph::new(lines).scroll((app_state.scroll.position, 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
}

fn render_summary<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    match app_state.coordinator.state() {
        AnalysisState::Idle => {
            frame.render_widget(
                Paragraph::new(
                    "Select a document with CTRL+N or CTRL+P, then press CTRL+A to analyze it.",
                )
                .wrap(Wrap { trim: false }),
                rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 2,
                }),
            );
        }
        AnalysisState::Loading => {
            Loading::new("Analyzing document...").render(frame, rect);
        }
        AnalysisState::Ready(analysis) => {
            let mut lines: Vec<Line> = vec![
                Line::from(Span::styled(
                    "Summary",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(analysis.summary.to_string()),
            ];

            if !analysis.insights.is_empty() {
                lines.push(Line::from(" "));
                lines.push(Line::from(Span::styled(
                    "Key Insights",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for insight in &analysis.insights {
                    lines.push(Line::from(format!("- {insight}")));
                }
            }

            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }),
                rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 2,
                }),
            );
        }
        AnalysisState::Error => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Failed to analyze document. Please try again.",
                    Style::default().fg(Color::Red),
                ))
                .wrap(Wrap { trim: false }),
                rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 2,
                }),
            );
        }
    }
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    if let Some(notice) = &app_state.status_notice {
        frame.render_widget(
            Paragraph::new(Span::styled(
                notice.to_string(),
                Style::default().fg(Color::Red),
            )),
            rect,
        );
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab switch tabs | CTRL+N/P select | CTRL+A analyze | CTRL+X delete | CTRL+C quit",
            Style::default().fg(Color::DarkGray),
        )),
        rect,
    );
}

fn render_app<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    chat_input: &tui_textarea::TextArea<'_>,
    upload_input: &tui_textarea::TextArea<'_>,
    list_state: &mut ListState,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(1),
            Constraint::Min(1),
            Constraint::Max(4),
            Constraint::Max(1),
        ])
        .split(frame.size());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Max(30), Constraint::Min(1)])
        .split(layout[1]);

    render_tabs(frame, layout[0], app_state);
    render_documents(frame, main[0], app_state, list_state);

    match app_state.active_tab {
        Tab::Upload => render_upload(frame, main[1], app_state),
        Tab::Chat => render_chat(frame, main[1], app_state),
        Tab::Summary => render_summary(frame, main[1], app_state),
    }

    match app_state.active_tab {
        Tab::Upload => frame.render_widget(upload_input.widget(), layout[2]),
        Tab::Chat => {
            if app_state.session.is_in_flight() {
                Loading::new("Waiting for an answer...").render(frame, layout[2]);
            } else {
                frame.render_widget(chat_input.widget(), layout[2]);
            }
        }
        Tab::Summary => {
            frame.render_widget(
                Paragraph::new("CTRL+A analyze selected | CTRL+G fetch stored summary")
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Double)
                            .padding(Padding::new(1, 1, 0, 0)),
                    )
                    .alignment(Alignment::Center),
                layout[2],
            );
        }
    }

    render_status(frame, layout[3], app_state);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut chat_input = TextArea::with_title(CHAT_INPUT_TITLE);
    let mut upload_input = TextArea::with_title(UPLOAD_INPUT_TITLE);
    let mut list_state = ListState::default();

    #[cfg(feature = "dev")]
    {
        use tui_textarea::Input;
        use tui_textarea::Key;

        let test_str = "What is the total revenue reported for the last quarter?";
        for char in test_str.chars() {
            chat_input.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            render_app(
                frame,
                app_state,
                &chat_input,
                &upload_input,
                &mut list_state,
            );
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => break,
            Event::KeyboardTab() => {
                app_state.active_tab = app_state.active_tab.next();
            }
            Event::KeyboardCTRLN() => {
                app_state.select_next();
            }
            Event::KeyboardCTRLP() => {
                app_state.select_previous();
            }
            Event::KeyboardCTRLR() => {
                app_state.status_notice = None;
                tx.send(Action::RefreshDocuments())?;
            }
            Event::KeyboardCTRLA() => {
                if let Some(id) = app_state.selected_document().map(|document| {
                    return document.id.to_string();
                }) {
                    app_state.coordinator.begin();
                    app_state.active_tab = Tab::Summary;
                    tx.send(Action::AnalyzeDocument(id))?;
                }
            }
            Event::KeyboardCTRLG() => {
                if let Some(id) = app_state.selected_document().map(|document| {
                    return document.id.to_string();
                }) {
                    app_state.coordinator.begin();
                    app_state.active_tab = Tab::Summary;
                    tx.send(Action::FetchSummary(id))?;
                }
            }
            Event::KeyboardCTRLX() => {
                if let Some(id) = app_state.selected_document().map(|document| {
                    return document.id.to_string();
                }) {
                    app_state.status_notice = None;
                    tx.send(Action::DeleteDocument(id))?;
                }
            }
            Event::KeyboardEnter() => match app_state.active_tab {
                Tab::Chat => {
                    let input_str = chat_input.lines().join("\n");
                    if let Some(request) = app_state.session.begin(&input_str) {
                        chat_input = TextArea::with_title(CHAT_INPUT_TITLE);
                        app_state.scroll.last();
                        tx.send(Action::SubmitQuestion(request))?;
                    }
                }
                Tab::Upload => {
                    let input_str = upload_input.lines().join("\n").trim().to_string();
                    if input_str.is_empty() {
                        continue;
                    }

                    if input_str.starts_with("http://") || input_str.starts_with("https://") {
                        app_state.upload_notice = None;
                        upload_input = TextArea::with_title(UPLOAD_INPUT_TITLE);
                        tx.send(Action::AnalyzeUrl(input_str))?;
                    } else if has_supported_extension(&input_str) {
                        app_state.upload_notice = None;
                        upload_input = TextArea::with_title(UPLOAD_INPUT_TITLE);
                        tx.send(Action::UploadFile(path::PathBuf::from(input_str)))?;
                    } else {
                        app_state.upload_notice = Some(Notice {
                            text: "Unsupported file type. Supports PDF, Excel, and CSV files."
                                .to_string(),
                            error: true,
                        });
                    }
                }
                Tab::Summary => {}
            },
            Event::KeyboardCharInput(input) => match app_state.active_tab {
                Tab::Chat => {
                    if !app_state.session.is_in_flight() {
                        chat_input.input(input);
                    }
                }
                Tab::Upload => {
                    upload_input.input(input);
                }
                Tab::Summary => {}
            },
            Event::KeyboardPaste(text) => match app_state.active_tab {
                Tab::Chat => {
                    if !app_state.session.is_in_flight() {
                        chat_input.insert_str(&text);
                    }
                }
                Tab::Upload => {
                    upload_input.insert_str(&text);
                }
                Tab::Summary => {}
            },
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => {}
            event => {
                app_state.handle_event(event);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::default();
    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}

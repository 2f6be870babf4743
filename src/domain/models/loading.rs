#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Placeholder shown in place of a pane or input box while a backend
/// request is in flight.
pub struct Loading<'a> {
    message: &'a str,
}

impl<'a> Loading<'a> {
    pub fn new(message: &'a str) -> Loading<'a> {
        return Loading { message };
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(
            Paragraph::new(self.message)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Center),
            rect,
        );
    }
}

use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl TextArea {
    pub fn with_title(title: &str) -> tui_textarea::TextArea<'_> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }
}

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::Loading;

#[test]
fn it_renders_the_message() {
    let backend = TestBackend::new(40, 3);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            Loading::new("Analyzing document...").render(frame, frame.size());
        })
        .unwrap();

    let rendered = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| {
            return cell.symbol.to_string();
        })
        .collect::<String>();
    assert!(rendered.contains("Analyzing document..."));
}

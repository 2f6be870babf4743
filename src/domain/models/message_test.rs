use super::Author;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(1, Author::Assistant, "Hi there!");
    assert_eq!(msg.id, 1);
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Assistant");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert!(msg.sources.is_empty());
    assert_eq!(msg.mtype, MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(1, Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(2, Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.mtype, MessageType::Error);
}

#[test]
fn it_executes_message_type() {
    let msg = Message::new_with_type(2, Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_executes_with_sources() {
    let msg = Message::new(3, Author::Assistant, "Revenue was up.")
        .with_sources(vec!["report.pdf".to_string(), "q3.xlsx".to_string()]);
    assert_eq!(
        msg.sources,
        vec!["report.pdf".to_string(), "q3.xlsx".to_string()]
    );
}

#[test]
fn it_executes_as_string_lines() {
    let msg = Message::new(
        4,
        Author::Assistant,
        "The quick brown fox jumps over the lazy dog",
    );
    let lines = msg.as_string_lines(20);

    insta::assert_snapshot!(lines.join("\n"), @r###"
    The quick brown fox
    jumps over the lazy
    dog
    "###);
}

#[test]
fn it_executes_as_string_lines_with_empty_lines() {
    let msg = Message::new(5, Author::Assistant, "First paragraph.\n\nSecond paragraph.");
    let lines = msg.as_string_lines(40);

    assert_eq!(
        lines,
        vec![
            "First paragraph.".to_string(),
            " ".to_string(),
            "Second paragraph.".to_string()
        ]
    );
}

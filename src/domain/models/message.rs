#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub sources: Vec<String>,
    mtype: MessageType,
}

impl Message {
    pub fn new(id: u64, author: Author, text: &str) -> Message {
        return Message {
            id,
            author,
            text: text.to_string().replace('\t', "  "),
            sources: vec![],
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(id: u64, author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            id,
            author,
            text: text.to_string().replace('\t', "  "),
            sources: vec![],
            mtype,
        };
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Message {
        self.sources = sources;
        return self;
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if word.len() + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_lines.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}

mod action;
mod analysis;
mod author;
mod document;
mod event;
mod loading;
mod message;
mod textarea;
mod transport;

pub use action::*;
pub use analysis::*;
pub use author::*;
pub use document::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use textarea::*;
pub use transport::*;

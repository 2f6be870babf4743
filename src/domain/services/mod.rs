pub mod actions;
mod app_state;
mod conversation;
mod coordinator;
pub mod events;
mod registry;
mod scroll;

pub use app_state::*;
pub use conversation::*;
pub use coordinator::*;
pub use registry::*;
pub use scroll::*;

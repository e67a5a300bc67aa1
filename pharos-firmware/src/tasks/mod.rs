//! Embassy async tasks

pub mod scroll;

pub use scroll::scroll_task;

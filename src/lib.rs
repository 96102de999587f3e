pub mod config;
pub mod event;
pub mod library;
pub mod playback;
pub mod ui;
pub mod util;

pub mod app;
pub mod events;
pub mod footer;
pub mod game;
pub mod header;
pub mod input;
pub mod layout;
pub mod loader;
pub mod mvi;
pub mod quiz;
pub mod render;
pub mod result;
pub mod runtime;
pub mod terminal_guard;
pub mod text;
pub mod theme;
pub mod worker;

pub use runtime::run;

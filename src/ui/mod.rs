//! Terminal front end: renders snapshots and turns keys into session calls.

pub mod app;
pub mod board;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

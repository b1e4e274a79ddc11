//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, lanes for comparison mode
//! - **[`panes`]** — stateless render functions for each visible pane (bars,
//!   narration, algorithm info, source, status bar)
//! - **[`theme`]** — centralized color palette used by all panes, including the
//!   bar colour for each step role
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AlgorithmRegistry`] and an input array, then call [`App::run`] to start
//! the event loop.
//!
//! [`AlgorithmRegistry`]: crate::registry::AlgorithmRegistry
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Lane};

//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function that draws one piece of a
//! lane (or the shared status bar) from borrowed data.
//!
//! - [`bars`]: the array as a bar chart, coloured by step roles
//! - [`narration`]: step description, code annotation, search bounds, radix buckets
//! - [`info`]: algorithm descriptor and metrics
//! - [`source`]: reference implementation, revealed at the end of playback
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod info;
pub mod narration;
pub mod source;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use narration::render_narration_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

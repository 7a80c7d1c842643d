// TUI module for the interactive converter
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod text_panel;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub use rendering::Panel;
pub use text_panel::{PanelControl, TextPanel};

use self::terminal::TerminalManager;
use crate::gateway::ConversionGateway;

/// Run the interactive TUI
pub fn run_interactive(gateway: ConversionGateway) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(gateway);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}

//! Interactive terminal UI: the owner of the version timeline and the activity feed
mod app;
mod events;
mod feed_view;
mod layout;
mod rendering;
mod terminal;
mod timeline_view;
mod timestamps;

use anyhow::Result;
pub use app::{App, AppOptions};
use tracing::info;

use self::terminal::TerminalSession;
use crate::models::{EntityHistory, Thread};

/// Run the interactive TUI until the user quits
pub fn run_interactive(history: EntityHistory, feed: Vec<Thread>, options: AppOptions) -> Result<()> {
    info!(
        versions = history.versions.len(),
        threads = feed.len(),
        side_panel = options.enable_side_panel,
        "starting interactive view"
    );

    let mut session = TerminalSession::enter()?;
    let mut app = App::new(history, feed, options);

    let res = app.run(session.terminal_mut());
    session.leave()?;

    res
}

//! In-memory todo console application
//!
//! Entry point for the `todo` binary: initializes tracing and hands
//! stdin/stdout to the interactive console loop. The task store lives for
//! exactly one session; exiting discards all data.

mod console;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::task::TaskStore;

use crate::console::Console;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), TaskStore::new());
    console.run()?;

    Ok(())
}

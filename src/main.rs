use std::{sync::Arc, time::Duration};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use gridclip::{
    infrastructure::{
        cli::{Cli, Command, ReplayArgs},
        clipboard::{ClipboardWriter, SystemClipboard},
        config::Config,
        copy_repository::HttpCopyRepository,
    },
    integration::replay::{replay, ReplayScript},
    utils::{initialize_logging, initialize_panic_handler},
    AppState, Runtime,
};

async fn run_replay(args: ReplayArgs, mut config: Config) -> Result<()> {
    let script = ReplayScript::from_file(&args.events)?;

    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if args.strip_header {
        config.include_headers = false;
    }
    let write_clipboard = config.write_clipboard && !args.no_clipboard;
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let repository = HttpCopyRepository::new(&config.base_url, timeout)?;
    let clipboard: Option<Arc<dyn ClipboardWriter>> = if write_clipboard {
        Some(Arc::new(SystemClipboard))
    } else {
        None
    };
    log::info!(
        "Replaying {} event(s) for {} against {}",
        script.events.len(),
        args.data_id,
        config.base_url
    );

    let state = AppState::new_with_config(args.data_id, script.columns, script.row_count, &config);
    let mut runtime = Runtime::new_with_executor(state, Arc::new(repository), clipboard);
    let outcome = replay(&mut runtime, script.events, write_clipboard, timeout).await;
    runtime.shutdown();
    let outcome = outcome?;

    if let Some(error) = outcome.error {
        return Err(eyre!("Copy failed: {error}"));
    }
    match outcome.text {
        Some(text) => println!("{text}"),
        None => eprintln!("Nothing was committed for copying"),
    }
    if let Some(error) = outcome.write_error {
        eprintln!("Clipboard write failed: {error}");
    }
    Ok(())
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based)
    let config = Config::new()?;

    match args.command {
        Command::Replay(replay_args) => run_replay(replay_args, config).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}

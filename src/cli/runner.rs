//! CLI runner - executes commands

use crate::api::{HttpOrderApi, OrderApi};
use crate::cli::commands::{BrowseCommand, Cli, Commands, BROWSE_HELP};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::session::{NavOutcome, SearchController, SearchOutcome};
use crate::view::TerminalView;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!(?config, "loaded configuration");

        let api = HttpOrderApi::from_config(&config)?;
        let view = TerminalView::stdout(config.error_display());
        let controller = SearchController::with_page_size(api, view, config.page_size);

        match &self.cli.command {
            Commands::Show { order_uid, pages } => show(&controller, order_uid, *pages).await,
            Commands::Browse => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                browse(&controller, stdin).await
            }
        }
    }

    /// Merge the config file (if any) with command-line overrides
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Look up one order and walk forward through up to `pages` pages
pub async fn show<A: OrderApi>(
    controller: &SearchController<A, TerminalView>,
    order_uid: &str,
    pages: u32,
) -> Result<()> {
    if pages == 0 {
        return Err(Error::invalid_value("pages", "must be at least 1"));
    }

    match controller.submit_search(order_uid).await? {
        SearchOutcome::Loaded {
            first_page: NavOutcome::Page(_),
            ..
        } => {}
        _ => return Ok(()),
    }

    for _ in 1..pages {
        match controller.next().await? {
            NavOutcome::Page(_) => {}
            NavOutcome::Empty | NavOutcome::Disabled | NavOutcome::Stale => break,
        }
    }
    Ok(())
}

/// Interactive loop: one command per line until `quit` or end of input
///
/// User-facing failures have already been rendered by the view, so they do
/// not end the loop.
pub async fn browse<A, R>(controller: &SearchController<A, TerminalView>, input: R) -> Result<()>
where
    A: OrderApi,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut stderr = tokio::io::stderr();

    print_prompt(controller).await?;
    while let Some(line) = lines.next_line().await? {
        let Some(command) = BrowseCommand::parse(&line) else {
            if !line.trim().is_empty() {
                stderr
                    .write_all(format!("unknown command: {}\n", line.trim()).as_bytes())
                    .await?;
            }
            print_prompt(controller).await?;
            continue;
        };

        let result = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(BROWSE_HELP.as_bytes()).await?;
                stdout.flush().await?;
                Ok(None)
            }
            BrowseCommand::Search(uid) => controller.submit_search(&uid).await.map(|_| None),
            BrowseCommand::Next => controller.next().await.map(Some),
            BrowseCommand::Previous => controller.previous().await.map(Some),
        };

        if let Some(hint) = browse_hint(result, controller.snapshot().await.is_some())? {
            stderr.write_all(format!("{hint}\n").as_bytes()).await?;
        }
        print_prompt(controller).await?;
    }
    Ok(())
}

/// Extra line shown after a browse command, if any
///
/// User-facing failures are already on screen, so they come back as a hint
/// rather than an error and the loop keeps going.
fn browse_hint(
    result: std::result::Result<Option<NavOutcome>, Error>,
    has_session: bool,
) -> Result<Option<&'static str>> {
    match result {
        Ok(Some(NavOutcome::Disabled)) if !has_session => {
            Ok(Some("search for an order first (search <uid>)"))
        }
        Ok(_) => Ok(None),
        Err(e) if e.is_user_facing() && e.is_retryable() => {
            Ok(Some("the request can be retried: repeat the command"))
        }
        Err(e) if e.is_user_facing() => Ok(None),
        Err(e) => Err(e),
    }
}

async fn print_prompt<A: OrderApi>(controller: &SearchController<A, TerminalView>) -> Result<()> {
    let line = controller.view().status_line(Instant::now());
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{line}\n> ").as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

//! Roster CLI Application
//!
//! Command-line front end for the roster shared task list. Commands mirror
//! the chat surface: `add` records a task, `check` lists yours, `allcheck`
//! lists everyone's, and listings offer an interactive completion prompt.

mod cli;
mod renderer;
mod selection;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{CheckArgs, Cli, Commands};
use log::info;
use renderer::TerminalRenderer;
use roster_core::{
    models::UserId,
    params::{QueryScope, TaskQuery},
    Roster, RosterBuilder,
};
use std::time::Duration;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Cli { tasks_file, user, no_color, no_input, command } = Cli::parse();

    let Some(user) = user else {
        bail!("No user id given. Pass --user <id> or set ROSTER_USER.");
    };
    let user = UserId(user);

    let roster = RosterBuilder::new()
        .with_tasks_file(tasks_file)
        .build()
        .await
        .context("Failed to initialize roster")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roster started for user {user}");

    match command.unwrap_or_else(|| Check(CheckArgs::default())) {
        Add(args) => {
            let summary = roster.handle_add(&args.into_params(user)).await?;
            renderer.render(&summary.to_string())
        }
        Check(args) => {
            run_listing(&roster, &renderer, user, QueryScope::Mine, &args, no_input).await
        }
        Allcheck(args) => {
            run_listing(&roster, &renderer, user, QueryScope::All, &args, no_input).await
        }
    }
}

/// Renders a listing and, when open tasks came back, hands the attached
/// prompt to the interactive driver unless `--no-input` suppressed it.
async fn run_listing(
    roster: &Roster,
    renderer: &TerminalRenderer,
    user: UserId,
    scope: QueryScope,
    args: &CheckArgs,
    no_input: bool,
) -> Result<()> {
    let query = TaskQuery { requester: user, scope };
    let reply = roster.handle_check(&query).await?;
    renderer.render(&reply.summary.to_string())?;

    let Some(mut prompt) = reply.prompt else {
        return Ok(());
    };
    if no_input {
        return Ok(());
    }
    if let Some(secs) = args.window {
        prompt = prompt.with_window(Duration::from_secs(secs));
    }
    selection::drive(roster, renderer, &mut prompt, user).await
}

//! Interactive completion prompt for the terminal.
//!
//! The terminal stand-in for a chat platform's selection widget: candidates
//! render as a numbered menu and selections are read from stdin until a
//! completion resolves the prompt, input ends, or the window elapses with
//! nothing picked. Benign outcomes (an entry someone else finished first,
//! an id that no longer exists) are reported and the menu is offered again.

use anyhow::Result;
use log::debug;
use roster_core::{display::Summary, models::UserId, prompt::SelectionPrompt, Roster};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};

use crate::renderer::TerminalRenderer;

/// Drives an active prompt to resolution, expiry, or end of input.
///
/// The window restarts after every attempt, so a busy prompt stays open as
/// long as people keep answering it.
pub async fn drive(
    roster: &Roster,
    renderer: &TerminalRenderer,
    prompt: &mut SelectionPrompt,
    user: UserId,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut deadline = Instant::now() + prompt.window();

    render_menu(renderer, prompt)?;

    while prompt.is_active() {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            () = sleep_until(deadline) => {
                prompt.expire();
                debug!("Selection window elapsed");
                renderer.render("Selection window closed.\n")?;
                return Ok(());
            }
        };

        let Some(line) = line else {
            debug!("Input closed before a selection was made");
            return Ok(());
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        deadline = Instant::now() + prompt.window();

        let Some(task_id) = resolve(prompt, input) else {
            renderer.render(&format!("No such option: {input}\n"))?;
            continue;
        };

        let selection = prompt.select(roster, &task_id).await?;
        let reply = Summary::for_selection(&selection, user);
        renderer.render(&reply.to_string())?;

        if prompt.is_active() {
            render_menu(renderer, prompt)?;
        }
    }

    Ok(())
}

/// Maps an input line to a candidate id: a 1-based menu number or the id
/// itself. Only listed candidates are accepted, like a real selection
/// widget.
fn resolve(prompt: &SelectionPrompt, input: &str) -> Option<String> {
    if let Ok(index) = input.parse::<usize>() {
        if index == 0 {
            return None;
        }
        return prompt
            .candidates()
            .get(index - 1)
            .map(|candidate| candidate.id.clone());
    }

    prompt
        .candidates()
        .iter()
        .find(|candidate| candidate.id == input)
        .map(|candidate| candidate.id.clone())
}

fn render_menu(renderer: &TerminalRenderer, prompt: &SelectionPrompt) -> Result<()> {
    let mut menu = String::from("Select a task to mark complete (number or id):\n");
    for (i, candidate) in prompt.candidates().iter().enumerate() {
        menu.push_str(&format!(
            "{:>3}. {} `{}`\n",
            i + 1,
            candidate.name,
            candidate.id
        ));
    }
    renderer.render(&menu)
}

//! Line-based terminal front end for a draft.

use crate::draft::{Card, DraftController, DraftSummary, PickOutcome, Seat};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// What the player typed at the pick prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Pick the card at this index of the current pack.
    Pick(usize),
    /// Show the pool drafted so far.
    Pool,
    /// Abandon the draft.
    Quit,
    /// Input not understood.
    Invalid,
}

/// Parses prompt input; card numbers are 1-based.
pub fn parse_choice(input: &str, pack_len: usize) -> Choice {
    match input.trim() {
        "q" | "quit" | "exit" => Choice::Quit,
        "p" | "pool" => Choice::Pool,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=pack_len).contains(&n) => Choice::Pick(n - 1),
            _ => Choice::Invalid,
        },
    }
}

/// Renders one card as a pack listing line.
pub fn card_line(number: usize, card: &Card) -> String {
    format!(
        "{:>3}. [{:<5}] {:<32} {}",
        number,
        card.color_symbols(),
        card.name(),
        card.type_line()
    )
}

/// Runs an interactive draft, reading picks from stdin.
#[instrument(skip(controller))]
pub async fn run_interactive(controller: &mut DraftController) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    while !controller.is_complete() {
        let mut screen = String::new();
        if let (Some(round), Some(pick), Some(direction)) = (
            controller.round(),
            controller.pick_number(),
            controller.direction(),
        ) {
            screen.push_str(&format!(
                "\nPack {} pick {} (passing {})\n",
                round, pick, direction
            ));
        }
        for (i, card) in controller.current_pack().iter().enumerate() {
            screen.push_str(&card_line(i + 1, card));
            screen.push('\n');
        }
        screen.push_str("Pick a card number, 'p' for your pool, 'q' to quit: ");
        out.write_all(screen.as_bytes()).await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            info!("Input closed, leaving draft");
            return Ok(());
        };

        match parse_choice(&line, controller.current_pack().len()) {
            Choice::Pick(index) => {
                let card_id = controller.current_pack()[index].id().clone();
                if let PickOutcome::Completed(summary) = controller.pick_card(&card_id) {
                    out.write_all(render_summary(&summary, controller.seats()).as_bytes())
                        .await?;
                }
            }
            Choice::Pool => {
                let mut pool = String::from("\nYour picks:\n");
                for (i, entry) in controller.picks().iter().enumerate() {
                    pool.push_str(&card_line(i + 1, entry.card()));
                    pool.push('\n');
                }
                out.write_all(pool.as_bytes()).await?;
            }
            Choice::Quit => {
                info!("Draft abandoned");
                return Ok(());
            }
            Choice::Invalid => {
                debug!(input = %line.trim(), "Unrecognized input");
                out.write_all(b"Not a card in this pack.\n").await?;
            }
        }
    }

    out.flush().await?;
    Ok(())
}

/// Plays the human seat automatically by taking the first card each time.
///
/// Returns the summary once the draft completes.
#[instrument(skip(controller))]
pub fn run_autopilot(controller: &mut DraftController) -> Option<DraftSummary> {
    while !controller.is_complete() {
        let Some(card_id) = controller.current_pack().first().map(|c| c.id().clone()) else {
            warn!("Human seat has no cards to pick, stopping");
            return None;
        };
        if let PickOutcome::Completed(summary) = controller.pick_card(&card_id) {
            return Some(*summary);
        }
    }
    controller.summary()
}

/// Renders the summary followed by each bot's deck.
pub fn render_summary(summary: &DraftSummary, seats: &[Seat]) -> String {
    let mut text = format!("\n{}", summary);
    for seat in seats.iter().filter(|s| s.is_bot()) {
        text.push_str(&format!("\n{} deck:\n", seat.name()));
        for (i, entry) in seat.picks().iter().enumerate() {
            text.push_str(&card_line(i + 1, entry.card()));
            text.push('\n');
        }
    }
    text
}

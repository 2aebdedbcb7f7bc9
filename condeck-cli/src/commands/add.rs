use anyhow::Result;
use chrono::NaiveDate;
use condeck_core::contest::Contest;
use condeck_core::store::ContestStore;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::utils::parse_date;

#[allow(clippy::too_many_arguments)]
pub fn run(
    store: &ContestStore,
    name: Option<String>,
    start: Option<String>,
    deadline: Option<String>,
    announcement: Option<String>,
    prize: Option<String>,
    submission_type: Option<String>,
    link: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    // --- Dates ---
    let start = match start {
        Some(s) => parse_date(&s)?,
        None => prompt_date("  Start date (YYYY-MM-DD)")?,
    };
    let deadline = match deadline {
        Some(s) => parse_date(&s)?,
        None => prompt_date("  Deadline (YYYY-MM-DD)")?,
    };

    let mut contest = Contest::new(&name, start, deadline);

    if let Some(a) = announcement {
        contest.announcement_date = Some(parse_date(&a)?);
    }
    if let Some(prize) = prize {
        contest.prize = prize;
    }
    if let Some(submission_type) = submission_type {
        contest.submission_type = submission_type;
    }
    if let Some(link) = link {
        contest.link = link;
    }
    contest.notes = notes.filter(|n| !n.is_empty());

    contest.validate()?;
    store.add(contest.clone())?;

    println!(
        "{}",
        format!("  Added: {} ({})", contest.name, contest.id).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

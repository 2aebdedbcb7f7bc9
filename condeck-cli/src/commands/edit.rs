use anyhow::Result;
use condeck_core::store::ContestStore;
use owo_colors::OwoColorize;

use crate::utils::parse_date;

#[allow(clippy::too_many_arguments)]
pub fn run(
    store: &ContestStore,
    id: &str,
    name: Option<String>,
    start: Option<String>,
    deadline: Option<String>,
    announcement: Option<String>,
    clear_announcement: bool,
    prize: Option<String>,
    submission_type: Option<String>,
    link: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let Some(mut contest) = store.find(id) else {
        let known: Vec<String> = store
            .load()
            .iter()
            .map(|c| format!("{} ({})", c.name, c.id))
            .collect();
        anyhow::bail!(
            "Contest '{}' not found. Known contests:\n  {}",
            id,
            known.join("\n  ")
        );
    };

    if let Some(name) = name {
        contest.name = name;
    }
    if let Some(start) = start {
        contest.start_date = parse_date(&start)?;
    }
    if let Some(deadline) = deadline {
        contest.deadline = parse_date(&deadline)?;
    }
    if let Some(announcement) = announcement {
        contest.announcement_date = Some(parse_date(&announcement)?);
    }
    if clear_announcement {
        contest.announcement_date = None;
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
    if let Some(notes) = notes {
        contest.notes = if notes.is_empty() { None } else { Some(notes) };
    }

    contest.validate()?;
    store.update(contest.clone())?;

    println!("{}", format!("  Updated: {}", contest.name).green());

    Ok(())
}

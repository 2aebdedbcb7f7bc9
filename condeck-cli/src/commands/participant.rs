use anyhow::{Result, anyhow};
use condeck_core::contest::{Contest, Participant};
use condeck_core::store::ContestStore;
use owo_colors::OwoColorize;

pub fn add(store: &ContestStore, contest_id: &str, name: &str) -> Result<()> {
    let mut contest = require_contest(store, contest_id)?;

    contest.participants.push(Participant::new(name));
    store.update(contest.clone())?;

    println!(
        "{}",
        format!("  Added participant: {} → {}", name, contest.name).green()
    );
    Ok(())
}

pub fn remove(store: &ContestStore, contest_id: &str, name: &str) -> Result<()> {
    let mut contest = require_contest(store, contest_id)?;

    let Some(pos) = contest.participants.iter().position(|p| p.name == name) else {
        anyhow::bail!("Participant '{}' not found in '{}'", name, contest.name);
    };
    contest.participants.remove(pos);
    store.update(contest.clone())?;

    println!(
        "{}",
        format!("  Removed participant: {} ← {}", name, contest.name).green()
    );
    Ok(())
}

pub fn toggle(store: &ContestStore, contest_id: &str, name: &str) -> Result<()> {
    let mut contest = require_contest(store, contest_id)?;

    let Some(participant) = contest.participants.iter_mut().find(|p| p.name == name) else {
        anyhow::bail!("Participant '{}' not found in '{}'", name, contest.name);
    };
    participant.submitted = !participant.submitted;
    let submitted = participant.submitted;

    store.update(contest)?;

    let status = if submitted {
        "marked as submitted"
    } else {
        "marked as not submitted"
    };
    println!("{}", format!("  {} {}", name, status).green());
    Ok(())
}

fn require_contest(store: &ContestStore, id: &str) -> Result<Contest> {
    store
        .find(id)
        .ok_or_else(|| anyhow!("Contest '{}' not found", id))
}

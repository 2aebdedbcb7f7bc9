use anyhow::Result;
use chrono::Local;
use condeck_core::contest::partition_by_deadline;
use condeck_core::store::ContestStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &ContestStore, all: bool) -> Result<()> {
    let contests = store.load();

    if contests.is_empty() {
        println!(
            "No contests yet.\n\n\
            Add your first one with:\n  \
            condeck add \"Contest name\" --start 2026-09-01 --deadline 2026-09-30"
        );
        return Ok(());
    }

    let today = Local::now().date_naive();
    let (ongoing, finished) = partition_by_deadline(&contests, today);

    println!(
        "{} {}",
        "Ongoing".bold(),
        format!("({})", ongoing.len()).dimmed()
    );
    if ongoing.is_empty() {
        println!("   {}", "No ongoing contests".dimmed());
    }
    for contest in &ongoing {
        println!();
        println!("{}", contest.render(today));
    }

    if finished.is_empty() {
        return Ok(());
    }

    println!();
    if all {
        println!(
            "{} {}",
            "Finished".bold(),
            format!("({})", finished.len()).dimmed()
        );
        for contest in &finished {
            println!();
            println!("{}", contest.render(today));
        }
    } else {
        println!(
            "{}",
            format!(
                "{} finished contest(s) hidden. Show them with --all.",
                finished.len()
            )
            .dimmed()
        );
    }

    Ok(())
}

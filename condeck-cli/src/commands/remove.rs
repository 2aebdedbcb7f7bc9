use anyhow::Result;
use condeck_core::store::ContestStore;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(store: &ContestStore, id: &str, yes: bool) -> Result<()> {
    let Some(contest) = store.find(id) else {
        anyhow::bail!("Contest '{}' not found", id);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Remove '{}'?", contest.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  {}", "Aborted".dimmed());
            return Ok(());
        }
    }

    store.remove(id)?;
    println!("{}", format!("  Removed: {}", contest.name).green());

    Ok(())
}

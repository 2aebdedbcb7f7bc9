use anyhow::Result;
use chrono::Local;
use condeck_core::calendar::MonthLayout;
use condeck_core::store::ContestStore;

use crate::render::render_month;
use crate::utils::parse_month;

pub fn run(store: &ContestStore, month: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let reference = match month {
        Some(m) => parse_month(m)?,
        None => today,
    };

    let contests = store.load();
    let layout = MonthLayout::build(reference, &contests, today);

    println!("{}", render_month(&layout, reference));

    Ok(())
}

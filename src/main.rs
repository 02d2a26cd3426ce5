use std::io;

use anyhow::{Context, Result};
use course_planner::Session;
use course_planner::config::Config;
use course_planner::logging;

fn main() -> Result<()> {
    let config = Config::from_args();
    logging::init(config.log_level);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    if let Some(path) = config.preload {
        session = session.with_preload(path);
    }
    session.run().context("Console session ended unexpectedly")?;
    Ok(())
}

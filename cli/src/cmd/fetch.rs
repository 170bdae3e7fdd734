use cfs_core::action;
use colored::Colorize as _;

use super::{GlobalArgs, SubcmdResult};
use crate::{config, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Problem URL, `<contest>/<problem>` or `<contest><problem>` (e.g. 1006A)
    #[arg()] // positional argument
    pub problem: String,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = config::from_file_and_args(global_args)?;
    let key = util::parse_problem_key(&args.problem)?;
    let cli = config::client(&cfg)?;
    let store = config::sample_store(&cfg);

    let (dir, samples) = action::fetch_and_save_samples(&cli, &key, &store).await?;

    println!(
        "{} saved {} samples in '{}'",
        "Successfully".green(),
        samples.len(),
        util::replace_homedir_to_tilde(dir).to_string_lossy()
    );
    Ok(())
}

use anyhow::ensure;
use cfs_core::Config;
use colored::Colorize as _;

use super::{GlobalArgs, SubcmdResult};
use crate::{config, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let path = config::config_filepath(global_args)?;
    ensure!(
        args.force || !path.exists(),
        "Config file already exists: {}",
        util::replace_homedir_to_tilde(&path).to_string_lossy()
    );
    fsutil::write_with_mkdir(&path, Config::example_toml())?;
    println!(
        "{} '{}'",
        "Successfully created".green(),
        util::replace_homedir_to_tilde(path).to_string_lossy()
    );
    Ok(())
}

use super::{GlobalArgs, SubcmdResult};
use crate::config;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = config::from_file_and_args(global_args)?;
    println!("{}", config::sample_store(&cfg).root().to_string_lossy());
    Ok(())
}

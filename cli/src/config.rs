use anyhow::Context as _;
use cfs_core::{storage::SampleStore, Config};
use cfs_webclient::CodeforcesClient;

use crate::cmd::GlobalArgs;

pub fn config_filepath(args: &GlobalArgs) -> anyhow::Result<std::path::PathBuf> {
    match &args.config {
        Some(path) => Ok(path.to_owned()),
        None => Config::default_filepath().context("Failed to get user's config dir path"),
    }
}

/// Config file values overridden by command line flags.
pub fn from_file_and_args(args: &GlobalArgs) -> anyhow::Result<Config> {
    let GlobalArgs {
        subcmd: _,
        config: _,
        cache_dir,
        host,
    } = args;

    let mut cfg = Config::from_file_or_default(config_filepath(args)?)?;
    if let Some(d) = cache_dir {
        cfg.cache_dir = cfs_core::config::expand_tilde(d);
    }
    if let Some(h) = host {
        cfg.host = h.to_owned();
    }
    log::debug!("{:?}", cfg);
    Ok(cfg)
}

pub fn sample_store(cfg: &Config) -> SampleStore {
    SampleStore::new(&cfg.cache_dir)
}

pub fn client(cfg: &Config) -> anyhow::Result<CodeforcesClient> {
    let cli = CodeforcesClient::new().context("Failed to build HTTP client")?;
    Ok(cli.host(&cfg.host))
}

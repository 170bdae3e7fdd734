pub mod fetch;
pub mod init;
pub mod root;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Config file (default: <config dir>/cfs/cfs.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sample cache root (default: ~/.cf-samples)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Host serving problem pages (default: codeforces.com)
    #[arg(long, global = true)]
    pub host: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Fetch(fetch::Args),
    Init(init::Args),
    Root(root::Args),

    #[command(alias("t"))]
    Test(test::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Fetch(args) => fetch::exec(args, self).await,
            Init(args) => init::exec(args, self),
            Root(args) => root::exec(args, self),
            Test(args) => test::exec(args, self).await,
        }
    }
}

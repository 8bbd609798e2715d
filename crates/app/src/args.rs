use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Browse and edit user-granted directory trees")]
pub struct Args {
    /// Path to the arbor state directory (defaults to ~/.arbor)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}

//! CLI argument parsing with clap. Defines the `Cli` struct.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "piggy",
    version,
    about = "Scaffold new piggy game projects",
    after_help = "Examples:\n  piggy create --pkg=my-game --dir=~/projects\n  piggy create --pkg my-game --dir ."
)]
pub struct Cli {
    /// Command token (`create`); required but its value is not inspected
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Name of the package to scaffold
    #[arg(long, value_name = "NAME")]
    pub pkg: String,

    /// Directory in which the project should be located
    #[arg(long, value_name = "PATH")]
    pub dir: PathBuf,
}

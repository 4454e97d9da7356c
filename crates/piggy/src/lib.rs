//! Piggy — scaffold new piggy game projects.
//! Contains `run()`: plan the scaffold and report where the project would go.

pub mod cli;
pub(crate) mod scaffold;

use anyhow::Result;
use console::style;

use cli::Cli;
use scaffold::Outcome;

/// Run the CLI with parsed arguments.
///
/// The invalid-directory case is reported on stdout and still returns
/// `Ok(())` — scripted callers see exit 0 either way.
pub fn run(cli: Cli) -> Result<()> {
    match scaffold::plan(&cli.dir, &cli.pkg)? {
        Outcome::InvalidDir => {
            println!(
                "{} You must provide an valid directory path",
                style("[!]").yellow().bold()
            );
        }
        Outcome::Ready(path) => {
            println!(
                "{} Ready to create piggy project at '{}'",
                style("[·]").cyan().bold(),
                path.display()
            );
        }
    }

    Ok(())
}

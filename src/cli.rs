use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recent match statistics service")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the statistics server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch the most recent matches once and print them
    Matches {
        /// Print the same JSON body the server returns
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized fixtures of a single tournament
    Fixtures {
        /// Provider tournament id
        tournament_id: i64,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

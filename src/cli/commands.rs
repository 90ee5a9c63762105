use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("taskline v", env!("CARGO_PKG_VERSION"), " - your todo list is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task list file to operate on
    #[arg(short = 'f', long = "file", global = true, default_value = "todo.txt")]
    pub file: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks with their line numbers
    List,
    /// Append a task to the end of the list
    Add(AddArgs),
    /// Toggle a task between open and done
    Toggle(ToggleArgs),
    /// Show the lines matching a word-prefix query
    Search(SearchArgs),
    /// Move a line up or down
    Move(MoveArgs),
    /// Show the token breakdown of a task line
    Parts(PartsArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text, e.g. "(A) call mom +family @phone"
    pub text: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// 0-based line number
    pub line: usize,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Word prefix to match (case-sensitive)
    pub query: String,
}

#[derive(Args)]
pub struct MoveArgs {
    /// 0-based line number
    pub line: usize,
    /// Direction to move
    #[arg(value_parser = ["up", "down"])]
    pub direction: String,
}

#[derive(Args)]
pub struct PartsArgs {
    /// Task text to tokenize
    pub text: String,
}

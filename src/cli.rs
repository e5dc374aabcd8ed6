use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(author, version, about = "Columnar dataframes with statistics for delimited text files")]
pub struct Cli {
    /// Path to the delimited text file to load
    #[arg(required = true)]
    pub path: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Comma-separated column labels to keep, in order
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Show only the first N rows
    #[arg(long, conflicts_with = "tail")]
    pub head: Option<usize>,

    /// Show only the last N rows
    #[arg(long)]
    pub tail: Option<usize>,

    /// Print summary statistics for the numeric columns instead of the data
    #[arg(long)]
    pub describe: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

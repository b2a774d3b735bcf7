// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flat flag surface of the vellum renderer

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(about = "Render templated documents against environment and YAML data")]
#[command(version)]
pub struct Args {
    #[arg(help = "Input document paths; '-' or no paths reads standard input")]
    pub files: Vec<String>,

    #[arg(short = 'd', long = "data", help = "YAML file supplying the value tree")]
    pub data: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "root",
        help = "Dotted sub-key path to nest the value tree under"
    )]
    pub root: Option<String>,

    #[arg(
        short = 's',
        long = "separator",
        allow_hyphen_values = true,
        help = "Separator line printed before each document in multi-document runs; %v is replaced with the filename"
    )]
    pub separator: Option<String>,

    #[arg(
        short = 'q',
        long = "silent",
        help = "Render documents but discard their output"
    )]
    pub silent: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

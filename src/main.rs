use anyhow::Result;
use bit_internals::areas::repository::Repository;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit-internals",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Inspect the object database of a git repository",
    long_about = "Reads loose objects and refs straight from a .git directory, \
    without calling git, and renders objects, branches, history and trees. \
    Any value not given on the command line is asked for interactively.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, env = "GIT_DIR", help = "Path to the .git directory")]
    git_dir: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Log diagnostics to stderr (-v debug, -vv trace)")]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "list-branches",
        about = "List branches, marking the current one",
        long_about = "Lists every branch under refs/heads in name order. \
        The branch HEAD points to is prefixed with '*'."
    )]
    ListBranches,
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "Decodes a blob, tree or commit and prints it in a readable form."
    )]
    CatFile {
        #[arg(index = 1, help = "The object SHA to print")]
        sha: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show the history of a branch",
        long_about = "Follows first parents from the branch tip down to the root commit. \
        The second parent of a merge is shown inline and marked as merged."
    )]
    Log {
        #[arg(index = 1, help = "The branch to start from")]
        branch: Option<String>,
    },
    #[command(
        name = "commit-tree",
        about = "List the files of a commit",
        long_about = "Flattens the tree of a commit into one path per line."
    )]
    CommitTree {
        #[arg(index = 1, help = "The commit SHA whose tree is listed")]
        sha: Option<String>,
    },
}

impl Commands {
    /// Command chosen at the interactive prompt; its value is asked for later.
    fn from_word(word: &str) -> Result<Self> {
        match word {
            "list-branches" => Ok(Commands::ListBranches),
            "cat-file" => Ok(Commands::CatFile { sha: None }),
            "log" => Ok(Commands::Log { branch: None }),
            "commit-tree" => Ok(Commands::CommitTree { sha: None }),
            other => anyhow::bail!("Wrong command: {other}"),
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    println!("{message}");

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        anyhow::bail!("No input given for: {message}");
    }

    Ok(line.trim().to_string())
}

fn given_or_prompt(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(message),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bit_internals={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => colored::control::set_override(std::io::stdout().is_terminal()),
    }

    let git_dir = given_or_prompt(cli.git_dir, "Enter .git directory location:")?;
    let command = match cli.command {
        Some(command) => command,
        None => Commands::from_word(&prompt("Enter command:")?)?,
    };

    let repository = Repository::new(&git_dir, Box::new(std::io::stdout()))?;

    match command {
        Commands::ListBranches => repository.list_branches()?,
        Commands::CatFile { sha } => {
            let sha = given_or_prompt(sha, "Enter git object hash:")?;
            repository.cat_file(&sha)?
        }
        Commands::Log { branch } => {
            let branch = given_or_prompt(branch, "Enter branch name:")?;
            repository.log(&branch)?
        }
        Commands::CommitTree { sha } => {
            let sha = given_or_prompt(sha, "Enter commit-hash:")?;
            repository.commit_tree(&sha)?
        }
    }

    Ok(())
}

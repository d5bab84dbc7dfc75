use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wort::index::Index;
use wort::session::{Page, Session};
use wort::{output, stats};

#[derive(Parser)]
#[command(name = "wort")]
#[command(about = "Offline dictionary lookup with nearest-match search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Term to look up (when no subcommand is given)
    term: Option<String>,

    /// Path to the index file
    #[arg(short, long, global = true, default_value = "index.dat")]
    index: PathBuf,

    /// Path to the dictionary text file
    #[arg(short, long, global = true, default_value = "words.dat")]
    data: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the dictionary interactively
    Browse {
        /// Term to show first
        term: Option<String>,
    },
    /// Show dictionary statistics
    Stats {
        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Some(Commands::Browse { term }) => {
            let mut session = Session::open(&cli.index, &cli.data)?;
            browse(&mut session, term, color)?;
        }
        Some(Commands::Stats { json }) => {
            let session = Session::open(&cli.index, &cli.data)?;
            stats::show_stats(session.index(), session.blob(), json)?;
        }
        None => match cli.term {
            Some(term) => {
                let mut session = Session::open(&cli.index, &cli.data)?;
                let page = session.search(&term)?;
                output::print_page(&page, session.index(), color)?;
            }
            None => {
                Cli::command().print_help()?;
            }
        },
    }

    Ok(())
}

/// Interactive loop: search by typing a term, page with `:n` / `:p`.
fn browse(session: &mut Session, initial: Option<String>, color: bool) -> Result<()> {
    println!("Type a term to search, :n / :p to page, :q to quit.");
    println!();

    if let Some(term) = initial {
        let result = session.search(&term);
        render(result, session.index(), color);
    }

    prompt()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        match line.trim() {
            "" => {}
            ":q" | ":quit" => break,
            ":n" | ":next" => {
                let result = session.next();
                render(result, session.index(), color);
            }
            ":p" | ":prev" => {
                let result = session.prev();
                render(result, session.index(), color);
            }
            term => {
                let result = session.search(term);
                render(result, session.index(), color);
            }
        }
        prompt()?;
    }

    Ok(())
}

fn render(result: wort::Result<Page>, index: &Index, color: bool) {
    match result {
        Ok(page) => {
            if let Err(e) = output::print_page(&page, index, color) {
                eprintln!("error: {e}");
            }
        }
        // the session position is unchanged on failure; just report and go on
        Err(e) => eprintln!("error: {e}"),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

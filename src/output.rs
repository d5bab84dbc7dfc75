//! Terminal output for dictionary pages.

use crate::index::Index;
use crate::session::Page;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a page: highlighted headword, position line, then the entry text.
pub fn print_page(page: &Page, index: &Index, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Some(entry) = index.get(page.entry) {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", entry.term)?;
        stdout.reset()?;
    }

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "entry {} of {}", page.entry + 1, index.len())?;
    stdout.reset()?;

    writeln!(stdout)?;
    writeln!(stdout, "{}", page.text.trim_end())?;

    Ok(())
}

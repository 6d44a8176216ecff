//! Line-oriented front end: banner, prompt, and printing of output blocks.
//!
//! Generic over the reader and writer so the binary can hand it stdin and
//! stdout while tests drive it from memory.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::engine::Output;
use crate::{COMMAND_HELP, FAREWELL, Flow, GameState};

/// Print every block, one line per line of text.
pub fn write_output<W: Write>(w: &mut W, out: &Output) -> io::Result<()> {
    for line in out.lines() {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// Play until the player quits, dies, or the input runs out.
pub fn run<R: BufRead, W: Write>(game: &mut GameState, mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", game.welcome())?;
    writeln!(output, "{}", COMMAND_HELP)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input counts as quitting
            writeln!(output, "\n{}", FAREWELL)?;
            info!("input closed");
            break;
        }

        let (out, flow) = game.step(&line);
        write_output(&mut output, &out)?;

        if flow == Flow::Quit {
            break;
        }
    }

    output.flush()
}

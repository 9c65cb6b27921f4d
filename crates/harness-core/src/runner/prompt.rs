use std::io::{self, BufRead, Write};

/// Operator-confirmation port for the interactive debugging pause. The pause
/// deliberately blocks the whole pipeline: the replayed data and finished
/// search job stay on the platform until the operator is done looking.
pub trait OperatorPrompt {
    fn wait(&self, passed: bool) -> io::Result<()>;
}

/// Reads one line from stdin, the tool's only interactive surface.
pub struct StdinPrompt;

impl OperatorPrompt for StdinPrompt {
    fn wait(&self, passed: bool) -> io::Result<()> {
        let label = if passed { "SUCCESS" } else { "FAILURE" };
        let mut stdout = io::stdout();
        write!(
            stdout,
            "\n\n\n****SEARCH {label} : press enter when done debugging the search/data****"
        )?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

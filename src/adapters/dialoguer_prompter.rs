use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts via dialoguer.
///
/// When stdin is not a terminal, answers are read one line at a time from it
/// instead, so the installer can be driven by a pipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        let prompt_error =
            |details: String| AppError::Prompt { what: prompt.to_string(), details };

        let answer = if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|err| prompt_error(err.to_string()))?
        } else {
            read_piped_line(prompt, &mut io::stdin().lock())
                .map_err(|err| prompt_error(err.to_string()))?
        };

        if answer.is_empty() { Ok(default.to_string()) } else { Ok(answer) }
    }
}

fn read_piped_line(prompt: &str, input: &mut impl BufRead) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}: ", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(stdout)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

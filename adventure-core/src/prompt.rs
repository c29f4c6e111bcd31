//! Follow-up questions asked in the middle of a command.
//!
//! Some commands need more input before they can finish: picking one of
//! several same-named targets, or confirming `exit`. The engine asks through
//! the `Prompter` trait so the console and the tests can answer differently.

use crate::error::Result;

/// Source of answers to follow-up questions.
pub trait Prompter {
    /// Print `lines`, show `prompt`, and read one reply.
    ///
    /// Returns `None` when input has ended.
    fn ask(&mut self, lines: &[String], prompt: &str) -> Result<Option<String>>;
}

/// Prompt shown when waiting for a numbered choice.
pub const CHOICE_PROMPT: &str = ">: ";

/// Ask the player to pick one of `options`.
///
/// With no options there is nothing to pick. With one option it is picked
/// without asking. Otherwise the options are listed by index and the player
/// is asked until they enter a valid index. Returns `None` if input ends
/// before a valid answer.
pub fn choose<P>(prompter: &mut P, noun: &str, options: &[&str]) -> Result<Option<usize>>
where
    P: Prompter + ?Sized,
{
    match options.len() {
        0 => return Ok(None),
        1 => return Ok(Some(0)),
        _ => {}
    }

    let last = options.len() - 1;
    let mut lines = Vec::with_capacity(options.len() + 1);
    lines.push(format!("There is more than one {noun}. Which one do you mean?"));
    lines.extend(
        options
            .iter()
            .enumerate()
            .map(|(i, name)| format!("    {i}: {name}")),
    );

    loop {
        let Some(reply) = prompter.ask(&lines, CHOICE_PROMPT)? else {
            return Ok(None);
        };

        match reply.trim().parse::<usize>() {
            Ok(choice) if choice <= last => return Ok(Some(choice)),
            _ => {
                lines = vec![format!(
                    "Sorry, that's not a valid input. Please enter a number from 0 to {last}."
                )];
            }
        }
    }
}

/// Ask a yes/no question. Only `y` (any case) counts as yes.
///
/// End of input counts as yes, so a closed stdin can still leave the game.
pub fn confirm<P>(prompter: &mut P, question: &str) -> Result<bool>
where
    P: Prompter + ?Sized,
{
    match prompter.ask(&[], question)? {
        Some(reply) => Ok(reply.trim().to_lowercase() == "y"),
        None => Ok(true),
    }
}

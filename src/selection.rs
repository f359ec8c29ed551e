// Selection state machine for the "save a search result" prompt.
//
// The machine has two states. It starts in `AwaitingInput` and only moves to
// `Done` when a submitted line is a valid Book ID (or 0 / empty for skip).
// Rejected input leaves the state unchanged, so the caller simply asks again.

/// Outcome of a validated selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Skip,
    /// 1-based Book ID as displayed to the user.
    Book(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingInput,
    Done(Choice),
}

/// Why a line was not accepted. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputRejection {
    #[error("Invalid Book ID, please enter a number between 1 and {count}.")]
    NotANumber { count: usize },
    #[error("Book ID {value} is out of range, please enter a number between 1 and {count}.")]
    OutOfRange { value: i64, count: usize },
}

#[derive(Debug)]
pub struct Selection {
    count: usize,
    state: SelectionState,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            state: SelectionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, SelectionState::Done(_))
    }

    /// Prompt text without the trailing `": "`, which the input source adds.
    pub fn prompt(&self) -> String {
        format!(
            "Enter Book ID (1-{}) to save to reading list or 0 to skip",
            self.count
        )
    }

    /// Feed one line of user input. Once `Done`, further input is ignored and
    /// the settled choice is returned again.
    pub fn submit(&mut self, input: &str) -> Result<Choice, InputRejection> {
        if let SelectionState::Done(choice) = self.state {
            return Ok(choice);
        }
        let choice = parse_choice(input, self.count)?;
        self.state = SelectionState::Done(choice);
        Ok(choice)
    }
}

/// Validate a raw line against `[0, count]`. Empty input means skip.
pub fn parse_choice(input: &str, count: usize) -> Result<Choice, InputRejection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Choice::Skip);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputRejection::NotANumber { count })?;
    match usize::try_from(value) {
        Ok(0) => Ok(Choice::Skip),
        Ok(id) if id <= count => Ok(Choice::Book(id)),
        _ => Err(InputRejection::OutOfRange { value, count }),
    }
}

use suggest_core::FetchOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Command {
    Exit,
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,
    Paste,
    Submit,
    NextOption,
    PrevOption,
    Dismiss,
    ToggleHelp,
    CloseHelp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandOutcome {
    Continue,
    Exit,
}

/// Result of one background fetch, tagged with the request it answers.
#[derive(Debug)]
pub struct FetchMessage {
    pub seq: u64,
    pub outcome: FetchOutcome,
}

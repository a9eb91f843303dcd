//! Commands queued from the input reader to the backend loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    Previous,
    Next,
    Reload,
    Quit,
}

impl BackendCommand {
    /// Parse one typed line. Blank lines and unknown words yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "prev" | "previous" => Some(Self::Previous),
            "n" | "next" => Some(Self::Next),
            "r" | "retry" | "reload" => Some(Self::Reload),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Reload => "reload",
            Self::Quit => "quit",
        }
    }
}

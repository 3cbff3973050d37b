use std::fmt;

/// A user-visible message produced by an install or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Installing(String),
    AlreadyInstalled(String),
    Removing(String),
    NotInstalled(String),
    StillNeeded(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Installing(name) => write!(f, "Installing {}", name),
            Notice::AlreadyInstalled(name) => write!(f, "{} is already installed.", name),
            Notice::Removing(name) => write!(f, "Removing {}", name),
            Notice::NotInstalled(name) => write!(f, "{} is not installed.", name),
            Notice::StillNeeded(name) => write!(f, "{} is still needed.", name),
        }
    }
}

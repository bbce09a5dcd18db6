//! Typed git invocations.

use std::fmt;

/// One git invocation issued by the committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git add .`
    Add,
    /// `git commit [-S] -m <message>`
    Commit { message: String, sign: bool },
    /// `git push`
    Push,
}

impl GitCommand {
    pub fn commit(message: impl Into<String>, sign: bool) -> Self {
        Self::Commit {
            message: message.into(),
            sign,
        }
    }

    /// Arguments passed to the `git` binary, one argv entry each.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Add => vec!["add".into(), ".".into()],
            Self::Commit { message, sign } => {
                let mut args = vec!["commit".to_string()];
                if *sign {
                    args.push("-S".into());
                }
                args.push("-m".into());
                args.push(message.clone());
                args
            }
            Self::Push => vec!["push".into()],
        }
    }

    /// Short name used in log lines.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Add => "stage changes",
            Self::Commit { .. } => "create commit",
            Self::Push => "push",
        }
    }
}

/// Renders the equivalent shell line, e.g. `git commit -S -m 'msg'`.
impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("git add ."),
            Self::Commit { message, sign } => {
                f.write_str("git commit")?;
                if *sign {
                    f.write_str(" -S")?;
                }
                write!(f, " -m {}", shell_quote(message))
            }
            Self::Push => f.write_str("git push"),
        }
    }
}

/// Single-quote `value` for a POSIX shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

//! Commit message composition.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::commit::answers::AnswerRecord;

/// Issue references that get a `#` prefix: `12` or `#12`.
static NUMERIC_ISSUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(\d+)$").expect("valid issue regex"));

/// Render the answers into a commit message.
///
/// Produces:
/// ```text
/// type(scope): description (#issue) emoji
///
/// Body text.
/// ```
///
/// Scope, issue and body are omitted when empty. A purely numeric issue is
/// written as `(#12)`; anything else is kept verbatim, e.g. `(JIRA-12)`.
pub fn compose_message(answers: &AnswerRecord) -> String {
    let scope = if answers.scope.is_empty() {
        String::new()
    } else {
        format!("({})", answers.scope)
    };

    let issue = format_issue(&answers.issue);

    let mut msg = format!(
        "{}{}: {}{} {}",
        answers.commit_type, scope, answers.description, issue, answers.emoji
    );

    if !answers.body.is_empty() {
        msg = format!("{}\n\n{}", msg.trim_end(), answers.body);
    }

    msg.trim().to_string()
}

fn format_issue(issue: &str) -> String {
    if issue.is_empty() {
        return String::new();
    }

    match NUMERIC_ISSUE.captures(issue) {
        Some(caps) => format!(" (#{})", &caps[1]),
        None => format!(" ({})", issue),
    }
}

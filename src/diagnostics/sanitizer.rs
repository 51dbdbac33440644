// SPDX-License-Identifier: MPL-2.0
//! Message sanitization for diagnostic events.
//!
//! Notification text is written by callers and can carry anything: file
//! paths, e-mail addresses of the signed-in user, bearer tokens echoed back
//! by a failing request. None of it belongs in a diagnostics report.

use std::sync::LazyLock;

use regex::Regex;

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|/tmp/[^\s"'()\[\]]+"#,
        r#"|/var/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#"|\\\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .expect("path regex should compile")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bearer\s+[A-Za-z0-9\-._~+/]+=*").expect("bearer regex should compile")
});

/// Sanitizes a message by removing sensitive information.
///
/// Replaces file paths with `<path>`, e-mail addresses with `<email>` and
/// bearer credentials with `Bearer <token>`.
///
/// # Examples
///
/// ```
/// use iced_toasts::diagnostics::sanitize_message;
///
/// let msg = "Failed to open /home/user/report.pdf";
/// assert_eq!(sanitize_message(msg), "Failed to open <path>");
///
/// let msg = "Welcome back, ada@example.org";
/// assert_eq!(sanitize_message(msg), "Welcome back, <email>");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_tokens = BEARER_PATTERN.replace_all(message, "Bearer <token>");
    let without_emails = EMAIL_PATTERN.replace_all(&without_tokens, "<email>");
    PATH_PATTERN
        .replace_all(&without_emails, "<path>")
        .into_owned()
}

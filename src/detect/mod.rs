//! Best-effort detection of the current user's email address.
//!
//! Probes a fixed list of sources in priority order and stops at the first
//! non-empty hit:
//!
//! 1. Global git config (`git config --global user.email`)
//! 2. Local git config for the working directory (`git config user.email`)
//! 3. Environment variables ([`EMAIL_ENV_VARS`])
//! 4. The `[user]` section of `~/.gitconfig`, parsed directly
//!
//! Each probe's failure is swallowed locally and never aborts the chain;
//! when every source misses, the result is `None`.

use std::path::PathBuf;

use tokio::process::Command;

/// Environment variables checked for an email address, in priority order.
pub const EMAIL_ENV_VARS: &[&str] = &[
    "GIT_AUTHOR_EMAIL",
    "GIT_COMMITTER_EMAIL",
    "EMAIL",
    "USER_EMAIL",
];

/// Detect the current user's email address, or `None` if no source has one.
pub async fn detect_user_email() -> Option<String> {
    if let Some(email) = git_config_email(&["config", "--global", "user.email"]).await {
        return Some(email);
    }

    // Local config may carry a per-repo override when run inside a repo.
    if let Some(email) = git_config_email(&["config", "user.email"]).await {
        return Some(email);
    }

    if let Some(email) = email_from_env() {
        return Some(email);
    }

    email_from_home_gitconfig().await
}

/// Run `git` with the given arguments and return trimmed non-empty stdout.
async fn git_config_email(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    non_empty(String::from_utf8_lossy(&output.stdout).trim())
}

fn email_from_env() -> Option<String> {
    EMAIL_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find_map(|value| non_empty(value.trim()))
}

async fn email_from_home_gitconfig() -> Option<String> {
    let path = home_gitconfig()?;
    let content = tokio::fs::read_to_string(path).await.ok()?;
    email_from_gitconfig(&content)
}

fn home_gitconfig() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gitconfig"))
}

/// Pull the `email` entry out of the `[user]` section of a gitconfig file.
///
/// Looks for:
///
/// ```text
/// [user]
///     email = foo@bar.com
/// ```
fn email_from_gitconfig(content: &str) -> Option<String> {
    let mut in_user_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            let section = line
                .trim_start_matches('[')
                .trim_end_matches(']')
                .trim();
            in_user_section = section.eq_ignore_ascii_case("user");
            continue;
        }

        if !in_user_section {
            continue;
        }

        if let Some(rest) = line.strip_prefix("email") {
            let rest = rest.trim_start();
            if let Some(value) = rest.strip_prefix('=') {
                if let Some(email) = non_empty(value.trim()) {
                    return Some(email);
                }
            }
        }
    }

    None
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitconfig_basic() {
        let content = "[user]\n    name = Foo Bar\n    email = foo@bar.com\n";
        assert_eq!(
            email_from_gitconfig(content),
            Some("foo@bar.com".to_string())
        );
    }

    #[test]
    fn test_gitconfig_email_outside_user_section_ignored() {
        let content = "[sendemail]\n    email = smtp@example.com\n[core]\n    autocrlf = input\n";
        assert_eq!(email_from_gitconfig(content), None);
    }

    #[test]
    fn test_gitconfig_user_section_after_others() {
        let content = "[core]\n    editor = vim\n[user]\n\temail = dev@example.com\n";
        assert_eq!(
            email_from_gitconfig(content),
            Some("dev@example.com".to_string())
        );
    }

    #[test]
    fn test_gitconfig_section_name_case_insensitive() {
        let content = "[User]\n    email = Dev@Example.com\n";
        assert_eq!(
            email_from_gitconfig(content),
            Some("Dev@Example.com".to_string())
        );
    }

    #[test]
    fn test_gitconfig_empty_email_is_a_miss() {
        let content = "[user]\n    email =\n";
        assert_eq!(email_from_gitconfig(content), None);
    }

    #[test]
    fn test_gitconfig_missing_user_section() {
        let content = "[core]\n    editor = vim\n";
        assert_eq!(email_from_gitconfig(content), None);
    }

    #[test]
    fn test_gitconfig_stops_at_next_section() {
        let content = "[user]\n    name = Foo\n[core]\n    email = wrong@example.com\n";
        assert_eq!(email_from_gitconfig(content), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("a@b.c"), Some("a@b.c".to_string()));
    }

    #[tokio::test]
    async fn test_git_probe_failure_is_swallowed() {
        // bogus config key: git exits non-zero, the probe reports a miss
        let result = git_config_email(&["config", "definitely.not.a.key"]).await;
        assert_eq!(result, None);
    }
}

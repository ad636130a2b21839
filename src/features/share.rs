//! Share adapter.
//!
//! Desktop stand-in for a native share sheet: the formatted quote is handed to
//! the platform opener (`xdg-open` / `open` / `cmd /C start`) as a `mailto:`
//! URL, which lets the user's mail client carry it wherever they like. The
//! opener is feature-detected; when it is missing, or genuinely fails, the
//! caller falls back to the clipboard. A share the user backed out of is not
//! an error and must NOT trigger the fallback - [`needs_clipboard_fallback`]
//! encodes that distinction.

use std::process::Command;

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share target accepted the content.
    Shared,
    /// The user backed out; silently ignored, never an error. The desktop
    /// opener cannot report this, but share surfaces that can must use it.
    #[allow(dead_code)]
    Cancelled,
    /// No share capability on this system.
    Unavailable,
    /// The capability exists but the attempt failed.
    Failed(String),
}

/// Whether the clipboard fallback should run for this outcome.
///
/// Only genuine failure modes fall through; cancellation is respected.
pub fn needs_clipboard_fallback(outcome: &ShareOutcome) -> bool {
    matches!(outcome, ShareOutcome::Unavailable | ShareOutcome::Failed(_))
}

/// Build the `mailto:` handoff URL for a quote.
pub fn share_url(title: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(title),
        urlencoding::encode(body)
    )
}

const NO_ARGS: &[&str] = &[];

fn opener() -> Option<(&'static str, &'static [&'static str])> {
    #[cfg(target_os = "macos")]
    {
        Some(("open", NO_ARGS))
    }
    #[cfg(target_os = "windows")]
    {
        Some(("cmd", &["/C", "start", ""]))
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let found = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).any(|dir| dir.join("xdg-open").is_file()))
            .unwrap_or(false);
        found.then_some(("xdg-open", NO_ARGS))
    }
}

/// Hand the text to the platform share endpoint.
///
/// Blocking (waits for the opener to exit); run it off the UI thread. The
/// opener cannot tell us whether the user backed out of the mail client
/// afterwards, so a clean exit counts as shared; `Cancelled` is produced by
/// share surfaces that can observe it.
pub fn share_text(title: &str, body: &str) -> ShareOutcome {
    let Some((binary, args)) = opener() else {
        return ShareOutcome::Unavailable;
    };
    let url = share_url(title, body);
    match Command::new(binary).args(args).arg(&url).status() {
        Ok(status) if status.success() => ShareOutcome::Shared,
        Ok(status) => ShareOutcome::Failed(format!("{} exited with {}", binary, status)),
        Err(e) => ShareOutcome::Failed(format!("failed to run {}: {}", binary, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_fallback_decision {
        use super::*;

        #[test]
        fn cancellation_is_not_an_error() {
            assert!(!needs_clipboard_fallback(&ShareOutcome::Cancelled));
        }

        #[test]
        fn success_needs_no_fallback() {
            assert!(!needs_clipboard_fallback(&ShareOutcome::Shared));
        }

        #[test]
        fn genuine_failures_fall_through_to_clipboard() {
            assert!(needs_clipboard_fallback(&ShareOutcome::Unavailable));
            assert!(needs_clipboard_fallback(&ShareOutcome::Failed(
                "boom".to_string()
            )));
        }
    }

    #[test]
    fn share_url_percent_encodes_both_fields() {
        let url = share_url("Inspirational Quote", "\"Be kind\" - Anonymous");
        assert!(url.starts_with("mailto:?subject=Inspirational%20Quote&body="));
        assert!(url.contains("%22Be%20kind%22%20-%20Anonymous"));
        assert!(!url.contains(' '));
    }
}

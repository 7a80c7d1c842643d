use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::{debug, warn};

/// Maximum clipboard size (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Write-only clipboard (allows mocking in tests)
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard. The handle is opened on first use so that
/// starting the TUI never fails on a headless machine.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().context("Failed to initialize clipboard")?);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            anyhow::bail!("Clipboard unavailable");
        };
        clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Validates clipboard text without accessing system clipboard
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Copy `text` through `provider`.
///
/// # Errors
/// Returns error if the text is empty, larger than 10MB, or the provider fails
/// (clipboard locked, access denied, no display server).
pub fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    debug!(chars = text.chars().count(), "copied to clipboard");
    Ok(())
}

/// Copy text to the system clipboard.
///
/// # Platform Support
/// - macOS: pasteboard API
/// - Linux: X11 or Wayland
/// - Windows: Win32 clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validation runs before the lazy clipboard handle is opened
    copy_with_provider(text, &mut SystemClipboard::new())
}

/// Copy and swallow the error into the log. Returns whether the copy worked.
pub fn copy_logged(text: &str, provider: &mut dyn ClipboardProvider) -> bool {
    match copy_with_provider(text, provider) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Failed to copy text");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock clipboard for testing without system clipboard access
    #[derive(Default)]
    pub(crate) struct MockClipboard {
        pub(crate) text: Option<String>,
        pub(crate) should_fail: bool,
    }

    impl MockClipboard {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_failure() -> Self {
            Self { text: None, should_fail: true }
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                anyhow::bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_bijoy_text_with_mock() {
        let mut mock = MockClipboard::new();
        let text = "Avgvi †mvbvi evsjv";

        copy_with_provider(text, &mut mock).unwrap();

        assert_eq!(mock.text.as_deref(), Some(text));
    }

    #[test]
    fn test_copy_bengali_multiline_with_mock() {
        let mut mock = MockClipboard::new();
        let text = "আমার সোনার বাংলা\nআমি তোমায় ভালোবাসি";

        copy_with_provider(text, &mut mock).unwrap();

        assert_eq!(mock.text.as_deref(), Some(text));
    }

    #[test]
    fn test_clipboard_provider_failure() {
        let mut mock = MockClipboard::with_failure();

        let result = copy_with_provider("text", &mut mock);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_copy_empty_text() {
        let mut mock = MockClipboard::new();
        let result = copy_with_provider("", &mut mock);

        assert!(result.unwrap_err().to_string().contains("empty"));
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_whitespace_only_text_is_copied() {
        let mut mock = MockClipboard::new();
        copy_with_provider("  \n", &mut mock).unwrap();
        assert_eq!(mock.text.as_deref(), Some("  \n"));
    }

    #[test]
    fn test_size_limit_is_in_bytes() {
        let mut mock = MockClipboard::new();
        let at_limit = "a".repeat(MAX_CLIPBOARD_SIZE);
        assert!(copy_with_provider(&at_limit, &mut mock).is_ok());

        // "ক" is 3 bytes in UTF-8
        let over = "ক".repeat(MAX_CLIPBOARD_SIZE / 3 + 1);
        let err = copy_with_provider(&over, &mut mock).unwrap_err().to_string();
        assert!(err.contains("too large"));
        assert!(err.contains("bytes"));
    }

    #[test]
    fn test_copy_logged_reports_outcome() {
        let mut ok = MockClipboard::new();
        assert!(copy_logged("Avwg", &mut ok));

        let mut failing = MockClipboard::with_failure();
        assert!(!copy_logged("Avwg", &mut failing));
    }

    #[test]
    fn test_copy_to_clipboard_validates_before_clipboard_access() {
        let result = copy_to_clipboard("");
        assert!(result.unwrap_err().to_string().contains("empty"));
    }
}

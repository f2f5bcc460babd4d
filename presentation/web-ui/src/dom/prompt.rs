use web_sys::Window;

use business::domain::catalog::ports::UserPrompt;

/// Native `confirm`/`alert` dialogs.
pub struct WindowPrompt {
    window: Window,
}

impl WindowPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl UserPrompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        // A blocked dialog counts as "no".
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?e, "alert dialog failed");
        }
    }
}

//! # Notifications Widget
//!
//! Toast notification system using egui-notify for claim confirmations and
//! status updates. This is the desktop stand-in for the web page's
//! blocking alerts: one-shot, non-blocking, stacked in a corner.

use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification (confirmed claims)
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification (failed claims, failed switches)
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show an info notification (network switch requests, connections)
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

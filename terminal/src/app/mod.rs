//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the entire application,
//! coordinating between the UI rendering layer, async task handlers, and
//! application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains async results every frame      │   │
//! │  │  - handle_*_click() - user action handlers           │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                              │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Locks held briefly, never across awaits           │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio runtime)                    │
//! │  - drop poll: metadata / supply / condition / eligibility   │
//! │  - connector flows and network switches                     │
//! │  - claim submission                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Async tasks send [`AppEvent`]s back to the main thread; `on_tick`
//! folds them into state and feeds pending notices to the toast stack.

mod event_handler;
mod events;
pub(crate) mod handlers;
mod state;
pub(crate) mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use shared::dto::wallet::WalletConnector;

use crate::core::service::DropApi;
use crate::services::api::SdkClient;
use crate::ui::widgets::notifications::NotificationManager;
use event_handler::AppEventHandler;
use tasks::drop::DropCache;

/// Main application orchestrator coordinating UI rendering, async tasks,
/// and state management.
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in `on_tick()`
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender cloned into async tasks
    pub(crate) event_tx: Sender<AppEvent>,
    /// Gateway client shared by all tasks
    pub(crate) api: Arc<dyn DropApi>,
    /// Read-query cache shared with the poll task
    pub(crate) cache: Arc<DropCache>,
    /// Toast notification stack
    pub(crate) notifications: NotificationManager,
}

impl App {
    /// Create the application against the real SDK gateway
    pub fn new() -> Self {
        Self::with_api(Arc::new(SdkClient::new()))
    }

    /// Create the application with an injected gateway implementation
    /// (tests use a mock here)
    pub fn with_api(api: Arc<dyn DropApi>) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::new())),
            event_rx,
            event_tx,
            api,
            cache: Arc::new(DropCache::new()),
            notifications: NotificationManager::new(),
        }
    }

    /// Start the background poll keeping the drop reads warm
    pub fn start(&self) {
        tasks::drop::spawn_drop_poll(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.cache.clone(),
        );
    }

    /// Drain async results and pending notices. Called once per frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let pending = {
            let mut state = self.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in pending {
            match level {
                NoticeLevel::Info => self.notifications.info(message),
                NoticeLevel::Success => self.notifications.success(message),
                NoticeLevel::Error => self.notifications.error(message),
            }
        }
    }

    /// Fold one async event into state
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Start a wallet connector flow
    pub fn handle_connect_click(&mut self, connector: WalletConnector) {
        handlers::wallet::handle_connect_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            connector,
        );
    }

    /// Clear the wallet session
    pub fn handle_disconnect_click(&mut self) {
        handlers::wallet::handle_disconnect_click(self.state.clone());
    }

    /// Change the selected quantity (clamped into bounds)
    pub fn handle_quantity_change(&mut self, quantity: u64) {
        handlers::mint::handle_quantity_change(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            self.cache.clone(),
            quantity,
        );
    }

    /// Mint button click: network check, then claim submission
    pub fn handle_mint_click(&mut self) {
        handlers::mint::handle_mint_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();
        crate::ui::render(ctx, self);
        self.notifications.show(ctx);

        // Poll results arrive outside egui's input loop; keep frames coming
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

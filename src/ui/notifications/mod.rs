// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Two kinds of notifications share the screen:
//!
//! - **Inline** (`Info`, `Success`): stacked in the bottom-right corner,
//!   any number at once, hiding themselves after a delay or when their
//!   dismiss button is pressed.
//! - **Blocking** (`Warning`, `Danger`): a single centered card over a
//!   backdrop. Showing another one replaces it on the spot. It leaves when
//!   the backdrop is clicked or when dismissed from code.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and `Body`
//! - [`manager`] - `Manager`, the lifecycle engine
//! - [`scheduler`] - cancellable delayed tasks driving the lifecycle
//! - [`toast`] - widgets rendering the notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//! manager.show("Settings saved", Severity::Success);
//!
//! // In the view, layer the toasts over the screen content
//! Toast::view_overlay(&manager, &i18n, content, Message::Notification)
//! ```

pub mod manager;
pub mod notification;
pub mod scheduler;
pub mod toast;

pub use manager::{Backdrop, Entry, Manager, Message as NotificationMessage, Phase, Timings};
pub use notification::{Body, Notification, NotificationId, PresentationMode, Severity, Span};
pub use toast::Toast;

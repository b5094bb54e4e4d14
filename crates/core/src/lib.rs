//! Notification history presentation.
//!
//! Turns a single notification history record into the strings shown by the
//! history detail panel: a title, a relative timestamp and a message body.
//! Localization and the clock are injected through [`i18n::Translator`] and
//! [`clock::Clock`] so every computation stays pure.

pub mod clock;
pub mod error;
pub mod i18n;
pub mod memo;
pub mod presenter;
pub mod record;
pub mod timestamp;
pub mod types;
pub mod view;

pub use presenter::{present, DisplayFields, HistoryPresenter};
pub use record::{EventDetail, NotificationRecord};

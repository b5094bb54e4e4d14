//! View-model of the history detail panel.
//!
//! The panel is a header (back affordance and title) above a body holding the
//! presented [`DisplayFields`]. In the compact (mobile) layout the surrounding
//! modal owns navigation, so the header is not rendered at all.

use std::fmt;

use crate::clock::Clock;
use crate::i18n::Translator;
use crate::memo::PresentationCache;
use crate::presenter::{DisplayFields, HistoryPresenter};
use crate::record::NotificationRecord;

/// Icon used for the back affordance when the modal does not choose one.
pub const DEFAULT_BACK_ICON: &str = "arrow-right";

/// Icon that pins the back affordance to the right-hand side.
pub const SETTINGS_BACK_ICON: &str = "setting";

/// Accessible label of the back affordance.
pub const BACK_LABEL: &str = "Back";

// ---------------------------------------------------------------------------
// Modal context
// ---------------------------------------------------------------------------

/// State the enclosing notification modal shares with the panel.
#[derive(Default)]
pub struct ModalContext<'a> {
    on_request_back: Option<Box<dyn FnMut() + 'a>>,
    back_icon: Option<String>,
    title: Option<String>,
}

impl<'a> ModalContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the navigation callback fired by the back affordance.
    pub fn on_request_back(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_request_back = Some(Box::new(handler));
        self
    }

    pub fn back_icon(mut self, icon: impl Into<String>) -> Self {
        self.back_icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn has_back_handler(&self) -> bool {
        self.on_request_back.is_some()
    }
}

impl fmt::Debug for ModalContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalContext")
            .field("has_back_handler", &self.has_back_handler())
            .field("back_icon", &self.back_icon)
            .field("title", &self.title)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Side of the header the back affordance sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackPlacement {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackButton {
    pub icon: String,
    pub placement: BackPlacement,
    pub label: &'static str,
}

impl BackButton {
    fn for_icon(icon: Option<&str>) -> Self {
        let icon = icon.unwrap_or(DEFAULT_BACK_ICON);
        let placement = if icon == SETTINGS_BACK_ICON {
            BackPlacement::Right
        } else {
            BackPlacement::Left
        };
        Self {
            icon: icon.to_string(),
            placement,
            label: BACK_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: Option<String>,
    pub back_button: Option<BackButton>,
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// One open history detail panel.
#[derive(Debug)]
pub struct HistoryDetailView<'a> {
    record: NotificationRecord,
    context: ModalContext<'a>,
    compact: bool,
    cache: PresentationCache,
}

impl<'a> HistoryDetailView<'a> {
    pub fn new(record: NotificationRecord, context: ModalContext<'a>) -> Self {
        Self {
            record,
            context,
            compact: false,
            cache: PresentationCache::new(),
        }
    }

    /// Apply the viewport's compact-layout signal.
    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    /// Show a different record. The body is recomputed on next access only if
    /// the record actually changed.
    pub fn set_record(&mut self, record: NotificationRecord) {
        self.record = record;
    }

    /// Whether the back affordance is rendered.
    pub fn shows_back_affordance(&self) -> bool {
        !self.compact && self.context.has_back_handler()
    }

    /// The header, or `None` in the compact layout.
    pub fn header(&self) -> Option<Header> {
        if self.compact {
            return None;
        }
        let back_button = self
            .shows_back_affordance()
            .then(|| BackButton::for_icon(self.context.back_icon.as_deref()));
        Some(Header {
            title: self.context.title.clone(),
            back_button,
        })
    }

    /// Activate the back affordance. Returns `true` if the navigation
    /// callback ran.
    pub fn press_back(&mut self) -> bool {
        if !self.shows_back_affordance() {
            return false;
        }
        match self.context.on_request_back.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// The presented body of the current record.
    pub fn body<C, T>(&mut self, presenter: &HistoryPresenter<C, T>) -> &DisplayFields
    where
        C: Clock,
        T: Translator,
    {
        self.cache.get_or_present(
            &self.record,
            presenter.now(),
            presenter.zone(),
            presenter.translator(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::rc::Rc;

use log::{debug, error};
use yew::Reducible;

use crate::error::{self, SiteError};

/// A surface that can be opened over the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    MobileMenu,
    CookieModal,
}

impl Surface {
    pub fn overlay_id(&self) -> &'static str {
        match self {
            Surface::MobileMenu => "mobileMenuOverlay",
            Surface::CookieModal => "cookieModalOverlay",
        }
    }

    /// True when a click's target element is this surface's overlay itself,
    /// not something rendered inside it.
    pub fn is_direct_hit(&self, target_id: &str) -> bool {
        target_id == self.overlay_id()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Open,
    Close,
    /// A click landed on the overlay owned by the given surface.
    OverlayClick(Surface),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleState {
    surface: Surface,
    open: bool,
}

impl ToggleState {
    pub fn closed(surface: Surface) -> Self {
        Self { surface, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&self, action: ToggleAction) -> Self {
        let open = match action {
            ToggleAction::Open => true,
            ToggleAction::Close => false,
            ToggleAction::OverlayClick(owner) if owner == self.surface => false,
            ToggleAction::OverlayClick(_) => self.open,
        };
        Self { surface: self.surface, open }
    }
}

impl Reducible for ToggleState {
    type Action = ToggleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next.open != self.open {
            debug!("{:?} open={}", self.surface, next.open);
        }
        Rc::new(next)
    }
}

/// Whether the page behind the surfaces must stay still: any open surface
/// holds the lock.
pub fn background_locked(surfaces: &[&ToggleState]) -> bool {
    surfaces.iter().any(|surface| surface.is_open())
}

/// Locks or releases scrolling of the page behind an open surface.
pub fn lock_background_scroll(locked: bool) {
    if let Err(e) = set_body_overflow(locked) {
        error!("Failed to update background scroll: {}", e);
    }
}

fn set_body_overflow(locked: bool) -> Result<(), SiteError> {
    let body = error::document()?
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

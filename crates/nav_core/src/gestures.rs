//! Swipe-gesture dispatch.
//!
//! Swipe-distance thresholding happens in the host input layer; by the time
//! a direction reaches [`dispatch`] the gesture is already real.

use shared::domain::{NavigationAction, SessionSnapshot, SwipeDirection};

use crate::routes::RouteTable;
use crate::shortcuts::saved_files_target;

/// UI facts the dispatcher cannot read on its own.
///
/// `is_mobile` is a one-time viewport classification taken at startup; it
/// does not track later resizes.
#[derive(Debug, Clone)]
pub struct GestureContext {
    pub panel_open: bool,
    pub current_path: String,
    pub is_mobile: bool,
}

/// Maps a swipe to a panel or navigation action. `None` means the gesture
/// has no effect here, which is a normal outcome.
///
/// Right swipes, in priority order: close an open panel (whatever the
/// route), do nothing on the login/signup family, otherwise go to the
/// saved-or-default semester files page. Left swipes only ever open the
/// panel, and only on mobile, off the login/signup family, with the panel
/// closed.
pub fn dispatch(
    table: &RouteTable,
    direction: SwipeDirection,
    ctx: &GestureContext,
    session: &SessionSnapshot,
) -> Option<NavigationAction> {
    match direction {
        SwipeDirection::Right => {
            if ctx.panel_open {
                return Some(NavigationAction::SetPanel(false));
            }
            if table.is_auth_only(&ctx.current_path) {
                return None;
            }
            Some(NavigationAction::NavigateTo(saved_files_target(session)))
        }
        SwipeDirection::Left => {
            if ctx.is_mobile && !ctx.panel_open && !table.is_auth_only(&ctx.current_path) {
                Some(NavigationAction::SetPanel(true))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/gestures_tests.rs"]
mod tests;

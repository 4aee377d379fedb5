//! Modal dialog state.
//!
//! The modal is a headless open/close state machine with the provider
//! behavior of the full widget: dialog children are tagged with
//! [`MODAL_TAG`] and partitioned out of an arbitrary child tree so a
//! renderer can mount them in an overlay while the remaining children
//! render in place.

use crate::node::{partition_by_tag, Node};
use serde::{Deserialize, Serialize};

/// Marker tag identifying modal children inside a node tree.
pub const MODAL_TAG: &str = "Modal";

/// Why the modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// The close button was pressed
    CloseButton,
    /// The backdrop was pressed
    Backdrop,
    /// The host closed the modal programmatically
    Explicit,
}

/// Message emitted when the modal opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOpened;

/// Message emitted when the modal closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalClosed {
    /// Why the modal closed
    pub reason: CloseReason,
}

/// Headless modal dialog state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modal {
    /// Whether the modal is open
    open: bool,
    /// Whether pressing the backdrop closes the modal
    close_on_backdrop: bool,
    /// Whether a close button should be rendered
    display_close_button: bool,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            open: false,
            close_on_backdrop: true,
            display_close_button: true,
        }
    }
}

impl Modal {
    /// Create a new closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial open state.
    #[must_use]
    pub const fn open_initially(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set whether pressing the backdrop closes the modal.
    #[must_use]
    pub const fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    /// Set whether a close button should be rendered.
    #[must_use]
    pub const fn display_close_button(mut self, display: bool) -> Self {
        self.display_close_button = display;
        self
    }

    /// Whether the modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a close button should be rendered.
    #[must_use]
    pub const fn shows_close_button(&self) -> bool {
        self.display_close_button
    }

    /// Open the modal. Yields nothing when already open.
    #[must_use]
    pub fn show(&mut self) -> Option<ModalOpened> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(ModalOpened)
    }

    /// Close the modal with the given reason. Yields nothing when
    /// already closed.
    #[must_use]
    pub fn close(&mut self, reason: CloseReason) -> Option<ModalClosed> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(ModalClosed { reason })
    }

    /// Backdrop press: closes only when configured to.
    #[must_use]
    pub fn backdrop_pressed(&mut self) -> Option<ModalClosed> {
        if self.close_on_backdrop {
            self.close(CloseReason::Backdrop)
        } else {
            None
        }
    }

    /// Close button press: closes only when the button is rendered.
    #[must_use]
    pub fn close_button_pressed(&mut self) -> Option<ModalClosed> {
        if self.display_close_button {
            self.close(CloseReason::CloseButton)
        } else {
            None
        }
    }

    /// Split a child tree into (modal children, other children).
    ///
    /// Modal-tagged nodes are lifted out from any depth; the remaining
    /// tree keeps its shape and order.
    #[must_use]
    pub fn partition_children(children: &[Node]) -> (Vec<Node>, Vec<Node>) {
        partition_by_tag(children, &[MODAL_TAG])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Open/Close Tests =====

    #[test]
    fn test_modal_starts_closed() {
        assert!(!Modal::new().is_open());
    }

    #[test]
    fn test_modal_open_initially() {
        assert!(Modal::new().open_initially(true).is_open());
    }

    #[test]
    fn test_modal_show_and_close() {
        let mut modal = Modal::new();
        assert_eq!(modal.show(), Some(ModalOpened));
        assert!(modal.is_open());
        assert_eq!(
            modal.close(CloseReason::Explicit),
            Some(ModalClosed {
                reason: CloseReason::Explicit
            })
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_show_idempotent() {
        let mut modal = Modal::new();
        let _ = modal.show();
        assert_eq!(modal.show(), None);
    }

    #[test]
    fn test_modal_close_when_closed() {
        let mut modal = Modal::new();
        assert_eq!(modal.close(CloseReason::Explicit), None);
    }

    // ===== Backdrop Tests =====

    #[test]
    fn test_backdrop_closes_by_default() {
        let mut modal = Modal::new().open_initially(true);
        let closed = modal.backdrop_pressed().expect("backdrop closes");
        assert_eq!(closed.reason, CloseReason::Backdrop);
    }

    #[test]
    fn test_backdrop_static_when_configured() {
        let mut modal = Modal::new().open_initially(true).close_on_backdrop(false);
        assert_eq!(modal.backdrop_pressed(), None);
        assert!(modal.is_open());
    }

    // ===== Close Button Tests =====

    #[test]
    fn test_close_button_closes() {
        let mut modal = Modal::new().open_initially(true);
        let closed = modal.close_button_pressed().expect("button closes");
        assert_eq!(closed.reason, CloseReason::CloseButton);
    }

    #[test]
    fn test_close_button_hidden_does_nothing() {
        let mut modal = Modal::new()
            .open_initially(true)
            .display_close_button(false);
        assert_eq!(modal.close_button_pressed(), None);
        assert!(modal.is_open());
    }

    // ===== Child Partition Tests =====

    #[test]
    fn test_partition_children_lifts_modal_nodes() {
        let children = vec![
            Node::new("page").child(Node::tagged(MODAL_TAG, "confirm-dialog")),
            Node::tagged(MODAL_TAG, "help-dialog"),
        ];
        let (modals, others) = Modal::partition_children(&children);
        let keys: Vec<_> = modals.iter().filter_map(|n| n.key.as_deref()).collect();
        assert_eq!(keys, vec!["confirm-dialog", "help-dialog"]);
        assert_eq!(others.len(), 1);
        assert!(others[0].children.is_empty());
    }
}

//! Scene events and the observer registry.
//!
//! Mutations fan out to subscribers as plain values after the scene has
//! already been updated, so a handler reading the scene back always sees the
//! post-event state. Emission order follows subscription order.

use crate::geometry::{Point, Rect};

/// Everything the scene reports to the outside.
///
/// `element: None` on the pin events means the pin is a free-standing point
/// not owned by any element.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    PinSelected {
        index: usize,
    },
    PinMoved {
        element: Option<usize>,
        pin: usize,
        pos: Point,
    },
    PinAdded {
        element: Option<usize>,
        pin: usize,
        pos: Point,
    },
    PinDeleted {
        element: Option<usize>,
        pin: usize,
    },
    ElementPositionEdited {
        element: usize,
        rect: Rect,
    },
    ElementAdded {
        element: usize,
    },
    ElementDeleted {
        element: usize,
    },
    /// Carries the pasted element's name and rect so listeners need not
    /// re-query the scene mid-notification.
    ElementPasted {
        element: usize,
        name: String,
        rect: Rect,
    },
    RightClickOnEmptyArea {
        pos: Point,
    },
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
pub type ObserverToken = u64;

type Callback = Box<dyn FnMut(&SceneEvent)>;

/// Registry of event callbacks.
#[derive(Default)]
pub struct Observers {
    next_token: ObserverToken,
    callbacks: Vec<(ObserverToken, Callback)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> ObserverToken
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        let token = self.next_token;
        self.next_token += 1;
        self.callbacks.push((token, Box::new(callback)));
        token
    }

    /// Removes a subscription. Unknown tokens are ignored.
    pub fn unsubscribe(&mut self, token: ObserverToken) {
        self.callbacks.retain(|(t, _)| *t != token);
    }

    pub fn emit(&mut self, event: &SceneEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

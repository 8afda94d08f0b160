//! The DOM seam.
//!
//! The extraction and mutation algorithms never touch a concrete DOM; they
//! talk to a [`Page`]. Queries degrade to `None`/empty rather than erroring
//! because a missing element is an expected state of the host page, while
//! interactions return `Result` because the host page can reject them.

use bidhands_protocols::error::PageError;

/// Opaque reference to an element on a page. Only meaningful to the page
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub usize);

/// Key identity for synthetic keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
}

/// Synthetic events dispatched at the page so that the host framework's
/// listeners observe the change. Which events a framework listens for
/// varies, hence input/change/blur are always sent together for field
/// writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticEvent {
    Input,
    Change,
    Blur,
    Click,
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
    KeyDown(Key),
    KeyUp(Key),
}

impl SyntheticEvent {
    /// DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            SyntheticEvent::Input => "input",
            SyntheticEvent::Change => "change",
            SyntheticEvent::Blur => "blur",
            SyntheticEvent::Click => "click",
            SyntheticEvent::MouseDown => "mousedown",
            SyntheticEvent::MouseUp => "mouseup",
            SyntheticEvent::TouchStart => "touchstart",
            SyntheticEvent::TouchEnd => "touchend",
            SyntheticEvent::KeyDown(_) => "keydown",
            SyntheticEvent::KeyUp(_) => "keyup",
        }
    }
}

/// A page the agent can read and mutate.
pub trait Page: Send + Sync {
    /// Address of the page, used for the project-page gate.
    fn url(&self) -> String;

    /// First element matching the selector, if any. Invalid selectors are
    /// logged and treated as a miss.
    fn find(&self, selector: &str) -> Option<NodeHandle>;

    /// All elements matching the selector, in document order.
    fn find_all(&self, selector: &str) -> Vec<NodeHandle>;

    /// All elements matching the selector within the given element.
    fn find_all_within(&self, node: NodeHandle, selector: &str) -> Vec<NodeHandle>;

    /// Visible text of the element and its descendants, untrimmed.
    fn text(&self, node: NodeHandle) -> String;

    /// Current value of a form control (live state, not the initial
    /// markup, once a write has happened).
    fn value(&self, node: NodeHandle) -> String;

    fn set_value(&self, node: NodeHandle, value: &str) -> Result<(), PageError>;

    fn is_checked(&self, node: NodeHandle) -> bool;

    fn set_checked(&self, node: NodeHandle, checked: bool) -> Result<(), PageError>;

    fn is_disabled(&self, node: NodeHandle) -> bool;

    /// Nearest ancestor (excluding the node itself) matching the selector.
    fn closest(&self, node: NodeHandle, selector: &str) -> Option<NodeHandle>;

    /// Dispatch a synthetic event at the element.
    fn dispatch(&self, node: NodeHandle, event: SyntheticEvent) -> Result<(), PageError>;

    /// Programmatic activation, the equivalent of calling `click()`.
    fn activate(&self, node: NodeHandle) -> Result<(), PageError>;

    fn focus(&self, node: NodeHandle) -> Result<(), PageError>;
}

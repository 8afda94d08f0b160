//! In-memory page backed by a parsed HTML snapshot.
//!
//! [`DomPage`] parses a document once and serves queries from the static
//! tree, while writes land in a mutable overlay so that later reads observe
//! them. Every interaction is journaled, and individual interaction classes
//! can be marked as rejected to exercise the fallback paths that a live
//! page would trigger.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use bidhands_protocols::error::PageError;
use parking_lot::Mutex;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::page::{NodeHandle, Page, SyntheticEvent};

/// Classes of interaction a page can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Writing a value into a form control.
    FieldWrite,
    /// input/change/blur notifications after a write.
    FieldNotify,
    Mouse,
    Touch,
    Keyboard,
    /// Programmatic activation (`click()`).
    Activate,
    Focus,
}

impl Interaction {
    fn for_event(event: SyntheticEvent) -> Self {
        match event {
            SyntheticEvent::Input | SyntheticEvent::Change | SyntheticEvent::Blur => {
                Interaction::FieldNotify
            }
            SyntheticEvent::Click | SyntheticEvent::MouseDown | SyntheticEvent::MouseUp => {
                Interaction::Mouse
            }
            SyntheticEvent::TouchStart | SyntheticEvent::TouchEnd => Interaction::Touch,
            SyntheticEvent::KeyDown(_) | SyntheticEvent::KeyUp(_) => Interaction::Keyboard,
        }
    }
}

#[derive(Default)]
struct PageState {
    values: HashMap<usize, String>,
    checked: HashMap<usize, bool>,
    journal: Vec<(NodeHandle, SyntheticEvent)>,
    activations: Vec<NodeHandle>,
    focused: Vec<NodeHandle>,
    rejected: HashSet<Interaction>,
}

/// A [`Page`] over a static HTML snapshot plus a form-state overlay.
pub struct DomPage {
    // `Html` is `Send` but not `Sync` (tendril's atomic marker only grants
    // `Send`), so reads are serialized through a mutex to satisfy `Page`.
    html: Mutex<Html>,
    url: String,
    /// Handle index -> tree node, assigned in document order at parse time.
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    state: Mutex<PageState>,
}

impl DomPage {
    pub fn from_html(html: &str, url: &str) -> Self {
        let html = Html::parse_document(html);
        let mut ids = Vec::new();
        let mut index = HashMap::new();
        for node in html.root_element().descendent_elements() {
            index.insert(node.id(), ids.len());
            ids.push(node.id());
        }
        Self {
            html: Mutex::new(html),
            url: url.to_string(),
            ids,
            index,
            state: Mutex::new(PageState::default()),
        }
    }

    pub fn load(path: impl AsRef<Path>, url: &str) -> std::io::Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::from_html(&html, url))
    }

    fn element<'a>(&self, html: &'a Html, node: NodeHandle) -> Option<ElementRef<'a>> {
        let id = *self.ids.get(node.0)?;
        ElementRef::wrap(html.tree.get(id)?)
    }

    fn parse_selector(&self, selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(s) => Some(s),
            Err(err) => {
                warn!(selector, %err, "invalid selector, treating as no match");
                None
            }
        }
    }

    fn handle_of(&self, element: ElementRef<'_>) -> Option<NodeHandle> {
        self.index.get(&element.id()).copied().map(NodeHandle)
    }

    fn check_allowed(&self, interaction: Interaction, what: &str) -> Result<(), PageError> {
        if self.state.lock().rejected.contains(&interaction) {
            return Err(PageError::InteractionRejected(what.to_string()));
        }
        Ok(())
    }

    fn attr(&self, node: NodeHandle, name: &str) -> Option<String> {
        let html = self.html.lock();
        self.element(&html, node)
            .and_then(|el| el.value().attr(name).map(str::to_string))
    }

    // --- test instrumentation ---

    /// Mark an interaction class as rejected; affected calls will fail with
    /// [`PageError::InteractionRejected`] until un-marked.
    pub fn reject(&self, interaction: Interaction) {
        self.state.lock().rejected.insert(interaction);
    }

    pub fn allow(&self, interaction: Interaction) {
        self.state.lock().rejected.remove(&interaction);
    }

    /// Full event journal in dispatch order.
    pub fn events(&self) -> Vec<(NodeHandle, SyntheticEvent)> {
        self.state.lock().journal.clone()
    }

    /// Events dispatched at one element, in order.
    pub fn events_for(&self, node: NodeHandle) -> Vec<SyntheticEvent> {
        self.state
            .lock()
            .journal
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, e)| *e)
            .collect()
    }

    /// Elements activated via [`Page::activate`], in order.
    pub fn activations(&self) -> Vec<NodeHandle> {
        self.state.lock().activations.clone()
    }

    pub fn focused(&self) -> Vec<NodeHandle> {
        self.state.lock().focused.clone()
    }

    /// Current value of the first element matching the selector.
    pub fn value_of(&self, selector: &str) -> Option<String> {
        self.find(selector).map(|n| self.value(n))
    }
}

impl Page for DomPage {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn find(&self, selector: &str) -> Option<NodeHandle> {
        let sel = self.parse_selector(selector)?;
        let html = self.html.lock();
        html.select(&sel).next().and_then(|el| self.handle_of(el))
    }

    fn find_all(&self, selector: &str) -> Vec<NodeHandle> {
        let Some(sel) = self.parse_selector(selector) else {
            return Vec::new();
        };
        let html = self.html.lock();
        html.select(&sel)
            .filter_map(|el| self.handle_of(el))
            .collect()
    }

    fn find_all_within(&self, node: NodeHandle, selector: &str) -> Vec<NodeHandle> {
        let Some(sel) = self.parse_selector(selector) else {
            return Vec::new();
        };
        let html = self.html.lock();
        let Some(root) = self.element(&html, node) else {
            return Vec::new();
        };
        root.select(&sel).filter_map(|el| self.handle_of(el)).collect()
    }

    fn text(&self, node: NodeHandle) -> String {
        let html = self.html.lock();
        self.element(&html, node)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    }

    fn value(&self, node: NodeHandle) -> String {
        if let Some(v) = self.state.lock().values.get(&node.0) {
            return v.clone();
        }
        let html = self.html.lock();
        let Some(el) = self.element(&html, node) else {
            return String::new();
        };
        if el.value().name() == "textarea" {
            return el.text().collect::<String>();
        }
        el.value().attr("value").unwrap_or_default().to_string()
    }

    fn set_value(&self, node: NodeHandle, value: &str) -> Result<(), PageError> {
        self.check_allowed(Interaction::FieldWrite, "value write")?;
        if self.element(&self.html.lock(), node).is_none() {
            return Err(PageError::Detached);
        }
        self.state.lock().values.insert(node.0, value.to_string());
        Ok(())
    }

    fn is_checked(&self, node: NodeHandle) -> bool {
        if let Some(c) = self.state.lock().checked.get(&node.0) {
            return *c;
        }
        self.attr(node, "checked").is_some()
    }

    fn set_checked(&self, node: NodeHandle, checked: bool) -> Result<(), PageError> {
        self.check_allowed(Interaction::FieldWrite, "checked write")?;
        if self.element(&self.html.lock(), node).is_none() {
            return Err(PageError::Detached);
        }
        self.state.lock().checked.insert(node.0, checked);
        Ok(())
    }

    fn is_disabled(&self, node: NodeHandle) -> bool {
        self.attr(node, "disabled").is_some()
    }

    fn closest(&self, node: NodeHandle, selector: &str) -> Option<NodeHandle> {
        let sel = self.parse_selector(selector)?;
        let html = self.html.lock();
        let matching: HashSet<NodeId> = html.select(&sel).map(|el| el.id()).collect();
        let mut current = self.element(&html, node)?.parent();
        while let Some(n) = current {
            if matching.contains(&n.id()) {
                return self.index.get(&n.id()).copied().map(NodeHandle);
            }
            current = n.parent();
        }
        None
    }

    fn dispatch(&self, node: NodeHandle, event: SyntheticEvent) -> Result<(), PageError> {
        self.check_allowed(Interaction::for_event(event), event.name())?;
        if self.element(&self.html.lock(), node).is_none() {
            return Err(PageError::Detached);
        }
        self.state.lock().journal.push((node, event));
        Ok(())
    }

    fn activate(&self, node: NodeHandle) -> Result<(), PageError> {
        self.check_allowed(Interaction::Activate, "activate")?;
        if self.element(&self.html.lock(), node).is_none() {
            return Err(PageError::Detached);
        }
        self.state.lock().activations.push(node);
        Ok(())
    }

    fn focus(&self, node: NodeHandle) -> Result<(), PageError> {
        self.check_allowed(Interaction::Focus, "focus")?;
        if self.element(&self.html.lock(), node).is_none() {
            return Err(PageError::Detached);
        }
        self.state.lock().focused.push(node);
        Ok(())
    }
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;

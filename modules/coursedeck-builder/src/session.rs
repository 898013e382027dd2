use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Builder working state for one canvas element. Never persisted; scoped
/// to a single builder session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub id: String,
    pub element_type: String,
    pub position: Position,
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// Shallow-merge update for a page element. Absent fields keep their
/// current values; settings merge key-wise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementPatch {
    pub element_type: Option<String>,
    pub position: Option<Position>,
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Toggleable properties of the selected element, shown in the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCapabilities {
    pub overlay: bool,
    /// 0–100.
    pub opacity: u8,
    pub caption: bool,
    pub popup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedElement {
    pub id: String,
    pub element_type: String,
    pub capabilities: ElementCapabilities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Initializing,
    Ready,
}

/// Per-site builder working state. Lives in process memory only.
pub struct BuilderSession {
    pub site_id: Uuid,
    pub state: EditorState,
    pub page_name: String,
    elements: Vec<PageElement>,
    selected: Option<SelectedElement>,
    next_element: u64,
}

impl BuilderSession {
    pub fn new(site_id: Uuid) -> Self {
        Self {
            site_id,
            state: EditorState::Idle,
            page_name: "Home".to_string(),
            elements: Vec::new(),
            selected: None,
            next_element: 1,
        }
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    /// Add an element of the given type with a generated id at the origin.
    pub fn add_element(&mut self, element_type: &str) -> PageElement {
        let element = PageElement {
            id: format!("element-{}", self.next_element),
            element_type: element_type.to_string(),
            position: Position { x: 0, y: 0 },
            settings: serde_json::Map::new(),
        };
        self.next_element += 1;
        self.elements.push(element.clone());
        element
    }

    /// Shallow-merge a patch into the element with the given id. Returns the
    /// updated element, or `None` if no element matches.
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) -> Option<PageElement> {
        let element = self.elements.iter_mut().find(|e| e.id == id)?;
        if let Some(element_type) = patch.element_type {
            element.element_type = element_type;
        }
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(settings) = patch.settings {
            for (key, value) in settings {
                element.settings.insert(key, value);
            }
        }
        Some(element.clone())
    }

    /// Remove the element with the given id. No-op if absent.
    pub fn delete_element(&mut self, id: &str) {
        self.elements.retain(|e| e.id != id);
    }

    pub fn selected(&self) -> Option<&SelectedElement> {
        self.selected.as_ref()
    }

    /// Select an element, replacing any previous selection. Exactly one
    /// element can be selected at a time. Opacity is clamped to 0–100.
    pub fn select(&mut self, mut element: SelectedElement) {
        element.capabilities.opacity = element.capabilities.opacity.min(100);
        self.selected = Some(element);
    }

    /// Clear the selection (click on empty canvas background).
    pub fn deselect(&mut self) {
        self.selected = None;
    }
}

/// All live builder sessions, keyed by site id behind a sync mutex.
/// Critical sections never await.
#[derive(Default)]
pub struct Sessions {
    inner: Mutex<HashMap<Uuid, BuilderSession>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start initializing the editor for a site. Returns `None` if an
    /// initialization is already in flight for that site. A finished (ready
    /// or idle) session is replaced by a fresh one.
    pub fn begin_init(&self, site_id: Uuid) -> Option<InitGuard<'_>> {
        let mut sessions = self.inner.lock().expect("sessions lock poisoned");
        if let Some(existing) = sessions.get(&site_id) {
            if existing.state == EditorState::Initializing {
                return None;
            }
        }
        let mut session = BuilderSession::new(site_id);
        session.state = EditorState::Initializing;
        sessions.insert(site_id, session);

        Some(InitGuard {
            sessions: self,
            site_id,
            completed: false,
        })
    }

    /// Run `f` against the session for `site_id`, if one exists.
    pub fn with<R>(&self, site_id: Uuid, f: impl FnOnce(&mut BuilderSession) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().expect("sessions lock poisoned");
        sessions.get_mut(&site_id).map(f)
    }

    fn set_state(&self, site_id: Uuid, state: EditorState) {
        let mut sessions = self.inner.lock().expect("sessions lock poisoned");
        if let Some(session) = sessions.get_mut(&site_id) {
            session.state = state;
        }
    }
}

/// Holds the per-site initialization slot. Dropping the guard without
/// calling [`InitGuard::ready`] returns the session to idle; an initiating
/// request torn down mid-fetch releases the slot the same way.
pub struct InitGuard<'a> {
    sessions: &'a Sessions,
    site_id: Uuid,
    completed: bool,
}

impl InitGuard<'_> {
    /// Mark initialization complete; the session becomes ready.
    pub fn ready(mut self) {
        self.sessions.set_state(self.site_id, EditorState::Ready);
        self.completed = true;
    }
}

impl Drop for InitGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.sessions.set_state(self.site_id, EditorState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(id: &str, opacity: u8) -> SelectedElement {
        SelectedElement {
            id: id.to_string(),
            element_type: "Hero Section".to_string(),
            capabilities: ElementCapabilities {
                overlay: true,
                opacity,
                caption: false,
                popup: false,
            },
        }
    }

    #[test]
    fn add_element_generates_sequential_ids() {
        let mut session = BuilderSession::new(Uuid::new_v4());
        let a = session.add_element("hero");
        let b = session.add_element("text");
        assert_eq!(a.id, "element-1");
        assert_eq!(b.id, "element-2");
        assert_eq!(a.position, Position { x: 0, y: 0 });
        assert_eq!(session.elements().len(), 2);
    }

    #[test]
    fn update_element_merges_shallowly() {
        let mut session = BuilderSession::new(Uuid::new_v4());
        let element = session.add_element("hero");
        session.update_element(
            &element.id,
            ElementPatch {
                settings: Some(
                    serde_json::json!({"overlay": true})
                        .as_object()
                        .unwrap()
                        .clone(),
                ),
                ..Default::default()
            },
        );

        let updated = session
            .update_element(
                &element.id,
                ElementPatch {
                    position: Some(Position { x: 4, y: 8 }),
                    settings: Some(
                        serde_json::json!({"opacity": 75})
                            .as_object()
                            .unwrap()
                            .clone(),
                    ),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.element_type, "hero", "untouched field survives");
        assert_eq!(updated.position, Position { x: 4, y: 8 });
        assert_eq!(updated.settings["overlay"], serde_json::json!(true));
        assert_eq!(updated.settings["opacity"], serde_json::json!(75));
    }

    #[test]
    fn update_unknown_element_returns_none() {
        let mut session = BuilderSession::new(Uuid::new_v4());
        assert!(session
            .update_element("element-99", ElementPatch::default())
            .is_none());
    }

    #[test]
    fn delete_element_filters_by_id() {
        let mut session = BuilderSession::new(Uuid::new_v4());
        let a = session.add_element("hero");
        session.add_element("text");
        session.delete_element(&a.id);
        assert_eq!(session.elements().len(), 1);
        session.delete_element("element-99");
        assert_eq!(session.elements().len(), 1);
    }

    #[test]
    fn selection_is_exclusive_and_clamped() {
        let mut session = BuilderSession::new(Uuid::new_v4());
        session.select(selection("a", 200));
        assert_eq!(session.selected().unwrap().capabilities.opacity, 100);

        session.select(selection("b", 40));
        assert_eq!(session.selected().unwrap().id, "b");

        session.deselect();
        assert!(session.selected().is_none());
    }

    #[test]
    fn begin_init_blocks_concurrent_initialization() {
        let sessions = Sessions::new();
        let site = Uuid::new_v4();

        let guard = sessions.begin_init(site).expect("first init");
        assert!(sessions.begin_init(site).is_none(), "second init blocked");

        guard.ready();
        assert_eq!(
            sessions.with(site, |s| s.state),
            Some(EditorState::Ready)
        );
    }

    #[test]
    fn dropping_guard_releases_the_slot() {
        let sessions = Sessions::new();
        let site = Uuid::new_v4();

        {
            let _guard = sessions.begin_init(site).expect("first init");
        }
        assert_eq!(sessions.with(site, |s| s.state), Some(EditorState::Idle));
        assert!(sessions.begin_init(site).is_some(), "slot released");
    }

    #[test]
    fn fresh_init_replaces_finished_session() {
        let sessions = Sessions::new();
        let site = Uuid::new_v4();

        let guard = sessions.begin_init(site).expect("first init");
        sessions.with(site, |s| {
            s.add_element("hero");
        });
        guard.ready();

        let guard = sessions.begin_init(site).expect("re-init after ready");
        assert_eq!(
            sessions.with(site, |s| s.elements().len()),
            Some(0),
            "element working set is session-scoped"
        );
        drop(guard);
    }
}

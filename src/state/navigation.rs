//! Page routes and the back stack

use super::entities::EntityKind;

/// Current page in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List(EntityKind),
    Detail(EntityKind, String),
    Create(EntityKind),
    Edit(EntityKind, String),
}

impl Default for Route {
    fn default() -> Self {
        Route::List(EntityKind::default())
    }
}

impl Route {
    pub fn kind(&self) -> EntityKind {
        match self {
            Route::List(kind)
            | Route::Detail(kind, _)
            | Route::Create(kind)
            | Route::Edit(kind, _) => *kind,
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Route::Create(_) | Route::Edit(..))
    }

    /// Breadcrumb label
    pub fn label(&self) -> String {
        match self {
            Route::List(kind) => kind.label().to_string(),
            Route::Detail(kind, _) => kind.singular().to_string(),
            Route::Create(kind) => format!("New {}", kind.singular()),
            Route::Edit(kind, _) => format!("Edit {}", kind.singular()),
        }
    }
}

/// Typed navigation history. The current route is always present.
#[derive(Debug, Clone, Default)]
pub struct NavStack {
    current: Route,
    history: Vec<Route>,
}

impl NavStack {
    pub fn current(&self) -> &Route {
        &self.current
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Pop to the last non-form page. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        while let Some(route) = self.history.pop() {
            if route.is_form() {
                continue;
            }
            self.current = route;
            return true;
        }
        false
    }

    /// Switch to another entity list, dropping the history
    pub fn reset_to(&mut self, kind: EntityKind) {
        self.history.clear();
        self.current = Route::List(kind);
    }

    /// "Back to …" hint for the status bar
    pub fn back_label(&self) -> Option<String> {
        self.history
            .iter()
            .rev()
            .find(|route| !route.is_form())
            .map(|route| format!("Back to {}", route.label()))
    }

    pub fn go_to_detail(&mut self, id: &str) {
        let kind = self.current.kind();
        self.push(Route::Detail(kind, id.to_string()));
    }

    pub fn go_to_edit(&mut self, id: &str) {
        let kind = self.current.kind();
        self.push(Route::Edit(kind, id.to_string()));
    }

    pub fn go_to_create(&mut self) {
        let kind = self.current.kind();
        self.push(Route::Create(kind));
    }

    /// After a successful submit: show the saved record without the form in history
    pub fn replace_with_detail(&mut self, id: &str) {
        let kind = self.current.kind();
        if self.current.is_form() {
            let detail = Route::Detail(kind, id.to_string());
            if self.history.last() == Some(&detail) {
                self.history.pop();
            }
            self.current = detail;
        } else {
            self.go_to_detail(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_back() {
        let mut nav = NavStack::default();
        nav.go_to_detail("a-1");
        assert_eq!(nav.current(), &Route::Detail(EntityKind::Animals, "a-1".into()));
        assert_eq!(nav.back_label().as_deref(), Some("Back to Animals"));
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::List(EntityKind::Animals));
        assert!(!nav.go_back());
    }

    #[test]
    fn test_back_skips_form_pages() {
        let mut nav = NavStack::default();
        nav.go_to_detail("a-1");
        nav.go_to_edit("a-1");
        nav.push(Route::List(EntityKind::Animals));
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::Detail(EntityKind::Animals, "a-1".into()));
    }

    #[test]
    fn test_pushing_current_route_is_noop() {
        let mut nav = NavStack::default();
        nav.push(Route::List(EntityKind::Animals));
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_reset_to_clears_history() {
        let mut nav = NavStack::default();
        nav.go_to_create();
        nav.reset_to(EntityKind::Suppliers);
        assert_eq!(nav.current(), &Route::List(EntityKind::Suppliers));
        assert_eq!(nav.back_label(), None);
    }

    #[test]
    fn test_replace_after_create() {
        let mut nav = NavStack::default();
        nav.go_to_create();
        nav.replace_with_detail("new-id");
        assert_eq!(nav.current(), &Route::Detail(EntityKind::Animals, "new-id".into()));
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::List(EntityKind::Animals));
    }

    #[test]
    fn test_replace_after_edit_does_not_duplicate_detail() {
        let mut nav = NavStack::default();
        nav.go_to_detail("a-1");
        nav.go_to_edit("a-1");
        nav.replace_with_detail("a-1");
        assert_eq!(nav.current(), &Route::Detail(EntityKind::Animals, "a-1".into()));
        assert_eq!(nav.depth(), 1);
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::List(EntityKind::Animals));
    }

    #[test]
    fn test_route_labels() {
        assert_eq!(Route::Create(EntityKind::Buyers).label(), "New Buyer");
        assert_eq!(Route::Edit(EntityKind::Properties, "p".into()).label(), "Edit Property");
        assert!(Route::Create(EntityKind::Buyers).is_form());
    }
}

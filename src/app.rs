//! Application state and core logic

use crate::config::{AdminConfig, SortPreference};
use crate::data::EntityStore;
use crate::state::entities::{default_values, form_fields, list_config, Entity, EntityKind};
use crate::state::forms::{
    FormEngine, FormMode, FormPage, FormValues, SubmitOutcome, TracingObserver,
};
use crate::state::list::{ListConfig, ListState, Listable};
use crate::state::navigation::{NavStack, Route};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

/// Main application struct
pub struct App {
    pub config: AdminConfig,
    /// Where remembered preferences are written; `None` keeps them in memory
    config_path: Option<PathBuf>,
    store: Box<dyn EntityStore>,
    pub nav: NavStack,
    /// Search box, filter, sort and pager per list page, indexed by kind
    lists: [ListState; 7],
    list_configs: [ListConfig; 7],
    /// Last loaded records per kind
    pub records: HashMap<EntityKind, Vec<Entity>>,
    /// Record shown on the detail page
    pub detail: Option<Entity>,
    /// Active create/edit page
    pub form: Option<FormPage>,
    /// One-line feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    quit: bool,
}

impl App {
    /// Create a new App instance on the first list page
    pub fn new(config: AdminConfig, store: Box<dyn EntityStore>) -> Self {
        let lists = EntityKind::ALL.map(|kind| new_list_state(&config, kind));
        let list_configs = EntityKind::ALL.map(list_config);

        Self {
            config,
            config_path: None,
            store,
            nav: NavStack::default(),
            lists,
            list_configs,
            records: HashMap::new(),
            detail: None,
            form: None,
            status_message: None,
            quit: false,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Load the records of the starting page
    pub async fn init(&mut self) -> Result<()> {
        let kind = self.nav.current().kind();
        self.reload(kind).await;
        Ok(())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn records(&self, kind: EntityKind) -> &[Entity] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn list_config(&self, kind: EntityKind) -> &ListConfig {
        &self.list_configs[kind.index()]
    }

    pub fn list_state(&self, kind: EntityKind) -> &ListState {
        &self.lists[kind.index()]
    }

    fn list_mut(&mut self, kind: EntityKind) -> &mut ListState {
        &mut self.lists[kind.index()]
    }

    /// (rows on the current page, total pages) for a list
    fn page_info(&self, kind: EntityKind) -> (usize, usize) {
        let view = self
            .list_state(kind)
            .view(self.records(kind), self.list_config(kind));
        (view.items.len(), view.total_pages)
    }

    /// Id of the highlighted row on a list page
    pub fn selected_id(&self, kind: EntityKind) -> Option<String> {
        let list = self.list_state(kind);
        let view = list.view(self.records(kind), self.list_config(kind));
        view.items
            .get(list.selected_index)
            .map(|entity| entity.id().to_string())
    }

    /// Drive timers; returns true when the screen needs a redraw
    pub fn tick(&mut self, now: Instant) -> bool {
        let Route::List(kind) = *self.nav.current() else {
            return false;
        };
        if self.list_mut(kind).tick(now) {
            let query = self.list_state(kind).query();
            tracing::debug!(%kind, search = %query.search_term, "search applied");
            return true;
        }
        false
    }

    /// Reload one kind from the store and pull its pager back into range
    async fn reload(&mut self, kind: EntityKind) {
        match self.store.list(kind).await {
            Ok(records) => {
                tracing::debug!(%kind, count = records.len(), "loaded records");
                self.records.insert(kind, records);
                let (_, total_pages) = self.page_info(kind);
                self.list_mut(kind).clamp_page(total_pages);
            }
            Err(e) => {
                tracing::error!(%kind, "failed to load records: {e:#}");
                self.status_message = Some(format!("Could not load {}: {e}", kind.label()));
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.handle_key_at(key, Instant::now()).await
    }

    pub async fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if let KeyCode::F(n) = key.code {
            if let Some(kind) = EntityKind::ALL.get(usize::from(n).wrapping_sub(1)) {
                self.switch_kind(*kind).await;
            }
            return Ok(());
        }

        match self.nav.current().clone() {
            Route::List(kind) => self.handle_list_key(kind, key, now).await?,
            Route::Detail(kind, id) => self.handle_detail_key(kind, &id, key).await?,
            Route::Create(_) | Route::Edit(..) => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    /// Sidebar selection: show another entity list
    async fn switch_kind(&mut self, kind: EntityKind) {
        let current = self.nav.current().kind();
        self.list_mut(current).teardown();
        self.form = None;
        self.detail = None;
        self.nav.reset_to(kind);
        self.reload(kind).await;
    }

    async fn handle_list_key(
        &mut self,
        kind: EntityKind,
        key: KeyEvent,
        now: Instant,
    ) -> Result<()> {
        let (page_len, total_pages) = self.page_info(kind);

        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                    let column = self
                        .list_config(kind)
                        .columns
                        .get(n as usize - 1)
                        .map(|column| column.key);
                    if let Some(sort_key) = column {
                        self.list_mut(kind).toggle_sort(sort_key);
                    }
                }
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_create(kind);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.remember_sort(kind);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.list_mut(kind).search_input(c, now);
            }
            KeyCode::Backspace => self.list_mut(kind).search_backspace(now),
            KeyCode::Esc => self.list_mut(kind).clear_search(),
            KeyCode::Tab => {
                let statuses = self.list_config(kind).statuses.clone();
                self.list_mut(kind).cycle_status_filter(&statuses);
            }
            KeyCode::Up => self.list_mut(kind).move_selection_up(),
            KeyCode::Down => self.list_mut(kind).move_selection_down(page_len),
            KeyCode::Left | KeyCode::PageUp => {
                self.list_mut(kind).prev_page(total_pages);
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.list_mut(kind).next_page(total_pages);
            }
            KeyCode::Home => {
                self.list_mut(kind).go_to_page(1, total_pages);
            }
            KeyCode::End => {
                self.list_mut(kind).go_to_page(total_pages, total_pages);
            }
            KeyCode::Enter => {
                if self.list_state(kind).search.is_pending() {
                    self.list_mut(kind).submit_search();
                } else if let Some(id) = self.selected_id(kind) {
                    self.open_detail(kind, &id).await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Store the page's current sort as its default and write the config
    fn remember_sort(&mut self, kind: EntityKind) {
        let sort = &self.list_state(kind).sort;
        let preference = SortPreference {
            key: sort.key.clone(),
            direction: sort.direction.as_str().to_string(),
        };
        self.config.default_sort.insert(kind, preference);

        let saved = match &self.config_path {
            Some(path) => self.config.save(path),
            None => Ok(()),
        };
        self.status_message = Some(match saved {
            Ok(()) => format!("Default sort saved for {}", kind.label()),
            Err(e) => {
                tracing::warn!(%kind, "failed to save config: {e:#}");
                format!("Could not save config: {e}")
            }
        });
    }

    async fn open_detail(&mut self, kind: EntityKind, id: &str) {
        match self.store.fetch(kind, id).await {
            Ok(entity) => {
                self.list_mut(kind).teardown();
                self.detail = Some(entity);
                self.nav.go_to_detail(id);
            }
            Err(e) => {
                tracing::warn!(%kind, id, "failed to open record: {e:#}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    async fn handle_detail_key(
        &mut self,
        kind: EntityKind,
        id: &str,
        key: KeyEvent,
    ) -> Result<()> {
        match key.code {
            KeyCode::Char('e') => self.open_edit(kind, id),
            KeyCode::Char('y') => {
                self.status_message = Some(match copy_to_clipboard(id) {
                    Ok(()) => format!("Copied {id}"),
                    Err(e) => {
                        tracing::warn!("clipboard unavailable: {e:#}");
                        format!("Could not copy: {e}")
                    }
                });
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back().await,
            _ => {}
        }
        Ok(())
    }

    fn open_create(&mut self, kind: EntityKind) {
        self.list_mut(kind).teardown();
        let engine = form_engine(kind, default_values(kind));
        self.form = Some(FormPage::new(kind, FormMode::Create, engine));
        self.nav.go_to_create();
    }

    fn open_edit(&mut self, kind: EntityKind, id: &str) {
        let Some(entity) = self.detail.as_ref().filter(|e| e.id() == id) else {
            return;
        };
        let engine = form_engine(kind, entity.to_values());
        self.form = Some(FormPage::new(
            kind,
            FormMode::Edit { id: id.to_string() },
            engine,
        ));
        self.nav.go_to_edit(id);
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => {
                if let Some(page) = self.form.as_mut() {
                    page.engine.reset_form();
                    self.status_message = Some("Form reset".to_string());
                }
            }
            KeyCode::Esc => {
                self.form = None;
                self.go_back().await;
            }
            _ => {
                let Some(page) = self.form.as_mut() else {
                    return Ok(());
                };
                match key.code {
                    KeyCode::Tab => page.next_field(),
                    KeyCode::BackTab => page.prev_field(),
                    KeyCode::Down => page.next_field(),
                    KeyCode::Up => page.prev_field(),
                    KeyCode::Left => page.cycle_option(false),
                    KeyCode::Right => page.cycle_option(true),
                    KeyCode::Enter if page.is_active_field_multiline() => page.input_char('\n'),
                    KeyCode::Enter => page.next_field(),
                    KeyCode::Backspace => page.backspace(),
                    KeyCode::Char(c) if !ctrl => page.input_char(c),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Validate and save the active form
    async fn submit(&mut self) {
        let Some(page) = self.form.as_mut() else {
            return;
        };
        if page.engine.state().is_submitting {
            return;
        }

        let kind = page.kind;
        let mode = page.mode.clone();
        let store = &mut self.store;
        let mut saved_id: Option<String> = None;
        let mut failure: Option<String> = None;
        let (saved, failed) = (&mut saved_id, &mut failure);

        let outcome = page
            .engine
            .submit_form(|values, _state| async move {
                let result = match &mode {
                    FormMode::Create => store.create(kind, &values).await,
                    FormMode::Edit { id } => {
                        store.update(kind, id, &values).await.map(|()| id.clone())
                    }
                };
                match result {
                    Ok(id) => {
                        *saved = Some(id);
                        Ok(())
                    }
                    Err(e) => {
                        *failed = Some(e.to_string());
                        Err(e)
                    }
                }
            })
            .await;

        match outcome {
            SubmitOutcome::Invalid => {
                // show every error, not only the ones of visited fields
                let names: Vec<String> =
                    page.engine.fields().iter().map(|f| f.name.clone()).collect();
                for name in names {
                    page.engine.set_field_touched(&name, true);
                }
                let count = page.engine.state().errors.len();
                self.status_message = Some(format!("{count} field(s) need attention"));
            }
            SubmitOutcome::Failed => {
                self.status_message = Some(format!(
                    "Could not save {}: {}",
                    kind.singular(),
                    failure.unwrap_or_default()
                ));
            }
            SubmitOutcome::Submitted => {
                self.form = None;
                self.reload(kind).await;
                if let Some(id) = saved_id {
                    match self.store.fetch(kind, &id).await {
                        Ok(entity) => self.detail = Some(entity),
                        Err(e) => tracing::warn!(%kind, %id, "saved record not found: {e:#}"),
                    }
                    self.nav.replace_with_detail(&id);
                }
                self.status_message = Some(format!("{} saved", kind.singular()));
            }
        }
    }

    /// Go back to the previous non-form page
    pub async fn go_back(&mut self) {
        if !self.nav.go_back() {
            return;
        }
        match self.nav.current().clone() {
            Route::List(kind) => {
                self.detail = None;
                self.reload(kind).await;
            }
            Route::Detail(kind, id) => {
                if self.detail.as_ref().map(|e| e.id()) != Some(id.as_str()) {
                    self.open_detail_in_place(kind, &id).await;
                }
            }
            Route::Create(_) | Route::Edit(..) => {}
        }
    }

    async fn open_detail_in_place(&mut self, kind: EntityKind, id: &str) {
        match self.store.fetch(kind, id).await {
            Ok(entity) => self.detail = Some(entity),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Status bar hint for the current page
    pub fn key_hints(&self) -> &'static str {
        match self.nav.current() {
            Route::List(_) => concat!(
                "type: search  Tab: status  Alt+1-9: sort  Ctrl-D: keep sort  ",
                "←/→: page  Enter: open  Ctrl-N: new"
            ),
            Route::Detail(..) => "e: edit  y: copy id  Esc: back",
            Route::Create(_) | Route::Edit(..) => {
                "Tab: next field  ←/→: choose  Ctrl-S: save  Ctrl-R: reset  Esc: cancel"
            }
        }
    }
}

fn new_list_state(config: &AdminConfig, kind: EntityKind) -> ListState {
    ListState::new(
        config.items_per_page(),
        config.search_debounce(),
        config.default_sort(kind),
        config.reset_page_on_filter(),
    )
}

fn form_engine(kind: EntityKind, values: FormValues) -> FormEngine {
    FormEngine::new(form_fields(kind), values)
        .with_observer(Box::new(TracingObserver::new(kind.singular())))
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{InMemoryStore, MockEntityStore};
    use crate::state::forms::FieldValue;
    use crate::state::list::{SortConfig, SortDirection, StatusFilter};
    use anyhow::anyhow;
    use std::time::Duration;
    use tokio_test::block_on;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn seeded_app() -> App {
        let mut app = App::new(AdminConfig::default(), Box::new(InMemoryStore::seeded()));
        block_on(app.init()).unwrap();
        app
    }

    fn press(app: &mut App, event: KeyEvent) {
        block_on(app.handle_key(event)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = seeded_app();
            assert!(!app.should_quit());
            press(&mut app, ctrl('c'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_init_loads_first_page() {
            let app = seeded_app();
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Animals));
            assert!(app.records(EntityKind::Animals).len() > 50);
            assert!(app.records(EntityKind::Properties).is_empty());
        }

        #[test]
        fn test_function_keys_switch_kind() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::F(2)));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Properties));
            assert!(!app.records(EntityKind::Properties).is_empty());
            press(&mut app, key(KeyCode::F(7)));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::ServiceProviders));
            press(&mut app, key(KeyCode::F(12)));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::ServiceProviders));
        }

        #[test]
        fn test_load_failure_sets_status() {
            let mut store = MockEntityStore::new();
            store
                .expect_list()
                .returning(|_| Err(anyhow!("disk on fire")));
            let mut app = App::new(AdminConfig::default(), Box::new(store));
            block_on(app.init()).unwrap();
            assert!(app
                .status_message
                .as_deref()
                .is_some_and(|m| m.contains("disk on fire")));
        }
    }

    mod list_page {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_search_applies_after_debounce() {
            let mut app = seeded_app();
            type_text(&mut app, "br-0007");
            let total = app.records(EntityKind::Animals).len();
            let (rows, _) = app.page_info(EntityKind::Animals);
            assert_eq!(rows, total.min(50));

            assert!(app.tick(Instant::now() + Duration::from_secs(1)));
            assert_eq!(app.page_info(EntityKind::Animals), (1, 1));
            assert_eq!(app.selected_id(EntityKind::Animals).as_deref(), Some("animal-007"));
        }

        #[test]
        fn test_enter_flushes_pending_search_before_opening() {
            let mut app = seeded_app();
            type_text(&mut app, "BR-0010");
            press(&mut app, key(KeyCode::Enter));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Animals));
            assert_eq!(app.list_state(EntityKind::Animals).search.committed(), "BR-0010");

            press(&mut app, key(KeyCode::Enter));
            assert_eq!(
                app.nav.current(),
                &Route::Detail(EntityKind::Animals, "animal-010".to_string())
            );
            assert_eq!(app.detail.as_ref().map(|e| e.name()), Some("Valente"));
        }

        #[test]
        fn test_paging_and_selection() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::Right));
            assert_eq!(app.list_state(EntityKind::Animals).current_page, 2);
            press(&mut app, key(KeyCode::Right));
            assert_eq!(app.list_state(EntityKind::Animals).current_page, 2);
            press(&mut app, key(KeyCode::Down));
            assert_eq!(app.selected_id(EntityKind::Animals).as_deref(), Some("animal-052"));
            press(&mut app, key(KeyCode::Home));
            assert_eq!(app.list_state(EntityKind::Animals).current_page, 1);
        }

        #[test]
        fn test_alt_digit_toggles_sort() {
            let mut app = seeded_app();
            press(&mut app, alt('1'));
            let sort = &app.list_state(EntityKind::Animals).sort;
            assert_eq!((sort.key.as_str(), sort.direction), ("tag", SortDirection::Desc));
            assert_eq!(app.selected_id(EntityKind::Animals).as_deref(), Some("animal-064"));

            press(&mut app, alt('5'));
            let sort = &app.list_state(EntityKind::Animals).sort;
            assert_eq!((sort.key.as_str(), sort.direction), ("weight_kg", SortDirection::Asc));
        }

        #[test]
        fn test_tab_cycles_status_and_resets_page() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::Right));
            press(&mut app, key(KeyCode::Tab));
            let list = app.list_state(EntityKind::Animals);
            assert_eq!(list.status_filter, StatusFilter::Only("active".to_string()));
            assert_eq!(list.current_page, 1);
        }

        #[test]
        fn test_ctrl_d_saves_sort_as_default() {
            let dir = std::env::temp_dir()
                .join(format!("farm-admin-tui-{}", uuid::Uuid::new_v4()));
            let path = dir.join("config.json");
            let mut app = seeded_app().with_config_path(Some(path.clone()));

            press(&mut app, alt('2'));
            press(&mut app, ctrl('d'));
            assert_eq!(app.status_message.as_deref(), Some("Default sort saved for Animals"));

            let saved = AdminConfig::load_from(&path).unwrap();
            assert_eq!(
                saved.default_sort(EntityKind::Animals),
                SortConfig::new("name", SortDirection::Asc)
            );
            let _ = std::fs::remove_dir_all(dir);
        }

        #[test]
        fn test_switching_kind_cancels_pending_search() {
            let mut app = seeded_app();
            type_text(&mut app, "nelore");
            press(&mut app, key(KeyCode::F(3)));
            assert!(!app.list_state(EntityKind::Animals).search.is_pending());
        }
    }

    mod detail_page {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_escape_returns_to_list() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::Enter));
            assert!(matches!(app.nav.current(), Route::Detail(..)));
            press(&mut app, key(KeyCode::Esc));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Animals));
            assert!(app.detail.is_none());
        }

        #[test]
        fn test_missing_record_reports_error() {
            let employees = block_on(InMemoryStore::seeded().list(EntityKind::Employees)).unwrap();
            let mut store = MockEntityStore::new();
            store
                .expect_list()
                .returning(move |_| Ok(employees.clone()));
            store
                .expect_fetch()
                .returning(|kind, id| {
                    Err(crate::error::StoreError::NotFound {
                        kind,
                        id: id.to_string(),
                    }
                    .into())
                });
            let mut app = App::new(AdminConfig::default(), Box::new(store));
            press(&mut app, key(KeyCode::F(4)));
            press(&mut app, key(KeyCode::Enter));
            assert!(matches!(app.nav.current(), Route::List(EntityKind::Employees)));
            assert!(app
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Employee not found")));
        }
    }

    mod form_page {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_does_not_call_store() {
            let mut store = MockEntityStore::new();
            store.expect_list().returning(|_| Ok(Vec::new()));
            store.expect_create().times(0);
            let mut app = App::new(AdminConfig::default(), Box::new(store));
            block_on(app.init()).unwrap();

            press(&mut app, ctrl('n'));
            assert_eq!(app.nav.current(), &Route::Create(EntityKind::Animals));
            press(&mut app, ctrl('s'));

            let page = app.form.as_ref().unwrap();
            assert!(!page.engine.state().is_valid);
            let tag = page.engine.field_props("tag").unwrap();
            assert_eq!(tag.visible_error(), Some("Ear tag is required"));
            assert!(app.status_message.is_some());
        }

        #[test]
        fn test_create_employee_flow() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::F(4)));
            let before = app.records(EntityKind::Employees).len();

            press(&mut app, ctrl('n'));
            type_text(&mut app, "Rita Campos");
            press(&mut app, key(KeyCode::Tab)); // role
            press(&mut app, key(KeyCode::Right));
            press(&mut app, key(KeyCode::Tab)); // email
            type_text(&mut app, "rita@example.com");
            press(&mut app, ctrl('s'));

            assert!(app.form.is_none());
            assert_eq!(app.records(EntityKind::Employees).len(), before + 1);
            let detail = app.detail.as_ref().unwrap();
            assert_eq!(detail.name(), "Rita Campos");
            assert_eq!(
                detail.to_values().get("role"),
                Some(&FieldValue::from("cowhand"))
            );
            assert_eq!(
                app.nav.current(),
                &Route::Detail(EntityKind::Employees, detail.id().to_string())
            );
            press(&mut app, key(KeyCode::Esc));
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Employees));
        }

        #[test]
        fn test_edit_updates_record() {
            let mut app = seeded_app();
            press(&mut app, key(KeyCode::Enter));
            press(&mut app, key(KeyCode::Char('e')));
            assert_eq!(
                app.nav.current(),
                &Route::Edit(EntityKind::Animals, "animal-001".to_string())
            );
            press(&mut app, key(KeyCode::Tab)); // name
            press(&mut app, key(KeyCode::Backspace));
            type_text(&mut app, "inha");
            press(&mut app, ctrl('s'));

            assert_eq!(app.detail.as_ref().map(|e| e.name()), Some("Mimosinha"));
            assert_eq!(app.nav.depth(), 1);
        }

        #[test]
        fn test_failed_submit_keeps_input() {
            let mut store = MockEntityStore::new();
            store.expect_list().returning(|_| Ok(Vec::new()));
            store
                .expect_create()
                .times(1)
                .returning(|_, _| Err(anyhow!("store offline")));
            let mut app = App::new(AdminConfig::default(), Box::new(store));
            block_on(app.init()).unwrap();

            press(&mut app, key(KeyCode::F(5)));
            press(&mut app, ctrl('n'));
            type_text(&mut app, "Frigorífico Central");
            press(&mut app, key(KeyCode::Tab));
            type_text(&mut app, "12.345.678/0001-90");
            press(&mut app, ctrl('s'));

            let page = app.form.as_ref().unwrap();
            assert_eq!(
                page.engine.value("name"),
                Some(&FieldValue::from("Frigorífico Central"))
            );
            assert!(!page.engine.state().is_submitting);
            assert_eq!(
                app.status_message.as_deref(),
                Some("Could not save Buyer: store offline")
            );
        }

        #[test]
        fn test_reset_and_cancel() {
            let mut app = seeded_app();
            press(&mut app, ctrl('n'));
            type_text(&mut app, "BR-9");
            press(&mut app, ctrl('r'));
            let page = app.form.as_ref().unwrap();
            assert_eq!(page.engine.value("tag"), Some(&FieldValue::from("")));
            assert!(!page.engine.state().is_dirty);

            press(&mut app, key(KeyCode::Esc));
            assert!(app.form.is_none());
            assert_eq!(app.nav.current(), &Route::List(EntityKind::Animals));
        }
    }
}

pub mod confirmation;
pub mod drag;
pub mod draft;
pub mod list_view;

pub use confirmation::Confirmation;
pub use drag::DragState;
pub use draft::{BookmarkDraft, DraftOutcome, DraftTarget};
pub use list_view::{EditorListView, EditorRow};

use crate::application::{UseCaseContainer, dto::PageView};
use crate::domain::entities::{
    ActiveContext, BookmarkEntry, BookmarkError, ColorScheme, ColorSwapMode, DisplayColors,
    Folder, FolderTarget, ImageRole, Settings,
};
use crate::domain::repositories::ThemeHost;
use crate::domain::services::ValidationError;
use crate::presentation::components::{SearchBox, SettingsForm};
use crate::presentation::services::{AppEvent, EventBus};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no bookmark editor is open")]
    NoOpenEditor,
    #[error("nothing is waiting for confirmation")]
    NothingToConfirm,
    #[error("finish or cancel the open dialog first")]
    DialogOpen,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Everything the page mutates between loads.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub context: ActiveContext,
    pub scheme: ColorScheme,
    pub logo: Option<String>,
    pub background: Option<String>,
    pub drag: DragState,
    pub draft: Option<BookmarkDraft>,
    pub pending: Option<Confirmation>,
}

impl AppState {
    pub fn new(settings: Settings, scheme: ColorScheme) -> Self {
        Self {
            settings,
            context: ActiveContext::Top,
            scheme,
            logo: None,
            background: None,
            drag: DragState::Idle,
            draft: None,
            pending: None,
        }
    }

    fn image_slot(&mut self, role: ImageRole) -> &mut Option<String> {
        match role {
            ImageRole::Logo => &mut self.logo,
            ImageRole::Background => &mut self.background,
        }
    }
}

/// Owns the application state and applies user actions to it.
pub struct EditorController {
    state: AppState,
    use_cases: Arc<UseCaseContainer>,
    theme_host: Arc<dyn ThemeHost>,
    event_bus: EventBus,
}

impl EditorController {
    pub async fn load(
        use_cases: Arc<UseCaseContainer>,
        theme_host: Arc<dyn ThemeHost>,
        event_bus: EventBus,
    ) -> Self {
        let state = Self::load_state(&use_cases, theme_host.as_ref()).await;
        Self {
            state,
            use_cases,
            theme_host,
            event_bus,
        }
    }

    async fn load_state(use_cases: &UseCaseContainer, theme_host: &dyn ThemeHost) -> AppState {
        let settings = use_cases.load_settings.execute().await;
        let mut state = AppState::new(settings, theme_host.color_scheme());
        for role in ImageRole::ALL {
            *state.image_slot(role) = match use_cases.load_image.execute(role).await {
                Ok(image) => image,
                Err(e) => {
                    tracing::warn!("Failed to load {} image: {:#}", role, e);
                    None
                }
            };
        }
        tracing::info!(
            "Start page loaded with {} bookmark entries",
            state.settings.bookmarks.total_entries()
        );
        state
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn context(&self) -> ActiveContext {
        self.state.context
    }

    pub fn page_view(&self) -> PageView {
        PageView::project(
            &self.state.settings,
            self.state.scheme,
            self.state.logo.as_deref(),
            self.state.background.as_deref(),
        )
    }

    pub fn list_view(&self) -> Result<EditorListView, EditorError> {
        Ok(EditorListView::project(
            &self.state.settings.bookmarks,
            self.state.context,
        )?)
    }

    pub fn display_colors(&self) -> DisplayColors {
        DisplayColors::resolve(
            &self.state.settings.colors,
            self.state.settings.color_swap_mode,
            self.state.scheme,
        )
    }

    pub fn search(&self, search_box: &SearchBox) -> Option<String> {
        search_box.submit(&self.state.settings)
    }

    fn entry_in_context(
        &self,
        context: ActiveContext,
        index: usize,
    ) -> Result<BookmarkEntry, BookmarkError> {
        let tree = &self.state.settings.bookmarks;
        let len = tree.context_len(context)?;
        let entry = match context {
            ActiveContext::Top => tree.entries().get(index).cloned(),
            ActiveContext::Folder(folder) => tree
                .folder(folder)?
                .items
                .get(index)
                .cloned()
                .map(BookmarkEntry::Link),
        };
        entry.ok_or(BookmarkError::IndexOutOfRange { index, len })
    }

    /// Dialogs hold indices into the active list, so the list and the
    /// context stay fixed while one is open.
    fn ensure_no_dialog(&self) -> Result<(), EditorError> {
        if self.state.draft.is_some() || self.state.pending.is_some() {
            return Err(EditorError::DialogOpen);
        }
        Ok(())
    }

    fn bookmarks_changed(&self) {
        tracing::debug!(
            "Bookmarks changed, {} entries in total",
            self.state.settings.bookmarks.total_entries()
        );
        self.event_bus.publish(AppEvent::BookmarksChanged);
    }

    fn colors_changed(&self) {
        self.event_bus
            .publish(AppEvent::ColorsChanged(self.display_colors()));
    }

    // Folder context

    pub fn open_folder(&mut self, index: usize) -> Result<(), EditorError> {
        self.ensure_no_dialog()?;
        if self.state.context != ActiveContext::Top {
            return Err(BookmarkError::TopLevelContextRequired.into());
        }
        self.state.settings.bookmarks.folder(index)?;
        self.state.context = ActiveContext::Folder(index);
        self.state.drag.end();
        tracing::debug!("Opened folder {}", index);
        Ok(())
    }

    pub fn close_folder(&mut self) -> Result<(), EditorError> {
        self.ensure_no_dialog()?;
        self.return_to_top();
        Ok(())
    }

    fn return_to_top(&mut self) {
        self.state.context = ActiveContext::Top;
        self.state.drag.end();
    }

    /// Closing the settings panel drops any open dialog and returns to the top level.
    pub fn close_settings(&mut self) {
        self.state.draft = None;
        self.state.pending = None;
        self.return_to_top();
    }

    // Bookmark editor dialog

    pub fn open_editor(&mut self, index: Option<usize>) -> Result<&mut BookmarkDraft, EditorError> {
        self.ensure_no_dialog()?;
        let context = self.state.context;
        let draft = match index {
            None => BookmarkDraft::new_link(context),
            Some(index) => {
                let entry = self.entry_in_context(context, index)?;
                BookmarkDraft::for_entry(context, index, &entry)
            }
        };
        Ok(self.state.draft.insert(draft))
    }

    pub fn draft_mut(&mut self) -> Option<&mut BookmarkDraft> {
        self.state.draft.as_mut()
    }

    pub fn cancel_editor(&mut self) {
        self.state.draft = None;
    }

    /// Applies the open draft. A validation failure keeps the draft open.
    pub fn save_editor(&mut self) -> Result<(), EditorError> {
        let draft = self.state.draft.as_ref().ok_or(EditorError::NoOpenEditor)?;
        let context = draft.context();
        let outcome = draft.finish()?;

        let tree = &mut self.state.settings.bookmarks;
        match outcome {
            DraftOutcome::Add(entry) => tree.add(context, entry)?,
            DraftOutcome::Edit { index, edit } => tree.edit(context, index, edit)?,
        }
        self.state.draft = None;
        self.bookmarks_changed();
        Ok(())
    }

    /// Returns `false` when the name is blank and nothing was added.
    pub fn add_folder(&mut self, name: &str) -> Result<bool, EditorError> {
        self.ensure_no_dialog()?;
        if matches!(self.state.context, ActiveContext::Folder(_)) {
            return Err(BookmarkError::NestedFolder.into());
        }
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.state
            .settings
            .bookmarks
            .add(ActiveContext::Top, Folder::new(name).into())?;
        tracing::info!("Added folder '{}'", name);
        self.bookmarks_changed();
        Ok(true)
    }

    // Confirmations

    fn request(&mut self, confirmation: Confirmation) -> String {
        let message = confirmation.message();
        self.state.pending = Some(confirmation);
        message
    }

    /// Asks before deleting; returns the prompt to show.
    pub fn request_delete(&mut self, index: usize) -> Result<String, EditorError> {
        self.ensure_no_dialog()?;
        let context = self.state.context;
        let entry = self.entry_in_context(context, index)?;
        Ok(self.request(Confirmation::DeleteEntry {
            context,
            index,
            name: entry.name().to_string(),
            is_folder: entry.is_folder(),
        }))
    }

    pub fn request_reset_colors(&mut self) -> String {
        self.request(Confirmation::ResetColors)
    }

    pub fn request_clear_custom_css(&mut self) -> String {
        self.request(Confirmation::ClearCustomCss)
    }

    pub fn request_reset_all(&mut self) -> String {
        self.request(Confirmation::ResetAll)
    }

    pub fn pending_confirmation(&self) -> Option<&Confirmation> {
        self.state.pending.as_ref()
    }

    pub fn cancel_confirmation(&mut self) {
        self.state.pending = None;
    }

    pub async fn confirm(&mut self) -> Result<(), EditorError> {
        let pending = self
            .state
            .pending
            .take()
            .ok_or(EditorError::NothingToConfirm)?;

        match pending {
            Confirmation::DeleteEntry { context, index, .. } => {
                let removed = self.state.settings.bookmarks.delete(context, index)?;
                tracing::info!("Deleted '{}'", removed.name());
                self.bookmarks_changed();
            }
            Confirmation::ResetColors => {
                let scheme = self.state.scheme;
                self.state.settings.colors = self.theme_host.default_colors_for(scheme);
                self.colors_changed();
            }
            Confirmation::ClearCustomCss => {
                self.state.settings.custom_css.clear();
                self.colors_changed();
            }
            Confirmation::ResetAll => {
                self.use_cases
                    .reset_all
                    .execute()
                    .await
                    .inspect_err(|e| tracing::error!("Reset failed: {:#}", e))?;
                self.state = Self::load_state(&self.use_cases, self.theme_host.as_ref()).await;
                self.event_bus.publish(AppEvent::SettingsReset);
            }
        }
        Ok(())
    }

    // Drag and drop

    pub fn drag_start(&mut self, index: usize) {
        self.state.drag.start(index, self.state.context);
    }

    /// Returns whether the drop reordered anything.
    pub fn drop_on(&mut self, target: usize) -> Result<bool, EditorError> {
        self.ensure_no_dialog()?;
        let context = self.state.context;
        let Some((from, to)) = self.state.drag.drop_on(target, context) else {
            return Ok(false);
        };
        self.state.settings.bookmarks.reorder(context, from, to)?;
        self.bookmarks_changed();
        Ok(true)
    }

    pub fn drag_end(&mut self) {
        self.state.drag.end();
    }

    // Moving between lists

    /// Folders a top-level link can be moved into.
    pub fn folder_targets(&self, bookmark_index: usize) -> Result<Vec<FolderTarget>, EditorError> {
        if self.state.context != ActiveContext::Top {
            return Err(BookmarkError::TopLevelContextRequired.into());
        }
        if self.entry_in_context(ActiveContext::Top, bookmark_index)?.is_folder() {
            return Err(BookmarkError::CannotMoveFolder.into());
        }
        let targets = self.state.settings.bookmarks.folder_targets();
        if targets.is_empty() {
            return Err(BookmarkError::NoFolders.into());
        }
        Ok(targets)
    }

    pub fn move_to_folder(
        &mut self,
        bookmark_index: usize,
        folder_index: usize,
    ) -> Result<(), EditorError> {
        self.ensure_no_dialog()?;
        self.state
            .settings
            .bookmarks
            .move_to_folder(self.state.context, bookmark_index, folder_index)?;
        self.bookmarks_changed();
        Ok(())
    }

    pub fn move_out_of_folder(&mut self, item_index: usize) -> Result<(), EditorError> {
        self.ensure_no_dialog()?;
        self.state
            .settings
            .bookmarks
            .move_out_of_folder(self.state.context, item_index)?;
        self.bookmarks_changed();
        Ok(())
    }

    // Layout and appearance

    pub fn move_element_down(&mut self, position: usize) {
        self.state.settings.element_order.move_down(position);
        self.event_bus.publish(AppEvent::ElementOrderChanged);
    }

    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::from_settings(&self.state.settings)
    }

    pub fn apply_settings_form(&mut self, form: &SettingsForm) -> Result<(), EditorError> {
        form.apply_to(&mut self.state.settings)?;
        self.colors_changed();
        Ok(())
    }

    /// Recomputes display colors when the system scheme flips. Returns the
    /// new colors when swapping is enabled.
    pub fn on_color_scheme_changed(&mut self, scheme: ColorScheme) -> Option<DisplayColors> {
        self.state.scheme = scheme;
        if self.state.settings.color_swap_mode == ColorSwapMode::Never {
            return None;
        }
        let colors = self.display_colors();
        self.event_bus.publish(AppEvent::ColorsChanged(colors.clone()));
        Some(colors)
    }

    // Persistence

    /// Writes the whole settings record and closes the settings panel.
    pub async fn save(&mut self) -> Result<(), EditorError> {
        self.use_cases
            .save_settings
            .execute(&self.state.settings)
            .await
            .inspect_err(|e| tracing::error!("Failed to save settings: {:#}", e))?;
        self.close_settings();
        self.event_bus.publish(AppEvent::SettingsSaved);
        self.event_bus
            .publish(AppEvent::StatusUpdate("Settings saved".to_string()));
        Ok(())
    }

    pub async fn set_image(&mut self, role: ImageRole, data: String) -> Result<(), EditorError> {
        self.use_cases
            .save_image
            .execute(role, &data)
            .await
            .inspect_err(|e| tracing::error!("Failed to store {} image: {:#}", role, e))?;
        *self.state.image_slot(role) = Some(data);
        self.event_bus.publish(AppEvent::ImageChanged(role));
        Ok(())
    }

    pub async fn clear_image(&mut self, role: ImageRole) -> Result<(), EditorError> {
        self.use_cases
            .clear_image
            .execute(role)
            .await
            .inspect_err(|e| tracing::error!("Failed to clear {} image: {:#}", role, e))?;
        *self.state.image_slot(role) = None;
        self.event_bus.publish(AppEvent::ImageChanged(role));
        Ok(())
    }
}

use crate::domain::entities::{ActiveContext, BookmarkEntry, EntryEdit, IconEdit, Link};
use crate::domain::services::{BookmarkValidator, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    New,
    Existing { index: usize, is_folder: bool },
}

/// What a validated draft turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    Add(BookmarkEntry),
    Edit { index: usize, edit: EntryEdit },
}

/// The bookmark editor dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    target: DraftTarget,
    context: ActiveContext,
    pub name: String,
    pub url: String,
    icon_url_input: String,
    icon: Option<String>,
    icon_cleared: bool,
}

impl BookmarkDraft {
    pub fn new_link(context: ActiveContext) -> Self {
        Self {
            target: DraftTarget::New,
            context,
            name: String::new(),
            url: String::new(),
            icon_url_input: String::new(),
            icon: None,
            icon_cleared: false,
        }
    }

    pub fn for_entry(context: ActiveContext, index: usize, entry: &BookmarkEntry) -> Self {
        let (url, icon) = match entry {
            BookmarkEntry::Link(link) => (link.url.clone(), link.icon.clone()),
            BookmarkEntry::Folder(_) => (String::new(), None),
        };
        Self {
            target: DraftTarget::Existing {
                index,
                is_folder: entry.is_folder(),
            },
            context,
            name: entry.name().to_string(),
            url,
            icon_url_input: String::new(),
            icon,
            icon_cleared: false,
        }
    }

    pub fn target(&self) -> DraftTarget {
        self.target
    }

    pub fn context(&self) -> ActiveContext {
        self.context
    }

    fn is_folder(&self) -> bool {
        matches!(self.target, DraftTarget::Existing { is_folder: true, .. })
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            DraftTarget::New => "Add Bookmark",
            DraftTarget::Existing { is_folder: true, .. } => "Edit Folder",
            DraftTarget::Existing { is_folder: false, .. } => "Edit Bookmark",
        }
    }

    /// Folders have no URL or icon fields.
    pub fn shows_link_fields(&self) -> bool {
        !self.is_folder()
    }

    /// Icon shown in the preview.
    pub fn icon_preview(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn icon_url_input(&self) -> &str {
        &self.icon_url_input
    }

    /// An uploaded file, already read as a data URI. Clears the URL input.
    pub fn set_icon_from_file(&mut self, data_uri: String) {
        self.icon = Some(data_uri);
        self.icon_cleared = false;
        self.icon_url_input.clear();
    }

    /// Typed icon URL. Blank input leaves the current icon in place.
    pub fn set_icon_url(&mut self, input: &str) {
        self.icon_url_input = input.to_string();
        let url = input.trim();
        if !url.is_empty() {
            self.icon = Some(url.to_string());
            self.icon_cleared = false;
        }
    }

    pub fn clear_icon(&mut self) {
        self.icon = None;
        self.icon_cleared = true;
        self.icon_url_input.clear();
    }

    /// Validates the draft. New entries are always links.
    pub fn finish(&self) -> Result<DraftOutcome, ValidationError> {
        let name = BookmarkValidator::validate_name(&self.name)?;
        if let DraftTarget::Existing { index, is_folder: true } = self.target {
            return Ok(DraftOutcome::Edit {
                index,
                edit: EntryEdit::rename(name),
            });
        }

        let url = BookmarkValidator::validate_url(&self.url)?;
        match self.target {
            DraftTarget::New => {
                let mut link = Link::new(name, url);
                link.icon = self.icon.clone();
                Ok(DraftOutcome::Add(link.into()))
            }
            DraftTarget::Existing { index, .. } => {
                let icon = match (&self.icon, self.icon_cleared) {
                    (Some(icon), _) => IconEdit::Set(icon.clone()),
                    (None, true) => IconEdit::Clear,
                    (None, false) => IconEdit::Keep,
                };
                Ok(DraftOutcome::Edit {
                    index,
                    edit: EntryEdit::rename(name).with_url(url).with_icon(icon),
                })
            }
        }
    }
}

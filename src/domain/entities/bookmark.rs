use serde::{Deserialize, Serialize};

/// A leaf bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry", into = "StoredEntry")]
pub struct Link {
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        self.icon = if icon.is_empty() { None } else { Some(icon) };
        self
    }
}

/// A one-level container. Items are always links, so folders cannot nest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folder {
    pub name: String,
    pub items: Vec<Link>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Link>) -> Self {
        self.items = items;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry", into = "StoredEntry")]
pub enum BookmarkEntry {
    Link(Link),
    Folder(Folder),
}

impl BookmarkEntry {
    pub fn name(&self) -> &str {
        match self {
            BookmarkEntry::Link(link) => &link.name,
            BookmarkEntry::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkEntry::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            BookmarkEntry::Folder(folder) => Some(folder),
            BookmarkEntry::Link(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            BookmarkEntry::Folder(folder) => Some(folder),
            BookmarkEntry::Link(_) => None,
        }
    }

    /// Applies an edit without changing the entry's kind.
    pub fn apply(&mut self, edit: EntryEdit) {
        match self {
            BookmarkEntry::Link(link) => edit.apply_to_link(link),
            BookmarkEntry::Folder(folder) => folder.name = edit.name,
        }
    }
}

impl From<Link> for BookmarkEntry {
    fn from(link: Link) -> Self {
        BookmarkEntry::Link(link)
    }
}

impl From<Folder> for BookmarkEntry {
    fn from(folder: Folder) -> Self {
        BookmarkEntry::Folder(folder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconEdit {
    #[default]
    Keep,
    Set(String),
    Clear,
}

/// Field changes for `BookmarkTree::edit`. `url` and `icon` are ignored for folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryEdit {
    pub name: String,
    pub url: Option<String>,
    pub icon: IconEdit,
}

impl EntryEdit {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            icon: IconEdit::Keep,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_icon(mut self, icon: IconEdit) -> Self {
        self.icon = icon;
        self
    }

    pub(crate) fn apply_to_link(self, link: &mut Link) {
        link.name = self.name;
        if let Some(url) = self.url {
            link.url = url;
        }
        match self.icon {
            IconEdit::Keep => {}
            IconEdit::Set(icon) if icon.is_empty() => link.icon = None,
            IconEdit::Set(icon) => link.icon = Some(icon),
            IconEdit::Clear => link.icon = None,
        }
    }
}

// Persisted shape: `{name, url, icon, isFolder: false}` or `{name, items, isFolder: true}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<Link>>,
    #[serde(default)]
    is_folder: bool,
}

impl TryFrom<StoredEntry> for Link {
    type Error = String;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        if stored.is_folder {
            return Err(format!("folder \"{}\" cannot be nested inside a folder", stored.name));
        }
        Ok(Link::new(stored.name, stored.url.unwrap_or_default())
            .with_icon(stored.icon.unwrap_or_default()))
    }
}

impl From<Link> for StoredEntry {
    fn from(link: Link) -> Self {
        Self {
            name: link.name,
            url: Some(link.url),
            icon: Some(link.icon.unwrap_or_default()),
            items: None,
            is_folder: false,
        }
    }
}

impl TryFrom<StoredEntry> for BookmarkEntry {
    type Error = String;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        if stored.is_folder {
            Ok(BookmarkEntry::Folder(
                Folder::new(stored.name).with_items(stored.items.unwrap_or_default()),
            ))
        } else {
            Link::try_from(stored).map(BookmarkEntry::Link)
        }
    }
}

impl From<BookmarkEntry> for StoredEntry {
    fn from(entry: BookmarkEntry) -> Self {
        match entry {
            BookmarkEntry::Link(link) => link.into(),
            BookmarkEntry::Folder(folder) => Self {
                name: folder.name,
                url: None,
                icon: None,
                items: Some(folder.items),
                is_folder: true,
            },
        }
    }
}

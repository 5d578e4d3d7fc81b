use super::bookmark::{BookmarkEntry, EntryEdit, Folder, Link};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which list bookmark operations apply to: the top level, or the items of
/// the folder at the given top-level index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveContext {
    #[default]
    Top,
    Folder(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkError {
    #[error("index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Cannot create folders inside folders!")]
    NestedFolder,
    #[error("entry {0} is not a folder")]
    NotAFolder(usize),
    #[error("folders cannot be moved into other folders")]
    CannotMoveFolder,
    #[error("this action is only available inside a folder")]
    FolderContextRequired,
    #[error("this action is only available at the top level")]
    TopLevelContextRequired,
    #[error("No folders available. Create a folder first!")]
    NoFolders,
}

/// A folder offered as a move target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTarget {
    pub index: usize,
    pub name: String,
    pub item_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkTree {
    entries: Vec<BookmarkEntry>,
}

impl BookmarkTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<BookmarkEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BookmarkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn folder(&self, index: usize) -> Result<&Folder, BookmarkError> {
        self.entry(index)?
            .as_folder()
            .ok_or(BookmarkError::NotAFolder(index))
    }

    fn folder_mut(&mut self, index: usize) -> Result<&mut Folder, BookmarkError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(BookmarkError::IndexOutOfRange { index, len })?
            .as_folder_mut()
            .ok_or(BookmarkError::NotAFolder(index))
    }

    fn entry(&self, index: usize) -> Result<&BookmarkEntry, BookmarkError> {
        self.entries.get(index).ok_or(BookmarkError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Number of entries in the list selected by `context`.
    pub fn context_len(&self, context: ActiveContext) -> Result<usize, BookmarkError> {
        match context {
            ActiveContext::Top => Ok(self.entries.len()),
            ActiveContext::Folder(folder) => Ok(self.folder(folder)?.items.len()),
        }
    }

    /// Entries across the top level plus every folder's items.
    pub fn total_entries(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| 1 + entry.as_folder().map_or(0, |folder| folder.items.len()))
            .sum()
    }

    pub fn folder_targets(&self) -> Vec<FolderTarget> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                entry.as_folder().map(|folder| FolderTarget {
                    index,
                    name: folder.name.clone(),
                    item_count: folder.items.len(),
                })
            })
            .collect()
    }

    pub fn add(
        &mut self,
        context: ActiveContext,
        entry: BookmarkEntry,
    ) -> Result<(), BookmarkError> {
        match context {
            ActiveContext::Top => {
                self.entries.push(entry);
                Ok(())
            }
            ActiveContext::Folder(folder) => {
                let folder = self.folder_mut(folder)?;
                match entry {
                    BookmarkEntry::Link(link) => {
                        folder.items.push(link);
                        Ok(())
                    }
                    BookmarkEntry::Folder(_) => Err(BookmarkError::NestedFolder),
                }
            }
        }
    }

    pub fn edit(
        &mut self,
        context: ActiveContext,
        index: usize,
        edit: EntryEdit,
    ) -> Result<(), BookmarkError> {
        match context {
            ActiveContext::Top => {
                let len = self.entries.len();
                self.entries
                    .get_mut(index)
                    .ok_or(BookmarkError::IndexOutOfRange { index, len })?
                    .apply(edit);
            }
            ActiveContext::Folder(folder) => {
                let items = &mut self.folder_mut(folder)?.items;
                let len = items.len();
                let link = items
                    .get_mut(index)
                    .ok_or(BookmarkError::IndexOutOfRange { index, len })?;
                edit.apply_to_link(link);
            }
        }
        Ok(())
    }

    /// Removes and returns the entry. Removing a folder drops its items with it.
    pub fn delete(
        &mut self,
        context: ActiveContext,
        index: usize,
    ) -> Result<BookmarkEntry, BookmarkError> {
        match context {
            ActiveContext::Top => {
                check_index(index, self.entries.len())?;
                Ok(self.entries.remove(index))
            }
            ActiveContext::Folder(folder) => {
                let items = &mut self.folder_mut(folder)?.items;
                check_index(index, items.len())?;
                Ok(BookmarkEntry::Link(items.remove(index)))
            }
        }
    }

    pub fn reorder(
        &mut self,
        context: ActiveContext,
        from: usize,
        to: usize,
    ) -> Result<(), BookmarkError> {
        match context {
            ActiveContext::Top => move_within(&mut self.entries, from, to),
            ActiveContext::Folder(folder) => {
                move_within(&mut self.folder_mut(folder)?.items, from, to)
            }
        }
    }

    /// Moves a top-level link into a folder. Both indices refer to the list
    /// before the link is removed.
    pub fn move_to_folder(
        &mut self,
        context: ActiveContext,
        bookmark_index: usize,
        folder_index: usize,
    ) -> Result<(), BookmarkError> {
        if context != ActiveContext::Top {
            return Err(BookmarkError::TopLevelContextRequired);
        }
        if self.entry(bookmark_index)?.is_folder() {
            return Err(BookmarkError::CannotMoveFolder);
        }
        self.folder(folder_index)?;

        let link = match self.entries.remove(bookmark_index) {
            BookmarkEntry::Link(link) => link,
            folder @ BookmarkEntry::Folder(_) => {
                self.entries.insert(bookmark_index, folder);
                return Err(BookmarkError::CannotMoveFolder);
            }
        };
        let target = if folder_index > bookmark_index {
            folder_index - 1
        } else {
            folder_index
        };
        self.folder_mut(target)?.items.push(link);
        Ok(())
    }

    /// Moves a link out of the open folder to the end of the top level.
    pub fn move_out_of_folder(
        &mut self,
        context: ActiveContext,
        item_index: usize,
    ) -> Result<(), BookmarkError> {
        let ActiveContext::Folder(folder) = context else {
            return Err(BookmarkError::FolderContextRequired);
        };
        let items = &mut self.folder_mut(folder)?.items;
        check_index(item_index, items.len())?;
        let link: Link = items.remove(item_index);
        self.entries.push(BookmarkEntry::Link(link));
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), BookmarkError> {
    if index < len {
        Ok(())
    } else {
        Err(BookmarkError::IndexOutOfRange { index, len })
    }
}

fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), BookmarkError> {
    check_index(from, items.len())?;
    check_index(to, items.len())?;
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

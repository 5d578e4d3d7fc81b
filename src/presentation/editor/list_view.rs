use crate::domain::entities::{ActiveContext, BookmarkEntry, BookmarkError, BookmarkTree, Link};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    pub index: usize,
    pub name: String,
    pub icon: Option<String>,
    /// URL for links, item count for folders.
    pub subtitle: String,
    pub can_open: bool,
    pub can_move_to_folder: bool,
    pub can_move_out: bool,
}

/// Rows of the bookmark editor for the active context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorListView {
    pub title: String,
    pub show_back: bool,
    pub rows: Vec<EditorRow>,
}

impl EditorListView {
    pub fn project(tree: &BookmarkTree, context: ActiveContext) -> Result<Self, BookmarkError> {
        match context {
            ActiveContext::Top => Ok(Self {
                title: "Bookmarks".to_string(),
                show_back: false,
                rows: tree
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| top_row(index, entry))
                    .collect(),
            }),
            ActiveContext::Folder(folder) => {
                let folder = tree.folder(folder)?;
                Ok(Self {
                    title: format!("Editing: {}", folder.name),
                    show_back: true,
                    rows: folder
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, link)| folder_row(index, link))
                        .collect(),
                })
            }
        }
    }
}

fn top_row(index: usize, entry: &BookmarkEntry) -> EditorRow {
    match entry {
        BookmarkEntry::Link(link) => EditorRow {
            can_move_to_folder: true,
            can_move_out: false,
            ..folder_row(index, link)
        },
        BookmarkEntry::Folder(folder) => EditorRow {
            index,
            name: folder.name.clone(),
            icon: None,
            subtitle: format!("{} items", folder.items.len()),
            can_open: true,
            can_move_to_folder: false,
            can_move_out: false,
        },
    }
}

fn folder_row(index: usize, link: &Link) -> EditorRow {
    EditorRow {
        index,
        name: link.name.clone(),
        icon: link.icon.clone(),
        subtitle: link.url.clone(),
        can_open: false,
        can_move_to_folder: false,
        can_move_out: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Folder;

    fn tree() -> BookmarkTree {
        BookmarkTree::from_entries(vec![
            Link::new("Docs", "https://docs.rs").into(),
            Folder::new("Work")
                .with_items(vec![Link::new("Mail", "https://mail")])
                .into(),
        ])
    }

    #[test]
    fn top_level_rows_offer_open_and_move_in() {
        let view = EditorListView::project(&tree(), ActiveContext::Top).unwrap();
        assert_eq!(view.title, "Bookmarks");
        assert!(!view.show_back);

        let docs = &view.rows[0];
        assert!(docs.can_move_to_folder && !docs.can_open && !docs.can_move_out);
        assert_eq!(docs.subtitle, "https://docs.rs");

        let work = &view.rows[1];
        assert!(work.can_open && !work.can_move_to_folder);
        assert_eq!(work.subtitle, "1 items");
    }

    #[test]
    fn folder_rows_offer_move_out() {
        let view = EditorListView::project(&tree(), ActiveContext::Folder(1)).unwrap();
        assert_eq!(view.title, "Editing: Work");
        assert!(view.show_back);
        assert!(view.rows[0].can_move_out && !view.rows[0].can_move_to_folder);
    }

    #[test]
    fn a_stale_folder_context_is_an_error() {
        assert_eq!(
            EditorListView::project(&tree(), ActiveContext::Folder(0)),
            Err(BookmarkError::NotAFolder(0))
        );
    }
}

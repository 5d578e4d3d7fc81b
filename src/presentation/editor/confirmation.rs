use crate::domain::entities::ActiveContext;

/// Destructive actions waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DeleteEntry {
        context: ActiveContext,
        index: usize,
        name: String,
        is_folder: bool,
    },
    ResetColors,
    ClearCustomCss,
    ResetAll,
}

impl Confirmation {
    pub fn message(&self) -> String {
        match self {
            Confirmation::DeleteEntry { name, is_folder: true, .. } => {
                format!("Delete folder \"{name}\" and all its contents?")
            }
            Confirmation::DeleteEntry { name, .. } => format!("Delete \"{name}\"?"),
            Confirmation::ResetColors => "Reset all colors to default?".to_string(),
            Confirmation::ClearCustomCss => "Clear all custom CSS?".to_string(),
            Confirmation::ResetAll => "Reset all settings? This will clear everything!".to_string(),
        }
    }
}

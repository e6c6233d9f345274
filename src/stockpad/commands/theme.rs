use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::{InventoryStore, StorageBackend};

/// Show the stored theme, or store a new one.
pub fn run<B: StorageBackend>(
    store: &InventoryStore<B>,
    set: Option<Theme>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let theme = match set {
        Some(theme) => {
            store.set_theme(theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
            theme
        }
        None => store.theme()?,
    };
    result.theme = Some(theme);
    Ok(result)
}

use stockpad::model::{ItemPatch, NewCategory, NewItem, Theme};
use stockpad::store::backend::INVENTORY_KEY;
use stockpad::store::fs_backend::FsBackend;
use stockpad::store::{InventoryStore, StorageBackend};
use tempfile::TempDir;

fn open(dir: &TempDir) -> InventoryStore<FsBackend> {
    InventoryStore::open(FsBackend::new(dir.path()), false).unwrap()
}

#[test]
fn test_changes_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut store = open(&temp_dir);
        store.add_category(NewCategory::new("Food")).unwrap();
        store
            .add_item(NewItem::new("MKN001", "Coffee", "Food").stock(10, 2).price(1.5))
            .unwrap();
        store
            .update_item(
                1,
                ItemPatch {
                    stock: Some(7),
                    ..Default::default()
                },
            )
            .unwrap();
        store.set_theme(Theme::Light).unwrap();
    }

    let store = open(&temp_dir);
    let item = store.get_item(1).unwrap();
    assert_eq!(item.stock, 7);
    assert_eq!(item.price, 1.5);
    assert_eq!(store.list_categories().len(), 1);
    assert_eq!(store.theme().unwrap(), Theme::Light);
}

#[test]
fn test_persisted_layout_uses_camel_case() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store.add_category(NewCategory::new("Food")).unwrap();
    store
        .add_item(NewItem::new("MKN001", "Coffee", "Food").stock(10, 2))
        .unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("inventory.json")).unwrap();
    assert!(raw.contains("\"minStock\":2"));
    let theme = std::fs::read_to_string(temp_dir.path().join("theme.json"));
    assert!(theme.is_err(), "theme is only written when set");
}

#[test]
fn test_no_temp_files_left_behind() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("nested");
    let backend = FsBackend::new(&root);
    backend.write(INVENTORY_KEY, "[]").unwrap();
    backend.write(INVENTORY_KEY, "[]").unwrap();

    let names: Vec<String> = std::fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["inventory.json"]);
}

#[test]
fn test_missing_key_reads_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let backend = FsBackend::new(temp_dir.path());
    assert!(backend.read("nothing").unwrap().is_none());
}

#[test]
fn test_first_open_seeds_and_persists() {
    let temp_dir = TempDir::new().unwrap();
    let store = InventoryStore::open(FsBackend::new(temp_dir.path()), true).unwrap();
    assert_eq!(store.list_items().len(), 5);

    let reopened = InventoryStore::open(FsBackend::new(temp_dir.path()), true).unwrap();
    assert_eq!(reopened.list_items(), store.list_items());
    assert_eq!(reopened.list_categories().len(), 4);
}

#[test]
fn test_emptied_store_stays_empty_across_boots() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = InventoryStore::open(FsBackend::new(temp_dir.path()), true).unwrap();
    for id in 1..=5 {
        assert!(store.delete_item(id).unwrap());
    }
    for id in 1..=4 {
        store.delete_category(id).unwrap();
    }

    let reopened = InventoryStore::open(FsBackend::new(temp_dir.path()), true).unwrap();
    assert!(reopened.list_items().is_empty());
    assert!(reopened.list_categories().is_empty());
}

#[test]
fn test_theme_file_holds_bare_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    store.set_theme(Theme::Light).unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("theme.json")).unwrap();
    assert_eq!(raw, "light");
}

use std::collections::BTreeSet;
use std::fs;

use rusty_addressbook::prelude::*;
use tempfile::tempdir;

fn contact(name: &str, phone: &str, tags: &[&str]) -> Contact {
    Contact::new(
        name,
        ContactDetail::public(phone),
        ContactDetail::public(&format!("{}@example.com", name.to_lowercase())),
        ContactDetail::new("1 Broad Street", true),
        tags.iter().map(|t| t.to_string()).collect::<BTreeSet<String>>(),
    )
}

fn sample_book() -> AddressBook {
    AddressBook::from_contacts(vec![
        contact("Patricia", "08066809241", &["others"]),
        contact("Diane", "08064879199", &["school", "friends"]),
        contact("John", "08046516806", &[]),
    ])
    .unwrap()
}

/// Both engines must satisfy what any caller can observe through the trait.
fn exercise(storage: &dyn Storage) -> Result<AddressBook, StorageError> {
    storage.save(&sample_book())?;
    storage.load()
}

#[test]
fn file_storage_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("book.json").to_string_lossy().to_string();

    let storage = open_storage(&path, false)?;

    assert_eq!(storage.path(), path);
    assert!(storage.load()?.is_empty());
    assert_eq!(exercise(storage.as_ref())?, sample_book());
    Ok(())
}

#[test]
fn stub_storage_forgets() -> Result<(), Box<dyn std::error::Error>> {
    let storage = StorageStub::new("ignored.json");

    assert!(exercise(&storage)?.is_empty());
    assert_eq!(storage.path(), "ignored.json");
    Ok(())
}

#[test]
fn invalid_paths_never_produce_storage() {
    for path in ["", "book.csv", "no_extension"] {
        let err = JsonStorage::new(path).unwrap_err();
        assert!(err.is_illegal_value(), "{path:?} should be rejected");
    }
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_directory_fails_construction_not_save() {
    let err = open_storage("/proc/addressbook.json", false).err().unwrap();

    assert!(err.is_illegal_value());
    assert!(open_storage("/proc/addressbook.json", true).is_ok());
}

#[test]
fn executor_and_presenter_over_file_storage() -> Result<(), Box<dyn std::error::Error>> {
    struct Host {
        stops: usize,
    }
    impl Stoppable for Host {
        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    let dir = tempdir()?;
    let path = dir.path().join("book.json").to_string_lossy().to_string();
    let mut logic = Logic::new(Box::new(JsonStorage::new(&path)?))?;
    let mut presenter = Presenter::new();
    let mut host = Host { stops: 0 };

    for command in [
        "add Diane p/08064879199 e/diane@example.com a/Ikeja t/school",
        "add Patricia p/08066809241 e/patricia@example.com pa/Yaba",
        "find Diane",
        "delete 1",
        "list",
    ] {
        presenter.set_command_input(command);
        assert_eq!(
            presenter.on_command(&mut logic, &mut host)?,
            CycleOutcome::Continue
        );
    }

    assert!(presenter.output().contains("  1. Patricia Phone: 08066809241"));
    assert!(!presenter.output().contains("Yaba"));
    assert_eq!(presenter.table().map(<[Contact]>::len), Some(1));

    let reloaded = JsonStorage::new(&path)?.load()?;
    assert_eq!(reloaded, *logic.address_book());

    presenter.set_command_input("exit");
    assert_eq!(presenter.on_command(&mut logic, &mut host)?, CycleOutcome::Exit);
    assert_eq!(host.stops, 1);

    let stored = fs::read_to_string(&path)?;
    assert!(stored.contains("\"private\": true"));
    Ok(())
}

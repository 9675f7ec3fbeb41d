//! Scripted demonstration run against the directory store.
//!
//! Reproduces the reference workflow: destructive schema reset, a handful of
//! clients and phones, the four searches, updates, and the refused-then-
//! successful client deletion. Constraint violations on the two insert
//! operations are reported and the run continues; any other store failure
//! aborts the run, leaving prior per-operation commits in place.

use anyhow::{Context, Result};
use domain::models::DirectoryEntry;
use persistence::entities::{ClientEntity, DirectoryEntryEntity, PhoneEntity};
use persistence::{DeleteOutcome, DirectoryStore, StoreError};
use tracing::info;

pub async fn demo(store: &DirectoryStore) -> Result<()> {
    // Destructive reset, as in the reference workflow. The drop is not
    // guarded, so make sure the tables exist before dropping them; this is
    // what lets the run work on a fresh database.
    store.create_schema().await?;
    store.drop_schema().await?;
    store.create_schema().await?;
    println!("Tables created");

    let ivan = require(add_client(store, "Ivan", "Ivanov", "iivanov1987@mail.ru").await?)?;
    let ivan_phone = require(add_phone(store, "5553307", ivan.id).await?)?;
    let john = require(add_client(store, "John", "Stone", "grebeshok@gmail.com").await?)?;
    require(add_phone(store, "1010864", john.id).await?)?;
    let spare_phone = require(add_phone(store, "4455087", john.id).await?)?;
    require(add_client(store, "Мария", "Сидорова", "msidor@bk.com").await?)?;

    // Rejected by the printable-ASCII check on mail; reported, run continues.
    add_client(store, "Пётр", "Волков", "пётр@example.com").await?;

    print_entries(store.search_by_firstname("Мария").await?);
    print_entries(store.search_by_lastname("Stone").await?);

    store
        .update_client(Some("Игорь"), Some("Петров"), "ipetrov12@yandex.ru", john.id)
        .await?;
    println!("Client updated");
    print_entries(store.search_by_mail("ipetrov12@yandex.ru").await?);

    store.update_phone("777888", ivan_phone.id).await?;
    println!("Phone number updated");
    print_entries(store.search_by_phone("777888").await?);

    store.delete_phone(spare_phone.id).await?;
    println!("Phone number deleted from the directory");
    print_entries(store.search_by_firstname("Игорь").await?);

    // Refused: Ivan still owns a number.
    delete_client(store, ivan.id).await?;
    store.delete_phone(ivan_phone.id).await?;
    println!("Phone number deleted from the directory");
    delete_client(store, ivan.id).await?;

    info!("demonstration run finished");
    Ok(())
}

/// Insert a client, reporting a constraint violation instead of failing.
async fn add_client(
    store: &DirectoryStore,
    firstname: &str,
    lastname: &str,
    mail: &str,
) -> Result<Option<ClientEntity>> {
    match store.add_client(Some(firstname), Some(lastname), mail).await {
        Ok(client) => {
            println!("Client added to the directory");
            Ok(Some(client))
        }
        Err(StoreError::ConstraintViolation(detail)) => {
            println!("Invalid input data: {detail}");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Insert a phone, reporting a constraint violation instead of failing.
/// A foreign-key violation is not caught here and aborts the run.
async fn add_phone(
    store: &DirectoryStore,
    number: &str,
    client_id: i32,
) -> Result<Option<PhoneEntity>> {
    match store.add_phone(number, client_id).await {
        Ok(phone) => {
            println!("Phone number added to the directory");
            Ok(Some(phone))
        }
        Err(StoreError::ConstraintViolation(detail)) => {
            println!("Invalid input data: {detail}");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn delete_client(store: &DirectoryStore, client_id: i32) -> Result<()> {
    match store.delete_client(client_id).await? {
        DeleteOutcome::Deleted(_) => println!("Client deleted from the directory"),
        DeleteOutcome::HasPhones(_) => {
            println!("Client with id={client_id} still has phone numbers attached");
        }
    }
    Ok(())
}

/// The scripted fixtures satisfy every constraint, so a rejection here is a
/// bug in the script itself.
fn require<T>(inserted: Option<T>) -> Result<T> {
    inserted.context("scripted insert was rejected")
}

fn print_entries(entries: Vec<DirectoryEntryEntity>) {
    for entry in entries {
        println!("{}", DirectoryEntry::from(entry));
    }
}

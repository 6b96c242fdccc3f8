mod support;

use chrono::{Duration, TimeZone, Utc};
use feira::error::Error;
use feira::port::outbound::store::ListStore;
use feira::service::lifecycle::Lifecycle;
use support::{seed_list, TempDb};

#[tokio::test]
async fn create_trims_name_and_starts_active() {
    let db = TempDb::create("lifecycle-create");
    let lifecycle = Lifecycle::new(db.store());

    let list = lifecycle.create("  Compras da semana  ", Utc::now()).await.unwrap();

    assert_eq!(list.name, "Compras da semana");
    assert!(!list.finalized);
    assert!(list.finalized_at.is_none());
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let db = TempDb::create("lifecycle-blank");
    let lifecycle = Lifecycle::new(db.store());

    let err = lifecycle.create("   ", Utc::now()).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("Nome é obrigatório"));
}

#[tokio::test]
async fn rename_updates_name_and_404s_on_missing() {
    let db = TempDb::create("lifecycle-rename");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let id = seed_list(&store, "Antiga", None, &[]).await;

    let renamed = lifecycle.rename(id, "Nova").await.unwrap();
    assert_eq!(renamed.name, "Nova");

    let err = lifecycle
        .rename(feira::domain::ListId::new(9999), "Qualquer")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn delete_cascades_to_items() {
    let db = TempDb::create("lifecycle-delete");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let id = seed_list(&store, "Compras", None, &[("Arroz", 1, false), ("Feijão", 1, false)]).await;

    lifecycle.delete(id).await.unwrap();

    assert!(store.find_list(id).await.unwrap().is_none());
    // The schema cascade removed the item rows too.
    assert!(store.items_for_lists(&[id]).await.unwrap().is_empty());
}

#[tokio::test]
async fn finalize_is_idempotent_and_keeps_first_timestamp() {
    let db = TempDb::create("lifecycle-finalize");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let id = seed_list(&store, "Compras", None, &[]).await;

    let first = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
    let finalized = lifecycle.finalize(id, true, first).await.unwrap();
    assert!(finalized.finalized);
    assert_eq!(finalized.finalized_at, Some(first));

    let again = lifecycle
        .finalize(id, true, first + Duration::hours(5))
        .await
        .unwrap();
    assert_eq!(again.finalized_at, Some(first));
}

#[tokio::test]
async fn unfinalize_clears_timestamp_even_when_already_active() {
    let db = TempDb::create("lifecycle-unfinalize");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let id = seed_list(&store, "Compras", Some(Utc::now()), &[]).await;

    let reactivated = lifecycle.finalize(id, false, Utc::now()).await.unwrap();
    assert!(!reactivated.finalized);
    assert!(reactivated.finalized_at.is_none());

    // Unfinalizing an already active list is accepted and stays cleared.
    let again = lifecycle.finalize(id, false, Utc::now()).await.unwrap();
    assert!(!again.finalized);
    assert!(again.finalized_at.is_none());
}

#[tokio::test]
async fn all_returns_newest_first_with_counts() {
    let db = TempDb::create("lifecycle-all");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let older = Utc.with_ymd_and_hms(2026, 7, 1, 8, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2026, 7, 2, 8, 0, 0).unwrap();
    store.insert_list("Primeira", older).await.unwrap();
    let second = store.insert_list("Segunda", newer).await.unwrap();
    store
        .insert_item(
            second.id,
            &feira::domain::ItemDraft {
                name: "Pão".to_owned(),
                quantity: 1,
                purchased: false,
                position: 0,
            },
            newer,
        )
        .await
        .unwrap();

    let all = lifecycle.all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Segunda");
    assert_eq!(all[0].item_count, 1);
    assert_eq!(all[1].name, "Primeira");
    assert_eq!(all[1].item_count, 0);
}

#[tokio::test]
async fn totals_counts_purchased_items() {
    let db = TempDb::create("lifecycle-totals");
    let store = db.store();
    let lifecycle = Lifecycle::new(store.clone());

    let id = seed_list(
        &store,
        "Compras",
        None,
        &[("Arroz", 1, true), ("Feijão", 1, false), ("Café", 1, true)],
    )
    .await;

    let totals = lifecycle.totals(id).await.unwrap();

    assert_eq!(totals.items, 3);
    assert_eq!(totals.purchased, 2);
}

mod support;

use chrono::{Duration, Utc};
use feira::domain::history::HistoryRequest;
use feira::port::outbound::store::ListStore;
use feira::service::cloning::Cloning;
use feira::service::history::History;
use feira::service::lifecycle::Lifecycle;
use feira::service::ordering::Ordering;
use support::TempDb;

fn period(period: &str) -> HistoryRequest {
    HistoryRequest {
        period: Some(period.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_list_add_item_and_read_back() {
    let db = TempDb::create("e2e-create");
    let store = db.store();
    let now = Utc::now();

    let list = Lifecycle::new(store.clone()).create("Compras", now).await.unwrap();
    Ordering::new(store.clone())
        .append(list.id, "Arroz", Some(2), now)
        .await
        .unwrap();

    let items = Ordering::new(store).items(list.id).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Arroz");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].position, 0);
}

#[tokio::test]
async fn finalized_list_shows_up_in_recent_history_only() {
    let db = TempDb::create("e2e-history");
    let store = db.store();
    let now = Utc::now();

    let list = Lifecycle::new(store.clone()).create("Compras", now).await.unwrap();
    Lifecycle::new(store.clone())
        .finalize(list.id, true, now)
        .await
        .unwrap();

    let week = History::new(store.clone()).page(&period("7d"), now).await.unwrap();
    assert!(week.data.iter().any(|entry| entry.id == list.id));

    // A list finalized 40 days ago falls out of the 30-day window.
    let old = Lifecycle::new(store.clone()).create("Antiga", now).await.unwrap();
    store
        .set_finalized(old.id, Some(now - Duration::days(40)))
        .await
        .unwrap();

    let month = History::new(store).page(&period("30d"), now).await.unwrap();
    assert!(!month.data.iter().any(|entry| entry.id == old.id));
}

#[tokio::test]
async fn finalize_then_duplicate_keeps_purchase_state() {
    let db = TempDb::create("e2e-duplicate");
    let store = db.store();
    let now = Utc::now();

    let lifecycle = Lifecycle::new(store.clone());
    let ordering = Ordering::new(store.clone());

    let list = lifecycle.create("Churrasco", now).await.unwrap();
    let carvao = ordering.append(list.id, "Carvão", None, now).await.unwrap();
    ordering.append(list.id, "Carne", None, now).await.unwrap();
    ordering
        .update(
            list.id,
            carvao.id,
            feira::domain::ItemPatch {
                purchased: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    lifecycle.finalize(list.id, true, now).await.unwrap();

    let copy = Cloning::new(store.clone())
        .duplicate(list.id, None, now)
        .await
        .unwrap();

    assert!(!copy.finalized);
    let items = store.list_items(copy.id).await.unwrap();
    assert_eq!(
        items.iter().map(|item| item.purchased).collect::<Vec<_>>(),
        vec![true, false]
    );
}

#[tokio::test]
async fn restored_list_can_be_worked_and_refinalized() {
    let db = TempDb::create("e2e-refinalize");
    let store = db.store();
    let now = Utc::now();

    let lifecycle = Lifecycle::new(store.clone());
    let ordering = Ordering::new(store.clone());

    let list = lifecycle.create("Mensal", now).await.unwrap();
    ordering.append(list.id, "Sabão", None, now).await.unwrap();
    lifecycle.finalize(list.id, true, now).await.unwrap();

    let restored = Cloning::new(store.clone())
        .restore(list.id, None, now)
        .await
        .unwrap();

    // The copy is a live list again: items can be appended and it can be
    // finalized on its own.
    ordering
        .append(restored.id, "Amaciante", None, now)
        .await
        .unwrap();
    let summary = lifecycle.finalize(restored.id, true, now).await.unwrap();

    assert!(summary.finalized);
    assert_eq!(summary.item_count, 2);

    let page = History::new(store).page(&period("7d"), now).await.unwrap();
    assert_eq!(page.meta.total, 2);
}

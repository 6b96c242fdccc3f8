mod support;

use chrono::{Duration, Utc};
use feira::domain::history::HistoryRequest;
use feira::error::Error;
use feira::service::history::History;
use support::{seed_list, TempDb};

fn request(period: &str) -> HistoryRequest {
    HistoryRequest {
        period: Some(period.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn search_and_period_filters_compose() {
    let db = TempDb::create("history-search");
    let store = db.store();
    let now = Utc::now();

    seed_list(
        &store,
        "Feira semanal",
        Some(now - Duration::days(2)),
        &[("Banana", 1, false)],
    )
    .await;
    seed_list(
        &store,
        "Viagem",
        Some(now - Duration::days(40)),
        &[("Protetor", 1, false)],
    )
    .await;

    let mut req = request("7d");
    req.search = Some("Feira".to_owned());
    let page = History::new(store).page(&req, now).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Feira semanal");
    assert_eq!(page.data[0].preview_itens[0].name, "Banana");
}

#[tokio::test]
async fn thirty_day_window_excludes_older_lists() {
    let db = TempDb::create("history-window");
    let store = db.store();
    let now = Utc::now();

    seed_list(&store, "Antiga", Some(now - Duration::days(40)), &[]).await;
    seed_list(&store, "Recente", Some(now - Duration::days(3)), &[]).await;

    let page = History::new(store.clone()).page(&request("30d"), now).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Recente");

    // `mes` is an alias for the same window.
    let page = History::new(store).page(&request("mes"), now).await.unwrap();
    assert_eq!(page.data.len(), 1);
}

#[tokio::test]
async fn unfinalized_lists_never_show_up() {
    let db = TempDb::create("history-active");
    let store = db.store();
    let now = Utc::now();

    seed_list(&store, "Ativa", None, &[("Item", 1, false)]).await;
    seed_list(&store, "Arquivada", Some(now), &[]).await;

    let page = History::new(store).page(&request("7d"), now).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Arquivada");
}

#[tokio::test]
async fn previews_are_capped_at_three_in_display_order() {
    let db = TempDb::create("history-preview");
    let store = db.store();
    let now = Utc::now();

    seed_list(
        &store,
        "Mega lista",
        Some(now),
        &[
            ("Item 0", 1, false),
            ("Item 1", 1, false),
            ("Item 2", 1, false),
            ("Item 3", 1, false),
            ("Item 4", 1, false),
        ],
    )
    .await;

    let page = History::new(store).page(&request("7d"), now).await.unwrap();

    let entry = &page.data[0];
    assert_eq!(entry.itens_count, 5);
    assert_eq!(entry.preview_itens.len(), 3);
    assert_eq!(entry.preview_itens[0].name, "Item 0");
    assert_eq!(entry.preview_itens[2].name, "Item 2");
}

#[tokio::test]
async fn pagination_reports_total_and_has_more() {
    let db = TempDb::create("history-pages");
    let store = db.store();
    let now = Utc::now();

    for index in 0..5 {
        seed_list(
            &store,
            &format!("Lista {index}"),
            Some(now - Duration::minutes(index)),
            &[],
        )
        .await;
    }

    let history = History::new(store);
    let mut req = request("7d");
    req.limit = Some(2);

    req.page = Some(1);
    let first = history.page(&req, now).await.unwrap();
    assert_eq!(first.meta.total, 5);
    assert_eq!(first.data.len(), 2);
    assert!(first.meta.has_more);
    // Most recently finalized first.
    assert_eq!(first.data[0].name, "Lista 0");

    req.page = Some(3);
    let last = history.page(&req, now).await.unwrap();
    assert_eq!(last.meta.total, 5);
    assert_eq!(last.data.len(), 1);
    assert!(!last.meta.has_more);

    req.page = Some(4);
    let empty = history.page(&req, now).await.unwrap();
    assert!(empty.data.is_empty());
    assert!(!empty.meta.has_more);
}

#[tokio::test]
async fn custom_period_uses_both_bounds() {
    let db = TempDb::create("history-custom");
    let store = db.store();
    let now = Utc::now();

    seed_list(&store, "Dentro", Some(now - Duration::days(10)), &[]).await;
    seed_list(&store, "Fora", Some(now - Duration::days(2)), &[]).await;

    let req = HistoryRequest {
        period: Some("custom".to_owned()),
        period_start: Some((now - Duration::days(15)).to_rfc3339()),
        period_end: Some((now - Duration::days(5)).to_rfc3339()),
        ..Default::default()
    };
    let page = History::new(store).page(&req, now).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Dentro");
}

#[tokio::test]
async fn invalid_parameters_are_rejected() {
    let db = TempDb::create("history-invalid");
    let store = db.store();
    let now = Utc::now();
    let history = History::new(store);

    let err = history.page(&request("90d"), now).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let mut req = request("7d");
    req.page = Some(0);
    let err = history.page(&req, now).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let mut req = request("7d");
    req.limit = Some(51);
    let err = history.page(&req, now).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let req = HistoryRequest {
        period: Some("custom".to_owned()),
        period_start: Some("2026-07-01".to_owned()),
        ..Default::default()
    };
    let err = history.page(&req, now).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn search_term_is_trimmed_and_blank_search_ignored() {
    let db = TempDb::create("history-trim");
    let store = db.store();
    let now = Utc::now();

    seed_list(&store, "Feira semanal", Some(now), &[]).await;

    let history = History::new(store);

    let mut req = request("7d");
    req.search = Some("  Feira  ".to_owned());
    let page = history.page(&req, now).await.unwrap();
    assert_eq!(page.data.len(), 1);

    let mut req = request("7d");
    req.search = Some("   ".to_owned());
    let page = history.page(&req, now).await.unwrap();
    assert_eq!(page.data.len(), 1);
}

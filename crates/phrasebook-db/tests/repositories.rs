//! Repository tests against a live PostgreSQL database.
//!
//! Skipped unless `PHRASEBOOK_TEST_DB_NAME` names a scratch database; the
//! remaining `DB_*` variables supply the connection. Every test wipes the
//! tables, so never point this at real data.

use phrasebook_core::{
    NewLanguage, NewPhrase, NewTranslation, PageRequest, Phrase, PhraseFilter, PhraseQuery,
    PhraseStatus, SortColumn, SortOrder, SYSTEM_USER,
};
use phrasebook_db::{Database, DbConfig, DbError};
use serial_test::serial;
use uuid::Uuid;

const TEST_DB_ENV: &str = "PHRASEBOOK_TEST_DB_NAME";

async fn test_db() -> Option<Database> {
    let Ok(name) = std::env::var(TEST_DB_ENV) else {
        eprintln!("skipping: {TEST_DB_ENV} not set");
        return None;
    };

    let config = DbConfig::from_env()
        .expect("DB_* variables should parse")
        .database(name)
        .max_connections(2);
    let db = Database::new(config).await.expect("test database should connect");

    db.translations().delete_all().await.unwrap();
    db.phrases().delete_all().await.unwrap();
    db.languages().delete_all().await.unwrap();

    Some(db)
}

async fn add_language(db: &Database, code: &str, name: &str) {
    db.languages()
        .insert(&NewLanguage {
            language_code: code.to_string(),
            language_name: name.to_string(),
            created_by: SYSTEM_USER.to_string(),
        })
        .await
        .unwrap();
}

async fn add_phrase(db: &Database, text: &str, status: PhraseStatus) -> Phrase {
    db.phrases()
        .insert(&NewPhrase {
            phrase: text.to_string(),
            status,
            created_by: SYSTEM_USER.to_string(),
        })
        .await
        .unwrap()
}

async fn add_translation(db: &Database, phrase: Uuid, code: &str, text: &str) -> Uuid {
    db.translations()
        .insert(&NewTranslation {
            phrase_uuid: phrase,
            language_code: code.to_string(),
            translation: text.to_string(),
            created_by: SYSTEM_USER.to_string(),
        })
        .await
        .unwrap()
        .uuid
}

#[tokio::test]
#[serial]
async fn search_combines_text_and_status() {
    let Some(db) = test_db().await else { return };

    add_phrase(&db, "How are you?", PhraseStatus::Active).await;
    add_phrase(&db, "how are things", PhraseStatus::Pending).await;
    add_phrase(&db, "Good morning!", PhraseStatus::Active).await;

    let query = PhraseQuery {
        filter: PhraseFilter::search("HOW ARE").with_status(Some("active")),
        ..PhraseQuery::default()
    };
    let (total, rows) = db.phrases().fetch_page(&query).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].phrase, "How are you?");
    assert_eq!(rows[0].status, PhraseStatus::Active);
}

#[tokio::test]
#[serial]
async fn empty_search_matches_plain_listing() {
    let Some(db) = test_db().await else { return };

    for text in ["alpha", "beta", "gamma"] {
        add_phrase(&db, text, PhraseStatus::Active).await;
    }

    let plain = db.phrases().fetch_page(&PhraseQuery::default()).await.unwrap();
    let searched = db
        .phrases()
        .fetch_page(&PhraseQuery {
            filter: PhraseFilter::search(""),
            ..PhraseQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(plain.0, 3);
    assert_eq!(plain, searched);
}

#[tokio::test]
#[serial]
async fn wildcards_in_search_are_literal() {
    let Some(db) = test_db().await else { return };

    add_phrase(&db, "100% sure", PhraseStatus::Active).await;
    add_phrase(&db, "1000 times", PhraseStatus::Active).await;

    let query = PhraseQuery {
        filter: PhraseFilter::search("0%"),
        ..PhraseQuery::default()
    };
    let (total, rows) = db.phrases().fetch_page(&query).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows[0].phrase, "100% sure");
}

#[tokio::test]
#[serial]
async fn unknown_status_matches_nothing() {
    let Some(db) = test_db().await else { return };

    add_phrase(&db, "How are you?", PhraseStatus::Active).await;

    let query = PhraseQuery {
        filter: PhraseFilter::all().with_status(Some("ACTIVE")),
        ..PhraseQuery::default()
    };
    let (total, rows) = db.phrases().fetch_page(&query).await.unwrap();

    assert_eq!(total, 0);
    assert!(rows.is_empty());
}

#[tokio::test]
#[serial]
async fn pagination_reports_full_total() {
    let Some(db) = test_db().await else { return };

    for i in 0..5 {
        add_phrase(&db, &format!("phrase {i}"), PhraseStatus::Active).await;
    }

    let query = PhraseQuery::new(
        PhraseFilter::all(),
        SortColumn::Phrase,
        SortOrder::Desc,
        PageRequest::new(2, 2),
    );
    let (total, rows) = db.phrases().fetch_page(&query).await.unwrap();

    assert_eq!(total, 5);
    let texts: Vec<_> = rows.iter().map(|p| p.phrase.as_str()).collect();
    assert_eq!(texts, vec!["phrase 2", "phrase 1"]);

    let beyond = PhraseQuery::new(
        PhraseFilter::all(),
        SortColumn::default(),
        SortOrder::default(),
        PageRequest::new(10, 2),
    );
    let (total, rows) = db.phrases().fetch_page(&beyond).await.unwrap();
    assert_eq!(total, 5);
    assert!(rows.is_empty());
}

#[tokio::test]
#[serial]
async fn soft_deleted_phrase_is_hidden() {
    let Some(db) = test_db().await else { return };

    let phrase = add_phrase(&db, "Hi, I’m a phrase", PhraseStatus::Active).await;
    assert!(db.phrases().get_by_id(phrase.uuid).await.unwrap().is_some());

    assert!(db.phrases().soft_delete(phrase.uuid).await.unwrap());
    assert!(!db.phrases().soft_delete(phrase.uuid).await.unwrap());

    assert!(db.phrases().get_by_id(phrase.uuid).await.unwrap().is_none());
    let (total, _) = db.phrases().fetch_page(&PhraseQuery::default()).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
#[serial]
async fn translation_lookup_ignores_soft_delete() {
    let Some(db) = test_db().await else { return };

    add_language(&db, "fr", "French").await;
    add_language(&db, "es", "Spanish").await;
    let phrase = add_phrase(&db, "Hi, I’m a phrase", PhraseStatus::Active).await;
    let fr = add_translation(&db, phrase.uuid, "fr", "Salut, je suis une phrase").await;

    let translations = db.translations();
    assert_eq!(
        translations.find_text(phrase.uuid, "fr").await.unwrap().as_deref(),
        Some("Salut, je suis une phrase")
    );
    assert_eq!(translations.find_text(phrase.uuid, "es").await.unwrap(), None);
    assert_eq!(translations.find_text(Uuid::new_v4(), "fr").await.unwrap(), None);

    assert!(translations.soft_delete(fr).await.unwrap());
    assert_eq!(
        translations.find_text(phrase.uuid, "fr").await.unwrap().as_deref(),
        Some("Salut, je suis une phrase")
    );
}

#[tokio::test]
#[serial]
async fn languages_listed_by_code() {
    let Some(db) = test_db().await else { return };

    add_language(&db, "fr", "French").await;
    add_language(&db, "de", "German").await;
    add_language(&db, "en", "English").await;

    let codes: Vec<_> = db
        .languages()
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.language_code)
        .collect();
    assert_eq!(codes, vec!["de", "en", "fr"]);
}

#[tokio::test]
#[serial]
async fn soft_deleted_language_is_not_listed() {
    let Some(db) = test_db().await else { return };

    add_language(&db, "en", "English").await;
    add_language(&db, "fr", "French").await;

    sqlx::query("UPDATE languages SET is_deleted = TRUE WHERE language_code = $1")
        .bind("fr")
        .execute(db.pool())
        .await
        .unwrap();

    let codes: Vec<_> = db
        .languages()
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.language_code)
        .collect();
    assert_eq!(codes, vec!["en"]);
}

#[tokio::test]
#[serial]
async fn repeated_queries_return_identical_pages() {
    let Some(db) = test_db().await else { return };

    for text in ["How are you?", "how are things", "Good morning!"] {
        add_phrase(&db, text, PhraseStatus::Active).await;
    }

    let query = PhraseQuery::new(
        PhraseFilter::search("how"),
        SortColumn::UpdatedAt,
        SortOrder::Desc,
        PageRequest::new(1, 1),
    );

    let first = db.phrases().fetch_page(&query).await.unwrap();
    let second = db.phrases().fetch_page(&query).await.unwrap();

    assert_eq!(first.0, 2);
    assert_eq!(first, second);
}

#[tokio::test]
#[serial]
async fn constraint_violations_are_categorized() {
    let Some(db) = test_db().await else { return };

    add_language(&db, "en", "English").await;
    let duplicate = db
        .languages()
        .insert(&NewLanguage {
            language_code: "en".to_string(),
            language_name: "English again".to_string(),
            created_by: SYSTEM_USER.to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(DbError::UniqueViolation { .. })));

    let orphan = db
        .translations()
        .insert(&NewTranslation {
            phrase_uuid: Uuid::new_v4(),
            language_code: "en".to_string(),
            translation: "orphan".to_string(),
            created_by: SYSTEM_USER.to_string(),
        })
        .await;
    assert!(matches!(orphan, Err(DbError::ForeignKeyViolation { .. })));
}

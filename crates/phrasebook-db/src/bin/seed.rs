//! # Seed Data Loader
//!
//! Loads the reference dataset: five languages, five phrases and seven
//! translations.
//!
//! ## Usage
//! ```bash
//! # Seed an empty database (connection from DB_* variables)
//! cargo run -p phrasebook-db --bin seed
//!
//! # Wipe existing rows first
//! cargo run -p phrasebook-db --bin seed -- --reset
//! ```

use std::collections::HashMap;
use std::env;

use phrasebook_core::{
    NewLanguage, NewPhrase, NewTranslation, PhraseFilter, PhraseStatus, SYSTEM_USER,
};
use phrasebook_db::{Database, DbConfig};

/// (code, name)
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
];

const PHRASES: &[(&str, PhraseStatus)] = &[
    ("Hi, I’m a phrase", PhraseStatus::Active),
    ("How are you?", PhraseStatus::Pending),
    ("Good morning!", PhraseStatus::Deleted),
    ("What is your name?", PhraseStatus::Active),
    ("Have a nice day!", PhraseStatus::Spam),
];

/// (index into PHRASES, language code, text)
const TRANSLATIONS: &[(usize, &str, &str)] = &[
    (0, "fr", "Salut, je suis une phrase"),
    (0, "es", "Hola, soy una frase"),
    (1, "fr", "Comment ça va?"),
    (1, "es", "¿Cómo estás?"),
    (2, "de", "Guten Morgen!"),
    (3, "de", "Wie heißt du?"),
    (4, "it", "Buona giornata!"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut reset = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--reset" | "-r" => reset = true,
            "--help" | "-h" => {
                println!("Phrasebook Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -r, --reset    Delete existing rows before seeding");
                println!("  -h, --help     Show this help message");
                println!();
                println!("Connection: DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }

    let config = DbConfig::from_env()?;
    println!("Phrasebook Seed Data Loader");
    println!("===========================");
    println!("Database: {}@{}:{}/{}", config.user, config.host, config.port, config.database);
    println!();

    let db = Database::new(config).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if reset {
        let translations = db.translations().delete_all().await?;
        let phrases = db.phrases().delete_all().await?;
        let languages = db.languages().delete_all().await?;
        println!(
            "✓ Removed {} translations, {} phrases, {} languages",
            translations, phrases, languages
        );
    } else {
        let existing = db.phrases().count(&PhraseFilter::all()).await?;
        if existing > 0 {
            println!("⚠ Database already has {} phrases", existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Run with --reset to reload the dataset.");
            return Ok(());
        }
    }

    let mut codes = HashMap::new();
    for (code, name) in LANGUAGES {
        let language = db
            .languages()
            .insert(&NewLanguage {
                language_code: code.to_string(),
                language_name: name.to_string(),
                created_by: SYSTEM_USER.to_string(),
            })
            .await?;
        codes.insert(*code, language.language_code);
    }
    println!("✓ Inserted {} languages", codes.len());

    let mut phrase_ids = Vec::with_capacity(PHRASES.len());
    for (text, status) in PHRASES {
        let phrase = db
            .phrases()
            .insert(&NewPhrase {
                phrase: text.to_string(),
                status: *status,
                created_by: SYSTEM_USER.to_string(),
            })
            .await?;
        phrase_ids.push(phrase.uuid);
    }
    println!("✓ Inserted {} phrases", phrase_ids.len());

    for (index, code, text) in TRANSLATIONS {
        let language_code = codes
            .get(code)
            .cloned()
            .ok_or_else(|| format!("unknown language code in dataset: {}", code))?;

        db.translations()
            .insert(&NewTranslation {
                phrase_uuid: phrase_ids[*index],
                language_code,
                translation: text.to_string(),
                created_by: SYSTEM_USER.to_string(),
            })
            .await?;
    }
    println!("✓ Inserted {} translations", TRANSLATIONS.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

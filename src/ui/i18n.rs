//! User-facing strings in English and Hungarian.
//!
//! The active language is the persisted preference when set, otherwise the
//! configured default.

use crate::config::Config;
use crate::db::pool::StoreDb;
use crate::db::store;

pub const SUPPORTED: [&str; 2] = ["en", "hu"];

pub struct Translations {
    pub title: &'static str,
    pub events: &'static str,
    pub timeline: &'static str,
    pub satisfaction_level: &'static str,
    pub no_events: &'static str,
    pub event_added: &'static str,
    pub event_updated: &'static str,
    pub event_deleted: &'static str,
    pub delete_confirm: &'static str,
    pub cancelled: &'static str,
    pub import_success: &'static str,
    pub import_error: &'static str,
    pub exported_to: &'static str,
    pub file_exists: &'static str,
    pub current_language: &'static str,
    pub language_set: &'static str,
}

pub const EN: Translations = Translations {
    title: "Relationship Timeline",
    events: "Events",
    timeline: "Timeline",
    satisfaction_level: "Satisfaction Level",
    no_events: "No events yet. Add your first event!",
    event_added: "Event added.",
    event_updated: "Event updated.",
    event_deleted: "Event deleted.",
    delete_confirm: "Are you sure you want to delete this event?",
    cancelled: "Operation cancelled.",
    import_success: "Data imported successfully!",
    import_error: "Error importing data. Please check the file format.",
    exported_to: "Data exported to",
    file_exists: "File already exists (use --force to overwrite)",
    current_language: "Language",
    language_set: "Language set to",
};

pub const HU: Translations = Translations {
    title: "Kapcsolat Idővonal",
    events: "Események",
    timeline: "Idővonal",
    satisfaction_level: "Elégedettségi Szint",
    no_events: "Még nincsenek események. Add hozzá az elsőt!",
    event_added: "Esemény hozzáadva.",
    event_updated: "Esemény frissítve.",
    event_deleted: "Esemény törölve.",
    delete_confirm: "Biztosan törölni szeretnéd ezt az eseményt?",
    cancelled: "Művelet megszakítva.",
    import_success: "Adatok sikeresen importálva!",
    import_error: "Hiba az importálás során. Kérlek ellenőrizd a fájl formátumát.",
    exported_to: "Adatok exportálva ide",
    file_exists: "A fájl már létezik (használd a --force kapcsolót a felülíráshoz)",
    current_language: "Nyelv",
    language_set: "Nyelv beállítva",
};

pub fn is_supported(code: &str) -> bool {
    SUPPORTED.contains(&code)
}

pub fn for_code(code: &str) -> &'static Translations {
    match code {
        "hu" => &HU,
        _ => &EN,
    }
}

/// Active language: persisted preference first, configured default second.
pub fn resolve(db: &StoreDb, cfg: &Config) -> &'static Translations {
    match store::load_language(db) {
        Ok(Some(code)) => for_code(&code),
        _ => for_code(&cfg.default_language),
    }
}

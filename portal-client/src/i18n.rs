//! Localization
//!
//! UI strings live in `locales/*.ftl` (Fluent syntax) and are embedded at
//! build time. Call [`init`] once at startup; lookups before that use the
//! default locale.

use std::sync::OnceLock;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use unic_langid::LanguageIdentifier;

/// Locale used when neither the config nor the system names a supported one
pub const DEFAULT_LOCALE: &str = "ru";

/// Locales with an embedded resource file
pub const SUPPORTED_LOCALES: &[&str] = &["ru", "en"];

const RU_FTL: &str = include_str!("../locales/ru.ftl");
const EN_FTL: &str = include_str!("../locales/en.ftl");

static BUNDLE: OnceLock<FluentBundle<FluentResource>> = OnceLock::new();

/// Select the UI locale
///
/// `preferred` comes from the config file; when absent the system locale is
/// used. Later calls are ignored.
pub fn init(preferred: Option<&str>) {
    let system = sys_locale::get_locale();
    let locale = resolve_locale(preferred.or(system.as_deref()));
    if BUNDLE.set(build_bundle(locale)).is_err() {
        tracing::debug!(locale, "Locale already initialized");
    }
}

/// Map a requested locale tag (e.g. "en-US", "ru_RU") to a supported locale
pub fn resolve_locale(requested: Option<&str>) -> &'static str {
    let language = requested
        .and_then(|tag| tag.split(['-', '_', '.']).next())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|locale| *locale == language)
        .unwrap_or(DEFAULT_LOCALE)
}

fn source_for(locale: &str) -> &'static str {
    match locale {
        "en" => EN_FTL,
        _ => RU_FTL,
    }
}

fn build_bundle(locale: &str) -> FluentBundle<FluentResource> {
    let langid: LanguageIdentifier = locale.parse().unwrap_or_default();
    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    bundle.set_use_isolating(false);

    let resource = match FluentResource::try_new(source_for(locale).to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(locale, count = errors.len(), "Locale file has syntax errors");
            resource
        }
    };
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(locale, count = errors.len(), "Locale file has duplicate messages");
    }
    bundle
}

fn bundle() -> &'static FluentBundle<FluentResource> {
    BUNDLE.get_or_init(|| build_bundle(DEFAULT_LOCALE))
}

fn format(key: &str, args: Option<&FluentArgs>) -> String {
    let bundle = bundle();
    let Some(pattern) = bundle.get_message(key).and_then(|message| message.value()) else {
        tracing::warn!(key, "Missing translation");
        return key.to_string();
    };

    let mut errors = Vec::new();
    bundle.format_pattern(pattern, args, &mut errors).into_owned()
}

/// Translate a message without arguments
///
/// Unknown keys are returned unchanged.
pub fn t(key: &str) -> String {
    format(key, None)
}

/// Translate a message with named arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        fluent_args.set(*name, *value);
    }
    format(key, Some(&fluent_args))
}

use crate::domain::entities::{BookmarkEntry, Link, Settings, ThemeColors};
use serde_json::{Map, Value};

/// Overlays a stored settings object onto `defaults`, field by field.
///
/// Stored fields win when they fit the schema. Absent or `null` fields keep
/// their default, as do fields whose stored value no longer deserializes (an
/// enum variant that was renamed, a broken element order, ...). Keys the
/// current schema does not know are ignored. Bookmarks are checked one entry
/// at a time so a single bad entry does not take the rest of the list with it.
pub fn merge(defaults: &Settings, stored: &Value) -> Settings {
    let Value::Object(stored) = stored else {
        tracing::warn!("Stored settings are not an object, using defaults");
        return defaults.clone();
    };
    let mut stored = stored.clone();
    if let Some(Value::Array(entries)) = stored.get_mut(BOOKMARKS_KEY) {
        salvage_bookmarks(entries);
    }
    let stored = &stored;

    let base = match serde_json::to_value(defaults) {
        Ok(Value::Object(base)) => base,
        _ => return defaults.clone(),
    };

    let mut merged = base.clone();
    for (key, value) in stored {
        if value.is_null() {
            continue;
        }
        if !base.contains_key(key) {
            tracing::debug!("Ignoring unknown stored setting '{}'", key);
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }

    match serde_json::from_value(Value::Object(merged)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::debug!("Whole-record merge failed ({}), merging field by field", e);
            merge_field_by_field(base, stored)
        }
    }
}

const BOOKMARKS_KEY: &str = "bookmarks";

/// Drops stored bookmarks that no longer parse. A folder with bad items keeps
/// its good ones.
fn salvage_bookmarks(entries: &mut Vec<Value>) {
    entries.retain_mut(|entry| {
        if fits::<BookmarkEntry>(entry) {
            return true;
        }
        if let Some(Value::Array(items)) = entry.get_mut("items") {
            items.retain(fits::<Link>);
            if fits::<BookmarkEntry>(entry) {
                tracing::warn!("Dropped unreadable items from stored folder {}", entry["name"]);
                return true;
            }
        }
        tracing::warn!("Dropped unreadable stored bookmark {}", entry);
        false
    });
}

fn fits<T: serde::de::DeserializeOwned>(value: &Value) -> bool {
    T::deserialize(value).is_ok()
}

fn merge_field_by_field(base: Map<String, Value>, stored: &Map<String, Value>) -> Settings {
    let mut merged = base;
    for (key, value) in stored {
        if value.is_null() || !merged.contains_key(key) {
            continue;
        }
        let previous = merged.insert(key.clone(), value.clone());
        if serde_json::from_value::<Settings>(Value::Object(merged.clone())).is_err() {
            tracing::warn!("Stored setting '{}' does not fit the schema, keeping default", key);
            if let Some(previous) = previous {
                merged.insert(key.clone(), previous);
            }
        }
    }
    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}

/// Produces the settings the page starts with: the stored record merged over
/// the defaults, then any empty theme color repaired from the host theme.
pub fn resolve(stored: Option<&Value>, theme_defaults: &ThemeColors) -> Settings {
    let defaults = Settings::default();
    let mut settings = match stored {
        Some(stored) => merge(&defaults, stored),
        None => {
            tracing::info!("No stored settings, starting from defaults");
            defaults
        }
    };
    settings.colors.fill_empty_from(theme_defaults);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Alignment, BookmarkDisplay, ColorSwapMode, ElementId, IconSize,
    };
    use serde_json::json;

    fn theme() -> ThemeColors {
        ThemeColors::new("#6366f1", "#4f46e5", "#0f172a", "#f8fafc")
    }

    #[test]
    fn present_fields_win_and_absent_fields_keep_defaults() {
        let defaults = Settings::default();
        let stored = json!({
            "alignment": "left",
            "gridColumns": 7,
            "customCss": "body { margin: 0 }"
        });

        let merged = merge(&defaults, &stored);

        assert_eq!(merged.alignment, Alignment::Left);
        assert_eq!(merged.grid_columns.get(), 7);
        assert_eq!(merged.custom_css, "body { margin: 0 }");
        assert_eq!(merged.search_provider, defaults.search_provider);
        assert_eq!(merged.bookmark_display, defaults.bookmark_display);
        assert_eq!(merged.element_order, defaults.element_order);
        assert_eq!(merged.bookmarks, defaults.bookmarks);
    }

    #[test]
    fn every_single_field_subset_round_trips() {
        let defaults = Settings::default();
        let stored = json!({
            "searchProvider": "custom",
            "customSearchUrl": "https://x.com/?s={query}",
            "alignment": "right",
            "elementOrder": ["search", "bookmarks", "logo"],
            "gridColumns": 3,
            "bookmarkDisplay": "icon",
            "bookmarkWidth": 80,
            "bookmarkHeight": 90,
            "iconSize": "cover",
            "bookmarks": [{ "name": "A", "url": "https://a", "icon": "", "isFolder": false }],
            "accentColor": "#111111",
            "accentHoverColor": "#222222",
            "bgColor": "#333333",
            "textColor": "#444444",
            "customCss": "a {}",
            "colorSwapMode": "dark"
        });
        let full = merge(&defaults, &stored);
        let full_value = serde_json::to_value(&full).unwrap();
        let default_value = serde_json::to_value(&defaults).unwrap();

        for (key, value) in stored.as_object().unwrap() {
            let mut single = Map::new();
            single.insert(key.clone(), value.clone());
            let merged = serde_json::to_value(merge(&defaults, &Value::Object(single))).unwrap();
            for (field, merged_value) in merged.as_object().unwrap() {
                let expected = if field == key {
                    &full_value[field]
                } else {
                    &default_value[field]
                };
                assert_eq!(merged_value, expected, "field {field} after storing {key}");
            }
        }

        assert_eq!(full.alignment, Alignment::Right);
        assert_eq!(
            full.element_order.as_slice(),
            &[ElementId::Search, ElementId::Bookmarks, ElementId::Logo]
        );
        assert_eq!(full.bookmark_display, BookmarkDisplay::Icon);
        assert_eq!(full.icon_size, IconSize::Cover);
        assert_eq!(full.color_swap_mode, ColorSwapMode::Dark);
        assert_eq!(full.colors.bg_color, "#333333");
    }

    #[test]
    fn fields_that_no_longer_fit_fall_back_individually() {
        let stored = json!({
            "alignment": "justify",
            "elementOrder": ["logo", "logo", "search"],
            "iconSize": "",
            "gridColumns": 5,
            "legacyFlag": true
        });

        let merged = merge(&Settings::default(), &stored);

        assert_eq!(merged.alignment, Alignment::Center);
        assert_eq!(merged.element_order, Settings::default().element_order);
        assert_eq!(merged.icon_size, IconSize::Favicon);
        assert_eq!(merged.grid_columns.get(), 5);
    }

    #[test]
    fn one_bad_bookmark_does_not_drop_the_others() {
        let stored = json!({
            "bookmarks": [
                { "name": null, "url": "https://broken", "isFolder": false },
                { "name": "Docs", "url": "https://docs.rs", "icon": "", "isFolder": false },
                { "name": "Work", "isFolder": true, "items": [
                    { "name": "Mail", "url": "https://mail", "icon": "" },
                    { "name": 7, "url": "https://seven" }
                ] },
                "not a bookmark"
            ],
            "gridColumns": 6
        });

        let merged = merge(&Settings::default(), &stored);

        let names: Vec<&str> = merged.bookmarks.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Docs", "Work"]);
        assert_eq!(
            merged.bookmarks.folder(1).unwrap().items,
            vec![Link::new("Mail", "https://mail")]
        );
        assert_eq!(merged.grid_columns.get(), 6);
    }

    #[test]
    fn null_and_non_object_values_are_treated_as_absent() {
        let defaults = Settings::default();
        assert_eq!(merge(&defaults, &json!({ "alignment": null })), defaults);
        assert_eq!(merge(&defaults, &json!("garbage")), defaults);
    }

    #[test]
    fn first_load_takes_theme_colors() {
        let settings = resolve(None, &theme());
        assert_eq!(settings.colors, theme());
    }

    #[test]
    fn returning_users_keep_their_colors_and_blank_ones_are_repaired() {
        let stored = json!({ "accentColor": "#ff0000", "bgColor": "" });
        let settings = resolve(Some(&stored), &theme());

        assert_eq!(settings.colors.accent_color, "#ff0000");
        assert_eq!(settings.colors.bg_color, "#0f172a");
        assert_eq!(settings.colors.text_color, "#f8fafc");
    }
}

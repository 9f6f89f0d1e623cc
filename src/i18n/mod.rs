//! Internationalization (i18n) of the page copy
//!
//! German and English tables ship with the binary. A site can override
//! or add keys with `languages/<lang>.yml` (or `.json`) files.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_LANGUAGES: [(&str, &str); 2] = [
    ("de", include_str!("languages/de.yml")),
    ("en", include_str!("languages/en.yml")),
];

/// Internationalization handler
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create an empty handler
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Create a handler preloaded with the builtin tables
    pub fn with_builtin(language: &str) -> Result<Self> {
        let mut i18n = Self::new(language);
        for (lang, source) in BUILTIN_LANGUAGES {
            let data: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(source)?;
            i18n.translations.insert(lang.to_string(), data);
        }
        Ok(i18n)
    }

    /// Load language files from a directory, merging over what is loaded
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let lang = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();

            let content = fs::read_to_string(&path)?;

            // Invalid files are skipped, not fatal
            let data: Option<HashMap<String, serde_yaml::Value>> = if ext == Some("json") {
                match serde_json::from_str::<serde_json::Value>(&content) {
                    Ok(json) => Some(convert_json_to_yaml(json)),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            } else {
                match serde_yaml::from_str(&content) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            };

            if let Some(data) = data {
                let table = self.translations.entry(lang).or_default();
                for (key, value) in data {
                    merge_value(table.entry(key).or_insert(serde_yaml::Value::Null), value);
                }
                tracing::debug!("Loaded language file: {:?}", path);
            }
        }

        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translation by key; keys can be nested like "blog.title"
    pub fn get(&self, key: &str) -> String {
        self.lookup(key)
            .map(yaml_value_to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a pluralized translation with `%d` replaced by the count
    pub fn get_plural(&self, key: &str, count: usize) -> String {
        // A zero form is optional and only taken from the current language
        let zero_key = format!("{}.zero", key);
        let has_zero = self
            .translations
            .get(&self.language)
            .and_then(|data| get_nested_value(data, &zero_key))
            .is_some();

        let plural_key = if count == 0 && has_zero {
            zero_key
        } else if count == 1 {
            format!("{}.one", key)
        } else {
            format!("{}.other", key)
        };

        self.get(&plural_key).replace("%d", &count.to_string())
    }

    /// All translations for the current language as a flat map with
    /// dot-notation keys, English filling the gaps
    pub fn get_all_translations(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();

        if let Some(lang_data) = self.translations.get(&self.language) {
            flatten_translations(lang_data, "", &mut result);
        }

        if self.language != "en" {
            if let Some(en_data) = self.translations.get("en") {
                let mut en_result = HashMap::new();
                flatten_translations(en_data, "", &mut en_result);
                for (k, v) in en_result {
                    result.entry(k).or_insert(v);
                }
            }
        }

        result
    }

    /// All translations as a nested JSON object, for template contexts
    /// (`t.blog.title`)
    pub fn tree(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for (key, value) in self.get_all_translations() {
            let parts: Vec<&str> = key.split('.').collect();
            insert_path(&mut root, &parts, value);
        }
        serde_json::Value::Object(root)
    }

    fn lookup(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.translations
            .get(&self.language)
            .and_then(|data| get_nested_value(data, key))
            .or_else(|| {
                self.translations
                    .get("en")
                    .and_then(|data| get_nested_value(data, key))
            })
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Insert a dotted key into a nested JSON object
fn insert_path(map: &mut serde_json::Map<String, serde_json::Value>, parts: &[&str], value: String) {
    match parts {
        [] => {}
        [leaf] => {
            map.entry(leaf.to_string())
                .or_insert(serde_json::Value::String(value));
        }
        [head, rest @ ..] => {
            let child = map
                .entry(head.to_string())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if let serde_json::Value::Object(child) = child {
                insert_path(child, rest, value);
            }
        }
    }
}

/// Deep-merge `value` into `target`; mappings merge, anything else replaces
fn merge_value(target: &mut serde_yaml::Value, value: serde_yaml::Value) {
    match (target, value) {
        (serde_yaml::Value::Mapping(target), serde_yaml::Value::Mapping(value)) => {
            for (k, v) in value {
                match target.get_mut(&k) {
                    Some(existing) => merge_value(existing, v),
                    None => {
                        target.insert(k, v);
                    }
                }
            }
        }
        (target, value) => *target = value,
    }
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

/// Flatten translations into a HashMap with dot-notation keys
fn flatten_translations(
    data: &HashMap<String, serde_yaml::Value>,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    for (key, value) in data {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::String(s) => {
                result.insert(full_key, s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(full_key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(full_key, b.to_string());
            }
            serde_yaml::Value::Mapping(map) => {
                let nested: HashMap<String, serde_yaml::Value> = map
                    .iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.clone())))
                    .collect();
                flatten_translations(&nested, &full_key, result);
            }
            _ => {}
        }
    }
}

/// Convert JSON value to YAML HashMap
fn convert_json_to_yaml(json: serde_json::Value) -> HashMap<String, serde_yaml::Value> {
    let mut result = HashMap::new();

    if let serde_json::Value::Object(obj) = json {
        for (key, value) in obj {
            result.insert(key, json_value_to_yaml(value));
        }
    }

    result
}

fn json_value_to_yaml(json: serde_json::Value) -> serde_yaml::Value {
    match json {
        serde_json::Value::Null => serde_yaml::Value::Null,
        serde_json::Value::Bool(b) => serde_yaml::Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_yaml::Value::Number(serde_yaml::Number::from(f))
            } else {
                serde_yaml::Value::Null
            }
        }
        serde_json::Value::String(s) => serde_yaml::Value::String(s),
        serde_json::Value::Array(arr) => {
            serde_yaml::Value::Sequence(arr.into_iter().map(json_value_to_yaml).collect())
        }
        serde_json::Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k), json_value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

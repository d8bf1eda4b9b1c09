use std::collections::HashMap;

/// Parsed credentials document: top-level scalars plus one level of
/// named sections.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    pub scalars: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigDocument {
    /// Look up `section.key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Look up a top-level `key: value` line.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.scalars.get(key).map(String::as_str)
    }
}

/// Parse the indented `key: value` subset used by credentials files.
///
/// Unrecognized lines are skipped rather than rejected.
pub fn parse_document(content: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::default();
    let mut current: Option<String> = None;
    // Editors on Windows prepend a BOM.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = split_entry(trimmed) else {
            continue;
        };

        let indented = line.starts_with([' ', '\t']);
        if !indented {
            if value.is_empty() {
                doc.sections.entry(key.to_string()).or_default();
                current = Some(key.to_string());
            } else {
                doc.scalars.insert(key.to_string(), value.to_string());
                current = None;
            }
            continue;
        }

        if let Some(section) = &current {
            doc.sections
                .entry(section.clone())
                .or_default()
                .insert(key.to_string(), value.to_string());
        }
    }

    doc
}

/// Split `key: value # comment` into a trimmed key and comment-free value.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = rest.split('#').next().unwrap_or_default().trim();
    Some((key, value))
}

//! Naming conventions: property-name to column-name resolution.

use std::collections::HashMap;

use crate::schema::TableDef;

/// Convert a camel-case property name to an underscored column name.
///
/// The identifier is split at lowercase-to-uppercase and letter-to-digit
/// boundaries, every character is lowercased, and the runs are joined with
/// `_`. Identifiers with no such boundary pass through lowercased, so the
/// transform is idempotent on its own output.
pub fn camel_case_to_underscore(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;
    for c in ident.chars() {
        if let Some(p) = prev {
            let boundary =
                (p.is_lowercase() && c.is_uppercase()) || (p.is_alphabetic() && c.is_numeric());
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// Resolve the column name for a property. Precedence, first match wins:
///
/// 1. `overrides[property]` - explicit caller mapping.
/// 2. `aliases[property]` - result-set label aliasing.
/// 3. A column whose name equals `property` exactly (case-sensitive) is
///    returned unchanged, so an acronym-style property that already matches
///    a physical column is not mangled.
/// 4. `camel_case_to_underscore(property)`.
///
/// Total: every property name resolves to some column name.
pub fn resolve_column_name(
    property: &str,
    table: &TableDef,
    aliases: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
) -> String {
    if let Some(name) = overrides.get(property) {
        return name.clone();
    }
    if let Some(name) = aliases.get(property) {
        return name.clone();
    }
    if table.column(property).is_some() {
        return property.to_string();
    }
    camel_case_to_underscore(property)
}

/// Naming convention for write accessors. The marker is a policy constant of
/// the source object model, not a universal truth: assignment-style models
/// suffix the property name (`login=`), get/set-style models prefix it
/// (`setLogin`, `withLogin`).
#[derive(Debug, Clone, PartialEq)]
pub enum SetterStyle {
    /// Trailing marker, stripped verbatim.
    Suffix(String),
    /// Leading marker; the first character after it is decapitalized.
    Prefix(String),
}

impl Default for SetterStyle {
    fn default() -> Self {
        SetterStyle::Suffix("=".to_string())
    }
}

impl SetterStyle {
    /// Recover the property name underlying a write-accessor name. A name
    /// that does not carry the marker passes through unchanged.
    pub fn property_name(&self, setter: &str) -> String {
        match self {
            SetterStyle::Suffix(marker) => setter
                .strip_suffix(marker.as_str())
                .unwrap_or(setter)
                .to_string(),
            // Only strip the prefix when a capitalized property name follows,
            // so e.g. `settings` is not mistaken for a `set` accessor.
            SetterStyle::Prefix(marker) => match setter.strip_prefix(marker.as_str()) {
                Some(rest) if rest.starts_with(char::is_uppercase) => decapitalize(rest),
                _ => setter.to_string(),
            },
        }
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

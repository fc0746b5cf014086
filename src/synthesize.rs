//! Table schema synthesis from an object shape.
//!
//! Used when no schema exists yet: the table is inferred purely from the
//! shape's constructor parameters and accessors. Note the implicit policy:
//! the *first* surviving property (constructor parameters first, then
//! accessors, in declaration order) becomes the sole partition-key column.
//! There is no explicit signal from the caller, so reordering a shape's
//! properties changes which column keys the table.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::convention::{SetterStyle, camel_case_to_underscore};
use crate::schema::{ColumnDef, ColumnRole, TableDef};
use crate::shape::ObjectShape;
use crate::types::TypeMapper;

/// Compiler-generated member names carry this marker and never reflect user
/// intent.
const SYNTHETIC_MARKER: char = '$';

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("no mappable properties found in {type_name}")]
    NoMappableProperties { type_name: String },
}

/// Synthesize a table definition from a shape.
///
/// Candidate properties are collected in order (constructor parameters,
/// getters, setters normalized through `setter_style`), deduplicated
/// first-seen, and filtered: getter names listed in `root_getters` are
/// excluded (inherited base-type accessors are never user data), names
/// containing the synthetic marker are excluded, and a property survives only
/// if its read-accessor type has a storage mapping. An unmappable type drops
/// the property silently; only an empty surviving set is an error.
///
/// Column names come from `camel_case_to_underscore` alone - overrides and
/// aliases never apply to synthesis. The first survivor becomes the partition
/// key, the rest become regular columns; synthesis never produces clustering
/// columns.
pub fn synthesize(
    keyspace: &str,
    table_name: &str,
    shape: &ObjectShape,
    types: &dyn TypeMapper,
    setter_style: &SetterStyle,
    root_getters: &[String],
) -> Result<TableDef, SynthesisError> {
    let mut candidates: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |name: String, candidates: &mut Vec<String>| {
        if seen.insert(name.clone()) {
            candidates.push(name);
        }
    };

    for p in &shape.params {
        push(p.name.clone(), &mut candidates);
    }
    for g in &shape.getters {
        if !root_getters.iter().any(|r| r == &g.name) {
            push(g.name.clone(), &mut candidates);
        }
    }
    for s in &shape.setters {
        push(setter_style.property_name(&s.name), &mut candidates);
    }

    let getter_types: HashMap<&str, &str> = shape
        .getters
        .iter()
        .map(|g| (g.name.as_str(), g.typ.as_str()))
        .collect();

    let mut survivors: Vec<(String, String)> = Vec::new();
    for name in candidates {
        if name.contains(SYNTHETIC_MARKER) {
            continue;
        }
        // Types come from the read-accessor map; a property without a getter
        // has no declared type and is dropped like an unmappable one.
        let Some(typ) = getter_types.get(name.as_str()) else {
            continue;
        };
        if let Ok(storage) = types.map_type(typ) {
            survivors.push((name, storage));
        }
    }

    let mut survivors = survivors.into_iter();
    let Some((key_name, key_typ)) = survivors.next() else {
        return Err(SynthesisError::NoMappableProperties {
            type_name: shape.type_name.clone(),
        });
    };

    let mut table = TableDef::new(keyspace, table_name);
    table.partition_key.push(ColumnDef::new(
        &camel_case_to_underscore(&key_name),
        ColumnRole::PartitionKey,
        &key_typ,
    ));
    for (name, typ) in survivors {
        table.regular.push(ColumnDef::new(
            &camel_case_to_underscore(&name),
            ColumnRole::Regular,
            &typ,
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CqlTypeMapper;

    fn synth(shape: &ObjectShape) -> Result<TableDef, SynthesisError> {
        synthesize(
            "app",
            "users",
            shape,
            &CqlTypeMapper,
            &SetterStyle::default(),
            &[],
        )
    }

    #[test]
    fn test_first_property_becomes_partition_key() {
        let shape = ObjectShape::new("User")
            .param("login", "String")
            .param("emailAddress", "String")
            .getter("login", "String")
            .getter("emailAddress", "String");

        let table = synth(&shape).unwrap();
        assert_eq!(table.partition_key.len(), 1);
        assert_eq!(table.partition_key[0].name, "login");
        assert_eq!(table.partition_key[0].typ, "text");
        assert!(table.clustering.is_empty());
        assert_eq!(table.regular.len(), 1);
        assert_eq!(table.regular[0].name, "email_address");
        assert_eq!(table.regular[0].role, ColumnRole::Regular);
    }

    #[test]
    fn test_zero_mappable_properties_fails() {
        let shape = ObjectShape::new("Opaque").getter("handle", "Socket");
        match synth(&shape) {
            Err(SynthesisError::NoMappableProperties { type_name }) => {
                assert_eq!(type_name, "Opaque");
            }
            other => panic!("expected NoMappableProperties, got {other:?}"),
        }
    }

    #[test]
    fn test_unmappable_property_dropped_silently() {
        let shape = ObjectShape::new("User")
            .getter("login", "String")
            .getter("handle", "Socket");

        let table = synth(&shape).unwrap();
        assert_eq!(table.columns().count(), 1);
        assert_eq!(table.partition_key[0].name, "login");
    }

    #[test]
    fn test_root_type_getters_excluded() {
        let shape = ObjectShape::new("User")
            .getter("hashCode", "i32")
            .getter("login", "String");

        let table = synthesize(
            "app",
            "users",
            &shape,
            &CqlTypeMapper,
            &SetterStyle::default(),
            &["hashCode".to_string()],
        )
        .unwrap();

        assert!(table.column("hash_code").is_none());
        // The exclusion also decides the partition key.
        assert_eq!(table.partition_key[0].name, "login");
    }

    #[test]
    fn test_synthetic_names_excluded() {
        let shape = ObjectShape::new("User")
            .getter("login", "String")
            .getter("outer$inner", "String");

        let table = synth(&shape).unwrap();
        assert_eq!(table.columns().count(), 1);
    }

    #[test]
    fn test_setter_only_property_has_no_type() {
        // A setter with no matching getter has no declared type to map.
        let shape = ObjectShape::new("User")
            .getter("login", "String")
            .setter("nickname=", "String");

        let table = synth(&shape).unwrap();
        assert!(table.column("nickname").is_none());
    }

    #[test]
    fn test_dedup_preserves_constructor_order() {
        // The same property seen as param, getter, and setter yields one
        // column, positioned by its first (constructor) occurrence.
        let shape = ObjectShape::new("User")
            .param("emailAddress", "String")
            .param("login", "String")
            .getter("login", "String")
            .getter("emailAddress", "String")
            .setter("login=", "String");

        let table = synth(&shape).unwrap();
        let names: Vec<&str> = table.columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["email_address", "login"]);
    }
}

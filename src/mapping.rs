//! Accessor-to-column mapping against a known table schema.

use std::collections::HashMap;

use crate::convention::{SetterStyle, resolve_column_name};
use crate::schema::TableDef;
use crate::shape::ObjectShape;

/// Alignment of one record type's surface with a table's columns.
///
/// Constructor entries are positional; getter and setter entries are keyed by
/// the raw accessor name as declared on the shape. All three roles resolve
/// through the same property name, so a property's constructor slot, getter,
/// and setter always agree on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap {
    /// Column names aligned with constructor parameter positions.
    pub constructor_columns: Vec<String>,
    pub getter_columns: HashMap<String, String>,
    pub setter_columns: HashMap<String, String>,
    /// Whether null values are permitted for unmapped or optional fields.
    pub allow_nulls: bool,
}

/// Build the full accessor-to-column map for a shape. Total: resolution never
/// fails, so neither does this.
pub fn build(
    shape: &ObjectShape,
    table: &TableDef,
    aliases: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
    setter_style: &SetterStyle,
    allow_nulls: bool,
) -> ColumnMap {
    let resolve = |property: &str| resolve_column_name(property, table, aliases, overrides);

    let constructor_columns = shape.params.iter().map(|p| resolve(&p.name)).collect();

    let getter_columns = shape
        .getters
        .iter()
        .map(|g| (g.name.clone(), resolve(&g.name)))
        .collect();

    // Setters are keyed by their raw name but resolved through the property
    // name underneath the marker, keeping them in step with the getter.
    let setter_columns = shape
        .setters
        .iter()
        .map(|s| (s.name.clone(), resolve(&setter_style.property_name(&s.name))))
        .collect();

    ColumnMap {
        constructor_columns,
        getter_columns,
        setter_columns,
        allow_nulls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, ColumnRole};

    fn user_shape() -> ObjectShape {
        ObjectShape::new("User")
            .param("login", "String")
            .param("emailAddress", "String")
            .getter("login", "String")
            .getter("emailAddress", "String")
            .setter("login=", "String")
            .setter("emailAddress=", "String")
    }

    fn users_table() -> TableDef {
        let mut table = TableDef::new("app", "users");
        table
            .partition_key
            .push(ColumnDef::new("login", ColumnRole::PartitionKey, "text"));
        table
            .regular
            .push(ColumnDef::new("email_address", ColumnRole::Regular, "text"));
        table
    }

    #[test]
    fn test_roles_agree_on_resolved_column() {
        let map = build(
            &user_shape(),
            &users_table(),
            &HashMap::new(),
            &HashMap::new(),
            &SetterStyle::default(),
            false,
        );

        assert_eq!(map.constructor_columns, vec!["login", "email_address"]);
        assert_eq!(map.getter_columns["emailAddress"], "email_address");
        assert_eq!(map.setter_columns["emailAddress="], "email_address");
        // Constructor slot, getter, and setter of one property: one column.
        assert_eq!(map.constructor_columns[1], map.getter_columns["emailAddress"]);
        assert_eq!(map.constructor_columns[1], map.setter_columns["emailAddress="]);
    }

    #[test]
    fn test_override_applies_to_every_role() {
        let overrides = HashMap::from([("emailAddress".to_string(), "mail".to_string())]);
        let map = build(
            &user_shape(),
            &users_table(),
            &HashMap::new(),
            &overrides,
            &SetterStyle::default(),
            true,
        );
        assert_eq!(map.constructor_columns[1], "mail");
        assert_eq!(map.getter_columns["emailAddress"], "mail");
        assert_eq!(map.setter_columns["emailAddress="], "mail");
        assert!(map.allow_nulls);
    }
}

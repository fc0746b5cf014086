//! Entry point tying conventions, mapping, and synthesis together.

use std::collections::HashMap;

use crate::convention::{SetterStyle, resolve_column_name};
use crate::mapping::{self, ColumnMap};
use crate::schema::TableDef;
use crate::shape::ObjectShape;
use crate::synthesize::{SynthesisError, synthesize};
use crate::types::TypeMapper;

/// Maps one record shape to columns. Configuration is set up front; every
/// call after that is a pure function of its arguments, so one `Mapper` can
/// be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Mapper {
    shape: ObjectShape,
    setter_style: SetterStyle,
    overrides: HashMap<String, String>,
    root_getters: Vec<String>,
    allow_nulls: bool,
}

impl Mapper {
    pub fn new(shape: ObjectShape) -> Self {
        Self {
            shape,
            setter_style: SetterStyle::default(),
            overrides: HashMap::new(),
            root_getters: Vec::new(),
            allow_nulls: false,
        }
    }

    /// Write-accessor naming convention of the source object model.
    pub fn setter_style(mut self, style: SetterStyle) -> Self {
        self.setter_style = style;
        self
    }

    /// Explicit property-to-column override; wins over aliases and convention.
    pub fn override_column(mut self, property: &str, column: &str) -> Self {
        self.overrides
            .insert(property.to_string(), column.to_string());
        self
    }

    /// Getter names inherited from a base type unrelated to user data
    /// (`hashCode`-style universal members); excluded from synthesis.
    pub fn root_getters(mut self, getters: &[&str]) -> Self {
        self.root_getters = getters.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Permit null values for unmapped or optional fields.
    pub fn allow_nulls(mut self, allow: bool) -> Self {
        self.allow_nulls = allow;
        self
    }

    pub fn shape(&self) -> &ObjectShape {
        &self.shape
    }

    /// Build the accessor-to-column map against an existing table.
    pub fn column_map(&self, table: &TableDef, aliases: &HashMap<String, String>) -> ColumnMap {
        mapping::build(
            &self.shape,
            table,
            aliases,
            &self.overrides,
            &self.setter_style,
            self.allow_nulls,
        )
    }

    /// Synthesize a brand-new table when no schema exists. The first mappable
    /// property becomes the sole partition key (see `synthesize`); fails when
    /// the shape has zero mappable properties.
    pub fn new_table(
        &self,
        keyspace: &str,
        table_name: &str,
        types: &dyn TypeMapper,
    ) -> Result<TableDef, SynthesisError> {
        synthesize(
            keyspace,
            table_name,
            &self.shape,
            types,
            &self.setter_style,
            &self.root_getters,
        )
    }

    /// Resolve one constructor parameter to its column name.
    pub fn constructor_param_to_column_name(
        &self,
        param: &str,
        table: &TableDef,
        aliases: &HashMap<String, String>,
    ) -> String {
        resolve_column_name(param, table, aliases, &self.overrides)
    }

    /// Resolve one read accessor to its column name.
    pub fn getter_to_column_name(
        &self,
        getter: &str,
        table: &TableDef,
        aliases: &HashMap<String, String>,
    ) -> String {
        resolve_column_name(getter, table, aliases, &self.overrides)
    }

    /// Resolve one write accessor (raw name, marker included) to its column
    /// name.
    pub fn setter_to_column_name(
        &self,
        setter: &str,
        table: &TableDef,
        aliases: &HashMap<String, String>,
    ) -> String {
        resolve_column_name(
            &self.setter_style.property_name(setter),
            table,
            aliases,
            &self.overrides,
        )
    }
}

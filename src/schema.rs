/// Role a column plays in the physical layout of a table. Partition-key and
/// clustering columns are ordered; regular columns are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    PartitionKey,
    Clustering,
    Regular,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub role: ColumnRole,
    /// Storage type tag as produced by the type oracle (e.g. `text`, `bigint`).
    pub typ: String,
}

impl ColumnDef {
    pub fn new(name: &str, role: ColumnRole, typ: &str) -> Self {
        Self {
            name: name.to_string(),
            role,
            typ: typ.to_string(),
        }
    }
}

/// A table schema: keyspace, table name, and columns grouped by role.
/// Column names are unique across the whole table; a table usable for
/// mapping has at least one partition-key column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub keyspace: String,
    pub name: String,
    pub partition_key: Vec<ColumnDef>,
    pub clustering: Vec<ColumnDef>,
    pub regular: Vec<ColumnDef>,
}

impl TableDef {
    pub fn new(keyspace: &str, name: &str) -> Self {
        Self {
            keyspace: keyspace.to_string(),
            name: name.to_string(),
            partition_key: Vec::new(),
            clustering: Vec::new(),
            regular: Vec::new(),
        }
    }

    /// All columns in physical order: partition key, clustering, then regular.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.partition_key
            .iter()
            .chain(self.clustering.iter())
            .chain(self.regular.iter())
    }

    /// Case-sensitive lookup by column name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns().find(|c| c.name == name)
    }
}

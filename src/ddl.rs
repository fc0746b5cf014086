//! Render a table definition as a CREATE TABLE statement.

use unicode_width::UnicodeWidthStr;

use crate::schema::TableDef;

/// Serialize a TableDef to CQL-style DDL. Column names are padded to a
/// common display width so the types line up; widths are measured, not
/// counted, since descriptor identifiers may be non-ASCII.
pub fn render(table: &TableDef) -> String {
    let name_width = table
        .columns()
        .map(|c| c.name.as_str().width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("CREATE TABLE ");
    output.push_str(&table.keyspace);
    output.push('.');
    output.push_str(&table.name);
    output.push_str(" (\n");

    for col in table.columns() {
        output.push_str("    ");
        output.push_str(&col.name);
        for _ in 0..(name_width - col.name.as_str().width() + 1) {
            output.push(' ');
        }
        output.push_str(&col.typ);
        output.push_str(",\n");
    }

    output.push_str("    PRIMARY KEY ((");
    let partition: Vec<&str> = table.partition_key.iter().map(|c| c.name.as_str()).collect();
    output.push_str(&partition.join(", "));
    output.push(')');
    for col in &table.clustering {
        output.push_str(", ");
        output.push_str(&col.name);
    }
    output.push_str(")\n);\n");

    output
}

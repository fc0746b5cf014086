//! Property type to storage type mapping.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("no storage mapping for type: {0}")]
pub struct UnsupportedType(pub String);

/// Oracle deciding whether a property type is representable in storage.
/// Synthesis uses a failed mapping to drop the property, never to abort,
/// so implementations should fail cheaply.
pub trait TypeMapper {
    fn map_type(&self, typ: &str) -> Result<String, UnsupportedType>;
}

/// Default mapping from common property-type names to CQL storage types.
///
/// Accepts both Rust-style (`i64`, `bool`) and boxed spellings (`Long`,
/// `Boolean`) since shape descriptors describe foreign object models.
/// `Option<T>` maps like `T`; collection types map recursively.
pub struct CqlTypeMapper;

impl TypeMapper for CqlTypeMapper {
    fn map_type(&self, typ: &str) -> Result<String, UnsupportedType> {
        let base = typ.trim();

        if let Some(inner) = strip_generic(base, "Option") {
            return self.map_type(inner);
        }
        if let Some(inner) = strip_generic(base, "List") {
            return Ok(format!("list<{}>", self.map_type(inner)?));
        }
        if let Some(inner) = strip_generic(base, "Vec") {
            return Ok(format!("list<{}>", self.map_type(inner)?));
        }
        if let Some(inner) = strip_generic(base, "Set") {
            return Ok(format!("set<{}>", self.map_type(inner)?));
        }
        if let Some(inner) = strip_generic(base, "Map") {
            let (key, value) = split_pair(inner).ok_or_else(|| UnsupportedType(typ.to_string()))?;
            return Ok(format!(
                "map<{}, {}>",
                self.map_type(key)?,
                self.map_type(value)?
            ));
        }

        let mapped = match base {
            "String" | "str" => "text",
            "i32" | "Int" | "Integer" => "int",
            "i64" | "Long" => "bigint",
            "i16" | "Short" => "smallint",
            "i8" | "Byte" => "tinyint",
            "f32" | "Float" => "float",
            "f64" | "Double" => "double",
            "bool" | "Boolean" => "boolean",
            "Decimal" | "BigDecimal" => "decimal",
            "BigInt" | "BigInteger" => "varint",
            "Uuid" | "UUID" => "uuid",
            "Date" => "date",
            "Time" => "time",
            "Timestamp" | "DateTime" | "Instant" => "timestamp",
            "Bytes" | "Blob" => "blob",
            "Inet" | "IpAddr" => "inet",
            _ => return Err(UnsupportedType(typ.to_string())),
        };
        Ok(mapped.to_string())
    }
}

/// `strip_generic("List<String>", "List")` -> `Some("String")`.
fn strip_generic<'a>(typ: &'a str, outer: &str) -> Option<&'a str> {
    typ.strip_prefix(outer)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Split `K, V` at the top-level comma, ignoring commas nested in `<...>`.
fn split_pair(inner: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((&inner[..i], &inner[i + 1..])),
            _ => {}
        }
    }
    None
}

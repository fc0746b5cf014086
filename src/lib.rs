pub mod convention;
pub mod ddl;
pub mod lexer;
pub mod mapper;
pub mod mapping;
pub mod parser;
pub mod schema;
pub mod shape;
pub mod synthesize;
pub mod types;

use wasm_bindgen::prelude::*;

use convention::camel_case_to_underscore;
use mapper::Mapper;
use parser::Parser;
use types::CqlTypeMapper;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Parse a shape descriptor and synthesize its CREATE TABLE statement.
/// The table name defaults to the underscored shape name.
#[wasm_bindgen(js_name = "shapeToTable")]
pub fn shape_to_table(
    source: &str,
    keyspace: &str,
    table: Option<String>,
) -> Result<String, JsValue> {
    let shape = Parser::new(source)
        .map_err(js_err)?
        .parse()
        .map_err(js_err)?;

    let table_name = table.unwrap_or_else(|| camel_case_to_underscore(&shape.type_name));
    let mapper = Mapper::new(shape);
    let def = mapper
        .new_table(keyspace, &table_name, &CqlTypeMapper)
        .map_err(js_err)?;

    Ok(ddl::render(&def))
}

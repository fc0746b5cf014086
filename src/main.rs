use colmap::convention::camel_case_to_underscore;
use colmap::ddl;
use colmap::mapper::Mapper;
use colmap::parser::Parser;
use colmap::types::CqlTypeMapper;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <shape file> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -k, --keyspace <name>  Target keyspace (default: app)");
        eprintln!("  -t, --table <name>     Table name (default: derived from the shape name)");
        eprintln!("  -o, --output <file>    Output file (default: stdout)");
        eprintln!("  -m, --map              Also print the accessor-to-column map");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut keyspace = "app".to_string();
    let mut table_name: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut print_map = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-k" | "--keyspace" => {
                i += 1;
                if i < args.len() {
                    keyspace = args[i].clone();
                }
            }
            "-t" | "--table" => {
                i += 1;
                if i < args.len() {
                    table_name = Some(args[i].clone());
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-m" | "--map" => {
                print_map = true;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let mut parser = match Parser::new(&input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Lex error: {}", e);
            process::exit(1);
        }
    };

    let shape = match parser.parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    };

    let table_name = table_name.unwrap_or_else(|| camel_case_to_underscore(&shape.type_name));
    let mapper = Mapper::new(shape);

    let table = match mapper.new_table(&keyspace, &table_name, &CqlTypeMapper) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Synthesis error: {}", e);
            process::exit(1);
        }
    };

    let mut output = ddl::render(&table);

    if print_map {
        let map = mapper.column_map(&table, &HashMap::new());
        output.push('\n');
        for (param, column) in mapper.shape().params.iter().zip(&map.constructor_columns) {
            output.push_str(&format!("-- new {} -> {}\n", param.name, column));
        }
        for getter in &mapper.shape().getters {
            output.push_str(&format!(
                "-- get {} -> {}\n",
                getter.name, map.getter_columns[&getter.name]
            ));
        }
        for setter in &mapper.shape().setters {
            output.push_str(&format!(
                "-- set {} -> {}\n",
                setter.name, map.setter_columns[&setter.name]
            ));
        }
    }

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

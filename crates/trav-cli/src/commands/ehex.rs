use comfy_table::{ContentArrangement, Table};

use trav_core::ehex::{self, Ehex};

pub fn run(value: Option<&str>, table: bool) -> Result<(), String> {
    if table {
        print_table();
    }

    let Some(value) = value else {
        return if table {
            Ok(())
        } else {
            Err("nothing to convert: pass a value or --table".into())
        };
    };

    // Multi-character input can only be a number; single characters 0-9 are
    // the same either way.
    match value.trim().parse::<i64>() {
        Ok(n) => println!("{}", ehex::to_digit(n).map_err(|e| e.to_string())?),
        Err(_) => println!("{}", parse_digit(value)?.value()),
    }
    Ok(())
}

pub fn diff(a: &str, b: &str) -> Result<(), String> {
    let a = parse_digit(a)?;
    let b = parse_digit(b)?;
    println!("{}", ehex::difference(a, b));
    Ok(())
}

fn parse_digit(s: &str) -> Result<Ehex, String> {
    s.parse::<Ehex>().map_err(|e| e.to_string())
}

fn print_table() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Digit", "Value"]);
    for e in Ehex::all() {
        table.add_row(vec![e.to_string(), e.value().to_string()]);
    }
    println!("{table}");
}

use duckdb::{params, Connection};
use log::info;
use tabled::{builder::Builder, settings::Style};

use crate::config::GDP_THRESHOLD;
use crate::error::EtlError;
use crate::transform::GdpRecord;

/// Serialize the table to a CSV file, header row included.  Full overwrite.
pub fn save_csv(records: &[GdpRecord], path: &str) -> Result<(), EtlError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("wrote {} rows to {}", records.len(), path);
    Ok(())
}

/// Write the table to the database, replacing any existing table of the
/// same name.
pub fn save_db(
    conn: &Connection,
    table_name: &str,
    records: &[GdpRecord],
) -> Result<(), EtlError> {
    conn.execute_batch(&format!(
        "CREATE OR REPLACE TABLE {} (Country VARCHAR, GDP_USD_billions DOUBLE);",
        table_name
    ))?;
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {} (Country, GDP_USD_billions) VALUES (?, ?)",
        table_name
    ))?;
    for record in records {
        stmt.execute(params![record.country, record.gdp_usd_billions])?;
    }
    info!("loaded {} rows into table {}", records.len(), table_name);
    Ok(())
}

/// Run the fixed filter query against the just-written table and print the
/// result set.  Read-only.
pub fn run_query(conn: &Connection, table_name: &str) -> Result<Vec<GdpRecord>, EtlError> {
    let statement = format!(
        "SELECT Country, GDP_USD_billions FROM {} WHERE GDP_USD_billions >= {}",
        table_name, GDP_THRESHOLD
    );
    println!("{}", statement);

    let mut stmt = conn.prepare(&statement)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(GdpRecord {
                country: row.get(0)?,
                gdp_usd_billions: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<GdpRecord>, duckdb::Error>>()?;
    println!("{}", ascii_table(&rows));

    Ok(rows)
}

/// Make an ASCII table from the result set
fn ascii_table(records: &[GdpRecord]) -> tabled::Table {
    let mut builder = Builder::new();
    builder.push_record(vec!["Country", "GDP_USD_billions"]);
    for record in records {
        builder.push_record(vec![
            record.country.clone(),
            record.gdp_usd_billions.to_string(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::empty());
    table
}

use duckdb::Connection;
use log::{error, info};

use gdp_etl::chart;
use gdp_etl::config::Config;
use gdp_etl::error::EtlError;
use gdp_etl::extract;
use gdp_etl::load;
use gdp_etl::runlog::RunLog;
use gdp_etl::transform;

/// Linear pipeline: extract, transform, save to CSV, save to the database
/// and query it, visualize.  Every stage except visualization is fatal.
fn main() -> Result<(), EtlError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = Config::default();
    let log = RunLog::new(&config.log_path);
    log.info("Preliminaries complete. Initiating ETL process")?;

    // 1. Extract
    let raw = match extract::extract(&config.url) {
        Ok(records) => {
            log.info("Data extraction complete. Initiating Transformation process")?;
            records
        }
        Err(e) => {
            log.error(&format!("Error during extraction: {}", e))?;
            return Err(e);
        }
    };

    // 2. Transform
    let records = match transform::transform(raw) {
        Ok(records) => {
            log.info("Data transformation complete. Initiating loading process")?;
            records
        }
        Err(e) => {
            log.error(&format!("Error during transformation: {}", e))?;
            return Err(e);
        }
    };

    // 3. Load to CSV
    match load::save_csv(&records, &config.csv_path) {
        Ok(()) => log.info("Data saved to CSV file")?,
        Err(e) => {
            log.error(&format!("Error saving to CSV: {}", e))?;
            return Err(e);
        }
    }

    // 4. Load to the database and run the query.  The connection lives in
    // this block only, so it is released on every exit path.
    {
        log.info("SQL Connection initiated.")?;
        let conn = match Connection::open(&config.db_path) {
            Ok(conn) => conn,
            Err(e) => {
                log.error(&format!("Error loading to database: {}", e))?;
                return Err(e.into());
            }
        };
        match load::save_db(&conn, &config.table_name, &records) {
            Ok(()) => log.info("Data loaded to Database as table.")?,
            Err(e) => {
                log.error(&format!("Error loading to database: {}", e))?;
                return Err(e);
            }
        }
        log.info("Running the query")?;
        match load::run_query(&conn, &config.table_name) {
            Ok(rows) => {
                info!("query returned {} rows", rows.len());
                log.info("Query run successfully")?;
            }
            Err(e) => {
                log.error(&format!("Error running query: {}", e))?;
                return Err(e);
            }
        }
    }
    log.info("SQL Connection closed.")?;

    // 5. Visualize.  Failure here is logged but does not fail the run.
    match chart::visualize(&records, &config) {
        Ok(()) => log.info("Visualization complete.")?,
        Err(e) => {
            error!("visualization failed: {}", e);
            log.error(&format!("Error during visualization: {}", e))?;
        }
    }

    log.info("ETL process complete.")?;
    Ok(())
}

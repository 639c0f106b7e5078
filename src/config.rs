//! Fixed parameters for the run.  There are no CLI flags and no environment
//! variables; everything the pipeline touches is named here.

/// Archived snapshot of the Wikipedia GDP page, so the table structure is
/// stable across runs.
pub const URL: &str = "https://web.archive.org/web/20230902185326/https://en.wikipedia.org/wiki/List_of_countries_by_GDP_%28nominal%29";

pub const CSV_PATH: &str = "Countries_by_GDP.csv";
pub const DB_PATH: &str = "World_Economies.db";
pub const TABLE_NAME: &str = "Countries_by_GDP";
pub const LOG_PATH: &str = "log_file.txt";
pub const CHART_PATH: &str = "top_gdp_chart.png";

/// Number of countries shown in the bar chart.
pub const TOP_N: usize = 10;

/// Query threshold, in USD billions.
pub const GDP_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub csv_path: String,
    pub db_path: String,
    pub table_name: String,
    pub log_path: String,
    pub chart_path: String,
    pub top_n: usize,
    /// Open the chart in a browser after writing the image file.
    pub interactive_display: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            url: URL.to_string(),
            csv_path: CSV_PATH.to_string(),
            db_path: DB_PATH.to_string(),
            table_name: TABLE_NAME.to_string(),
            log_path: LOG_PATH.to_string(),
            chart_path: CHART_PATH.to_string(),
            top_n: TOP_N,
            interactive_display: false,
        }
    }
}

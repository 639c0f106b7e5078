use log::info;
use plotly::{common::Title, layout::Axis, Bar, ImageFormat, Layout, Plot};

use crate::config::Config;
use crate::error::EtlError;
use crate::transform::GdpRecord;

/// The `n` largest records by GDP, in descending order.  The sort is stable,
/// so ties keep their original document order.
pub fn top_n(records: &[GdpRecord], n: usize) -> Vec<GdpRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.gdp_usd_billions
            .partial_cmp(&a.gdp_usd_billions)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Render the top-N bar chart and write it to the configured image path,
/// overwriting any previous chart.  The browser display is only attempted
/// when `interactive_display` is set.
pub fn visualize(records: &[GdpRecord], config: &Config) -> Result<(), EtlError> {
    let top = top_n(records, config.top_n);
    let countries: Vec<String> = top.iter().map(|r| r.country.clone()).collect();
    let values: Vec<f64> = top.iter().map(|r| r.gdp_usd_billions).collect();

    let trace = Bar::new(countries, values);
    let layout = Layout::new()
        .title(Title::with_text(format!(
            "Top {} Countries by GDP",
            config.top_n
        )))
        .x_axis(
            Axis::new()
                .title(Title::with_text("Country"))
                .tick_angle(45.0),
        )
        .y_axis(Axis::new().title(Title::with_text("GDP (in USD Billions)")));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.write_image(&config.chart_path, ImageFormat::PNG, 1200, 600, 1.0);
    info!("chart saved as {}", config.chart_path);
    println!("Chart saved as: {}", config.chart_path);

    if config.interactive_display {
        plot.show();
    }

    Ok(())
}

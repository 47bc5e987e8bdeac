use classgrid_data::EmbeddedSource;
use classgrid_view::config::ViewConfig;
use color_eyre::eyre::Result;
use dotenv::dotenv;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ViewConfig::from_env()?;

    classgrid_view::init_tracing(config.log_level)?;

    // Build the view from the embedded tables
    let view = classgrid_view::load_view(&config, &EmbeddedSource)?;

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

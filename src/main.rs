use anyhow::Result;
use config::GeneratorConfig;
use externals::header_file::HeaderFileModule;
use internals::table::system::TableGenerator;
use tracing::level_filters::LevelFilter;

pub mod config;
pub mod externals;
pub mod internals;
pub mod models;

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = GeneratorConfig::from_args(std::env::args().skip(1))?;

    let HeaderFileModule { artifact_adapter } =
        HeaderFileModule::initialize(config.output_path.clone());

    let generator = TableGenerator::new(artifact_adapter);
    if let Err(e) = generator.run(&config) {
        tracing::error!("Table generation failed. Error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

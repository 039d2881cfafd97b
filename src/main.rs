mod body;
mod err;
mod handler;
mod http;
mod opt;
mod redirect;

use redirect::document;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options {
        verbose,
        listen,
        mappings,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let pairs = document::load(&mappings).await?;
    log::info!("Loaded {} mappings from {}", pairs.len(), mappings.display());

    let chain = redirect::build_chain(pairs);
    if chain.table().is_empty() {
        log::warn!("No configured redirects, serving built-in ones only");
    } else {
        log::debug!("{} distinct configured paths", chain.table().len());
    }

    http::run(listen, chain).await?;

    Ok(())
}

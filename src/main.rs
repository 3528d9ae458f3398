use brc::prelude::*;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    init_tracing(&config.log_level);

    CliApp::new("brc")
        .run(|mut writer, token| async move {
            // The report goes to stdout only once the whole input is aggregated
            run_aggregation(&config, &mut writer, token).await?;
            Ok(())
        })
        .await
}

use anyhow::Context;
use voyage_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Voyage settings")?;
    voyage_telemetry::init(&settings.telemetry)?;

    voyage_app::run(settings).await
}

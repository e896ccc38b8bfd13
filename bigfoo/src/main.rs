use bigfoo::prelude::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bigfoo=info,goose=info"));
    FmtSubscriber::builder().with_env_filter(filter).init();

    BigfooAttack::from_env().run().await?;
    Ok(())
}

//! `check` subcommand: verifies the backend is reachable.

use anyhow::{Context, Result};

use karya_core::{BackendConfig, GatewayClient};

pub async fn run(config: BackendConfig) -> Result<()> {
    println!("Menghubungi {} ...", config.base_url);

    let gateway = GatewayClient::new(&config);
    let elapsed = gateway
        .check_connection()
        .await
        .with_context(|| format!("backend tidak terjangkau di {}", config.base_url))?;

    println!("Koneksi OK ({} ms)", elapsed.as_millis());
    Ok(())
}

use tracing::info;

use stayfinder_lib::{App, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stayfinder_lib::logging::init();

    let config = AppConfig::default();
    let app = App::from_config(config)?;

    let mut screens = app.session().watch_screen();
    tokio::spawn(async move {
        while screens.changed().await.is_ok() {
            info!(screen = ?*screens.borrow(), "screen committed");
        }
    });

    // Reconcile on every identity change until the gateway closes.
    app.session().run().await;
    Ok(())
}

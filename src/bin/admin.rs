use dotenv::dotenv;

use ordering_console::console::AdminConsole;
use ordering_console::sheet::SheetClient;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let client = SheetClient::from_env();
    log::info!("🔧 Starting admin console against {}", client.base_url());

    let mut console = AdminConsole::new(Box::new(client));
    console.run().await
}

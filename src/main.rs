use session_server::frameworks::server;

#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    if server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}

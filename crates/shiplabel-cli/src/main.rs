#[tokio::main]
async fn main() {
    std::process::exit(shiplabel_cli::run().await);
}

#[tokio::main]
async fn main() {
    if let Err(err) = scorer::start_server().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

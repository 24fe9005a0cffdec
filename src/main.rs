use std::process;

use api_smoke_checker::checker::app;

#[tokio::main]
async fn main() {
    match app::run().await {
        Ok(report) => {
            if report.all_passed() {
                process::exit(0);
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            process::exit(1);
        }
    }
}

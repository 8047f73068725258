use std::env;

use matrix_check::MatrixJob;

const DEFAULT_BASE_URL: &str = "https://recruitment-test.investcloud.com";
const DEFAULT_SIZE: usize = 1000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let base_url = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let size: usize = args.get(2).unwrap_or(&DEFAULT_SIZE.to_string()).parse()?;

    let job = MatrixJob::new(base_url, size)?;
    let outcome = job.run().await?;

    println!("Elapsed: {:?}", outcome.elapsed);
    println!("Hash: {}", outcome.digest);
    match outcome.validation {
        Some(body) => println!("Response: {}", body),
        None => println!("Validation request failed"),
    }

    Ok(())
}

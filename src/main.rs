use std::env::var;

use community_intake::run;
use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if var("RUST_LOG").is_ok() {
        env_logger::init();
    }
    run().await
}

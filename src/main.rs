use azure_vm_inventory::azure::AzCli;
use azure_vm_inventory::output::print_run_summary;
use azure_vm_inventory::{run_inventory, Config};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Config::from_env()?;
    log::info!(
        "Collecting {} subscriptions into {}",
        config.subscription_ids.len(),
        config.output_path.display()
    );

    let api = AzCli::new();
    let summary = run_inventory(&api, &config)?;
    print_run_summary(&summary);

    if summary.all_failed() {
        log::error!("Every subscription failed; nothing was collected");
        std::process::exit(1);
    }

    Ok(())
}

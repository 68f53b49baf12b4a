use galsim::{Scenario, ScenarioConfig};
use galsim::{all_stars, bench_update};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_spirals.yaml")]
    file_name: String,

    /// Run the update-step benchmark sweep instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_update();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    println!(
        "running {} steps: {} galaxies, {} stars",
        scenario.parameters.steps,
        scenario.galaxies.len(),
        scenario.star_count()
    );

    scenario.run_to_completion();

    for (i, galaxy) in scenario.galaxies.iter().enumerate() {
        println!(
            "galaxy {i}: {} stars, position ({:.4}, {:.4}, {:.4})",
            galaxy.stars.len(),
            galaxy.position.x,
            galaxy.position.y,
            galaxy.position.z
        );
    }
    println!("total stars traversed: {}", all_stars(&scenario.galaxies).count());

    Ok(())
}

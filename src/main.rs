use rigid2d::{PhysicsWorld, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::path::PathBuf;

/// Runs a scenario headlessly and prints body states.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/`
    #[arg(short, default_value = "stack.yaml")]
    file_name: String,

    /// Overrides the step count from the scenario
    #[arg(long)]
    steps: Option<usize>,

    /// Print the world every N steps
    #[arg(long, default_value_t = 60)]
    every: usize,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let yaml = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    ScenarioConfig::from_yaml_str(&yaml).with_context(|| format!("failed to load {}", config_path.display()))
}

fn print_world(world: &PhysicsWorld, step: usize) {
    println!("--- step {step} ---");
    for (i, body) in world.bodies.iter().enumerate() {
        println!(
            "#{i} {:?} pos={} vel={} angle={:.3}",
            body.kind(),
            body.position,
            body.velocity,
            body.angle
        );
        if let Some(vertices) = body.world_vertices() {
            let outline: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
            println!("   vertices: {}", outline.join(" "));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario = load_scenario_from_yaml(&args.file_name)?;
    let mut world = scenario.build_world()?;

    let steps = args.steps.unwrap_or(scenario.steps);
    let every = args.every.max(1);

    print_world(&world, 0);
    for step in 1..=steps {
        world.step(scenario.dt);
        if step % every == 0 || step == steps {
            print_world(&world, step);
        }
    }

    Ok(())
}

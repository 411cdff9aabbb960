use orbsim::{clamp_color, generate_report, Palette, Prompter, Scenario, ScenarioConfig, Visualizer};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "orbsim")]
#[command(about = "Point objects orbiting a fixed center object, rendered to an image")]
#[command(group(ArgGroup::new("input").required(true).args(["file", "interactive"])))]
struct Args {
    /// Use the values from a .json or .yaml scenario file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Input values manually
    #[arg(short, long)]
    interactive: bool,

    /// Save end state, image and report as files
    #[arg(short, long)]
    save: bool,

    /// Don't print the report
    #[arg(short, long)]
    quiet: bool,

    /// Directory the saved files go to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Base name of the saved files (default: run_<unix seconds>)
    #[arg(long)]
    name: Option<String>,

    /// Color of the center object
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [255, 255, 255], allow_negative_numbers = true)]
    center_color: Vec<i64>,

    /// Color of each step
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [0, 255, 0], allow_negative_numbers = true)]
    step_color: Vec<i64>,

    /// Color of the end states of point objects
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [255, 0, 0], allow_negative_numbers = true)]
    point_color: Vec<i64>,
}

fn rgb(c: &[i64]) -> image::Rgb<u8> {
    clamp_color([c[0], c[1], c[2]])
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario from {}", path.display())),
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            Ok(prompter.load_scenario()?)
        }
    }
}

fn default_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("run_{}", secs)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario(&args)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;
    let output = scenario.run().context("simulation aborted")?;

    let palette = Palette {
        center: rgb(&args.center_color),
        step: rgb(&args.step_color),
        point: rgb(&args.point_color),
    };
    let sim = &scenario.simulation;
    let visualizer = Visualizer::new(scenario.resolution, sim.parameters().meters_per_pixel, palette);
    let img = visualizer.draw(sim.center(), sim.point_objects(), &output.simulation_steps);
    let report = generate_report(&output, sim.point_objects());

    if !args.quiet {
        print!("{}", report);
    }

    if args.save {
        let name = args.name.clone().unwrap_or_else(default_name);
        let base = args.output_dir.join(name);

        let json_path = base.with_extension("json");
        scenario
            .to_config()
            .save(&json_path)
            .with_context(|| format!("failed to write {}", json_path.display()))?;

        let png_path = base.with_extension("png");
        img.save(&png_path)
            .with_context(|| format!("failed to write {}", png_path.display()))?;

        let txt_path = base.with_extension("txt");
        std::fs::write(&txt_path, &report)
            .with_context(|| format!("failed to write {}", txt_path.display()))?;

        log::info!("saved {}.{{json,png,txt}}", base.display());
    }

    Ok(())
}

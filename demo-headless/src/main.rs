use clap::{Args, Parser, Subcommand};
use kinematic_core::{
    predict_collision_time, read_csv_resource, CsvValue, DirectoryResources, LineRecorder,
    ShotConfig, Vec3,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Kinematic helpers demo
#[derive(Parser, Debug)]
#[command(name = "kinematic-demo")]
#[command(about = "Closed-form shot and collision solvers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the launch velocity from source to target
    Shoot(ShotArgs),
    /// Solve a shot and print its sampled path
    Path(ShotArgs),
    /// Predict when a chasing body reaches the one ahead
    Collide(CollideArgs),
    /// Solve one shot per row of a targets table (columns: name,x,y,z)
    Table(TableArgs),
}

/// Shot parameters shared by the shot subcommands
#[derive(Args, Debug)]
struct ShotSettings {
    /// JSON shot configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gravity along the vertical axis (overrides the config file)
    #[arg(short, long, allow_hyphen_values = true)]
    gravity: Option<f32>,

    /// Apex height above the target (overrides the config file)
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    delta_h: Option<f32>,

    /// Number of path segments (overrides the config file)
    #[arg(short, long)]
    resolution: Option<u32>,
}

#[derive(Args, Debug)]
struct ShotArgs {
    /// Launch position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
    source: Vec3,

    /// Target position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    target: Vec3,

    #[command(flatten)]
    settings: ShotSettings,
}

#[derive(Args, Debug)]
struct CollideArgs {
    /// Position of the body ahead
    #[arg(long, allow_hyphen_values = true)]
    x_a: f32,
    /// Position of the chasing body
    #[arg(long, allow_hyphen_values = true)]
    x_b: f32,
    /// Acceleration of the body ahead
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    a_a: f32,
    /// Acceleration of the chasing body
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    a_b: f32,
    /// Velocity of the body ahead
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    u_a: f32,
    /// Velocity of the chasing body
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    u_b: f32,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Resources directory
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Resource name (extension optional)
    #[arg(long)]
    name: String,

    /// Launch position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
    source: Vec3,

    #[command(flatten)]
    settings: ShotSettings,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{s}'"));
    }
    let mut coords = [0.0_f32; 3];
    for (coord, part) in coords.iter_mut().zip(&parts) {
        *coord = part
            .parse()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))?;
    }
    Ok(Vec3::new(coords[0], coords[1], coords[2]))
}

impl ShotSettings {
    /// Config file values (or defaults) with command-line overrides applied
    fn resolve(&self) -> Result<ShotConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
                serde_json::from_str(&contents)
                    .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
            }
            None => ShotConfig::default(),
        };

        if let Some(gravity) = self.gravity {
            config.gravity = gravity;
        }
        if let Some(delta_h) = self.delta_h {
            config.delta_h = delta_h;
        }
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }

        config.validate().map_err(|e| e.to_string())?;
        info!(?config, "Using shot configuration");
        Ok(config)
    }
}

fn fmt_vec(v: &Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn run_shoot(args: &ShotArgs) -> Result<(), String> {
    let config = args.settings.resolve()?;
    let shot = config
        .shoot(args.source, args.target)
        .map_err(|e| e.to_string())?;

    println!("Initial velocity: {}", fmt_vec(&shot.initial_velocity()));
    println!("Speed:            {:.3} m/s", shot.initial_velocity().norm());
    println!("Time to target:   {:.3} s", shot.time_to_target());
    Ok(())
}

fn run_path(args: &ShotArgs) -> Result<(), String> {
    let config = args.settings.resolve()?;
    let mut recorder = LineRecorder::new();
    let shot = config
        .draw_path(args.source, args.target, &mut recorder)
        .map_err(|e| e.to_string())?;

    println!(
        "{} segments over {:.3} s",
        recorder.len(),
        shot.time_to_target()
    );
    for (i, line) in recorder.lines().iter().enumerate() {
        println!("{:>3}: {} -> {}", i + 1, fmt_vec(&line.start), fmt_vec(&line.end));
    }
    Ok(())
}

fn run_collide(args: &CollideArgs) -> Result<(), String> {
    let t = predict_collision_time(args.x_a, args.x_b, args.a_a, args.a_b, args.u_a, args.u_b)
        .map_err(|e| e.to_string())?;
    if t < 0.0 {
        warn!(t, "Collision time lies in the past");
    }
    println!("Collision time: {t:.4} s");
    Ok(())
}

fn run_table(args: &TableArgs) -> Result<(), String> {
    let config = args.settings.resolve()?;
    let resources = DirectoryResources::new(&args.dir);
    let rows = read_csv_resource(&resources, &args.name).map_err(|e| e.to_string())?;
    info!(rows = rows.len(), name = %args.name, "Loaded targets");

    for (i, row) in rows.iter().enumerate() {
        let label = row
            .get("name")
            .map_or_else(|| format!("row {}", i + 1), ToString::to_string);
        let coord = |key: &str| row.get(key).and_then(CsvValue::as_int).map(|v| v as f32);

        let (Some(x), Some(y), Some(z)) = (coord("x"), coord("y"), coord("z")) else {
            warn!(row = i + 1, "Skipping row without integer x, y, z");
            continue;
        };

        match config.shoot(args.source, Vec3::new(x, y, z)) {
            Ok(shot) => println!(
                "{label}: v0 = {}, t = {:.3} s",
                fmt_vec(&shot.initial_velocity()),
                shot.time_to_target()
            ),
            Err(e) => println!("{label}: no shot ({e})"),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Shoot(args) => run_shoot(args),
        Command::Path(args) => run_path(args),
        Command::Collide(args) => run_collide(args),
        Command::Table(args) => run_table(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, -2.5,3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn test_cli_parses_negative_values() {
        let cli = Cli::try_parse_from([
            "kinematic-demo",
            "shoot",
            "--target",
            "-4,0,2",
            "--gravity",
            "-9.8",
        ])
        .unwrap();
        match cli.command {
            Command::Shoot(args) => {
                assert_eq!(args.target, Vec3::new(-4.0, 0.0, 2.0));
                let config = args.settings.resolve().unwrap();
                assert_eq!(config.gravity, -9.8);
                assert_eq!(config.resolution, 30);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_overrides_validated() {
        let settings = ShotSettings {
            config: None,
            gravity: Some(0.0),
            delta_h: None,
            resolution: None,
        };
        assert!(settings.resolve().is_err());
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

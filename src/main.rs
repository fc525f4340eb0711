use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glam::Vec2;
use rig_pose::{CcdSolver, IkConfig, PosePipeline, Project};

#[derive(Parser, Debug)]
#[command(name = "rig-pose", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the world-space rest pose (drivers applied).
    Pose(ProjectArgs),
    /// Print the world-space pose of a clip at a frame.
    Sample(SampleArgs),
    /// Solve IK toward a target and print the new bones.
    Solve(SolveArgs),
    /// List data-quality issues in the rig.
    Check(ProjectArgs),
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Clip id or name.
    #[arg(long)]
    clip: String,

    /// Frame number (may be fractional).
    #[arg(long, conflicts_with = "seconds")]
    frame: Option<f32>,

    /// Playback time in seconds, converted with the clip's fps.
    #[arg(long)]
    seconds: Option<f32>,

    /// Wrap `--seconds` around the clip duration.
    #[arg(long)]
    looping: bool,
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Effector bone id.
    #[arg(long)]
    effector: String,

    #[arg(long, allow_hyphen_values = true)]
    x: f32,

    #[arg(long, allow_hyphen_values = true)]
    y: f32,

    /// Bones from the effector upward that may rotate.
    #[arg(long, default_value_t = 4)]
    chain_len: usize,

    #[arg(long, default_value_t = 10)]
    iterations: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pose(args) => cmd_pose(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Solve(args) => cmd_solve(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_project(path: &Path) -> anyhow::Result<Project> {
    let f = File::open(path).with_context(|| format!("open project '{}'", path.display()))?;
    let project = Project::from_reader(BufReader::new(f)).with_context(|| "parse project JSON")?;
    log::debug!(
        "loaded {} bone(s), {} clip(s) from {}",
        project.bones.len(),
        project.clips.len(),
        path.display()
    );
    Ok(project)
}

fn cmd_pose(args: ProjectArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let pose = PosePipeline::pose(&project.bones);
    println!("{}", serde_json::to_string_pretty(&pose.derived)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let clip = project.clip(&args.clip)?;
    let frame = match (args.frame, args.seconds) {
        (Some(frame), _) => frame,
        (None, Some(seconds)) => clip.frame_at_seconds(seconds, args.looping),
        (None, None) => 0.0,
    };
    log::info!("sampling clip '{}' at frame {frame}", args.clip);

    let pose = PosePipeline::pose_at(&project.bones, clip, frame);
    println!("{}", serde_json::to_string_pretty(&pose.derived)?);
    Ok(())
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    project.bone(&args.effector)?;

    let config = IkConfig::builder()
        .max_chain_len(args.chain_len)
        .iterations(args.iterations)
        .build();
    let target = Vec2::new(args.x, args.y);
    let result = CcdSolver::new(config).solve(&project.bones, &args.effector, target);
    log::info!(
        "solved chain {:?}, final distance {}",
        result.chain,
        result.final_distance
    );
    println!("{}", serde_json::to_string_pretty(&result.bones)?);
    Ok(())
}

fn cmd_check(args: ProjectArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let issues = project.issues();
    for issue in &issues {
        println!("{issue}");
    }
    for clip in &project.clips {
        for track in clip.tracks.iter().filter(|t| t.has_duplicate_times()) {
            println!(
                "clip '{}': track {}/{:?} has duplicate keyframe times",
                clip.id, track.bone_id, track.property
            );
        }
    }
    if issues.is_empty() {
        log::info!("no rig issues");
    }
    Ok(())
}

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use permuter_core::{
    permute_with, report, FeasibilityRule, Result, SearchCriteria, UserSpawnInfo,
};

#[derive(Debug, Parser)]
#[command(
    name = "spawn-permuter",
    version,
    about = "Searches a spawn group's advance sequences for notable spawns"
)]
struct Args {
    /// Path to a JSON spawn descriptor (Species/Seed/BaseCount/...).
    #[arg(long)]
    spawner: PathBuf,

    #[arg(long, value_enum, default_value_t = Criteria::Shiny)]
    criteria: Criteria,

    /// Keep paths the feasibility rule would discard (e.g. multi
    /// battles in a phase that spawned a skittish species).
    #[arg(long, default_value_t = false)]
    all_paths: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Criteria {
    Shiny,
    Alpha,
    ShinyOrAlpha,
    Any,
}

impl From<Criteria> for SearchCriteria {
    fn from(criteria: Criteria) -> Self {
        match criteria {
            Criteria::Shiny => SearchCriteria::Shiny,
            Criteria::Alpha => SearchCriteria::Alpha,
            Criteria::ShinyOrAlpha => SearchCriteria::ShinyOrAlpha,
            Criteria::Any => SearchCriteria::Any,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let user = UserSpawnInfo::from_file(&args.spawner)?;
    let spawn = user.spawn()?;
    let seed = user.seed()?;
    let rule = if args.all_paths {
        FeasibilityRule::permissive()
    } else {
        FeasibilityRule::default()
    };
    let result = permute_with(&spawn, seed, args.criteria.into(), &rule)?;
    for line in report::lines(&result) {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

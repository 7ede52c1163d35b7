use anyhow::Context;
use clap::Parser;
use meshweld::{load_mesh_with, FlattenConfig, Mesh, Triangle};

mod args;
mod obj;

fn load(args: &args::MeshArgs) -> anyhow::Result<Mesh> {
    let config = FlattenConfig {
        scale: args.scale,
        node_limit: args.node_limit,
    };
    let mesh = load_mesh_with(&args.resource, &config)
        .with_context(|| format!("no mesh produced from {}", args.resource))?;
    if !args.weld {
        return Ok(mesh);
    }
    let points: Vec<_> = mesh
        .triangles()
        .flat_map(|t: Triangle| [t.p0, t.p1, t.p2])
        .collect();
    Mesh::from_points(&points).context("failed to weld mesh")
}

fn info_command(args: args::MeshArgs) -> anyhow::Result<()> {
    let mesh = load(&args)?;
    println!("vertices:  {}", mesh.vertex_count());
    println!("triangles: {}", mesh.triangle_count());
    if let Some(bounds) = mesh.bounds() {
        println!(
            "bounds:    ({}, {}, {}) - ({}, {}, {})",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        args::Commands::Info(mesh) => info_command(mesh),
        args::Commands::Obj(obj) => obj::obj_command(obj),
        args::Commands::BoxMesh(b) => obj::box_command(b),
    }
}

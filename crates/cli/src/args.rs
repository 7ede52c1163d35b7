use clap::{Parser, Subcommand};
use meshweld::{Vector3, DEFAULT_NODE_LIMIT};

fn parse_scale(s: &str) -> Result<Vector3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{}': {}", p, e)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Vector3 { x, y, z }),
        &[s] => Ok(Vector3 { x: s, y: s, z: s }),
        _ => Err(format!("expected x,y,z or a single factor, got '{}'", s)),
    }
}

#[derive(clap::Args, Debug)]
pub struct MeshArgs {
    /// Path or file:// URI of the mesh to load.
    pub resource: String,

    /// Per-axis scale applied after scene transforms, as x,y,z or a single factor.
    #[arg(long, value_parser = parse_scale, default_value = "1,1,1")]
    pub scale: Vector3,

    /// Maximum number of scene nodes to visit.
    #[arg(long, default_value_t = DEFAULT_NODE_LIMIT)]
    pub node_limit: usize,

    /// Merge exactly coincident vertices after loading.
    #[arg(long)]
    pub weld: bool,
}

#[derive(clap::Args, Debug)]
pub struct ObjArgs {
    #[command(flatten)]
    pub mesh: MeshArgs,

    /// Output path for the obj file.
    #[arg(short, long)]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct BoxArgs {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Output path for the obj file.
    #[arg(short, long)]
    pub output: String,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print vertex and triangle counts and the bounds of a mesh.
    Info(MeshArgs),
    /// Convert a mesh to Wavefront obj.
    Obj(ObjArgs),
    /// Write an axis-aligned box as Wavefront obj.
    #[command(name = "box")]
    BoxMesh(BoxArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_values() {
        assert_eq!(Ok(Vector3::new(1.0, 2.0, 3.0)), parse_scale("1, 2,3"));
        assert_eq!(Ok(Vector3::new(0.5, 0.5, 0.5)), parse_scale("0.5"));
        assert!(parse_scale("1,2").is_err());
        assert!(parse_scale("a,b,c").is_err());
    }

    #[test]
    fn parse_info() {
        let args = Args::parse_from(["meshweld", "info", "cube.stl", "--scale", "2,2,2", "--weld"]);
        match args.command {
            Commands::Info(mesh) => {
                assert_eq!("cube.stl", mesh.resource);
                assert_eq!(Vector3::new(2.0, 2.0, 2.0), mesh.scale);
                assert_eq!(DEFAULT_NODE_LIMIT, mesh.node_limit);
                assert!(mesh.weld);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

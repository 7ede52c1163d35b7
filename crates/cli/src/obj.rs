use std::{fs::File, io::BufWriter, io::Write, path::Path};

use anyhow::Context;
use meshweld::{Mesh, Vector3};

use crate::{args, load};

pub fn obj_command(args: args::ObjArgs) -> anyhow::Result<()> {
    let mesh = load(&args.mesh)?;
    write_obj_file(&args.output, &mesh)
}

pub fn box_command(args: args::BoxArgs) -> anyhow::Result<()> {
    let mesh = Mesh::from_box(Vector3::new(args.x, args.y, args.z));
    write_obj_file(&args.output, &mesh)
}

fn write_obj_file<P: AsRef<Path>>(p: P, mesh: &Mesh) -> anyhow::Result<()> {
    let path = p.as_ref();
    let f = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    write_obj(&mut w, mesh)?;
    w.flush()?;
    log::info!(
        "wrote {} vertices and {} triangles to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}

/// Writes positions, vertex normals and faces. Obj indices are 1-based and each face corner
/// uses the normal with the same index as its position.
pub fn write_obj<W: Write>(w: &mut W, mesh: &Mesh) -> std::io::Result<()> {
    writeln!(
        w,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for p in mesh.vertices() {
        writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in mesh.vertex_normals() {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for f in mesh.facets() {
        let [a, b, c] = f.indices().map(|i| i + 1);
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}

pub struct TestModel {
    pub bytes: &'static [u8],
    pub model_height: f64,
    pub triangles: usize,
}

pub const STL_CUBE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-bin.stl"),
    model_height: 20.0,
    triangles: 12,
};

pub const STL_CUBE_ASCII: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-ascii.stl"),
    model_height: 20.0,
    triangles: 12,
};

/// A triangle instanced on three nested nodes: a translated base, a rotated elbow given as a
/// matrix, and a translated tip.
pub const GLTF_NESTED: TestModel = TestModel {
    bytes: include_bytes!("../../../res/gltf/nested.gltf"),
    model_height: 3.0,
    triangles: 3,
};

pub const GLB_NESTED: TestModel = TestModel {
    bytes: include_bytes!("../../../res/gltf/nested.glb"),
    model_height: 3.0,
    triangles: 3,
};

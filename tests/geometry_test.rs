use shape_ngin::{
    data_structures::mesh::{MeshData, Vertex},
    resources::geometry,
};

/// Signed area of the triangle projected onto XY; negative means clockwise.
fn signed_area(tri: &[Vertex; 3]) -> f32 {
    let [a, b, c] = tri.map(|v| v.position);
    ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])) * 0.5
}

#[test]
fn builtin_shapes_have_expected_sizes() {
    let expected = [("triangle", 3, 3), ("square", 4, 6), ("pentagon", 6, 15)];
    let shapes = geometry::all();
    assert_eq!(shapes.len(), expected.len());
    for (shape, (name, vertices, indices)) in shapes.iter().zip(expected) {
        assert_eq!(shape.name, name);
        assert_eq!(shape.vertices.len(), vertices);
        assert_eq!(shape.indices.len(), indices);
        shape.validate().unwrap();
    }
}

#[test]
fn builtin_triangles_wind_clockwise() {
    for shape in geometry::all() {
        for tri in shape.triangles() {
            let area = signed_area(&tri);
            assert!(area < 0.0, "{} has a counter-clockwise triangle {:?}", shape.name, tri);
        }
    }
}

#[test]
fn triangle_corners_are_red_blue_green() {
    let triangle = geometry::triangle();
    let colours: Vec<_> = triangle.vertices.iter().map(|v| v.color).collect();
    assert_eq!(colours, vec![geometry::RED, geometry::BLUE, geometry::GREEN]);
}

#[test]
fn vertex_layout_matches_the_shader_inputs() {
    assert_eq!(std::mem::size_of::<Vertex>(), 28);
    let layout = Vertex::desc();
    assert_eq!(layout.array_stride, 28);
    assert_eq!(layout.attributes.len(), 2);
    assert_eq!(layout.attributes[0].shader_location, 0);
    assert_eq!(layout.attributes[1].shader_location, 1);
    assert_eq!(layout.attributes[1].offset, 12);
}

#[test]
fn validate_rejects_broken_geometry() {
    let v = Vertex::new([0.0; 3], geometry::RED);

    let empty = MeshData::new("empty", vec![], vec![]);
    assert!(empty.validate().is_err());

    let no_indices = MeshData::new("no-indices", vec![v; 3], vec![]);
    assert!(no_indices.validate().is_err());

    let partial = MeshData::new("partial", vec![v; 3], vec![0, 1]);
    let err = partial.validate().unwrap_err();
    assert!(err.to_string().contains("partial"));

    let out_of_range = MeshData::new("out-of-range", vec![v; 3], vec![0, 1, 3]);
    let err = out_of_range.validate().unwrap_err();
    assert!(err.to_string().contains("vertex 3"));
}

//! Integration tests for the editor helper workflow
//!
//! Exercises the helpers together the way an editor shell uses them:
//! build a scene mirror, attach a debug overlay, frame the camera to the
//! scene bounds, bind property adapters, and dump the outline.
//!
//! Run with: cargo test --test editor_integration_tests

use glam::Vec3;
use winit::dpi::{LogicalSize, PhysicalSize};
use nebula_editor_kit::nebula::adapters::{
    ColorAdapter, ColorTarget, DegRadAdapter, FogAdapter, FogTarget, MinMaxAdapter,
};
use nebula_editor_kit::nebula::camera::CameraRig;
use nebula_editor_kit::nebula::gizmo::AxisGridHelper;
use nebula_editor_kit::nebula::scenegraph::{dump_lines, Aabb, SceneTree};
use nebula_editor_kit::nebula::surface::{resize_to_display, DisplaySurface};

// ============================================================================
// TEST DOUBLES (the rendering engine owns the real objects)
// ============================================================================

struct TestSurface {
    presented: LogicalSize<u32>,
    scale_factor: f64,
    backing: PhysicalSize<u32>,
}

impl DisplaySurface for TestSurface {
    fn presented_size(&self) -> LogicalSize<u32> {
        self.presented
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn backing_size(&self) -> PhysicalSize<u32> {
        self.backing
    }

    fn resize_backing(&mut self, size: PhysicalSize<u32>) {
        self.backing = size;
    }
}

struct TestFog {
    near: f32,
    far: f32,
    rgb: [f32; 3],
}

impl ColorTarget for TestFog {
    fn rgb(&self) -> [f32; 3] {
        self.rgb
    }

    fn set_rgb(&mut self, rgb: [f32; 3]) {
        self.rgb = rgb;
    }
}

impl FogTarget for TestFog {
    fn near(&self) -> f32 {
        self.near
    }

    fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn set_far(&mut self, far: f32) {
        self.far = far;
    }
}

struct TestMaterialColor {
    rgb: [f32; 3],
}

impl ColorTarget for TestMaterialColor {
    fn rgb(&self) -> [f32; 3] {
        self.rgb
    }

    fn set_rgb(&mut self, rgb: [f32; 3]) {
        self.rgb = rgb;
    }
}

// ============================================================================
// EDITOR WORKFLOW TESTS
// ============================================================================

#[test]
fn test_integration_viewport_resize_then_stable() {
    let mut surface = TestSurface {
        presented: LogicalSize::new(1280, 720),
        scale_factor: 2.0,
        backing: PhysicalSize::new(0, 0),
    };

    // First frame reconciles, later frames are no-ops
    assert!(resize_to_display(&mut surface));
    assert_eq!(surface.backing, PhysicalSize::new(2560, 1440));
    assert!(!resize_to_display(&mut surface));

    // DPI change on monitor move reconciles again
    surface.scale_factor = 1.0;
    assert!(resize_to_display(&mut surface));
    assert_eq!(surface.backing, PhysicalSize::new(1280, 720));
}

#[test]
fn test_integration_frame_scene_bounds() {
    // Two meshes mirrored into the scene tree, one inside a moved group
    let mut tree = SceneTree::new();
    let group = tree.create_node(tree.root(), "group").unwrap();
    let cube = tree.create_node(group, "cube").unwrap();
    let floor = tree.create_node(tree.root(), "floor").unwrap();

    tree.node_mut(group).unwrap().set_position(Vec3::new(10.0, 0.0, 0.0));
    tree.node_mut(cube).unwrap()
        .set_bounds(Some(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))));
    tree.node_mut(floor).unwrap()
        .set_bounds(Some(Aabb::new(Vec3::new(-20.0, -0.1, -20.0), Vec3::new(20.0, 0.0, 20.0))));

    let bounds = tree.compute_bounds(tree.root()).unwrap();
    assert_eq!(bounds.min, Vec3::new(-20.0, -1.0, -20.0));
    assert_eq!(bounds.max, Vec3::new(20.0, 1.0, 20.0));

    // Frame the rig to the whole scene
    let mut rig = CameraRig::new(Vec3::new(0.0, 5.0, 30.0), Vec3::ZERO);
    rig.frame_bounds(&bounds, 1.2);

    assert_eq!(rig.target(), bounds.center());
    assert!(rig.position().is_finite());
    assert!(rig.near() < rig.far());

    // The whole scene sits between the clip planes along the view axis
    let distance = (rig.position() - rig.target()).length();
    assert!(distance > bounds.size().length() * 0.5);
    assert!(rig.far() > distance);
}

#[test]
fn test_integration_overlay_toggle_and_dump() {
    let mut tree = SceneTree::new();
    let cube = tree.create_node(tree.root(), "cube").unwrap();
    let mut helper = AxisGridHelper::attach(&mut tree, cube, 10).unwrap();

    // Overlay children show up in the outline dump: 4 nodes x 4 lines
    let lines = dump_lines(&tree, tree.root()).unwrap();
    assert_eq!(lines.len(), 16);
    assert!(lines.iter().any(|l| l.trim_start() == "axes"));
    assert!(lines.iter().any(|l| l.trim_start() == "grid"));

    // Checkbox toggles both child visuals
    helper.set_visible(&mut tree, true);
    assert!(tree.node(helper.axes()).unwrap().visible());
    assert!(tree.node(helper.grid()).unwrap().visible());

    // Deselecting removes the overlay; the dump shrinks accordingly
    helper.detach(&mut tree);
    let lines = dump_lines(&tree, tree.root()).unwrap();
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_integration_property_panel_bindings() {
    let mut rig = CameraRig::new(Vec3::new(0.0, 2.0, 8.0), Vec3::ZERO);

    // FOV slider edits degrees over the radians field
    {
        let mut fov = DegRadAdapter::new(&mut rig, CameraRig::fov_y, CameraRig::set_fov_y);
        fov.set_degrees(60.0);
        assert!((fov.degrees() - 60.0).abs() < 1e-4);
    }
    assert!((rig.fov_y() - 60f32.to_radians()).abs() < 1e-6);

    // Near/far sliders stay ordered through the min/max adapter
    {
        let mut near_far = MinMaxAdapter::new(
            &mut rig,
            CameraRig::near,
            CameraRig::set_near,
            CameraRig::far,
            CameraRig::set_far,
            0.1,
        );
        near_far.set_max(0.05);
        assert!(near_far.max() >= near_far.min() + 0.1 - 1e-6);
    }
    assert!(rig.near() < rig.far());

    // Color picker writes hex through to a material color
    let mut color = TestMaterialColor { rgb: [0.0, 0.0, 0.0] };
    {
        let mut adapter = ColorAdapter::new(&mut color);
        adapter.set_hex("#336699").unwrap();
        assert_eq!(adapter.hex(), "#336699");
    }

    // Fog panel couples near/far and exposes the color as hex
    let mut fog = TestFog { near: 10.0, far: 100.0, rgb: [1.0, 1.0, 1.0] };
    {
        let mut adapter = FogAdapter::new(&mut fog);
        adapter.set_far(5.0);
        adapter.set_hex_color("#aabbcc").unwrap();
    }
    assert_eq!(fog.near, 5.0);
    assert_eq!(fog.far, 5.0);
    assert_eq!(fog.rgb[0], 170.0 / 255.0);
}

//! wireframe drone with spinning rotors and a launcher that fires a missile
//!
//! Every part is the same unit cube drawn with its own model matrix
//! `translate * rotate * scale`, under a view matrix `scale(0.5) * rot_x(theta) * rot_y(phi)`.

use nalgebra::{Matrix4, Vector3};

/// degrees added to the rotor angle every frame
pub const WING_STEP: f32 = 5.;

/// missile advance along z per frame
pub const MISSILE_STEP: f32 = 0.1;

/// frames after which the missile is checked and removed (`time > 5`)
pub const MISSILE_LAST_FRAME: u32 = 50;

const ROTOR_OFFSETS: [[f32; 2]; 4] = [[0.25, 0.5], [-0.25, 0.5], [-0.25, -0.5], [0.25, -0.5]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Body,
    Rotor,
    Launcher,
    Missile,
}

#[derive(Debug, Clone)]
pub struct Part {
    pub kind: PartKind,
    pub view: Matrix4<f32>,
    pub model: Matrix4<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Missile {
    pub frame: u32,
    /// view angles frozen when fired
    pub theta: f32,
    pub phi: f32,
}

impl Missile {
    pub fn time(&self) -> f32 {
        self.frame as f32 * MISSILE_STEP
    }
}

pub struct DroneScene {
    pub wing_theta: f32,
    pub view_theta: f32,
    pub view_phi: f32,
    pub drag_origin: [f64; 2],
    pub missile: Option<Missile>,
}

impl Default for DroneScene {
    fn default() -> Self {
        Self::new()
    }
}

fn view_matrix(theta: f32, phi: f32) -> Matrix4<f32> {
    Matrix4::new_scaling(0.5)
        * Matrix4::from_axis_angle(&Vector3::x_axis(), theta.to_radians())
        * Matrix4::from_axis_angle(&Vector3::y_axis(), phi.to_radians())
}

fn model_matrix(scale: [f32; 3], rot_y: f32, translation: [f32; 3]) -> Matrix4<f32> {
    Matrix4::new_translation(&Vector3::from(translation))
        * Matrix4::from_axis_angle(&Vector3::y_axis(), rot_y.to_radians())
        * Matrix4::new_nonuniform_scaling(&Vector3::from(scale))
}

impl DroneScene {
    pub fn new() -> Self {
        DroneScene {
            wing_theta: 0.,
            view_theta: 0.,
            view_phi: 0.,
            drag_origin: [250., 250.],
            missile: None,
        }
    }

    /// left button went down at `(x, y)`
    pub fn press(&mut self, x: f64, y: f64) {
        self.drag_origin = [x, y];
    }

    /// cursor moved to `(x, y)` while the left button is held
    pub fn drag(&mut self, x: f64, y: f64) {
        self.view_theta = (y - self.drag_origin[1]) as f32;
        self.view_phi = (x - self.drag_origin[0]) as f32;
    }

    /// (re)launch the missile along the current view direction
    pub fn fire(&mut self) {
        self.missile = Some(Missile {
            frame: 0,
            theta: self.view_theta,
            phi: self.view_phi,
        });
    }

    pub fn view(&self) -> Matrix4<f32> {
        view_matrix(self.view_theta, self.view_phi)
    }

    /// the parts to draw in the current state
    pub fn parts(&self) -> Vec<Part> {
        let view = self.view();
        let mut parts = Vec::with_capacity(7);
        parts.push(Part {
            kind: PartKind::Body,
            view,
            model: model_matrix([0.25, 0.25, 0.5], 0., [0., 0., 0.]),
        });
        for [x, z] in ROTOR_OFFSETS {
            parts.push(Part {
                kind: PartKind::Rotor,
                view,
                model: model_matrix([0.2, 0.05, 0.1], self.wing_theta, [x, 0.25, z]),
            });
        }
        parts.push(Part {
            kind: PartKind::Launcher,
            view,
            model: model_matrix([0.01, 0.01, 0.3], 0., [0., -0.25, 0.5]),
        });
        if let Some(missile) = &self.missile {
            parts.push(Part {
                kind: PartKind::Missile,
                view: view_matrix(missile.theta, missile.phi),
                model: model_matrix([0.01, 0.01, 0.3], 0., [0., -0.25, 0.5 + missile.time()]),
            });
        }
        parts
    }

    /// Spins the rotors, returns this frame's parts, then moves the missile on.
    pub fn advance(&mut self) -> Vec<Part> {
        self.wing_theta = (self.wing_theta + WING_STEP) % 360.;
        let parts = self.parts();
        if let Some(missile) = self.missile.as_mut() {
            if missile.frame > MISSILE_LAST_FRAME {
                self.missile = None;
            } else {
                missile.frame += 1;
            }
        }
        parts
    }
}

/// The 12 edges of the cube `[-1,1]^3` as pairs of `xyz` vertices.
pub fn cube_edges() -> Vec<[f32; 3]> {
    let corner = |i: usize| -> [f32; 3] {
        [0, 1, 2].map(|axis| if i & (1 << axis) != 0 { 1. } else { -1. })
    };
    let mut edge2xyz = Vec::with_capacity(24);
    for i in 0..8 {
        for axis in 0..3 {
            if i & (1 << axis) == 0 {
                edge2xyz.push(corner(i));
                edge2xyz.push(corner(i | (1 << axis)));
            }
        }
    }
    edge2xyz
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(m: &Matrix4<f32>) -> [f32; 3] {
        [m[(0, 3)], m[(1, 3)], m[(2, 3)]]
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1.0e-5
    }

    #[test]
    fn rotors_spin_each_frame() {
        let mut scene = DroneScene::new();
        scene.advance();
        scene.advance();
        assert_eq!(scene.wing_theta, 10.);
        for _ in 0..70 {
            scene.advance();
        }
        assert_eq!(scene.wing_theta, 0.);
    }

    #[test]
    fn parts_without_and_with_missile() {
        let mut scene = DroneScene::new();
        let parts = scene.parts();
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[0].kind, PartKind::Body);
        assert_eq!(
            parts.iter().filter(|p| p.kind == PartKind::Rotor).count(),
            4
        );
        assert_eq!(parts[5].kind, PartKind::Launcher);
        scene.fire();
        let parts = scene.parts();
        assert_eq!(parts.len(), 7);
        assert_eq!(parts[6].kind, PartKind::Missile);
    }

    #[test]
    fn rotors_sit_at_the_corners() {
        let scene = DroneScene::new();
        let rotors: Vec<[f32; 3]> = scene
            .parts()
            .iter()
            .filter(|p| p.kind == PartKind::Rotor)
            .map(|p| translation(&p.model))
            .collect();
        assert_eq!(
            rotors,
            vec![
                [0.25, 0.25, 0.5],
                [-0.25, 0.25, 0.5],
                [-0.25, 0.25, -0.5],
                [0.25, 0.25, -0.5]
            ]
        );
    }

    #[test]
    fn rotor_blade_turns_about_y() {
        let mut scene = DroneScene::new();
        scene.wing_theta = 90.;
        let parts = scene.parts();
        let rotor = &parts[1].model;
        // blade tip along +x ends up along -z after a quarter turn
        let tip = rotor * nalgebra::Vector4::new(1., 0., 0., 1.);
        assert!(close(tip.x, 0.25));
        assert!(close(tip.y, 0.25));
        assert!(close(tip.z, 0.5 - 0.2));
    }

    #[test]
    fn missile_flies_then_disappears() {
        let mut scene = DroneScene::new();
        scene.fire();
        let mut frames_with_missile = 0;
        let mut last_z = f32::NEG_INFINITY;
        for _ in 0..100 {
            let parts = scene.advance();
            if let Some(m) = parts.iter().find(|p| p.kind == PartKind::Missile) {
                let z = translation(&m.model)[2];
                assert!(z > last_z);
                last_z = z;
                frames_with_missile += 1;
            }
        }
        assert_eq!(frames_with_missile, 52);
        assert!(close(last_z, 0.5 + 5.1));
        assert!(scene.missile.is_none());
    }

    #[test]
    fn missile_keeps_its_launch_direction() {
        let mut scene = DroneScene::new();
        scene.press(100., 100.);
        scene.drag(130., 120.);
        scene.fire();
        scene.drag(100., 100.);
        let missile = scene.missile.unwrap();
        assert_eq!((missile.theta, missile.phi), (20., 30.));
        let parts = scene.parts();
        assert_eq!(parts[0].view, view_matrix(0., 0.));
        assert_eq!(parts[6].view, view_matrix(20., 30.));
    }

    #[test]
    fn firing_again_restarts() {
        let mut scene = DroneScene::new();
        scene.fire();
        for _ in 0..10 {
            scene.advance();
        }
        scene.fire();
        assert_eq!(scene.missile.unwrap().frame, 0);
    }

    #[test]
    fn drag_is_relative_to_press() {
        let mut scene = DroneScene::new();
        scene.drag(260., 230.);
        assert_eq!((scene.view_theta, scene.view_phi), (-20., 10.));
        scene.press(0., 0.);
        scene.drag(5., 7.);
        assert_eq!((scene.view_theta, scene.view_phi), (7., 5.));
    }

    #[test]
    fn cube_has_twelve_unit_edges() {
        let edge2xyz = cube_edges();
        assert_eq!(edge2xyz.len(), 24);
        for e in edge2xyz.chunks(2) {
            let diff: Vec<f32> = (0..3).map(|k| (e[0][k] - e[1][k]).abs()).collect();
            assert_eq!(diff.iter().filter(|&&d| d == 2.).count(), 1);
            assert_eq!(diff.iter().filter(|&&d| d == 0.).count(), 2);
        }
    }
}

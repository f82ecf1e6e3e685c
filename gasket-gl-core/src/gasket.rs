//! Sierpinski gasket approximated by randomized midpoint subdivision
//!
//! Start with a triangle, pick any point inside of it, and find the point
//! halfway towards a randomly chosen vertex. Repeat with the new point until
//! there are sufficient points.

use num_traits::AsPrimitive;

/// corners of the (upside down) bounding triangle
pub const TRIANGLE_VERTICES: [[f64; 2]; 3] = [[-1.0, 1.0], [0.0, -1.0], [1.0, 1.0]];

/// arbitrary initial point inside of the triangle
pub const SEED_POINT: [f64; 2] = [0.25, 0.50];

pub const DEFAULT_NUM_POINT: usize = 1000;

/// Source of the vertex index used for each midpoint step.
///
/// An index outside of `{0,1,2}` is reduced modulo 3.
pub trait VertexPicker {
    fn pick_vertex(&mut self) -> usize;
}

impl<F: FnMut() -> usize> VertexPicker for F {
    fn pick_vertex(&mut self) -> usize {
        self()
    }
}

/// uniform choice of the vertex drawn from `rng`
pub struct RandomPicker<R>(pub R);

impl<R: rand::Rng> VertexPicker for RandomPicker<R> {
    fn pick_vertex(&mut self) -> usize {
        self.0.random_range(0..3)
    }
}

impl RandomPicker<rand::rngs::StdRng> {
    /// reproducible when `seed` is given, seeded from the OS otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        use rand::SeedableRng;
        match seed {
            Some(seed) => RandomPicker(rand::rngs::StdRng::seed_from_u64(seed)),
            None => RandomPicker(rand::rngs::StdRng::from_os_rng()),
        }
    }
}

/// `num_point` points of the gasket; zero is treated as one.
pub fn generate<T, P>(num_point: usize, picker: &mut P) -> Vec<[T; 2]>
where
    T: num_traits::Float + 'static,
    f64: AsPrimitive<T>,
    P: VertexPicker + ?Sized,
{
    let num_point = num_point.max(1);
    let half: T = 0.5_f64.as_();
    let tri2xy: [[T; 2]; 3] = TRIANGLE_VERTICES.map(|v| [v[0].as_(), v[1].as_()]);
    let mut vtx2xy = Vec::<[T; 2]>::with_capacity(num_point);
    vtx2xy.push([SEED_POINT[0].as_(), SEED_POINT[1].as_()]);
    for i in 1..num_point {
        let p0 = vtx2xy[i - 1];
        let q = tri2xy[picker.pick_vertex() % 3];
        vtx2xy.push([(p0[0] + q[0]) * half, (p0[1] + q[1]) * half]);
    }
    vtx2xy
}

/// The points currently shown, regenerated from scratch whenever the count changes.
pub struct PointCloud<P: VertexPicker> {
    picker: P,
    vtx2xy: Vec<[f32; 2]>,
}

impl<P: VertexPicker> PointCloud<P> {
    pub fn new(num_point: usize, mut picker: P) -> Self {
        let vtx2xy = generate(num_point, &mut picker);
        Self { picker, vtx2xy }
    }

    pub fn num_point(&self) -> usize {
        self.vtx2xy.len()
    }

    /// interleaved `x0, y0, x1, y1, ...` for buffer upload
    pub fn as_flat(&self) -> &[f32] {
        self.vtx2xy.as_flattened()
    }

    /// double the number of points
    pub fn grow(&mut self) {
        self.resize(self.num_point().saturating_mul(2));
    }

    /// halve the number of points, never going below one
    pub fn shrink(&mut self) {
        self.resize(self.num_point() / 2);
    }

    /// Discards the current points and generates `num_point` new ones (at least one).
    pub fn resize(&mut self, num_point: usize) {
        self.vtx2xy = generate(num_point, &mut self.picker);
        log::info!("NumPoints = {}", self.vtx2xy.len());
    }
}

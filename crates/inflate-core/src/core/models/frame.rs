use nalgebra::{Point3, Vector3};

/// The periodic box recorded alongside a frame.
///
/// Boxes are carried through unchanged; no wrapping is ever performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationBox {
    /// Box lengths along x, y and z.
    Rectangular([f64; 3]),
    /// The nine GRO box components: v1(x) v2(y) v3(z) v1(y) v1(z) v2(x) v2(z) v3(x) v3(y).
    Triclinic([f64; 9]),
}

impl SimulationBox {
    /// Builds a box from the values of a GRO box line (3 or 9 numbers).
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values.len() {
            3 => Some(SimulationBox::Rectangular([values[0], values[1], values[2]])),
            9 => {
                let mut v = [0.0; 9];
                v.copy_from_slice(values);
                Some(SimulationBox::Triclinic(v))
            }
            _ => None,
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            SimulationBox::Rectangular(v) => v,
            SimulationBox::Triclinic(v) => v,
        }
    }
}

/// One snapshot of a structure: a position per atom, ordered by atom index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
    velocities: Option<Vec<Vector3<f64>>>,
    /// The periodic box of this frame, if the file records one.
    pub simulation_box: Option<SimulationBox>,
}

impl Frame {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self {
            positions,
            velocities: None,
            simulation_box: None,
        }
    }

    pub fn with_velocities(mut self, velocities: Vec<Vector3<f64>>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    pub fn with_box(mut self, simulation_box: SimulationBox) -> Self {
        self.simulation_box = Some(simulation_box);
        self
    }

    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Mutable access to positions; the slice cannot change the frame's atom count.
    pub fn positions_mut(&mut self) -> &mut [Point3<f64>] {
        &mut self.positions
    }

    pub fn velocities(&self) -> Option<&[Vector3<f64>]> {
        self.velocities.as_deref()
    }
}

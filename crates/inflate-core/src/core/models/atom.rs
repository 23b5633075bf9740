/// Naming metadata for one atom (or coarse-grained bead) of a structure.
///
/// Coordinates are not stored here; they live in each [`Frame`](super::frame::Frame),
/// indexed by the atom's position in the topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomInfo {
    /// The serial number as written in the source file.
    pub serial: usize,
    /// The atom or bead name (e.g., "NC3", "PO4", "C1A").
    pub name: String,
}

impl AtomInfo {
    /// Creates a new `AtomInfo` from a serial number and a name.
    pub fn new(serial: usize, name: &str) -> Self {
        Self {
            serial,
            name: name.to_string(),
        }
    }
}

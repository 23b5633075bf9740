use super::atom::AtomInfo;
use super::residue::Residue;

/// The ordered atoms and residues shared by every frame of a structure.
///
/// Atom `i` of the topology corresponds to row `i` of every frame's coordinate array.
/// Residues reference atoms by these indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    atoms: Vec<AtomInfo>,
    residues: Vec<Residue>,
}

impl Topology {
    /// Creates a topology from atoms and residues without checking consistency.
    ///
    /// Consistency between the two is checked when the topology is wrapped in a
    /// [`Structure`](super::structure::Structure).
    pub fn new(atoms: Vec<AtomInfo>, residues: Vec<Residue>) -> Self {
        Self { atoms, residues }
    }

    pub fn atoms(&self) -> &[AtomInfo] {
        &self.atoms
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Returns, for every atom, the index of the residue that owns it.
    ///
    /// Atoms not claimed by any residue map to `None`.
    pub fn residue_index_per_atom(&self) -> Vec<Option<usize>> {
        let mut owners = vec![None; self.atoms.len()];
        for (res_idx, residue) in self.residues.iter().enumerate() {
            for &atom_idx in residue.atoms() {
                if let Some(slot) = owners.get_mut(atom_idx) {
                    *slot = Some(res_idx);
                }
            }
        }
        owners
    }
}

/// Incrementally builds a [`Topology`] from atom records in file order.
///
/// A new residue is started whenever the (chain, residue number, residue name) key of
/// an incoming atom differs from the residue currently being filled.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    topology: Topology,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one atom record and returns its atom index.
    pub fn push_atom(
        &mut self,
        chain_id: Option<char>,
        res_number: isize,
        res_name: &str,
        serial: usize,
        atom_name: &str,
    ) -> usize {
        let atom_idx = self.topology.atoms.len();

        let continues_current = self
            .topology
            .residues
            .last()
            .is_some_and(|res| res.matches(chain_id, res_number, res_name));
        if !continues_current {
            self.topology
                .residues
                .push(Residue::new(res_number, res_name, chain_id));
        }
        if let Some(residue) = self.topology.residues.last_mut() {
            residue.add_atom(atom_idx);
        }

        self.topology.atoms.push(AtomInfo::new(serial, atom_name));
        atom_idx
    }

    pub fn atom_count(&self) -> usize {
        self.topology.atoms.len()
    }

    pub fn build(self) -> Topology {
        self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_groups_consecutive_atoms_with_same_key() {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 1, "POPC", 1, "NC3");
        builder.push_atom(None, 1, "POPC", 2, "PO4");
        builder.push_atom(None, 2, "POPC", 3, "NC3");
        builder.push_atom(None, 2, "POPC", 4, "PO4");
        let topology = builder.build();

        assert_eq!(topology.atom_count(), 4);
        assert_eq!(topology.residue_count(), 2);
        assert_eq!(topology.residues()[0].atoms(), &[0, 1]);
        assert_eq!(topology.residues()[1].atoms(), &[2, 3]);
        assert_eq!(topology.atoms()[3].name, "PO4");
    }

    #[test]
    fn builder_starts_new_residue_when_name_changes_with_same_number() {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 1, "POPC", 1, "NC3");
        builder.push_atom(None, 1, "W", 2, "W");
        let topology = builder.build();

        assert_eq!(topology.residue_count(), 2);
        assert_eq!(topology.residues()[1].name, "W");
    }

    #[test]
    fn builder_starts_new_residue_when_chain_changes() {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(Some('A'), 1, "LIG", 1, "C1");
        builder.push_atom(Some('B'), 1, "LIG", 2, "C1");
        let topology = builder.build();

        assert_eq!(topology.residue_count(), 2);
        assert_eq!(topology.residues()[0].chain_id, Some('A'));
        assert_eq!(topology.residues()[1].chain_id, Some('B'));
    }

    #[test]
    fn non_adjacent_records_with_same_key_form_separate_residues() {
        let mut builder = TopologyBuilder::new();
        builder.push_atom(None, 1, "POPC", 1, "NC3");
        builder.push_atom(None, 2, "POPC", 2, "NC3");
        builder.push_atom(None, 1, "POPC", 3, "PO4");
        let topology = builder.build();

        assert_eq!(topology.residue_count(), 3);
    }

    #[test]
    fn push_atom_returns_sequential_indices() {
        let mut builder = TopologyBuilder::new();
        assert_eq!(builder.push_atom(None, 1, "W", 1, "W"), 0);
        assert_eq!(builder.push_atom(None, 2, "W", 2, "W"), 1);
        assert_eq!(builder.atom_count(), 2);
    }

    #[test]
    fn residue_index_per_atom_maps_owners() {
        let atoms = (0..4).map(|i| AtomInfo::new(i + 1, "B")).collect();
        let residues = vec![
            Residue::with_atoms(1, "A", None, vec![0, 2]),
            Residue::with_atoms(2, "B", None, vec![1]),
        ];
        let topology = Topology::new(atoms, residues);

        assert_eq!(
            topology.residue_index_per_atom(),
            vec![Some(0), Some(1), Some(0), None]
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,             // Residue sequence number from source file
    pub name: String,              // Name of the residue (e.g., "POPC", "W")
    pub chain_id: Option<char>,    // Chain identifier, for formats that carry one
    pub(crate) atoms: Vec<usize>,  // Indices of atoms belonging to this residue
}

impl Residue {
    pub fn new(number: isize, name: &str, chain_id: Option<char>) -> Self {
        Self {
            number,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
        }
    }

    /// Creates a residue that owns the given atom indices.
    pub fn with_atoms(number: isize, name: &str, chain_id: Option<char>, atoms: Vec<usize>) -> Self {
        Self {
            number,
            name: name.to_string(),
            chain_id,
            atoms,
        }
    }

    pub(crate) fn add_atom(&mut self, atom_index: usize) {
        self.atoms.push(atom_index);
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Whether an atom record with the given identity continues this residue.
    pub(crate) fn matches(&self, chain_id: Option<char>, number: isize, name: &str) -> bool {
        self.chain_id == chain_id && self.number == number && self.name == name
    }
}

/// A labeled entity with a strength value and a list of bonded neighbor ids.
///
/// Bonds are stored on one endpoint only: a molecule may list a neighbor that
/// does not list it back. The relation is still treated as undirected by
/// structure discovery.
///
/// # Examples
///
/// ```
/// use serum_forge::Molecule;
///
/// let m = Molecule::new("M1", 2.5).with_bonds(["M2", "M3"]);
/// assert_eq!(m.id, "M1");
/// assert!(m.bonds_to("M3"));
/// assert!(!m.bonds_to("M4"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    /// Identifier, unique within a [`MolecularData`](crate::MolecularData) store.
    pub id: String,
    /// Strength value; selects representatives and weighs synthesized bonds.
    pub strength: f64,
    /// Ids of bonded neighbors, in declaration order.
    pub bonds: Vec<String>,
}

impl Molecule {
    pub fn new(id: impl Into<String>, strength: f64) -> Self {
        Self {
            id: id.into(),
            strength,
            bonds: Vec::new(),
        }
    }

    pub fn with_bonds<I, S>(mut self, bonds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bonds.extend(bonds.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if this molecule's own bond list names `id`.
    #[inline]
    pub fn bonds_to(&self, id: &str) -> bool {
        self.bonds.iter().any(|b| b == id)
    }
}

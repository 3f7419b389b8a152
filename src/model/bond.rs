use super::molecule::Molecule;

/// A synthesized link between two molecules.
///
/// The weight is derived from the endpoints when the bond is created and is
/// never stored on the molecules themselves.
#[derive(Debug, Clone, Copy)]
pub struct Bond<'a> {
    from: &'a Molecule,
    to: &'a Molecule,
    weight: f64,
}

impl<'a> Bond<'a> {
    /// Creates a bond weighted by the mean of the two endpoint strengths.
    pub fn between(from: &'a Molecule, to: &'a Molecule) -> Self {
        Self {
            from,
            to,
            weight: (from.strength + to.strength) / 2.0,
        }
    }

    #[inline]
    pub fn from(&self) -> &'a Molecule {
        self.from
    }

    #[inline]
    pub fn to(&self) -> &'a Molecule {
        self.to
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn endpoints(&self) -> (&'a Molecule, &'a Molecule) {
        (self.from, self.to)
    }

    pub fn connects(&self, id: &str) -> bool {
        self.from.id == id || self.to.id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_is_mean_of_strengths() {
        let a = Molecule::new("A", 1.0);
        let c = Molecule::new("C", 3.0);
        let bond = Bond::between(&a, &c);
        assert_eq!(bond.weight(), 2.0);
        assert_eq!(bond.from().id, "A");
        assert_eq!(bond.to().id, "C");
    }

    #[test]
    fn connects_either_endpoint() {
        let a = Molecule::new("A", 1.0);
        let b = Molecule::new("B", 2.0);
        let bond = Bond::between(&a, &b);
        assert!(bond.connects("A"));
        assert!(bond.connects("B"));
        assert!(!bond.connects("C"));
    }
}

use std::fmt;

use super::constants::{Family, Role};

/// A single playing card. Two cards are the same card when family and role match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    family: Family,
    role: Role,
}

impl Card {
    pub fn new(family: Family, role: Role) -> Self {
        Card { family, role }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn matches(&self, family: Family, role: Role) -> bool {
        self.family == family && self.role == role
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.role, self.family)
    }
}

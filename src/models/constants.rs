use std::fmt;
use std::str::FromStr;

pub const NUM_FAMILIES: usize = 11;
pub const CARDS_PER_FAMILY: usize = 4;
pub const DECK_SIZE: usize = NUM_FAMILIES * CARDS_PER_FAMILY;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Total number of cards handed out at the start, split evenly between players.
pub const DEFAULT_DEAL_TOTAL: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Block,
    Bones,
    Bun,
    Bung,
    Chip,
    Dip,
    Dose,
    Grits,
    Pots,
    Soot,
    Tape,
}

impl Family {
    pub fn name(&self) -> &'static str {
        match self {
            Family::Block => "Block, the Barber",
            Family::Bones => "Bones, the Butcher",
            Family::Bun => "Bun, the Baker",
            Family::Bung => "Bung, the Brewer",
            Family::Chip => "Chip, the Carpenter",
            Family::Dip => "Dip, the Dyer",
            Family::Dose => "Dose, the Doctor",
            Family::Grits => "Grits, the Grocer",
            Family::Pots => "Pots, the Painter",
            Family::Soot => "Soot, the Sweep",
            Family::Tape => "Tape, the Tailor",
        }
    }

    /// Surname alone, e.g. "Bun".
    pub fn surname(&self) -> &'static str {
        match self.name().split_once(',') {
            Some((surname, _)) => surname,
            None => self.name(),
        }
    }

    pub const ALL: [Family; NUM_FAMILIES] = [
        Family::Block,
        Family::Bones,
        Family::Bun,
        Family::Bung,
        Family::Chip,
        Family::Dip,
        Family::Dose,
        Family::Grits,
        Family::Pots,
        Family::Soot,
        Family::Tape,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a known family or role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl FromStr for Family {
    type Err = UnknownName;

    /// Accepts the full name or the surname, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Family::ALL
            .iter()
            .copied()
            .find(|family| {
                family.name().eq_ignore_ascii_case(wanted)
                    || family.surname().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownName(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Father,
    Mother,
    Son,
    Daughter,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Father => "father",
            Role::Mother => "mother",
            Role::Son => "son",
            Role::Daughter => "daughter",
        }
    }

    pub const ALL: [Role; CARDS_PER_FAMILY] = [Role::Father, Role::Mother, Role::Son, Role::Daughter];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownName(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_full_name_and_surname() {
        assert_eq!("Bun, the Baker".parse::<Family>(), Ok(Family::Bun));
        assert_eq!("  bun ".parse::<Family>(), Ok(Family::Bun));
        assert_eq!("BUNG".parse::<Family>(), Ok(Family::Bung));
        assert_eq!("soot, the sweep".parse::<Family>(), Ok(Family::Soot));
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert_eq!(
            "Smith".parse::<Family>(),
            Err(UnknownName("Smith".to_string()))
        );
        assert!("".parse::<Family>().is_err());
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Daughter".parse::<Role>(), Ok(Role::Daughter));
        assert_eq!(" father\n".parse::<Role>(), Ok(Role::Father));
        assert!("uncle".parse::<Role>().is_err());
    }

    #[test]
    fn surnames_are_distinct() {
        for (i, a) in Family::ALL.iter().enumerate() {
            for b in &Family::ALL[i + 1..] {
                assert_ne!(a.surname(), b.surname());
            }
        }
    }
}

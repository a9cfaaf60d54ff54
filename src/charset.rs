//! Character classes and their alphabets.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+<>?";

/// Union of all class alphabets, used for padding.
pub const FULL_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+<>?";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Digit,
    Uppercase,
    Lowercase,
    Special,
}

impl CharacterClass {
    /// All classes in the order required characters are appended.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Digit,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Digit => DIGITS,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// The class `c` belongs to, if it is part of the full alphabet.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

//! Character classes and pool building for password generation.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>/?";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes in pool order.
    pub const ALL: [CharClass; 4] = [Self::Lower, Self::Upper, Self::Digits, Self::Symbols];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        }
    }

    /// The literal characters of this class. Always ASCII and non-empty.
    pub const fn chars(self) -> &'static [u8] {
        match self {
            Self::Lower => LOWERCASE,
            Self::Upper => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which classes the caller wants. Defaults to all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassFlags {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassFlags {
    pub const fn new(lower: bool, upper: bool, digits: bool, symbols: bool) -> Self {
        Self {
            lower,
            upper,
            digits,
            symbols,
        }
    }

    /// True if at least one class is enabled.
    pub const fn any(self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }

    const fn enabled(self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }
}

impl Default for ClassFlags {
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}

/// The enabled classes, in lower, upper, digits, symbols order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<CharClass>,
}

impl ClassSet {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }

    /// Characters of the named class, if it is enabled.
    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.classes
            .iter()
            .find(|class| class.name() == name)
            .map(|class| class.chars())
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        self.classes.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = CharClass;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, CharClass>>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter().copied()
    }
}

/// Concatenation of every enabled class. Repeats are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<u8>,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.chars {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

/// Build the class set and pool for the enabled flags.
///
/// All-false is valid and yields an empty set and pool; the generator rejects it.
pub fn build(flags: ClassFlags) -> (ClassSet, Pool) {
    let mut classes = Vec::with_capacity(CharClass::ALL.len());
    let mut chars = Vec::new();

    for class in CharClass::ALL {
        if flags.enabled(class) {
            classes.push(class);
            chars.extend_from_slice(class.chars());
        }
    }

    log::debug!(
        "charset built: {} class(es), pool of {} chars",
        classes.len(),
        chars.len()
    );

    (ClassSet { classes }, Pool { chars })
}

/// Class set containing exactly the given classes, kept in canonical order.
pub fn classes_of(wanted: &[CharClass]) -> ClassSet {
    ClassSet {
        classes: CharClass::ALL
            .into_iter()
            .filter(|class| wanted.contains(class))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_only() {
        let (classes, pool) = build(ClassFlags::new(true, false, false, false));
        assert_eq!(classes.len(), 1);
        assert_eq!(classes.get("lower"), Some(&b"abcdefghijklmnopqrstuvwxyz"[..]));
        assert_eq!(pool.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn nothing_enabled() {
        let (classes, pool) = build(ClassFlags::new(false, false, false, false));
        assert!(classes.is_empty());
        assert!(pool.is_empty());
        assert_eq!(pool.to_string(), "");
    }

    #[test]
    fn all_enabled_in_order() {
        let (classes, pool) = build(ClassFlags::default());
        let names: Vec<_> = classes.iter().map(CharClass::name).collect();
        assert_eq!(names, ["lower", "upper", "digits", "symbols"]);
        assert_eq!(pool.len(), 26 + 26 + 10 + 26);
        assert_eq!(
            pool.to_string(),
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{};:,.<>/?"
        );
    }

    #[test]
    fn order_is_fixed_regardless_of_subset() {
        let (classes, pool) = build(ClassFlags::new(false, true, false, true));
        let names: Vec<_> = classes.iter().map(CharClass::name).collect();
        assert_eq!(names, ["upper", "symbols"]);
        assert!(pool.to_string().starts_with("ABC"));
        assert!(pool.to_string().ends_with("/?"));
    }

    #[test]
    fn symbols_literal() {
        assert_eq!(CharClass::Symbols.chars().len(), 26);
        assert_eq!(CharClass::Symbols.chars(), b"!@#$%^&*()-_=+[]{};:,.<>/?");
    }

    #[test]
    fn pool_empty_iff_classes_empty() {
        for bits in 0u8..16 {
            let flags = ClassFlags::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let (classes, pool) = build(flags);
            assert_eq!(classes.is_empty(), pool.is_empty());
            assert_eq!(flags.any(), !classes.is_empty());
            assert_eq!(classes.len(), bits.count_ones() as usize);
        }
    }

    #[test]
    fn classes_of_sorts_canonically() {
        let set = classes_of(&[CharClass::Digits, CharClass::Lower]);
        let names: Vec<_> = set.iter().map(CharClass::name).collect();
        assert_eq!(names, ["lower", "digits"]);
    }

    #[test]
    fn class_membership() {
        assert!(CharClass::Digits.contains('7'));
        assert!(!CharClass::Digits.contains('a'));
        assert!(CharClass::Symbols.contains('?'));
        assert!(!CharClass::Symbols.contains('~'));
        assert!(!CharClass::Lower.contains('é'));
        assert_eq!(CharClass::from_name("upper"), Some(CharClass::Upper));
        assert_eq!(CharClass::from_name("emoji"), None);
    }
}

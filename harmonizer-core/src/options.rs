//! # Option Registry
//!
//! The enumerated choices offered by the form's dropdowns. Every set lists
//! its options in display order, and the first option is the default.
//! Beats per minute is free text and has no entry here.
//!
//! Each option also knows how it maps onto the positional arguments of the
//! external `import` program (see [`crate::invocation`]).

use std::fmt;

/// Meter of the uploaded melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSignature {
    #[default]
    FourFour,
    ThreeFour,
}

impl TimeSignature {
    pub const ALL: [TimeSignature; 2] = [TimeSignature::FourFour, TimeSignature::ThreeFour];

    /// Beats per measure, as `import` expects for its meter argument.
    pub fn beats(self) -> u8 {
        match self {
            TimeSignature::FourFour => 4,
            TimeSignature::ThreeFour => 3,
        }
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeSignature::FourFour => "4/4",
            TimeSignature::ThreeFour => "3/4",
        })
    }
}

/// Major key of the melody, ordered around the circle of fifths from F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Key {
    #[default]
    F,
    C,
    G,
    D,
    A,
    E,
    B,
}

impl Key {
    pub const ALL: [Key; 7] = [Key::F, Key::C, Key::G, Key::D, Key::A, Key::E, Key::B];

    /// Number of sharps (positive) or flats (negative) in the key signature.
    pub fn fifths(self) -> i8 {
        match self {
            Key::F => -1,
            Key::C => 0,
            Key::G => 1,
            Key::D => 2,
            Key::A => 3,
            Key::E => 4,
            Key::B => 5,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::F => "F",
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::B => "B",
        };
        f.write_str(name)
    }
}

/// How many output files to produce. Collected but not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberOfFiles {
    #[default]
    One,
    Two,
    Three,
}

impl NumberOfFiles {
    pub const ALL: [NumberOfFiles; 3] = [NumberOfFiles::One, NumberOfFiles::Two, NumberOfFiles::Three];

    pub fn count(self) -> u8 {
        match self {
            NumberOfFiles::One => 1,
            NumberOfFiles::Two => 2,
            NumberOfFiles::Three => 3,
        }
    }
}

impl fmt::Display for NumberOfFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Number of voices in the harmonized score, melody included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberOfParts {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl NumberOfParts {
    pub const ALL: [NumberOfParts; 4] = [
        NumberOfParts::One,
        NumberOfParts::Two,
        NumberOfParts::Three,
        NumberOfParts::Four,
    ];

    pub fn count(self) -> u8 {
        match self {
            NumberOfParts::One => 1,
            NumberOfParts::Two => 2,
            NumberOfParts::Three => 3,
            NumberOfParts::Four => 4,
        }
    }
}

impl fmt::Display for NumberOfParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// How often the harmony changes chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Fast,
    Medium,
    Slow,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Fast, Speed::Medium, Speed::Slow];

    /// Harmonic rhythm index understood by `import`:
    /// 0 = every 4 beats, 1 = every 3, 2 = every 2, 3 = follow the melody.
    pub fn harmonic_rhythm(self) -> u8 {
        match self {
            Speed::Fast => 3,
            Speed::Medium => 2,
            Speed::Slow => 0,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Speed::Fast => "Fast",
            Speed::Medium => "Medium",
            Speed::Slow => "Slow",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<T: fmt::Display>(all: &[T]) -> Vec<String> {
        all.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn option_sets_match_the_form_labels() {
        assert_eq!(labels(&TimeSignature::ALL), ["4/4", "3/4"]);
        assert_eq!(labels(&Key::ALL), ["F", "C", "G", "D", "A", "E", "B"]);
        assert_eq!(labels(&NumberOfFiles::ALL), ["1", "2", "3"]);
        assert_eq!(labels(&NumberOfParts::ALL), ["1", "2", "3", "4"]);
        assert_eq!(labels(&Speed::ALL), ["Fast", "Medium", "Slow"]);
    }

    #[test]
    fn default_is_first_option() {
        assert_eq!(TimeSignature::default(), TimeSignature::ALL[0]);
        assert_eq!(Key::default(), Key::ALL[0]);
        assert_eq!(NumberOfFiles::default(), NumberOfFiles::ALL[0]);
        assert_eq!(NumberOfParts::default(), NumberOfParts::ALL[0]);
        assert_eq!(Speed::default(), Speed::ALL[0]);
    }

    #[test]
    fn keys_stay_inside_import_range() {
        let fifths: Vec<i8> = Key::ALL.iter().map(|k| k.fifths()).collect();
        assert_eq!(fifths, [-1, 0, 1, 2, 3, 4, 5]);
        assert!(fifths.iter().all(|f| (-7..=7).contains(f)));
    }

    #[test]
    fn meter_and_rhythm_mapping() {
        assert_eq!(TimeSignature::FourFour.beats(), 4);
        assert_eq!(TimeSignature::ThreeFour.beats(), 3);
        assert!(Speed::ALL.iter().all(|s| s.harmonic_rhythm() <= 3));
        assert!(Speed::Fast.harmonic_rhythm() > Speed::Slow.harmonic_rhythm());
    }
}

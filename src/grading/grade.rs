use serde::{Deserialize, Serialize};

use crate::grading::utility::round_half_up;

/// Letter grade assigned to a weighted average on the 0–100 scale.
///
/// The average is rounded half-up to an integer before the breakpoints apply.
///
/// | Rounded     | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_average(avg: f64) -> Self {
        match round_half_up(avg) {
            s if s >= 90.0 => Self::A,
            s if s >= 80.0 => Self::B,
            s if s >= 70.0 => Self::C,
            s if s >= 60.0 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Style class a renderer attaches to the letter badge.
    pub fn class_name(&self) -> String {
        format!("letter {}", self.as_str())
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(89.5), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(89.49), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(79.4), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(69.5), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(59.49), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
    }

    #[test]
    fn test_display_and_class() {
        assert_eq!(LetterGrade::B.to_string(), "B");
        assert_eq!(LetterGrade::F.class_name(), "letter F");
    }
}

//! Built-in subject lists: the rows shown on first start and the example pool.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::grading::SubjectEntry;

/// Number of subjects picked by the `example` command unless told otherwise.
pub const DEFAULT_EXAMPLE_COUNT: usize = 4;

static SEED: &[(&str, f64, f64)] = &[("Mathematics", 92.0, 20.0), ("English", 88.0, 20.0)];

static EXAMPLE_POOL: &[(&str, f64, f64)] = &[
    ("Quantum Physics", 95.0, 30.0),
    ("Organic Chemistry", 88.0, 30.0),
    ("Advanced Calculus", 91.0, 25.0),
    ("History of Science", 82.0, 15.0),
    ("Literary Analysis", 85.0, 20.0),
    ("Microeconomics", 90.0, 20.0),
    ("Data Structures", 94.0, 25.0),
    ("Studio Art", 98.0, 15.0),
    ("Linear Algebra", 89.0, 20.0),
    ("Philosophy", 87.0, 15.0),
];

fn to_entries(rows: &[(&str, f64, f64)]) -> Vec<SubjectEntry> {
    rows.iter()
        .map(|&(name, score, weight)| SubjectEntry::new(name, Some(score), Some(weight)))
        .collect()
}

/// Rows used when nothing has been saved yet.
pub fn default_seed() -> Vec<SubjectEntry> {
    to_entries(SEED)
}

pub fn example_pool() -> Vec<SubjectEntry> {
    to_entries(EXAMPLE_POOL)
}

/// Picks `count` distinct subjects from the example pool in random order.
/// Asking for more than the pool holds returns the whole pool, shuffled.
pub fn pick_examples<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<SubjectEntry> {
    let pool = example_pool();
    pool.choose_multiple(rng, count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_seed() {
        let seed = default_seed();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0], SubjectEntry::new("Mathematics", Some(92.0), Some(20.0)));
        assert_eq!(seed[1], SubjectEntry::new("English", Some(88.0), Some(20.0)));
    }

    #[test]
    fn test_pick_examples_distinct_and_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_examples(&mut rng, DEFAULT_EXAMPLE_COUNT);
        let pool = example_pool();

        assert_eq!(picked.len(), 4);
        for entry in &picked {
            assert!(pool.contains(entry));
        }
        let mut names: Vec<_> = picked.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_pick_more_than_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_examples(&mut rng, 50).len(), example_pool().len());
    }
}

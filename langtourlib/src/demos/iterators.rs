//! Iterator adapters and collectors.
//!
//! The pipelines run over `1..=10` and a small roster of heroes and
//! villains. Each demo borrows its input and collects a fresh result.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;
use rayon::prelude::*;

use crate::output::Report;
use crate::value::{Summary, Value};
use crate::Result;

pub const TITLE: &str = "Iterators - demonstrations";

/// The numbers every numeric demo runs over.
pub const NUMBERS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Characters used by the text demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hero {
    Batman,
    Superman,
    TheFlash,
    Aquaman,
    Coringa,
    Arlequina,
}

impl Hero {
    pub const ALL: [Hero; 6] = [
        Hero::Batman,
        Hero::Superman,
        Hero::TheFlash,
        Hero::Aquaman,
        Hero::Coringa,
        Hero::Arlequina,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Hero::Batman => "Batman",
            Hero::Superman => "Superman",
            Hero::TheFlash => "The Flash",
            Hero::Aquaman => "Aquaman",
            Hero::Coringa => "Coringa",
            Hero::Arlequina => "Arlequina",
        }
    }

    /// Declared constant name, e.g. `THE_FLASH`.
    pub fn constant_name(&self) -> &'static str {
        match self {
            Hero::Batman => "BATMAN",
            Hero::Superman => "SUPERMAN",
            Hero::TheFlash => "THE_FLASH",
            Hero::Aquaman => "AQUAMAN",
            Hero::Coringa => "CORINGA",
            Hero::Arlequina => "ARLEQUINA",
        }
    }

    /// Display names of the whole roster, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Hero::name).collect()
    }
}

impl From<Hero> for Value {
    fn from(hero: Hero) -> Self {
        Value::constant(hero.constant_name())
    }
}

pub fn filter_even(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn map_upper(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_uppercase()).collect()
}

pub fn sorted(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .sorted()
        .map(|s| s.to_string())
        .collect()
}

pub fn take_three(names: &[&str]) -> Vec<String> {
    names.iter().take(3).map(|s| s.to_string()).collect()
}

pub fn count_starting_with_a(names: &[&str]) -> usize {
    names.iter().filter(|n| n.starts_with('A')).count()
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn distinct(values: &[&str]) -> Vec<String> {
    values.iter().unique().map(|s| s.to_string()).collect()
}

pub fn skip(names: &[&str], n: usize) -> Vec<String> {
    names.iter().skip(n).map(|s| s.to_string()).collect()
}

/// `inspect` observes each element as it flows through the pipeline.
pub fn inspect_trim(names: &[&str]) -> (Vec<String>, usize) {
    let mut seen = 0;
    let trimmed = names
        .iter()
        .inspect(|_| seen += 1)
        .map(|s| s.trim().to_string())
        .collect();
    (trimmed, seen)
}

pub fn flat_map_words(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .flat_map(|s| s.split_whitespace())
        .map(str::to_string)
        .collect()
}

pub fn fold_sum(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0, |acc, n| acc + n)
}

pub fn min(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().min()
}

pub fn max(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().max()
}

pub fn any_contains_man(names: &[&str]) -> bool {
    names.iter().any(|n| n.to_lowercase().contains("man"))
}

pub fn all_at_least_three(names: &[&str]) -> bool {
    names.iter().all(|n| n.chars().count() >= 3)
}

pub fn none_start_with_z(names: &[&str]) -> bool {
    !names.iter().any(|n| n.starts_with('Z'))
}

pub fn find_first_starting_with_s(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find(|n| n.starts_with('S'))
        .map(|s| s.to_string())
}

/// Parallel search; any matching element may be returned.
pub fn par_find_any_with_space(names: &[&str]) -> Option<String> {
    names
        .par_iter()
        .find_any(|n| n.contains(' '))
        .map(|s| s.to_string())
}

pub fn initials(names: &[&str]) -> BTreeSet<char> {
    names.iter().filter_map(|s| s.chars().next()).collect()
}

pub fn name_lengths(names: &[&str]) -> IndexMap<String, usize> {
    let mut lengths = IndexMap::new();
    for name in names {
        lengths
            .entry(name.to_string())
            .or_insert_with(|| name.chars().count());
    }
    lengths
}

pub fn join(names: &[&str]) -> String {
    names.iter().join(", ")
}

pub fn group_by_initial(names: &[&str]) -> IndexMap<char, Vec<String>> {
    let mut groups: IndexMap<char, Vec<String>> = IndexMap::new();
    for name in names {
        if let Some(initial) = name.chars().next() {
            groups.entry(initial).or_default().push(name.to_string());
        }
    }
    groups
}

/// Split into `{false -> short, true -> long}` by length greater than 6.
pub fn partition_longer_than_six(names: &[&str]) -> Value {
    let (long, short): (Vec<&str>, Vec<&str>) =
        names.iter().partition(|n| n.chars().count() > 6);
    Value::map([(false, short), (true, long)])
}

pub fn summarize(numbers: &[i32]) -> Summary {
    numbers.iter().copied().collect()
}

/// The first `n` squares from an unbounded lazy sequence.
pub fn squares(n: usize) -> Value {
    Value::drain((1u64..).map(|k| k * k).take(n))
}

pub fn report() -> Result<Report> {
    let names = Hero::names();
    let names = names.as_slice();

    Ok(Report::new(TITLE)
        .entry("filter (even)", filter_even(&NUMBERS))
        .entry("map (upper case)", map_upper(names))
        .entry("sorted (natural)", sorted(names))
        .entry("take (3)", take_three(names))
        .entry("count (starting with 'A')", count_starting_with_a(names))
        .entry("unique", distinct(&["A", "B", "A", "C", "B", "D"]))
        .entry("skip (2)", skip(names, 2))
        .entry("inspect (pipeline debug)", inspect_trim(names).0)
        .entry("flat_map (split on whitespace)", flat_map_words(names))
        .entry("fold (sum)", fold_sum(&NUMBERS))
        .entry("min", min(&NUMBERS))
        .entry("max", max(&NUMBERS))
        .entry("any (name contains 'man')", any_contains_man(names))
        .entry("all (every len >= 3)", all_at_least_three(names))
        .entry("none (starting with 'Z')", none_start_with_z(names))
        .entry("find (first starting with 'S')", find_first_starting_with_s(names))
        .entry("find_any (parallel, has a space)", par_find_any_with_space(names))
        .entry("collect BTreeSet (initials)", initials(names))
        .entry("collect IndexMap (name -> length)", name_lengths(names))
        .entry("join (csv)", join(names))
        .entry("group by (first letter)", group_by_initial(names))
        .entry("partition (len > 6)", partition_longer_than_six(names))
        .entry("summary statistics (numbers)", summarize(&NUMBERS))
        .entry("(1..).map(square).take(5)", squares(5))
        .entry("roster as constants", Value::drain(Hero::ALL)))
}

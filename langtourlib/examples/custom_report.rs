//! Print a hand-built report next to one of the built-in suites.

use std::collections::BTreeMap;

use langtourlib::{print_report, Report, Suite, Summary, Value};

fn main() -> langtourlib::Result<()> {
    let scores = BTreeMap::from([("alice", 7), ("bob", 9)]);
    let stats: Summary = scores.values().copied().collect();

    let report = Report::new("Custom report")
        .entry("scores", scores)
        .entry("summary", stats)
        .entry("nothing here", Value::null())
        .entry("maybe", None::<&str>);
    print_report(&report)?;

    print_report(&Suite::Option.report()?)
}

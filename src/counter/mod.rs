mod sloc;

pub use sloc::{CountResult, LineStats, SlocCounter, count_lines};

#[cfg(test)]
mod test_fixtures;

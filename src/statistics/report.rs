use std::{fmt, time::Duration};

use serde::Serialize;

use crate::statistics::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelCheck {
    Ok,
    Mismatch,
}

impl LevelCheck {
    pub fn from_bool(consistent: bool) -> Self {
        if consistent {
            LevelCheck::Ok
        } else {
            LevelCheck::Mismatch
        }
    }

    pub fn is_ok(self) -> bool {
        self == LevelCheck::Ok
    }
}

impl fmt::Display for LevelCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelCheck::Ok => f.write_str("OK"),
            LevelCheck::Mismatch => f.write_str("MISMATCH"),
        }
    }
}

/// Outcome of one sequential-vs-parallel comparison.
///
/// Times are averaged over `iters` repetitions of each engine. `Display`
/// renders the plain `key=value` lines the harness prints; [`Report::to_json`]
/// renders the same data as a single JSON line for scripts.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub seq_time_s: f64,
    pub par_time_s: f64,
    pub threads: usize,
    pub iters: usize,
    pub speedup: f64,
    pub level_check: LevelCheck,
    pub visited_seq: usize,
    pub visited_par: usize,
    pub seq_stats: Stats,
    pub par_stats: Stats,
}

impl Report {
    pub fn new(seq_total: Duration, par_total: Duration, threads: usize, iters: usize) -> Self {
        let iters = iters.max(1);
        let seq_time_s = seq_total.as_secs_f64() / iters as f64;
        let par_time_s = par_total.as_secs_f64() / iters as f64;
        let speedup = if par_time_s > 0.0 {
            seq_time_s / par_time_s
        } else {
            1.0
        };
        Report {
            seq_time_s,
            par_time_s,
            threads,
            iters,
            speedup,
            level_check: LevelCheck::Ok,
            visited_seq: 0,
            visited_par: 0,
            seq_stats: Stats::new(),
            par_stats: Stats::new(),
        }
    }

    pub fn with_check(mut self, level_check: LevelCheck) -> Self {
        self.level_check = level_check;
        self
    }

    pub fn with_visited(mut self, visited_seq: usize, visited_par: usize) -> Self {
        self.visited_seq = visited_seq;
        self.visited_par = visited_par;
        self
    }

    pub fn with_stats(mut self, seq_stats: Stats, par_stats: Stats) -> Self {
        self.seq_stats = seq_stats;
        self.par_stats = par_stats;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seq_time_s={:.6}", self.seq_time_s)?;
        writeln!(f, "Par_time_s={:.6}", self.par_time_s)?;
        writeln!(f, "Threads={}", self.threads)?;
        writeln!(f, "Iters={}", self.iters)?;
        writeln!(f, "Speedup={:.6}", self.speedup)?;
        writeln!(f, "Level_check={}", self.level_check)?;
        write!(
            f,
            "Visited_seq={} Visited_par={}",
            self.visited_seq, self.visited_par
        )
    }
}

//! Estimate the per-target house edge by simulating rounds.
//!
//! European single-zero expectation is ~2.70% for every target type; run this to
//! sanity-check the payout table against that figure.

use baize_engine::{Table, WheelRng};
use baize_types::{BetTarget, Column, Dozen, Pocket};

const TRIALS: usize = 50_000;
const BASE_BET: u64 = 100;

// Large enough that no simulated bankroll can hit zero mid-run.
const BANKROLL: u64 = TRIALS as u64 * BASE_BET * 36;

#[derive(Default, Clone)]
struct Stats {
    trials: u64,
    total_net: f64,
    total_net_sq: f64,
    total_wagered: f64,
}

impl Stats {
    fn add(&mut self, net: i64, wagered: u64) {
        let n = net as f64;
        self.trials += 1;
        self.total_net += n;
        self.total_net_sq += n * n;
        self.total_wagered += wagered as f64;
    }

    fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net / self.trials as f64
        }
    }

    fn mean_wagered(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_wagered / self.trials as f64
        }
    }

    fn house_edge(&self) -> f64 {
        let mw = self.mean_wagered();
        if mw == 0.0 {
            0.0
        } else {
            -self.mean_net() / mw
        }
    }

    fn edge_stderr(&self) -> f64 {
        if self.trials == 0 || self.mean_wagered() == 0.0 {
            return 0.0;
        }
        let n = self.trials as f64;
        let mean = self.mean_net();
        let variance = (self.total_net_sq / n - mean * mean).max(0.0);
        (variance / n).sqrt() / self.mean_wagered()
    }
}

fn targets() -> Vec<(&'static str, BetTarget)> {
    let seventeen = Pocket::new(17).unwrap_or(Pocket::ZERO);
    vec![
        ("straight", BetTarget::Straight(seventeen)),
        ("red", BetTarget::Red),
        ("even", BetTarget::Even),
        ("low", BetTarget::Low),
        ("dozen_1", BetTarget::Dozen(Dozen::First)),
        ("column_2", BetTarget::Column(Column::Second)),
    ]
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("target,bet,trials,avg_wagered,avg_net,house_edge,stderr");
    for (index, (label, target)) in targets().into_iter().enumerate() {
        let mut table = Table::with_balance(BANKROLL, WheelRng::seeded(0xBA12E + index as u64));
        let mut stats = Stats::default();
        for _ in 0..TRIALS {
            if table.place_bet(target, BASE_BET).is_err() {
                break;
            }
            let Ok(result) = table.spin() else {
                break;
            };
            stats.add(result.net, result.total_staked);
        }
        println!(
            "{},{},{},{:.4},{:.4},{:.6},{:.6}",
            label,
            BASE_BET,
            stats.trials,
            stats.mean_wagered(),
            stats.mean_net(),
            stats.house_edge(),
            stats.edge_stderr()
        );
    }
}

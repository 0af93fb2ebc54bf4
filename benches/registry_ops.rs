//! Benchmark suite for registry lookups and reporting
//!
//! Measures the operations the console runs against the whole registry
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each benchmark runs against registries of 100, 1,000 and 10,000 members
//! spread across the default packages, half of them already expired.

use chrono::NaiveDate;
use gym_ledger::core::NewMember;
use gym_ledger::io::{read_records, write_records};
use gym_ledger::{GymState, Member};

fn main() {
    divan::main();
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];
const PACKAGES: [&str; 4] = ["Monthly", "Quarterly", "Half-Yearly", "Yearly"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn populated_state(members: usize) -> GymState {
    let mut state = GymState::with_default_catalog();
    let long_ago = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for i in 0..members {
        let joined = if i % 2 == 0 { today() } else { long_ago };
        state
            .add_member(
                NewMember {
                    name: format!("Member Number {}", i),
                    age: 20 + (i % 50) as u8,
                    contact: format!("555-{:04}", i % 10_000),
                },
                PACKAGES[i % PACKAGES.len()],
                joined,
            )
            .expect("valid member");
        let id = Member::format_id(i + 1);
        state
            .record_payment(&id, 2000, "Cash", joined)
            .expect("member exists");
    }
    state
}

/// Case-insensitive substring search by name
#[divan::bench(args = SIZES)]
fn search_by_name(bencher: divan::Bencher, members: usize) {
    let state = populated_state(members);
    bencher.bench(|| state.search_members(divan::black_box("number 42")).len());
}

/// Exact id lookup of the last registered member
#[divan::bench(args = SIZES)]
fn find_last_by_id(bencher: divan::Bencher, members: usize) {
    let state = populated_state(members);
    let id = Member::format_id(members);
    bencher.bench(|| state.find_member(divan::black_box(&id)).is_some());
}

/// Full report: status counts, revenue and package distribution
#[divan::bench(args = SIZES)]
fn generate_report(bencher: divan::Bencher, members: usize) {
    let state = populated_state(members);
    bencher.bench(|| state.generate_report(divan::black_box(today())));
}

/// Serialize then parse the members file in memory
#[divan::bench(args = SIZES)]
fn members_file_round_trip(bencher: divan::Bencher, members: usize) {
    let state = populated_state(members);
    bencher.bench(|| {
        let mut buffer = Vec::new();
        write_records(state.registry().members(), &mut buffer).expect("write");
        read_records::<Member, _>(buffer.as_slice(), "members.txt")
            .expect("read")
            .len()
    });
}

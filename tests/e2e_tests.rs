//! End-to-end integration tests
//!
//! These tests drive complete console sessions against fixture directories.
//! Each test:
//! 1. Copies any seed data files from the fixture into a fresh data directory
//! 2. Loads the state and feeds input.txt to the console, pinned to 2026-01-15
//! 3. Compares every data file with expected/<file>; a file missing from
//!    expected/ must not exist after the session
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Registering members and recording payments from an empty directory
//! - Re-prompts and aborts on invalid operator input
//! - Renewals and updates against a custom catalog
//! - Discarding a session

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use gym_ledger::core::FixedClock;
    use gym_ledger::io::store::{MEMBERS_FILE, PACKAGES_FILE, PAYMENTS_FILE};
    use gym_ledger::io::{load_state, DataFiles};
    use gym_ledger::tui::{Console, SessionEnd};
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const DATA_FILES: [&str; 3] = [PACKAGES_FILE, MEMBERS_FILE, PAYMENTS_FILE];

    /// Run a fixture session and compare the resulting data directory
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read, the session fails, or any
    /// data file differs from its expected content.
    fn run_test_fixture(fixture_name: &str, expected_end: SessionEnd) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let input_path = fixture_dir.join("input.txt");
        let expected_dir = fixture_dir.join("expected");

        assert!(
            input_path.exists(),
            "Input file not found: {}",
            input_path.display()
        );

        let data_dir = TempDir::new().expect("Failed to create temp dir");
        for name in DATA_FILES {
            let seed = fixture_dir.join(name);
            if seed.exists() {
                fs::copy(&seed, data_dir.path().join(name))
                    .unwrap_or_else(|e| panic!("Failed to copy seed {}: {}", seed.display(), e));
            }
        }

        let files = DataFiles::in_dir(data_dir.path());
        let state = load_state(&files).unwrap_or_else(|e| panic!("Failed to load state: {}", e));
        let input = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", input_path.display(), e));

        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut console = Console::new(
            state,
            files,
            Box::new(FixedClock(today)),
            input.as_bytes(),
            Vec::new(),
        );

        let end = console
            .run()
            .unwrap_or_else(|e| panic!("Session failed for {}: {}", fixture_name, e));
        assert_eq!(end, expected_end, "Unexpected session end for {}", fixture_name);

        for name in DATA_FILES {
            let actual_path = data_dir.path().join(name);
            let expected_path = expected_dir.join(name);

            if expected_path.exists() {
                let actual = fs::read_to_string(&actual_path)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", actual_path.display(), e));
                let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                    panic!("Failed to read {}: {}", expected_path.display(), e)
                });

                assert_eq!(
                    actual, expected,
                    "\n\nOutput mismatch for fixture: {} (file: {})\n\nActual:\n{}\n\nExpected:\n{}\n",
                    fixture_name, name, actual, expected
                );
            } else {
                assert!(
                    !actual_path.exists(),
                    "Fixture {} should not have written {}",
                    fixture_name,
                    name
                );
            }
        }
    }

    #[rstest]
    #[case("happy_path", SessionEnd::Saved)]
    #[case("invalid_inputs", SessionEnd::Saved)]
    #[case("renew_and_update", SessionEnd::Saved)]
    #[case("discard_changes", SessionEnd::Discarded)]
    #[case("input_closed", SessionEnd::InputClosed)]
    fn test_fixtures(#[case] fixture: &str, #[case] expected_end: SessionEnd) {
        run_test_fixture(fixture, expected_end);
    }

    #[test]
    fn test_saved_session_reloads_identically() {
        let data_dir = TempDir::new().unwrap();
        let files = DataFiles::in_dir(data_dir.path());
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let script = "1\nalice smith\n30\n555-1234\nmonthly\n6\nM001\n2000\ncash\n8\n";
        let mut console = Console::new(
            load_state(&files).unwrap(),
            files.clone(),
            Box::new(FixedClock(today)),
            script.as_bytes(),
            Vec::new(),
        );
        assert_eq!(console.run().unwrap(), SessionEnd::Saved);

        let (state, _) = console.into_parts();
        assert_eq!(load_state(&files).unwrap(), state);
    }

    #[test]
    fn test_malformed_seed_fails_load() {
        let data_dir = TempDir::new().unwrap();
        fs::write(data_dir.path().join(MEMBERS_FILE), "M001|Alice\n").unwrap();

        let result = load_state(&DataFiles::in_dir(data_dir.path()));
        assert!(result.is_err());
    }
}

//! End-to-end integration tests
//!
//! These tests drive complete shell sessions with scripted input and check
//! the printed results and the files left on disk. Fixture data files live in
//! tests/fixtures/ and cover:
//! - A ledger file whose third line is malformed
//! - An unsorted catalog including an author with an embedded comma
//!
//! Sessions are run through `shell::run`, the same entry point the binary
//! uses, with in-memory input and output.

#[cfg(test)]
mod tests {
    use record_keeper::shell::{self, RecordKind, ShellConfig};
    use record_keeper::{Bank, Library};
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Copy a fixture into a scratch directory so sessions can overwrite it
    fn scratch_copy(fixture_name: &str, dir: &TempDir) -> PathBuf {
        let source = Path::new("tests/fixtures").join(fixture_name);
        assert!(source.exists(), "Fixture not found: {}", source.display());

        let target = dir.path().join(fixture_name);
        fs::copy(&source, &target)
            .unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", fixture_name, e));
        target
    }

    /// Run one session and return everything it printed
    fn run_session(kind: RecordKind, data_file: &Path, script: &str) -> String {
        let config = ShellConfig::new(kind, data_file);
        let mut output = Vec::new();

        shell::run(&config, script.as_bytes(), &mut output)
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        String::from_utf8(output).expect("Output is not UTF-8")
    }

    #[test]
    fn test_bank_scenario_insufficient_then_withdraw_then_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.txt");

        let output = run_session(
            RecordKind::Bank,
            &path,
            "1\n1001\nAlice\n500.00\n3\n1001\n600.00\n4\n1001\n3\n1001\n200.00\n7\n9\n",
        );

        assert!(output.contains("Insufficient funds."));
        assert!(output.contains("Account Balance for 1001: 500.00"));
        assert!(output.contains("Withdrawn 200.00 successfully. New balance: 300.00"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1001,Alice,300.00\n");

        let output = run_session(RecordKind::Bank, &path, "8\n6\n9\n");

        assert!(output.contains("Account Number: 1001, Name: Alice, Balance: 300.00"));
    }

    #[test]
    fn test_bank_load_stops_at_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = scratch_copy("accounts_malformed_line3.txt", &dir);

        let output = run_session(RecordKind::Bank, &path, "8\n6\n4\n1004\n9\n");

        assert!(output.contains("Accounts loaded from file successfully."));
        assert!(output.contains("Account Number: 1001, Name: Alice, Balance: 500.00"));
        assert!(output.contains("Account Number: 1002, Name: Bob, Balance: 75.25"));
        assert!(!output.contains("Name: Dan"));
        assert!(!output.contains("Name: Eve"));
        assert!(output.contains("Account not found."));
    }

    #[test]
    fn test_bank_load_replaces_existing_accounts() {
        let dir = TempDir::new().unwrap();
        let path = scratch_copy("accounts_malformed_line3.txt", &dir);

        let output = run_session(RecordKind::Bank, &path, "1\n77\nTemp\n1\n8\n4\n77\n9\n");

        assert!(output.contains("Account not found."));
    }

    #[test]
    fn test_bank_negative_amounts_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.txt");

        let output = run_session(
            RecordKind::Bank,
            &path,
            "1\n5\nNeg\n100\n2\n5\n-30\n3\n5\n-20\n9\n",
        );

        assert!(output.contains("Deposited -30.00 successfully. New balance: 70.00"));
        assert!(output.contains("Withdrawn -20.00 successfully. New balance: 90.00"));
    }

    #[test]
    fn test_library_sort_save_reload() {
        let dir = TempDir::new().unwrap();
        let path = scratch_copy("library_unsorted.txt", &dir);

        let output = run_session(RecordKind::Library, &path, "7\n5\n6\n8\n");
        assert!(output.contains("Books sorted by title successfully."));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2,Anathem,Neal Stephenson\n\
             1,Dune,Frank Herbert\n\
             4,Good Omens,Terry Pratchett, Neil Gaiman\n\
             3,Solaris,Stanislaw Lem\n"
        );

        let output = run_session(RecordKind::Library, &path, "7\n3\n4\n8\n");
        assert!(output.contains("Title: Good Omens\nAuthor: Terry Pratchett, Neil Gaiman\n"));
    }

    #[test]
    fn test_library_delete_then_search() {
        let dir = TempDir::new().unwrap();
        let path = scratch_copy("library_unsorted.txt", &dir);

        let output = run_session(RecordKind::Library, &path, "7\n2\n1\n3\n1\n4\n8\n");

        assert!(output.contains("Book deleted successfully."));
        assert!(output.contains("Book not found."));
        let solaris = output.find("ID: 3, Title: Solaris").unwrap();
        let anathem = output.find("ID: 2, Title: Anathem").unwrap();
        assert!(solaris < anathem);
    }

    #[rstest]
    #[case::bank(RecordKind::Bank, "7\n", "Failed to open file.")]
    #[case::bank_load(RecordKind::Bank, "8\n", "Failed to open file.")]
    #[case::library(RecordKind::Library, "6\n", "Failed to open file.")]
    #[case::library_load(RecordKind::Library, "7\n", "Failed to open file.")]
    fn test_unreachable_data_file_is_reported(
        #[case] kind: RecordKind,
        #[case] script: &str,
        #[case] expected: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("data.txt");

        let output = run_session(kind, &path, script);

        assert!(output.contains(expected));
        assert!(output.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn test_library_api_load_fixture_matches_shell_view() {
        let dir = TempDir::new().unwrap();
        let path = scratch_copy("library_unsorted.txt", &dir);

        let mut library = Library::new();
        assert_eq!(library.load(&path).unwrap(), 4);
        let ids: Vec<i32> = library.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);

        let mut bank = Bank::new();
        let accounts = scratch_copy("accounts_malformed_line3.txt", &dir);
        assert_eq!(bank.load(&accounts).unwrap(), 2);
    }
}

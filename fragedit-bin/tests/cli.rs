#[cfg(test)]
mod cli {
    use assert_cmd::Command;
    use predicates::str::contains;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn main_command() -> Command {
        // this gets the "main" binary name (e.g. `fragedit`)
        Command::cargo_bin(env!("CARGO_PKG_NAME")).expect("Couldn't get cargo package name")
    }

    #[test]
    fn test_passthrough_keeps_directive() {
        main_command()
            .arg("https://example.com/#:~:text=hello")
            .assert()
            .success()
            .stdout("https://example.com/#:~:text=hello\n");
    }

    #[test]
    fn test_override_text_start() {
        main_command()
            .arg("--text-start")
            .arg("goodbye")
            .arg("https://example.com/#:~:text=hello,world")
            .assert()
            .success()
            .stdout("https://example.com/#:~:text=goodbye,world\n");
    }

    #[test]
    fn test_add_directive_to_bare_url() {
        main_command()
            .arg("-s")
            .arg("hello")
            .arg("-e")
            .arg("world")
            .arg("https://example.com/page")
            .assert()
            .success()
            .stdout("https://example.com/page#:~:text=hello,world\n");
    }

    #[test]
    fn test_dash_is_escaped_in_output() {
        main_command()
            .arg("-s")
            .arg("well-known")
            .arg("https://example.com/")
            .assert()
            .success()
            .stdout(contains("#:~:text=well%2Dknown"));
    }

    #[test]
    fn test_remove_clears_text_fragment() {
        main_command()
            .arg("--remove")
            .arg("https://example.com/#:~:text=hello")
            .assert()
            .success()
            .stdout("https://example.com/\n");
    }

    #[test]
    fn test_remove_keeps_plain_hash() {
        main_command()
            .arg("--remove")
            .arg("https://example.com/#section1")
            .assert()
            .success()
            .stdout("https://example.com/#section1\n");
    }

    #[test]
    fn test_invalid_url() {
        main_command()
            .arg("not-a-url")
            .assert()
            .failure()
            .code(2)
            .stderr(contains("Please enter a valid URL"));
    }

    #[test]
    fn test_remove_conflicts_with_overrides() {
        main_command()
            .arg("--remove")
            .arg("--text-start")
            .arg("hello")
            .arg("https://example.com/")
            .assert()
            .failure();
    }

    #[test]
    fn test_parts_format() {
        main_command()
            .arg("--format")
            .arg("parts")
            .arg("https://example.com/#:~:text=foo-,hello,world,-bar")
            .assert()
            .success()
            .stdout(contains("prefix: foo"))
            .stdout(contains("text start: hello"))
            .stdout(contains("text end: world"))
            .stdout(contains("suffix: bar"));
    }

    #[test]
    fn test_json_format() {
        let output = main_command()
            .arg("--format")
            .arg("json")
            .arg("https://example.com/#:~:text=foo-,hello,world,-bar")
            .output()
            .expect("Couldn't run command");

        assert!(output.status.success());
        let value: Value =
            serde_json::from_slice(&output.stdout).expect("Couldn't parse JSON output");
        assert_eq!(value["url"], "https://example.com/#:~:text=foo-,hello,world,-bar");
        assert_eq!(value["parts"]["prefix"], "foo");
        assert_eq!(value["parts"]["text_start"], "hello");
        assert_eq!(value["parts"]["text_end"], "world");
        assert_eq!(value["parts"]["suffix"], "bar");
    }
}

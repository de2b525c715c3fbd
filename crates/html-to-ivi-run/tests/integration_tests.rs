use assert_cmd::cargo;
use rstest::rstest;
use scopeguard::defer;
use std::io::Write;
use std::{fs::File, path::PathBuf};

pub fn create_file(name: &str, content: &str) -> (PathBuf, PathBuf) {
    let temp_dir = std::env::temp_dir();
    let temp_file_path = temp_dir.join(name);
    let mut file = File::create(&temp_file_path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");

    (temp_dir, temp_file_path)
}

#[test]
fn test_cli_run_with_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");

    let assert = cmd.write_stdin(r#"<div class="app">Hello</div>"#).assert();
    assert
        .success()
        .code(0)
        .stdout("function Component() {\n  return h.div(\"app\").children(\"Hello\");\n}\n");

    Ok(())
}

#[rstest]
#[case::component_name(
    vec!["--component-name", "Greeting"],
    "<p>Hi</p>",
    "function Greeting() {\n  return h.p().children(\"Hi\");\n}\n"
)]
#[case::raw(
    vec!["--raw"],
    r#"<label for="name">Name</label>"#,
    "function Component() { return h.label().props({\"htmlFor\":\"name\",}).children(\"Name\"); }\n"
)]
#[case::no_trim(
    vec!["--raw", "--no-trim"],
    "<ul> <li>a</li></ul>",
    "function Component() { return h.ul().children(\" \",h.li().children(\"a\")); }\n"
)]
#[case::inputs(
    vec![],
    r#"<input type="checkbox" checked>"#,
    "function Component() {\n  return h.inputCheckbox().checked(true);\n}\n"
)]
#[case::textarea(
    vec![],
    "<textarea>  hello  </textarea>",
    "function Component() {\n  return h.textarea().value(\"hello\");\n}\n"
)]
#[case::children(
    vec![],
    r#"<div class="a"><span>1</span>text<span>2</span></div>"#,
    "function Component() {\n  return h.div(\"a\").children(\n    h.span().children(\"1\"),\n    \"text\",\n    h.span().children(\"2\"),\n  );\n}\n"
)]
#[case::indent_width(
    vec!["--indent-width", "4"],
    "<p>Hi</p>",
    "function Component() {\n    return h.p().children(\"Hi\");\n}\n"
)]
#[case::no_element(vec![], "only text", "")]
#[case::empty(vec![], "", "")]
fn test_cli_commands(#[case] args: Vec<&str>, #[case] input: &str, #[case] expected: &str) {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");

    cmd.args(args)
        .write_stdin(input)
        .assert()
        .success()
        .code(0)
        .stdout(expected.to_string());
}

#[test]
fn test_cli_run_with_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_, temp_file_path) = create_file("html_to_ivi_integration_1.html", "<nav><a href=\"/\">Home</a></nav>");
    let temp_file_path_clone = temp_file_path.clone();

    defer! {
        if temp_file_path_clone.exists() {
            std::fs::remove_file(&temp_file_path_clone).expect("Failed to delete temp file");
        }
    }

    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");
    cmd.arg(temp_file_path.to_string_lossy().to_string())
        .assert()
        .success()
        .stdout("function Component() {\n  return h.nav().children(h.a().props({ \"href\": \"/\" }).children(\"Home\"));\n}\n");

    Ok(())
}

#[test]
fn test_cli_file_not_found() {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");
    cmd.arg("html_to_ivi_does_not_exist.html").assert().failure();
}

#[test]
fn test_cli_invalid_component_name() {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");
    cmd.args(["--component-name", "not-valid"])
        .write_stdin("<div></div>")
        .assert()
        .failure();
}

#[test]
fn test_cli_completion() {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");
    cmd.args(["completion", "--shell", "bash"]).assert().success();
}

#[test]
fn test_cli_version() {
    let mut cmd = cargo::cargo_bin_cmd!("html-to-ivi");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(format!("html-to-ivi {}\n", env!("CARGO_PKG_VERSION")));
}

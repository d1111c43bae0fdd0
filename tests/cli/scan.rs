use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

const MULTILINE_ROUTE: &str = "app.get('/api/users', (req, res) => {\n  const userId = req.params.id;\n  res.json({ id: userId, name: 'John' });\n})\n";

#[test]
fn test_scan_reports_route_spans() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file("src/app.js", MULTILINE_ROUTE)?;

    let output = test.scan_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("route: GET  route-get"), "stdout: {stdout}");
    assert!(stdout.contains("src/app.js:1"));
    assert!(stdout.contains("1 | app.get('/api/users', (req, res) => {"));
    assert!(stdout.contains("4 | })"));
    assert!(stdout.contains("1 route registration (1 GET)"));

    Ok(())
}

#[test]
fn test_scan_counts_verbs() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file(
        "routes.js",
        "app.get('/a', a);\napp.post('/b', b);\napp.get('/c', c);\n",
    )?;

    let output = test.scan_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("3 route registrations (2 GET, 1 POST)"));

    Ok(())
}

#[test]
fn test_scan_without_package_json_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app.js", "app.get('/a', handler);")?;

    let output = test.scan_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("package.json not found"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_scan_empty_project() -> Result<()> {
    let test = CliTest::with_package_json()?;

    let output = test.scan_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no route registrations found"));

    Ok(())
}

#[test]
fn test_scan_hits_only() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file("app.js", "const x = 1;\napp.delete('/a', handler);\n")?;

    let output = test.scan_command().arg("--hits-only").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("DELETE"));
    assert!(stdout.contains("app.js:2"));
    assert!(!stdout.contains("-->"));

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file("src/app.js", MULTILINE_ROUTE)?;

    let output = test.scan_command().arg("--json").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let spans = value.as_array().expect("expected a JSON array");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0]["startLine"], 1);
    assert_eq!(spans[0]["endLine"], 4);
    assert_eq!(spans[0]["checksum"].as_str().expect("checksum").len(), 64);
    assert!(
        spans[0]["content"]
            .as_str()
            .expect("content")
            .starts_with("app.get('/api/users'")
    );

    Ok(())
}

#[test]
fn test_scan_json_hits_only() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file("app.js", "app.put('/a', handler);\n")?;

    let output = test.scan_command().args(["--json", "--hits-only"]).output()?;
    let (stdout, _) = output_text(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value[0]["kind"], "route-put");
    assert_eq!(value[0]["line"], 1);

    Ok(())
}

#[test]
fn test_scan_ignores_test_files() -> Result<()> {
    let test = CliTest::with_package_json()?;
    // Filename-based: matches the *.test.js glob.
    test.write_file("app.test.js", "app.get('/a', handler);\n")?;
    // Content-based: a plain filename but jest declarations inside.
    test.write_file(
        "routes-check.js",
        "describe('routes', () => {\n  app.get('/a', handler);\n});\n",
    )?;

    let output = test.scan_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no route registrations found"), "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_scan_respects_config_ignores() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file(
        ".perimeterrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("app.js", "app.get('/a', handler);\n")?;
    test.write_file("generated/client.js", "app.post('/gen', handler);\n")?;

    let output = test.scan_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("1 route registration (1 GET)"), "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_scan_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("server/package.json", "{}")?;
    test.write_file("server/app.js", "app.get('/a', handler);\n")?;

    let output = test
        .scan_command()
        .args(["--source-root", "server"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("1 route registration (1 GET)"), "stdout: {stdout}");

    Ok(())
}

#[test]
fn test_scan_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_package_json()?;
    test.write_file(".perimeterrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.scan_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error:"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));

    Ok(())
}

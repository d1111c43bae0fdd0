use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Created .perimeterrc.json"));

    let config = std::fs::read_to_string(test.root().join(".perimeterrc.json"))?;
    let value: serde_json::Value = serde_json::from_str(&config)?;
    assert_eq!(value["sourceRoot"], "./");
    assert_eq!(value["ignoreTestFiles"], true);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".perimeterrc.json", "{}")?;

    let output = test.init_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("already exists"), "stderr: {stderr}");

    Ok(())
}

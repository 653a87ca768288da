use anyhow::Result;
use small_calc::utils::validation::Validate;
use small_calc::{CalcConfig, CalcEngine, StandardArithmetic};
use tempfile::TempDir;

const SHEET: &str = r#"
[engine]
tolerance = 1e-9

[logging]
level = "info"

[[calculations]]
name = "add"
op = "add"
a = 2
b = 3
expected = 5

[[calculations]]
name = "negative difference"
op = "subtract"
a = 3
b = 5
expected = -2

[[calculations]]
name = "negative product"
op = "multiply"
a = -2
b = 3
expected = -6

[[calculations]]
name = "fractional quotient"
op = "divide"
a = 5
b = 2
expected = 2.5

[[calculations]]
name = "division by zero"
op = "divide"
a = 1
b = 0
"#;

#[test]
fn test_sheet_from_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sheet_path = temp_dir.path().join("sheet.toml");
    std::fs::write(&sheet_path, SHEET)?;

    let config = CalcConfig::from_file(&sheet_path)?;
    config.validate()?;

    let engine = CalcEngine::with_config(StandardArithmetic, &config);
    let report = engine.run(&config.calculations)?;

    assert_eq!(report.outcomes.len(), 5);
    assert_eq!(report.succeeded(), 4);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.mismatched(), 0);
    assert!(!report.all_passed());

    let failed = report
        .outcomes
        .iter()
        .find(|o| o.result.is_err())
        .expect("one failed outcome");
    assert_eq!(failed.calculation.label(), "division by zero");
    assert!(failed.result.as_ref().unwrap_err().is_invalid_argument());

    Ok(())
}

#[test]
fn test_sheet_stop_on_error() -> Result<()> {
    let sheet = SHEET.replace("tolerance = 1e-9", "tolerance = 1e-9\nstop_on_error = true");
    let config = CalcConfig::from_toml_str(&sheet)?;

    let engine = CalcEngine::with_config(StandardArithmetic, &config);
    let err = engine.run(&config.calculations).unwrap_err();
    assert!(err.is_invalid_argument());

    Ok(())
}

#[test]
fn test_sheet_reports_mismatch() -> Result<()> {
    let sheet = r#"
[[calculations]]
op = "divide"
a = 6
b = 3
expected = 2

[[calculations]]
op = "multiply"
a = 2
b = 3
expected = 5
"#;
    let config = CalcConfig::from_toml_str(sheet)?;
    let report = CalcEngine::with_config(StandardArithmetic, &config).run(&config.calculations)?;

    assert_eq!(report.failed(), 0);
    assert_eq!(report.mismatched(), 1);
    assert_eq!(report.outcomes[0].matches_expected, Some(true));
    assert_eq!(report.outcomes[1].matches_expected, Some(false));

    Ok(())
}

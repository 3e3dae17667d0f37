use arckit_convert::config::ConverterConfig;
use arckit_convert::tooling::cli::{CliContext, Commands};
use std::fs;
use tempfile::TempDir;

use crate::support::Fixture;

fn convert(format: &str, targets: Vec<String>, dry_run: bool) -> Commands {
    Commands::Convert {
        targets,
        commands_dir: None,
        agents_dir: None,
        output_root: None,
        dry_run,
        format: format.to_string(),
    }
}

#[test]
fn convert_text_emits_progress_and_summary() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .command("arckit.plan.md", "---\ndescription: Plan\n---\nPlan body")
        .command("arckit.research.md", "---\ndescription: Research\n---\nStub")
        .agent("arckit-research.md", "Research agent");

    let ctx = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let mut lines = Vec::new();
    let output = ctx
        .execute_with_progress(
            &convert("text", vec!["gemini".to_string(), "codex".to_string()], false),
            |line| lines.push(line.to_string()),
        )
        .unwrap();

    assert!(lines[0].starts_with("Converting commands to Gemini, Codex formats"));
    let progress: Vec<&String> = lines.iter().filter(|l| l.starts_with("  ")).collect();
    assert_eq!(progress.len(), 4);
    assert!(progress[0].starts_with("  Gemini: "));
    assert!(progress[0].contains("arckit.plan.md"));
    assert!(progress[3].starts_with("  Codex: "));
    assert!(progress[3].contains("(agent: "));
    assert_eq!(output.trim(), "Generated 2 Gemini + 2 Codex = 4 total files.");
}

#[test]
fn convert_json_contract_has_counts_and_records() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command("alpha.md", "---\ndescription: Hello\n---\nUse $ARGUMENTS now");

    let ctx = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let mut lines = Vec::new();
    let output = ctx
        .execute_with_progress(&convert("json", Vec::new(), true), |line| {
            lines.push(line.to_string())
        })
        .unwrap();

    assert!(lines.is_empty());
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["dry_run"].as_bool(), Some(true));
    let counts = parsed["counts"].as_array().unwrap();
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[0]["target"].as_str(), Some("gemini"));
    assert_eq!(counts[0]["count"].as_u64(), Some(1));
    let records = parsed["records"].as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert!(records[0].get("destination").and_then(|v| v.as_str()).is_some());
    assert!(!temp.path().join(".codex").exists());
}

#[test]
fn workspace_config_file_selects_targets_and_paths() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("plugin/commands")).unwrap();
    fs::write(
        temp.path().join("plugin/commands/alpha.md"),
        "---\ndescription: Hello\n---\nBody",
    )
    .unwrap();
    fs::create_dir_all(temp.path().join(".arckit")).unwrap();
    fs::write(
        temp.path().join(".arckit/convert.toml"),
        "[paths]\ncommands_dir = \"plugin/commands\"\noutput_root = \"dist\"\n\n[targets]\nenabled = [\"opencode\"]\n",
    )
    .unwrap();

    let ctx = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = ctx
        .execute_with_progress(&convert("text", Vec::new(), false), |_| {})
        .unwrap();

    assert!(output.contains("1 OpenCode = 1 total files."));
    assert!(temp.path().join("dist/.opencode/commands/alpha.md").is_file());
    assert!(!temp.path().join("dist/.gemini").exists());
}

#[test]
fn unknown_target_is_rejected() {
    let temp = TempDir::new().unwrap();
    Fixture::new(temp.path());
    let ctx = CliContext::with_config(temp.path().to_path_buf(), ConverterConfig::default());
    let result =
        ctx.execute_with_progress(&convert("text", vec!["cursor".to_string()], false), |_| {});
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cursor"));
}

#[test]
fn targets_json_contract() {
    let temp = TempDir::new().unwrap();
    let ctx = CliContext::with_config(temp.path().to_path_buf(), ConverterConfig::default());
    let output = ctx
        .execute_with_progress(
            &Commands::Targets {
                format: "json".to_string(),
            },
            |_| {},
        )
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    let extension = entries
        .iter()
        .find(|e| e["name"].as_str() == Some("gemini-extension"))
        .unwrap();
    assert_eq!(extension["sandboxed"].as_bool(), Some(true));
    assert_eq!(extension["enabled"].as_bool(), Some(true));
}

#[test]
fn agents_listing_is_sorted() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .agent("arckit-zeta.md", "Z")
        .agent("arckit-alpha.md", "A");

    let ctx = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = ctx
        .execute_with_progress(
            &Commands::Agents {
                format: "json".to_string(),
            },
            |_| {},
        )
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let commands: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["command"].as_str().unwrap())
        .collect();
    assert_eq!(commands, vec!["arckit.alpha.md", "arckit.zeta.md"]);
}

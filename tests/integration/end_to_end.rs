use arckit_convert::target::sandbox_advisory;
use arckit_convert::{ConvertError, Converter};
use std::fs;
use tempfile::TempDir;

use crate::support::Fixture;

#[test]
fn alpha_command_renders_for_every_target() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command("alpha.md", "---\ndescription: Hello\n---\n\nUse $ARGUMENTS now\n");

    let report = Converter::new(fixture.plan()).run().unwrap();
    assert_eq!(report.count_for("gemini"), Some(1));
    assert_eq!(report.count_for("codex"), Some(1));
    assert_eq!(report.count_for("opencode"), Some(1));
    assert_eq!(report.count_for("gemini-extension"), Some(1));
    assert_eq!(report.total(), 4);

    let gemini = fixture.read(".gemini/commands/arckit/alpha.toml");
    assert!(gemini.contains("description = \"\"\"\nHello\n\"\"\""));
    assert!(gemini.contains("prompt = \"\"\"\nUse {{args}} now\n\"\"\""));

    let codex = fixture.read(".codex/prompts/alpha.md");
    assert_eq!(codex, "---\ndescription: \"Hello\"\n---\n\nUse $ARGUMENTS now\n");

    let opencode = fixture.read(".opencode/commands/alpha.md");
    assert_eq!(opencode, "---\ndescription: Hello\n---\n\nUse $ARGUMENTS now\n");
}

#[test]
fn namespaced_commands_drop_namespace_for_toml_targets() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command(
        "arckit.plan.md",
        "---\ndescription: \"Create a plan: phases & gates\"\n---\nPlan for $ARGUMENTS",
    );

    Converter::new(fixture.plan()).run().unwrap();

    assert!(temp.path().join(".gemini/commands/arckit/plan.toml").is_file());
    assert!(temp.path().join("arckit-gemini/commands/arckit/plan.toml").is_file());
    let codex = fixture.read(".codex/prompts/arckit.plan.md");
    assert!(codex.starts_with("---\ndescription: \"Create a plan: phases & gates\"\n---\n\n"));
}

#[test]
fn placeholder_paths_rewritten_per_target() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command(
        "arckit.principles.md",
        "---\ndescription: Principles\n---\nRead `${CLAUDE_PLUGIN_ROOT}/templates/principles.md` and fill it in.",
    );

    Converter::new(fixture.plan()).run().unwrap();

    let codex = fixture.read(".codex/prompts/arckit.principles.md");
    assert!(codex.contains("Read `.arckit/templates/principles.md` and fill it in."));

    let extension = fixture.read("arckit-gemini/commands/arckit/principles.toml");
    let advisory = sandbox_advisory("~/.gemini/extensions/arckit");
    assert!(extension.contains(&format!("prompt = \"\"\"\n{}", advisory)));
    assert!(extension.contains(
        "Run `cat ~/.gemini/extensions/arckit/templates/principles.md` to read the file and fill it in."
    ));
    assert!(!extension.contains("${CLAUDE_PLUGIN_ROOT}"));
}

#[test]
fn body_backslashes_are_doubled_in_toml() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command("escape.md", "---\ndescription: Escape\n---\nMatch \\d+ in \"quotes\"");

    Converter::new(fixture.plan()).run().unwrap();

    let gemini = fixture.read(".gemini/commands/arckit/escape.toml");
    assert!(gemini.contains("Match \\\\d+ in \\\"quotes\\\""));
    let codex = fixture.read(".codex/prompts/escape.md");
    assert!(codex.ends_with("Match \\d+ in \"quotes\"\n"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .command("arckit.b.md", "---\ndescription: B\n---\nBody B ${CLAUDE_PLUGIN_ROOT}")
        .command("arckit.a.md", "---\ndescription: A\n---\nRead `${CLAUDE_PLUGIN_ROOT}/x.md`")
        .agent("arckit-b.md", "---\nname: b\n---\nAgent B");

    let outputs = [
        ".gemini/commands/arckit/a.toml",
        ".gemini/commands/arckit/b.toml",
        ".codex/prompts/arckit.a.md",
        ".opencode/commands/arckit.b.md",
        "arckit-gemini/commands/arckit/a.toml",
    ];

    let first_report = Converter::new(fixture.plan()).run().unwrap();
    let first: Vec<String> = outputs.iter().map(|p| fixture.read(p)).collect();
    let second_report = Converter::new(fixture.plan()).run().unwrap();
    let second: Vec<String> = outputs.iter().map(|p| fixture.read(p)).collect();

    assert_eq!(first, second);
    assert_eq!(first_report.records, second_report.records);
}

#[test]
fn missing_commands_directory_aborts() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fs::remove_dir(temp.path().join(".claude/commands")).unwrap();

    let result = Converter::new(fixture.plan()).run();
    match result {
        Err(ConvertError::Io { path, .. }) => {
            assert!(path.ends_with(".claude/commands"), "{}", path.display());
        }
        other => panic!("expected I/O error, got {:?}", other.map(|r| r.total())),
    }
}

#[test]
fn commands_without_header_use_whole_text() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture.command("raw.md", "No header here\n");

    Converter::new(fixture.plan()).run().unwrap();

    let codex = fixture.read(".codex/prompts/raw.md");
    assert_eq!(codex, "---\ndescription: \"\"\n---\n\nNo header here\n\n");
}

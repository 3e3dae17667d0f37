use arckit_convert::Converter;
use tempfile::TempDir;

use crate::support::Fixture;

#[test]
fn agent_body_replaces_command_body_for_all_targets() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .command(
            "arckit.research.md",
            "---\ndescription: Research market options\n---\nLaunch the arckit-research agent via Task.",
        )
        .agent(
            "arckit-research.md",
            "---\nname: arckit-research\ndescription: Agent-only description\nmodel: inherit\n---\n\nYou are a research analyst. Topic: $ARGUMENTS\n",
        );

    let report = Converter::new(fixture.plan()).run().unwrap();
    assert_eq!(report.total(), 4);
    for record in &report.records {
        let agent = record.agent.as_ref().expect("agent recorded");
        assert!(agent.ends_with("arckit-research.md"));
    }

    let gemini = fixture.read(".gemini/commands/arckit/research.toml");
    assert!(gemini.contains("description = \"\"\"\nResearch market options\n\"\"\""));
    assert!(gemini.contains("prompt = \"\"\"\nYou are a research analyst. Topic: {{args}}\n\"\"\""));

    for path in [
        ".codex/prompts/arckit.research.md",
        ".opencode/commands/arckit.research.md",
        "arckit-gemini/commands/arckit/research.toml",
    ] {
        let output = fixture.read(path);
        assert!(output.contains("You are a research analyst."), "{}", path);
        assert!(!output.contains("Launch the arckit-research agent"), "{}", path);
        assert!(!output.contains("Agent-only description"), "{}", path);
        assert!(!output.contains("model: inherit"), "{}", path);
    }
}

#[test]
fn agent_used_even_when_command_has_no_body() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .command("arckit.diagram.md", "---\ndescription: 'Draw diagrams'\n---\n")
        .agent("arckit-diagram.md", "Diagram agent body");

    Converter::new(fixture.plan()).run().unwrap();

    let codex = fixture.read(".codex/prompts/arckit.diagram.md");
    assert_eq!(codex, "---\ndescription: \"Draw diagrams\"\n---\n\nDiagram agent body\n");
}

#[test]
fn agents_without_matching_command_are_ignored() {
    let temp = TempDir::new().unwrap();
    let fixture = Fixture::new(temp.path());
    fixture
        .command("arckit.plan.md", "---\ndescription: Plan\n---\nOwn body")
        .agent("arckit-orphan.md", "Orphan agent")
        .agent("README.md", "not an agent");

    let report = Converter::new(fixture.plan()).run().unwrap();
    assert!(report.records.iter().all(|r| r.agent.is_none()));
    assert_eq!(report.total(), 4);
    assert!(fixture.read(".codex/prompts/arckit.plan.md").contains("Own body"));
}

use console::style;
use std::env;
use std::io::{self, Write};

/// Greeting exposed to library consumers.
pub const MESSAGE: &str = "Hello World from vulnerable package!";

/// Placeholder printed for monitored variables that are absent or empty.
const NOT_SET: &str = "Not set";

const ATTACK_STEPS: [&str; 5] = [
    "Access GitHub tokens from .git/config",
    "Exfiltrate repository secrets",
    "Modify source code in subsequent commits",
    "Publish compromised packages with legitimate credentials",
    "Access private repositories and secrets",
];

/// One-shot capture of the GitHub Actions variables this demo reports on.
///
/// An empty value is normalized to `None`, so `Not set` covers both the
/// unset and the empty case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub actions: Option<String>,
    pub repository: Option<String>,
    pub workflow: Option<String>,
    pub run_id: Option<String>,
    pub runner_os: Option<String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            actions: get("GITHUB_ACTIONS"),
            repository: get("GITHUB_REPOSITORY"),
            workflow: get("GITHUB_WORKFLOW"),
            run_id: get("GITHUB_RUN_ID"),
            runner_os: get("RUNNER_OS"),
        }
    }

    /// Whether the process is running under GitHub Actions. Any non-empty
    /// value opens the gate, matching the runner's own convention of
    /// setting `GITHUB_ACTIONS=true`.
    pub fn in_actions(&self) -> bool {
        self.actions.is_some()
    }

    fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("GITHUB_REPOSITORY", self.repository.as_deref()),
            ("GITHUB_WORKFLOW", self.workflow.as_deref()),
            ("GITHUB_RUN_ID", self.run_id.as_deref()),
            ("RUNNER_OS", self.runner_os.as_deref()),
        ]
    }
}

/// Package greeting, name, and disclaimer. Printed once by the binary
/// before the demonstration itself.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "🔥 {}",
        style("Hello World from a potentially vulnerable package!").bold()
    )?;
    writeln!(
        out,
        "📦 Package: {}",
        style(env!("CARGO_PKG_NAME")).white().bold()
    )?;
    writeln!(
        out,
        "⚠️  This package demonstrates GitHub Actions security vulnerabilities"
    )
}

/// The five-step narrative of what an attacker with workflow credentials
/// could do.
pub fn write_narrative(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚨 {}", style("SECURITY DEMONSTRATION:").red().bold())?;
    writeln!(out, "If this were a real attack, a malicious actor could:")?;
    for (i, step) in ATTACK_STEPS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, step)?;
    }
    Ok(())
}

/// Echo the monitored workflow variables when running under GitHub Actions;
/// writes nothing otherwise.
pub fn write_env_report(out: &mut impl Write, snapshot: &EnvSnapshot) -> io::Result<()> {
    if !snapshot.in_actions() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "🔍 {}",
        style("GitHub Actions Environment Detected:").blue().bold()
    )?;
    for (key, value) in snapshot.entries() {
        writeln!(out, "- {}: {}", key, value.unwrap_or(NOT_SET))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "⚠️  In a real attack scenario, credentials could be extracted here!"
    )
}

/// Print the demonstration narrative and, when running under GitHub
/// Actions, the environment report. Safe to call repeatedly; output is
/// identical for an identical environment.
pub fn vulnerability_demo() -> io::Result<()> {
    let snapshot = EnvSnapshot::capture();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_narrative(&mut out)?;
    write_env_report(&mut out, &snapshot)?;
    out.flush()
}

#[cfg(test)]
fn render(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("writing to a Vec cannot fail");
    console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
}

#[test]
fn narrative_always_prints_five_numbered_steps() {
    let out = render(write_narrative);

    let numbered = out
        .lines()
        .filter(|l| ATTACK_STEPS.iter().any(|s| l.ends_with(s)))
        .count();
    assert_eq!(numbered, 5);

    for (i, step) in ATTACK_STEPS.iter().enumerate() {
        assert!(out.contains(&format!("{}. {}", i + 1, step)));
    }
}

#[test]
fn missing_or_empty_vars_render_not_set() {
    let snapshot = EnvSnapshot {
        actions: Some("true".into()),
        ..EnvSnapshot::default()
    };
    let out = render(|buf| write_env_report(buf, &snapshot));

    for key in ["GITHUB_REPOSITORY", "GITHUB_WORKFLOW", "GITHUB_RUN_ID", "RUNNER_OS"] {
        assert!(out.contains(&format!("- {}: Not set", key)), "key: {}", key);
    }
}

#[test]
fn empty_values_are_normalized_to_unset() {
    let snapshot = EnvSnapshot::from_lookup(|_| Some(String::new()));
    assert_eq!(snapshot, EnvSnapshot::default());
    assert!(!snapshot.in_actions());
}

#[test]
fn no_report_lines_outside_actions() {
    let snapshot = EnvSnapshot::default();
    let out = render(|buf| write_env_report(buf, &snapshot));
    assert!(out.is_empty());
}

#[test]
fn message_constant_is_stable() {
    assert_eq!(MESSAGE, "Hello World from vulnerable package!");
}

#[test]
fn scenario_no_env_vars_set() {
    let snapshot = EnvSnapshot::default();
    let out = render(|buf| {
        write_banner(buf)?;
        write_narrative(buf)?;
        write_env_report(buf, &snapshot)
    });

    assert!(out.contains("Hello World from a potentially vulnerable package!"));
    assert!(out.contains("Package: vulnerable-hello-demo"));
    assert!(out.contains("demonstrates GitHub Actions security vulnerabilities"));
    assert!(out.contains("If this were a real attack"));
    assert!(!out.contains("GITHUB_REPOSITORY"));
    assert!(!out.contains("GITHUB_WORKFLOW"));
    assert!(!out.contains("GITHUB_RUN_ID"));
    assert!(!out.contains("RUNNER_OS"));
}

#[test]
fn scenario_actions_with_partial_vars() {
    let snapshot = EnvSnapshot {
        actions: Some("true".into()),
        repository: Some("org/repo".into()),
        ..EnvSnapshot::default()
    };
    let out = render(|buf| write_env_report(buf, &snapshot));

    assert!(out.contains("GitHub Actions Environment Detected:"));
    assert!(out.contains("- GITHUB_REPOSITORY: org/repo"));
    assert!(out.contains("- GITHUB_WORKFLOW: Not set"));
    assert!(out.contains("- GITHUB_RUN_ID: Not set"));
    assert!(out.contains("- RUNNER_OS: Not set"));
    assert!(out.contains("credentials could be extracted here!"));
}

#[test]
fn report_block_has_exactly_six_content_lines() {
    let snapshot = EnvSnapshot {
        actions: Some("true".into()),
        ..EnvSnapshot::default()
    };
    let out = render(|buf| write_env_report(buf, &snapshot));
    assert_eq!(out.lines().filter(|l| !l.is_empty()).count(), 6);
}

#[test]
fn repeated_demo_output_is_identical() {
    let snapshot = EnvSnapshot {
        actions: Some("true".into()),
        workflow: Some("ci".into()),
        ..EnvSnapshot::default()
    };
    let pass = |buf: &mut Vec<u8>| {
        write_narrative(buf)?;
        write_env_report(buf, &snapshot)
    };

    assert_eq!(render(pass), render(pass));
}

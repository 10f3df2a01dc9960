use clap::Parser;
use markup_patcher::{patch_file, PatchMode, DASHBOARD_PATCH, DEFAULT_TARGET};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markup-patcher")]
#[command(about = "Add the Profile button to the dashboard header")]
struct Cli {
    /// Dashboard page to patch
    #[arg(default_value = DEFAULT_TARGET)]
    path: PathBuf,
    /// Fail when the header block is not found instead of skipping the file
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.strict {
        PatchMode::Strict
    } else {
        PatchMode::Lenient
    };

    let outcome = patch_file(&cli.path, &DASHBOARD_PATCH, mode)?;

    if outcome.changed() {
        println!(
            "✅ Dashboard updated: {} ({} block(s) replaced)",
            outcome.path.display(),
            outcome.replacements
        );
        println!("✅ Profile button added");
        println!("✅ User and LogOut icons added to the buttons");
    } else {
        println!(
            "ℹ️  Header block not found in {}; nothing changed",
            outcome.path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["markup-patcher"]);
        assert_eq!(cli.path, PathBuf::from("apps/web/src/app/dashboard/page.tsx"));
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_strict_with_path() {
        let cli = Cli::parse_from(["markup-patcher", "--strict", "web/page.tsx"]);
        assert_eq!(cli.path, PathBuf::from("web/page.tsx"));
        assert!(cli.strict);
    }
}

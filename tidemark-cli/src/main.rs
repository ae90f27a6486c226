//! Tidemark CLI
//!
//! Checks the attributes of a serialized HTML tree, prints diagnostics and
//! the versions of HTML the document can still claim.

mod load;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tidemark_common::warning::{clear_warnings, warn_once};
use tidemark_html::{
    ConformanceOptions, ConformanceReport, Diagnostic, Dictionary, DocumentConformanceState,
    HtmlVersion, Severity, Validator,
};

use load::{LoadedTree, load_options, load_tree};

/// Tidemark: HTML attribute conformance checker
#[derive(Parser, Debug)]
#[command(name = "tidemark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Check a serialized document
    tidemark page.json

    # Check an inline tree
    tidemark --json '[{"type":"element","tag":"img","attributes":[{"name":"src","value":"a.png"}]}]'

    # Repair for XHTML output and print the repaired tree
    tidemark --xml-output --alt-text image --dump page.json
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Serialized document tree (JSON)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Inline serialized tree instead of a file
    #[arg(long, value_name = "TREE")]
    json: Option<String>,

    /// Options file (JSON); flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rewrite backslashes in URLs to slashes
    #[arg(long)]
    fix_backslash: bool,

    /// Treat input as generic XML (unknown attributes are not reported)
    #[arg(long)]
    xml_tags: bool,

    /// Prepare attributes for XHTML output
    #[arg(long)]
    xml_output: bool,

    /// Insert this alt text on images that have none
    #[arg(long, value_name = "TEXT")]
    alt_text: Option<String>,

    /// Declared doctype, e.g. html32, html40-strict, xhtml11
    #[arg(long, value_name = "VERSION")]
    doctype: Option<HtmlVersion>,

    /// Print the repaired tree as JSON
    #[arg(long)]
    dump: bool,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let options = options_from(&cli)?;
    let LoadedTree { mut tree, origin } = load_tree(cli.path.as_deref(), cli.json.as_deref())?;

    let mut state = DocumentConformanceState::new(options);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    Validator::new(Dictionary::shared()).validate_tree(&mut tree, &mut state, &mut diagnostics);

    let report = ConformanceReport::from_state(&state);
    diagnostics.extend(report.diagnostics());

    if !cli.quiet {
        for diagnostic in &diagnostics {
            print_diagnostic(diagnostic);
        }
    }
    print_summary(&origin, &report, &diagnostics);

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&tree.to_serialized())?);
    }

    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        std::process::exit(1);
    }
    Ok(())
}

/// Options file first, then flags.
fn options_from(cli: &Cli) -> Result<ConformanceOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => ConformanceOptions::default(),
    };
    if cli.fix_backslash {
        options = options.with_url_backslash_fix();
    }
    if cli.xml_tags {
        options = options.with_xml_tags();
    }
    if cli.xml_output {
        options = options.with_xml_output();
    }
    if let Some(text) = &cli.alt_text {
        options = options.with_fallback_alt_text(text.clone());
    }
    if let Some(doctype) = cli.doctype {
        options = options.with_doctype(doctype);
    }
    if options.xml_tags && options.doctype.is_some_and(|d| d != HtmlVersion::Xml) {
        warn_once("CLI", "--xml-tags with an HTML doctype; unknown attributes will not be reported");
    }
    Ok(options)
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Error => println!("{} {diagnostic}", "Error:".red().bold()),
        Severity::Warning => println!("{} {diagnostic}", "Warning:".yellow()),
        Severity::Info => println!("{} {diagnostic}", "Info:".cyan()),
    }
}

fn print_summary(origin: &str, report: &ConformanceReport, diagnostics: &[Diagnostic]) {
    let count = |severity: Severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    println!(
        "\n{}: {} errors, {} warnings",
        origin.bold(),
        count(Severity::Error),
        count(Severity::Warning)
    );

    match report.likely_version() {
        Some(version) => println!("Document content looks like {}", version.green()),
        None => println!("{}", "Document content does not conform to any standard HTML version".red()),
    }
    if report.claimable.len() > 1 {
        println!("Claimable versions: {}", report.claimable_names().join(", ").dimmed());
    }
    if report.is_xhtml {
        println!("Document declares an XHTML namespace");
    }
}

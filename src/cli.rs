//! Minimal CLI: family key → Java visitor hierarchy
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use crate::grammar::{validate, Family, GrammarTable};
use crate::sink::Sink;
use crate::synth::Synthesizer;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate a Java AST class hierarchy with visitor-pattern dispatch for one grammar family
#[derive(Parser, Debug)]
#[command(name = "visitgen", version)]
pub struct CommandLineInterface {
    /// family to generate (case-insensitive), e.g. `expr` or `stmt`
    family: Option<String>,

    /// output .java file (stdout if omitted)
    out: Option<PathBuf>,

    /// package declared at the top of the generated file
    #[arg(short, long, default_value = "deppep.jlox")]
    package: String,

    /// grammar JSON files or quoted glob patterns; replaces the built-in jlox grammar
    #[arg(short, long, num_args = 1..)]
    grammar: Vec<String>,

    /// refuse to generate when the selected family has duplicate or invalid names
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// print the available family keys and exit
    #[arg(long, conflicts_with = "dump_grammar")]
    list: bool,

    /// print the active grammar table as JSON (to OUT or stdout) and exit
    #[arg(long)]
    dump_grammar: bool,

    /// progress notes on stderr
    #[arg(short, long)]
    verbose: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

enum Table {
    Builtin(&'static GrammarTable),
    Loaded(GrammarTable),
}

impl std::ops::Deref for Table {
    type Target = GrammarTable;
    fn deref(&self) -> &GrammarTable {
        match self {
            Table::Builtin(table) => table,
            Table::Loaded(table) => table,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let table = self.load_table()?;

        if self.list {
            for key in table.keys() {
                println!("{}", key.to_lowercase());
            }
            return Ok(());
        }

        if self.dump_grammar {
            let json = serde_json::to_string_pretty(&*table)?;
            self.sink().write_lines(json.lines())?;
            return Ok(());
        }

        // user-guidance path: no/unknown family is not an error
        let Some(key) = self.family.as_deref().and_then(|raw| table.resolve_key(raw)) else {
            if let Some(raw) = &self.family {
                eprintln!("{} unknown family `{raw}`", "warning:".yellow().bold());
            }
            print_usage(&table);
            return Ok(());
        };

        self.check(table.lookup_family(key)?)?;

        let synth = Synthesizer::default();
        let lines = synth.synthesize_key(&table, key, &self.package)?;
        self.note(format!(
            "generated {} lines for `{key}` ({} productions)",
            lines.len(),
            table.lookup_family(key)?.productions.len(),
        ));

        let sink = self.sink();
        sink.write_lines(&lines)?;
        if let Sink::File(path) = &sink {
            self.note(format!("wrote {}", path.display()));
        }
        Ok(())
    }

    fn load_table(&self) -> anyhow::Result<Table> {
        if self.grammar.is_empty() {
            return Ok(Table::Builtin(GrammarTable::builtin()));
        }
        let table = crate::grammar_de::load_files(&self.grammar)
            .context("failed to load grammar")?;
        if table.is_empty() {
            eprintln!("{} no families defined in {}", "warning:".yellow().bold(), self.grammar.join(", "));
        }
        self.note(format!("loaded {} families from {} argument(s)", table.len(), self.grammar.len()));
        Ok(Table::Loaded(table))
    }

    fn check(&self, family: &Family) -> anyhow::Result<()> {
        let issues = validate::validate_family(family);
        if issues.is_empty() {
            return Ok(());
        }
        if self.strict {
            return Err(crate::error::Error::MalformedGrammar(issues).into());
        }
        for issue in &issues {
            eprintln!("{} {issue}", "warning:".yellow().bold());
        }
        Ok(())
    }

    fn sink(&self) -> Sink {
        Sink::from_arg(self.out.as_deref())
    }

    fn note(&self, message: String) {
        if self.verbose {
            eprintln!("{}", message.dimmed());
        }
    }
}

fn print_usage(table: &GrammarTable) {
    let keys = table.keys().map(str::to_lowercase).collect::<Vec<_>>().join("|");
    let usage = CommandLineInterface::command().render_usage();
    println!("{usage}");
    println!("Prints the Java {keys} class hierarchy, and optionally saves it to OUT.");
}

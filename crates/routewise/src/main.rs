// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routewise - route questions to the language model best suited to answer them.
//!
//! This is the binary entry point for the routewise command line.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod compare;
mod report;
mod simulate;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use routewise_config::RoutewiseConfig;
use routewise_core::{lookup_profile, ModelId, RoutewiseError, RoutingPolicy, MODEL_PROFILES};
use routewise_router::comparison::{DEMO_QUESTIONS, EVALUATION_QUESTIONS, INTEGRATION_QUESTIONS};
use routewise_router::{compare_against_baseline, ModelRouter};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::report::RouteReport;
use crate::simulate::{BatchReport, ChatIntegration};

/// Routewise - route questions to the language model best suited to answer them.
#[derive(Parser, Debug)]
#[command(name = "routewise", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Routing policy, overriding `routing.policy` from the configuration.
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick a model for a question and explain the choice.
    Route {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Show keyword scores, word count and complexity for a question.
    Analyze {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Compare routed models against the baseline model.
    Compare {
        /// Questions to compare, one per argument. Defaults to the evaluation set.
        questions: Vec<String>,
    },
    /// Walk through a simulated chat request using the routed model.
    Simulate {
        /// The question. Without one, every integration question is run.
        question: Vec<String>,

        /// Workspace to target instead of `integration.workspace_id`.
        #[arg(long)]
        workspace: Option<String>,
    },
    /// Route the demo questions, then compare the evaluation set.
    Demo,
    /// List the known models with their quality and speed.
    Models,
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Priority,
    GreatestCount,
}

impl From<PolicyArg> for RoutingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Priority => RoutingPolicy::Priority,
            PolicyArg::GreatestCount => RoutingPolicy::GreatestCount,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => routewise_config::load_and_validate_path(path),
        None => routewise_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            routewise_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        config.logging.level_filter().unwrap_or(LevelFilter::WARN)
    };
    init_tracing(level);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("routewise: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Filter used when `RUST_LOG` is unset: `level` for routewise crates, warn elsewhere.
fn default_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(format!(
        "routewise={level},routewise_router={level},routewise_config={level},warn"
    ))
}

fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

fn run(cli: &Cli, config: &RoutewiseConfig) -> Result<(), RoutewiseError> {
    let policy = cli.policy.map(RoutingPolicy::from).unwrap_or(config.routing.policy);
    let router = ModelRouter::new(policy);
    let baseline = lookup_profile(&config.comparison.baseline_model)?.id;
    let color = !cli.plain && std::io::stdout().is_terminal();
    debug!(%policy, %baseline, "starting");

    match &cli.command {
        Commands::Route { question } => {
            let question = question.join(" ");
            let decision = router.route(&question);
            if cli.json {
                report::print_json(&RouteReport::new(&question, &decision))?;
            } else {
                print!("{}", report::format_decision(&question, &decision, color));
            }
        }
        Commands::Analyze { question } => {
            let question = question.join(" ");
            let features = router.analyze(&question);
            if cli.json {
                report::print_json(&features)?;
            } else {
                print!("{}", report::format_features(&question, &features));
            }
        }
        Commands::Compare { questions } => {
            let summary = if questions.is_empty() {
                compare_against_baseline(&router, baseline, EVALUATION_QUESTIONS)
            } else {
                compare_against_baseline(&router, baseline, questions.as_slice())
            };
            if cli.json {
                report::print_json(&summary)?;
            } else {
                print!("{}", compare::format_comparison(&summary, color));
            }
        }
        Commands::Simulate {
            question,
            workspace,
        } => run_simulation(
            cli,
            &router,
            config,
            baseline,
            question,
            workspace.as_deref(),
            color,
        )?,
        Commands::Demo => run_demo(cli, &router, baseline, color)?,
        Commands::Models => {
            if cli.json {
                report::print_json(&MODEL_PROFILES[..])?;
            } else {
                print!("{}", report::format_models(color));
            }
        }
        Commands::Config => {
            let rendered = config
                .to_toml_string()
                .map_err(|e| RoutewiseError::Serialization(e.to_string()))?;
            print!("{rendered}");
        }
    }
    Ok(())
}

fn run_simulation(
    cli: &Cli,
    router: &ModelRouter,
    config: &RoutewiseConfig,
    baseline: ModelId,
    question: &[String],
    workspace: Option<&str>,
    color: bool,
) -> Result<(), RoutewiseError> {
    let integration = ChatIntegration::new(router, &config.integration, baseline);

    if !question.is_empty() {
        let workflow = integration.run(&question.join(" "), workspace);
        if cli.json {
            report::print_json(&workflow)?;
        } else {
            print!("{}", simulate::format_workflow(&workflow, color));
        }
        return Ok(());
    }

    let batch = BatchReport::new(
        INTEGRATION_QUESTIONS
            .iter()
            .map(|q| integration.run(q, workspace))
            .collect(),
    );
    if cli.json {
        return report::print_json(&batch);
    }

    let total = batch.workflows.len();
    for (i, workflow) in batch.workflows.iter().enumerate() {
        println!("\nTEST CASE {}/{total}", i + 1);
        print!("{}", simulate::format_workflow(workflow, color));
    }
    print!("{}", simulate::format_batch_summary(batch.average_savings));
    Ok(())
}

fn run_demo(
    cli: &Cli,
    router: &ModelRouter,
    baseline: ModelId,
    color: bool,
) -> Result<(), RoutewiseError> {
    let decisions: Vec<_> = DEMO_QUESTIONS.iter().map(|q| (*q, router.route(q))).collect();
    let summary = compare_against_baseline(router, baseline, EVALUATION_QUESTIONS);

    if cli.json {
        let routes: Vec<_> = decisions
            .iter()
            .map(|(q, d)| RouteReport::new(q, d))
            .collect();
        return report::print_json(&serde_json::json!({
            "routes": routes,
            "comparison": summary,
        }));
    }

    println!("ROUTING DEMONSTRATION ({} policy)", router.policy());
    println!("{}", "=".repeat(report::RULE_WIDTH));
    for (question, decision) in &decisions {
        print!("{}", report::format_decision(question, decision, color));
    }
    println!();
    print!("{}", compare::format_comparison(&summary, color));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn default_config_resolves_baseline() {
        let config = routewise_config::load_and_validate_str("")
            .expect("default config should be valid");
        let baseline = lookup_profile(&config.comparison.baseline_model).unwrap();
        assert_eq!(baseline.id, ModelId::GtOss20b);
    }

    #[test]
    fn configured_level_reaches_the_filter() {
        for (raw, expected) in [
            (" debug ", LevelFilter::DEBUG),
            ("DEBUG", LevelFilter::DEBUG),
            ("trace", LevelFilter::TRACE),
            ("error", LevelFilter::WARN),
        ] {
            let config = routewise_config::load_and_validate_str(&format!(
                "[logging]\nlevel = \"{raw}\"\n"
            ))
            .expect("level should validate");
            let level = config.logging.level_filter().unwrap();
            // The trailing `warn` directive keeps the hint at warn or above.
            assert_eq!(
                default_filter(level).max_level_hint(),
                Some(expected),
                "level {raw:?}"
            );
        }
    }

    #[test]
    fn policy_flag_maps_to_routing_policy() {
        assert_eq!(RoutingPolicy::from(PolicyArg::Priority), RoutingPolicy::Priority);
        assert_eq!(
            RoutingPolicy::from(PolicyArg::GreatestCount),
            RoutingPolicy::GreatestCount
        );
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "routewise",
            "route",
            "Explain",
            "search",
            "--policy",
            "greatest-count",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.policy, Some(PolicyArg::GreatestCount)));
        match cli.command {
            Commands::Route { question } => assert_eq!(question.join(" "), "Explain search"),
            other => panic!("expected route, got {other:?}"),
        }
    }

    #[test]
    fn route_requires_a_question() {
        assert!(Cli::try_parse_from(["routewise", "route"]).is_err());
    }
}

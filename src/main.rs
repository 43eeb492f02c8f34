use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use wirebox_rs::kit::Value;
use wirebox_rs::wirebox::builder::Builder;
use wirebox_rs::wirebox::condition::{Condition, PropertyValueCondition};
use wirebox_rs::wirebox::context::PropertyContext;
use wirebox_rs::wirebox::expression;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a manifest and report which components get wired
    Check {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: String,

        /// Context file, overriding the manifest's own context
        #[arg(short, long)]
        context: Option<String>,

        /// Extra active profiles
        #[arg(short, long)]
        profile: Vec<String>,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a raw expression such as "3>2&&3<4"
    Expr {
        /// The expression to evaluate
        expression: String,
    },
    /// Evaluate a single property value condition
    Property {
        /// Path to the context file
        #[arg(short, long)]
        context: String,

        /// Property path
        #[arg(short, long)]
        path: String,

        /// Expected value or `$` expression
        #[arg(short, long)]
        expected: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let builder = Builder::new();

    match args.command {
        Commands::Check {
            manifest,
            context,
            profile,
            json,
        } => {
            let wiring = builder
                .build_from_file(&manifest)
                .with_context(|| format!("Failed to build manifest {}", manifest))?;

            let mut ctx = match context {
                Some(path) => builder
                    .context_from_file(&path)
                    .with_context(|| format!("Failed to load context {}", path))?,
                None => wiring.context.clone().unwrap_or_default(),
            };
            for name in profile {
                ctx.set_profile(name);
            }

            log::info!(
                "Resolving '{}' ({} components)",
                wiring.name,
                wiring.registry.len()
            );
            let resolution = wiring.registry.resolve(&ctx)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                for c in &resolution.included {
                    println!("+ {} ({})", c.name, c.type_name);
                }
                for c in &resolution.excluded {
                    println!("- {} ({})", c.name, c.type_name);
                }
            }
        }
        Commands::Expr { expression } => {
            let result = expression::eval(&expression)?;
            println!("{}", result);
        }
        Commands::Property {
            context,
            path,
            expected,
        } => {
            let ctx: PropertyContext = builder
                .context_from_file(&context)
                .with_context(|| format!("Failed to load context {}", context))?;
            let expected = parse_expected(&expected);
            let result = PropertyValueCondition::new(path, expected).matches(&ctx)?;
            println!("{}", result);
        }
    }

    Ok(())
}

/// Read `3`, `false` or `2.5` as typed values; anything else is a string
fn parse_expected(raw: &str) -> Value {
    serde_yaml::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw))
}

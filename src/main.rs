use {
  clap::Parser,
  process_ontology::{config, OntologyConfig},
  std::path::PathBuf,
};

/// Builds an OWL ontology (Turtle) from business-process records.
#[derive(Parser, Debug, Clone)]
#[command(name = "process-ontology", version)]
struct Args {
  /// JSON file holding the process records
  #[arg(long, short, env = "ONTOLOGY_INPUT", default_value = "data/BPs.json")]
  input: PathBuf,

  /// Turtle file to write, replaced on every run
  #[arg(long, short, env = "ONTOLOGY_OUTPUT", default_value = "ontology.ttl")]
  output: PathBuf,

  /// Short code of the standard, becomes the root class
  #[arg(long, short, env = "ONTOLOGY_STANDARD", default_value = config::DEFAULT_STANDARD_NAME)]
  standard_name: String,

  /// Namespace of the generated classes and properties
  #[arg(long, env = "ONTOLOGY_NAMESPACE", default_value = config::DEFAULT_NAMESPACE)]
  namespace: String,

  /// Drop repeated triples before writing
  #[arg(long)]
  dedupe: bool,
}

/* Diagnostics go to stderr, stdout stays free for the user */
fn log_subscriber() -> impl tracing::Subscriber + Send + Sync {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    )
    .with_writer(std::io::stderr)
    .finish()
}

fn main() {
  if let Err(e) = tracing::subscriber::set_global_default(log_subscriber()) {
    eprintln!("could not install logger: {}", e);
  }

  let args = Args::parse();
  let config = OntologyConfig {
    namespace: args.namespace,
    standard_name: args.standard_name,
    dedupe_triples: args.dedupe,
  };

  match process_ontology::run(&args.input, &args.output, &config) {
    Ok(report) => tracing::info!(
      objects = report.objects.len(),
      processes = report.processes.len(),
      containments = report.containments,
      collisions = report.collisions.len(),
      "done"
    ),
    Err(e) => {
      tracing::error!(error = %e, "could not build ontology");
      std::process::exit(1);
    },
  }
}

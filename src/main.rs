//! cutlist - CLI tool to compute extrusion cut lists and invoices.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use extrusion_cutlist::{
    generate_invoice, parse_request_file, validate_request, CutListError, CutListSummary,
    CutRequest, PartRequirement, StockCatalog,
};

/// Compute how many stock extrusions to buy and how to cut them.
#[derive(Parser, Debug)]
#[command(name = "cutlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request file with [Stock], [Invoice] and [Part] sections
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Required part as LENGTHxQUANTITY (repeatable)
    #[arg(short, long = "part")]
    parts: Vec<PartRequirement>,

    /// Available stock lengths, comma separated
    #[arg(short, long, value_delimiter = ',')]
    stock: Vec<f64>,

    /// Saw kerf lost per cut
    #[arg(short, long)]
    kerf: Option<f64>,

    /// SKU prefix for invoice lines
    #[arg(long)]
    sku_prefix: Option<String>,

    /// Fee per cut piece
    #[arg(long)]
    cut_fee: Option<f64>,

    /// One-off setup fee
    #[arg(long)]
    setup_fee: Option<f64>,

    /// Validate only, don't compute the cut list
    #[arg(long)]
    validate: bool,

    /// Output the cut list and summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Build the request from the input file and command-line overrides.
    fn request(&self) -> Result<CutRequest> {
        let mut request = match &self.input {
            Some(path) => {
                info!("Reading: {}", path.display());
                parse_request_file(path)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => CutRequest::default(),
        };

        request.parts.extend(self.parts.iter().copied());

        if !self.stock.is_empty() {
            request.catalog = StockCatalog::new(self.stock.iter().copied())
                .context("Invalid --stock lengths")?;
        }
        if let Some(kerf) = self.kerf {
            request.config.kerf = kerf;
        }
        if let Some(prefix) = &self.sku_prefix {
            request.invoice.sku_prefix = prefix.clone();
        }
        if let Some(fee) = self.cut_fee {
            request.invoice.cut_fee = fee;
        }
        if let Some(fee) = self.setup_fee {
            request.invoice.setup_fee = fee;
        }

        Ok(request)
    }
}

fn main() {
    if let Err(err) = run() {
        error!("{:#}", err);
        let code = err
            .downcast_ref::<CutListError>()
            .map(CutListError::code_value)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let request = args.request()?;

    if request.parts.is_empty() {
        warn!("No parts given; use --part LENGTHxQUANTITY or an --input file");
    }

    info!(
        "Requested {} part line(s) against stock {:?} with kerf {}",
        request.parts.len(),
        request.catalog.lengths(),
        request.config.kerf
    );

    // Validate
    let validation = validate_request(&request);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let cut_list = request.compute()?;
    let summary = CutListSummary::from_cut_list(&cut_list);

    info!(
        "{} bar(s), {:.1}% of purchased stock delivered as parts",
        summary.bars,
        summary.utilization() * 100.0
    );

    if args.json {
        let json = serde_json::json!({
            "cut_list": cut_list,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print!("{}", generate_invoice(&cut_list, &request.invoice));

    Ok(())
}

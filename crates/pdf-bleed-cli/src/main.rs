mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use logger::StderrLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfbleed", about = "Print finishing for wide-format PDFs", version)]
struct Cli {
    /// More log output (repeat for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extend pages with mirrored bleed, crop marks and grommet marks
    Finish {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// Base configuration (JSON); flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective configuration to this JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Left bleed in points
        #[arg(long, allow_negative_numbers = true)]
        left: Option<f32>,

        /// Right bleed in points
        #[arg(long, allow_negative_numbers = true)]
        right: Option<f32>,

        /// Top bleed in points
        #[arg(long, allow_negative_numbers = true)]
        top: Option<f32>,

        /// Bottom bleed in points
        #[arg(long, allow_negative_numbers = true)]
        bottom: Option<f32>,

        /// Grommet spacing in inches (0 disables grommet marks)
        #[arg(long, allow_negative_numbers = true)]
        grommets: Option<f32>,

        /// Grommet inset from the trim edge in inches
        #[arg(long)]
        grommet_offset: Option<f32>,

        /// How grommets are spaced along each edge
        #[arg(long, value_enum)]
        grommet_policy: Option<PolicyArg>,

        /// Leave the bleed blank instead of mirroring content into it
        #[arg(long)]
        no_mirror: bool,

        /// Omit corner crop marks
        #[arg(long)]
        no_crop_marks: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Even spacing that lands exactly on both insets
    Distribute,
    /// Exact spacing; the last gap may be short
    FixedStep,
}

impl From<PolicyArg> for pdf_bleed::GrommetSpacingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Distribute => Self::Distribute,
            PolicyArg::FixedStep => Self::FixedStep,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet)).init()?;
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Finish {
            input,
            output,
            config,
            save_config,
            left,
            right,
            top,
            bottom,
            grommets,
            grommet_offset,
            grommet_policy,
            no_mirror,
            no_crop_marks,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_bleed::FinishingOptions::load(path).await?,
                None => pdf_bleed::FinishingOptions::default(),
            };

            let margins = &mut options.margins;
            margins.left = left.unwrap_or(margins.left);
            margins.right = right.unwrap_or(margins.right);
            margins.top = top.unwrap_or(margins.top);
            margins.bottom = bottom.unwrap_or(margins.bottom);

            if let Some(spacing) = grommets {
                let grommet = options
                    .grommets
                    .get_or_insert_with(|| pdf_bleed::GrommetOptions::every(spacing));
                grommet.spacing_in = spacing;
            }
            if let Some(grommet) = options.grommets.as_mut() {
                grommet.offset_in = grommet_offset.unwrap_or(grommet.offset_in);
                if let Some(policy) = grommet_policy {
                    grommet.policy = policy.into();
                }
            }

            options.mirror_bleed &= !no_mirror;
            options.crop_marks &= !no_crop_marks;
            options.validate()?;

            let document = pdf_bleed::load_pdf(&input).await?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                log::info!("Configuration saved to {}", path.display());
            }

            let stats = pdf_bleed::calculate_statistics(&document, &options)?;
            println!("Finishing Statistics:");
            println!("  Pages: {}", stats.pages);
            if let Some((width, height)) = stats.canvas_sizes.first() {
                println!("  First page canvas: {} x {} pt", width, height);
            }
            println!("  Mirrored edges: {}", stats.mirrored_edges);
            println!("  Crop mark segments: {}", stats.crop_mark_segments);
            println!("  Grommet marks: {}", stats.grommet_marks);

            if stats_only {
                return Ok(());
            }

            // Guaranteed by clap unless --stats-only was given
            let Some(output) = output else {
                anyhow::bail!("An output file is required");
            };

            let finished = pdf_bleed::finish(&document, &options).await?;
            pdf_bleed::save_pdf(finished, &output).await?;
            println!("Finished → {}", output.display());
        }
    }

    Ok(())
}

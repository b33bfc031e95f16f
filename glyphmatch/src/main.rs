mod args;

use anyhow::{Context, Result};
use clap::Parser;
use glyphmatch::io::{read_image, write_image};
use glyphmatch::recog::{ClassificationResult, GalleryLoader, classify_normalized, normalize};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_logging(args.verbose);

    let gallery = GalleryLoader::new(&args.gallery)
        .size(args.width, args.height)
        .prep(args.prep.into())
        .skip_invalid(!args.strict)
        .load()
        .with_context(|| format!("failed to load gallery from {}", args.gallery.display()))?;

    let query = read_image(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let normalized = normalize(&query, gallery.width(), gallery.height())
        .with_context(|| format!("failed to normalize {}", args.input.display()))?;

    if let Some(path) = &args.save_normalized {
        write_image(&normalized, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "saved normalized query");
    }

    let result = classify_normalized(&normalized, &gallery).context("classification failed")?;
    for line in report_lines(&result) {
        println!("{}", line);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One `<label> : <distance>` line per gallery entry, then the winner.
///
/// Distances are printed with six decimals.
fn report_lines(result: &ClassificationResult) -> Vec<String> {
    result
        .scores
        .iter()
        .map(|(label, distance)| format!("{} : {:.6}", label, distance))
        .chain(std::iter::once(format!(
            ">>>>>>>> {} : {:.6}",
            result.label, result.distance
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let result = ClassificationResult {
            label: "B".to_string(),
            distance: 0.0,
            scores: vec![("A".to_string(), 2.5), ("B".to_string(), 0.0)],
        };
        assert_eq!(
            report_lines(&result),
            vec![
                "A : 2.500000",
                "B : 0.000000",
                ">>>>>>>> B : 0.000000"
            ]
        );
    }
}

use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SEARCHLENS_LOG";

/// Logs go to stderr; stdout only ever carries the report.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders a `[0, 1]` score as a percentage with one decimal.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.max_results == 0 {
        anyhow::bail!("--max-results must be greater than 0");
    }

    if args.min_keyword_freq == 0 {
        anyhow::bail!("--min-keyword-freq must be greater than 0");
    }

    if args.no_domain_lists && args.domain_lists.is_some() {
        anyhow::bail!("--domain-lists cannot be combined with --no-domain-lists");
    }

    Ok(())
}

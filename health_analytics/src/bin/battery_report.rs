use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use health_analytics::analysis::ReportAnalysis;
use health_analytics::bucket;
use health_analytics::config::{AnalyzerConfig, load_config_path};
use health_analytics::projection::Projection;
use health_analytics::rollup::PeriodTotals;
use health_analytics::usage::format_hours;

#[derive(Parser)]
#[command(version, about = "Battery report analyzer CLI")]
struct Cli {
    /// Path to the HTML battery report (falls back to config, then $BATTERY_REPORT)
    #[arg(long, global = true)]
    report: Option<String>,

    /// Path to an analyzer TOML config
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Show installed battery attributes
    Info,
    /// Print the parsed health history
    Health,
    /// Degradation rollups, extremes, and an optional period total
    Degradation(PeriodArgs),
    /// Usage rollups, extremes, and an optional period total
    Usage(PeriodArgs),
    /// Intervals degrading faster than the median
    Insights,
    /// Weekly degradation/usage correlation
    Correlation,
    /// Project when health reaches the target
    Project {
        /// Target health percentage (falls back to config, then 80)
        #[arg(long)]
        target: Option<f64>,
    },
}

#[derive(Args)]
struct PeriodArgs {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<u32>,
    #[arg(long)]
    week: Option<u32>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = match cli.config.as_deref() {
        Some(path) => load_config_path(path)?,
        None => AnalyzerConfig::default(),
    };

    let path = resolve_report_path(cli.report.as_deref(), &cfg)?;
    let report = report_ingestor::load_report(&path)
        .with_context(|| format!("load battery report {path}"))?;
    let analysis = ReportAnalysis::of(&report);

    match cli.cmd {
        Cmd::Info => {
            if report.identity.is_empty() {
                println!("No battery info available");
            } else {
                println!("{}", report.identity.summary());
            }
        }
        Cmd::Health => {
            if report.health_history.is_empty() {
                println!("No data available");
            }
            for sample in &report.health_history {
                println!("{}  {:.2}", sample.date, sample.health);
            }
        }
        Cmd::Degradation(period) => print_degradation(&analysis, &period),
        Cmd::Usage(period) => print_usage(&analysis, &period),
        Cmd::Insights => match &analysis.insights {
            Some(insights) => {
                println!(
                    "Intervals with degradation above the median ({:.2}%):",
                    insights.median
                );
                if insights.above_median.is_empty() {
                    println!("None");
                }
                for interval in &insights.above_median {
                    println!("{}  {:.2}%", interval.end_date, interval.drop);
                }
            }
            None => println!("No data available"),
        },
        Cmd::Correlation => match analysis.correlation() {
            Ok(corr) => {
                println!(
                    "Pearson correlation between weekly degradation and usage hours: {:.2} \
                     ({} paired weeks)",
                    corr.coefficient, corr.paired_weeks
                );
                println!("{}", describe_strength(&corr.strength));
            }
            Err(status) => println!("{status}"),
        },
        Cmd::Project { target } => {
            let target = target.unwrap_or_else(|| cfg.target_or_default());
            match analysis.project(target)? {
                Projection::Projected { date, .. } => {
                    println!("Prediction: reach {target:.2}% on {date}");
                }
                Projection::TargetAlreadyMet { latest_health } => {
                    println!(
                        "Prediction: latest health {latest_health:.2}% is already at or below \
                         the target"
                    );
                }
                Projection::NotDegrading => println!("Prediction: battery health not degrading"),
                Projection::InsufficientData => {
                    println!("Prediction: insufficient data for projection");
                }
            }
        }
    }

    Ok(())
}

fn resolve_report_path(arg: Option<&str>, cfg: &AnalyzerConfig) -> Result<String> {
    if let Some(path) = arg {
        return Ok(path.to_string());
    }
    if let Some(path) = &cfg.report {
        return Ok(path.clone());
    }
    if let Ok(path) = shared_utils::env::get_env_var("BATTERY_REPORT") {
        return Ok(path);
    }
    bail!("no report given: pass --report, set report in the config, or set $BATTERY_REPORT");
}

fn print_degradation(analysis: &ReportAnalysis<'_>, period: &PeriodArgs) {
    let Some(deg) = &analysis.degradation else {
        println!("No degradation data available");
        return;
    };
    print_extremes(&deg.totals, "degraded", |v| format!("{v:.2}%"));

    match (period.year, period.month, period.week) {
        (Some(year), Some(month), Some(week)) => {
            let total = deg.for_week(year, month, week);
            let key = bucket::WeekKey { year, month, week };
            match bucket::week_range(year, month, week) {
                Some((start, end)) => println!(
                    "Degradation in {key} ({} - {}): {total:.2}%",
                    start.format("%d %b"),
                    end.format("%d %b")
                ),
                None => println!("Degradation in {key}: {total:.2}%"),
            }
        }
        (Some(year), Some(month), None) => {
            let key = bucket::MonthKey { year, month };
            println!("Degradation in {key}: {:.2}%", deg.for_month(year, month));
        }
        (Some(year), None, _) => {
            println!("Degradation in {year}: {:.2}%", deg.for_year(year));
        }
        _ => {}
    }
}

fn print_usage(analysis: &ReportAnalysis<'_>, period: &PeriodArgs) {
    let Some(usage) = &analysis.usage else {
        println!("No usage data available");
        return;
    };
    print_extremes(&usage.totals, "used", format_hours);

    match (period.year, period.month, period.week) {
        (Some(year), Some(month), Some(week)) => {
            let key = bucket::WeekKey { year, month, week };
            let total = usage.for_week(year, month, week);
            println!("Usage in {key}: {}", format_hours(total));
        }
        (Some(year), Some(month), None) => {
            let key = bucket::MonthKey { year, month };
            println!("Usage in {key}: {}", format_hours(usage.for_month(year, month)));
        }
        (Some(year), None, _) => {
            println!("Usage in {year}: {}", format_hours(usage.for_year(year)));
        }
        _ => {}
    }
}

fn print_extremes(totals: &PeriodTotals, verb: &str, fmt: impl Fn(f64) -> String) {
    if let Some((key, value)) = totals.weekly.max_entry() {
        println!("Most {verb} week: {key} ({})", fmt(value));
    }
    if let Some((key, value)) = totals.weekly.min_entry() {
        println!("Least {verb} week: {key} ({})", fmt(value));
    }
    if let Some((key, value)) = totals.monthly.max_entry() {
        println!("Most {verb} month: {key} ({})", fmt(value));
    }
    if let Some((key, value)) = totals.monthly.min_entry() {
        println!("Least {verb} month: {key} ({})", fmt(value));
    }
    if let Some((key, value)) = totals.yearly.max_entry() {
        println!("Most {verb} year: {key} ({})", fmt(value));
    }
    if let Some((key, value)) = totals.yearly.min_entry() {
        println!("Least {verb} year: {key} ({})", fmt(value));
    }
}

fn describe_strength(strength: &health_analytics::correlation::Strength) -> &'static str {
    use health_analytics::correlation::Strength;
    match strength {
        Strength::StrongPositive => {
            "Strong positive correlation: higher usage hours are associated with more degradation."
        }
        Strength::StrongNegative => {
            "Strong negative correlation: higher usage hours are associated with less degradation."
        }
        Strength::WeakOrNone => {
            "Weak or no correlation: usage hours and degradation may not be directly related."
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

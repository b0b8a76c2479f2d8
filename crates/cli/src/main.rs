//! Command line interface for the critical-rate estimator.
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use crit_rate_domain::cost_model::{self, CostComponents, RateOutcome, TradeParameters};
use crit_rate_domain::enums::{RateTrend, TaxScheme};
use crit_rate_domain::tax::TaxRates;
use crit_rate_simulation::prelude::*;
use prettytable::{Table, row};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "crit-rate")]
#[command(about = "Critical bank rate estimator for cross-border resale trades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Individual,
    Osno,
    Usn,
}

impl From<SchemeArg> for TaxScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Individual => Self::Individual,
            SchemeArg::Osno => Self::Osno,
            SchemeArg::Usn => Self::Usn,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrendArg {
    Rising,
    Falling,
    Random,
}

impl From<TrendArg> for RateTrend {
    fn from(value: TrendArg) -> Self {
        match value {
            TrendArg::Rising => Self::Rising,
            TrendArg::Falling => Self::Falling,
            TrendArg::Random => Self::Random,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo simulation over both shipping modes
    Simulate {
        /// Number of independent trials
        #[arg(short, long, default_value_t = 100_000)]
        trials: usize,

        /// Purchase price in foreign currency
        #[arg(long, default_value = "3000")]
        purchase_price: Decimal,

        /// Selling price in local currency
        #[arg(long, default_value = "360000")]
        selling_price: Decimal,

        /// Air delivery cost in foreign currency
        #[arg(long, default_value = "120")]
        air_cost: Decimal,

        /// Sea delivery cost in foreign currency
        #[arg(long, default_value = "50")]
        sea_cost: Decimal,

        /// Air delivery time, uniform lower bound (weeks)
        #[arg(long, default_value_t = 1.0)]
        air_weeks_min: f64,

        /// Air delivery time, uniform upper bound (weeks)
        #[arg(long, default_value_t = 3.0)]
        air_weeks_max: f64,

        /// Sea delivery time, uniform lower bound (weeks)
        #[arg(long, default_value_t = 8.0)]
        sea_weeks_min: f64,

        /// Sea delivery time, uniform upper bound (weeks)
        #[arg(long, default_value_t = 16.0)]
        sea_weeks_max: f64,

        /// Normal-distributed air delivery time: mean weeks (overrides the uniform bounds)
        #[arg(long)]
        air_weeks_mean: Option<f64>,

        /// Normal-distributed air delivery time: std dev weeks
        #[arg(long, default_value_t = 0.5)]
        air_weeks_std: f64,

        /// Normal-distributed sea delivery time: mean weeks (overrides the uniform bounds)
        #[arg(long)]
        sea_weeks_mean: Option<f64>,

        /// Normal-distributed sea delivery time: std dev weeks
        #[arg(long, default_value_t = 2.0)]
        sea_weeks_std: f64,

        /// Base exchange rate, local per foreign unit
        #[arg(long, default_value_t = 90.0)]
        fx_rate: f64,

        /// Exchange rate standard deviation
        #[arg(long, default_value_t = 5.0)]
        fx_std: f64,

        /// Directional drift of the exchange rate mean
        #[arg(long, value_enum, default_value_t = TrendArg::Random)]
        trend: TrendArg,

        /// Relative drift magnitude (0.05 = 5%)
        #[arg(long, default_value_t = 0.0)]
        drift: f64,

        /// Tax scheme
        #[arg(long, value_enum, default_value_t = SchemeArg::Individual)]
        scheme: SchemeArg,

        /// Interest compounding periods per year
        #[arg(short = 'n', long, default_value_t = 12)]
        compounding: u32,

        /// Storage dwell time in years (activates the storage component)
        #[arg(long)]
        storage_years: Option<f64>,

        /// Storage cost in local currency
        #[arg(long, default_value = "0")]
        storage_cost: Decimal,

        /// Skip customs fee and customs VAT
        #[arg(long)]
        no_customs: bool,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Number of histogram buckets
        #[arg(long, default_value_t = 20)]
        bins: usize,

        /// Emit the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the closed-form critical rate once, without sampling
    Rate {
        /// Purchase price in local currency
        #[arg(long)]
        buying_price: Decimal,

        /// Selling price in local currency
        #[arg(long)]
        selling_price: Decimal,

        /// Delivery cost in local currency
        #[arg(long)]
        delivery_cost: Decimal,

        /// Delivery time in weeks
        #[arg(long)]
        weeks: f64,

        /// Tax scheme
        #[arg(long, value_enum, default_value_t = SchemeArg::Individual)]
        scheme: SchemeArg,

        /// Interest compounding periods per year
        #[arg(short = 'n', long, default_value_t = 12)]
        compounding: u32,

        /// Storage dwell time in years (activates the storage component)
        #[arg(long)]
        storage_years: Option<f64>,

        /// Storage cost in local currency
        #[arg(long, default_value = "0")]
        storage_cost: Decimal,

        /// Skip customs fee and customs VAT
        #[arg(long)]
        no_customs: bool,

        /// Emit the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            trials,
            purchase_price,
            selling_price,
            air_cost,
            sea_cost,
            air_weeks_min,
            air_weeks_max,
            sea_weeks_min,
            sea_weeks_max,
            air_weeks_mean,
            air_weeks_std,
            sea_weeks_mean,
            sea_weeks_std,
            fx_rate,
            fx_std,
            trend,
            drift,
            scheme,
            compounding,
            storage_years,
            storage_cost,
            no_customs,
            seed,
            bins,
            json,
        } => {
            let air_time = delivery_model(air_weeks_mean, air_weeks_std, air_weeks_min, air_weeks_max);
            let sea_time = delivery_model(sea_weeks_mean, sea_weeks_std, sea_weeks_min, sea_weeks_max);

            let mut config = SimulationConfig::new(
                trials,
                purchase_price,
                selling_price,
                ShippingLeg::new(air_cost, air_time),
                ShippingLeg::new(sea_cost, sea_time),
                ExchangeRateModel::new(fx_rate, fx_std).with_trend(trend.into(), drift),
            )
            .with_tax_scheme(scheme.into())
            .with_compounding(compounding);

            if let Some(years) = storage_years {
                config = config.with_storage(years, storage_cost);
            }
            if no_customs {
                let mut components = config.components;
                components.customs = false;
                config = config.with_components(components);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let report = MonteCarloRunner::new(config).run()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("🎲 {} trials per shipping mode\n", report.trials);
            print_summary_table(&report);
            print_mode_histogram(&report.air, bins);
            print_mode_histogram(&report.sea, bins);
        }
        Commands::Rate {
            buying_price,
            selling_price,
            delivery_cost,
            weeks,
            scheme,
            compounding,
            storage_years,
            storage_cost,
            no_customs,
            json,
        } => {
            let components = CostComponents {
                customs: !no_customs,
                storage: storage_years.is_some(),
            };
            let params = TradeParameters {
                buying_price,
                selling_price,
                delivery_cost,
                storage_cost,
                delivery_time_years: weeks / WEEKS_PER_YEAR,
                storage_time_years: storage_years.unwrap_or(0.0),
                tax_scheme: scheme.into(),
                compounding_periods_per_year: compounding,
            };
            params.validate()?;

            let evaluation = cost_model::evaluate(&params, components, &TaxRates::default());

            if json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
                return Ok(());
            }

            let costs = &evaluation.costs;
            let mut table = Table::new();
            table.add_row(row!["Delivery", costs.delivery.round_dp(2)]);
            table.add_row(row!["Customs fee", costs.customs_fee.round_dp(2)]);
            table.add_row(row!["Customs VAT", costs.customs_vat.round_dp(2)]);
            table.add_row(row!["Taxes (VAT incl.)", costs.taxes.round_dp(2)]);
            table.add_row(row!["Storage", costs.storage.round_dp(2)]);
            table.add_row(row!["Total additional", costs.total.round_dp(2)]);
            table.printstd();

            match evaluation.outcome {
                RateOutcome::Feasible(rate) => {
                    println!("📈 Critical rate: {}", percent(rate.value));
                }
                RateOutcome::Infeasible => {
                    println!("❌ Infeasible: the selling price does not cover the costs");
                }
            }
        }
    }

    Ok(())
}

fn delivery_model(mean: Option<f64>, std_dev: f64, min: f64, max: f64) -> DeliveryTimeModel {
    match mean {
        Some(mean_weeks) => DeliveryTimeModel::Normal {
            mean_weeks,
            std_dev_weeks: std_dev,
        },
        None => DeliveryTimeModel::Uniform {
            min_weeks: min,
            max_weeks: max,
        },
    }
}

fn percent(value: Decimal) -> String {
    format!("{}%", (value * Decimal::from(100)).round_dp(2))
}

fn print_summary_table(report: &RunReport) {
    let mut table = Table::new();
    table.add_row(row![
        "Mode", "Retained", "Dropped", "Mean", "Median", "Min", "Max"
    ]);
    for mode in [&report.air, &report.sea] {
        match &mode.stats {
            Some(stats) => {
                table.add_row(row![
                    mode.mode,
                    stats.count,
                    mode.dropped,
                    percent(stats.mean),
                    percent(stats.median),
                    percent(stats.min),
                    percent(stats.max)
                ]);
            }
            None => {
                table.add_row(row![
                    mode.mode,
                    0,
                    mode.dropped,
                    "no admissible values",
                    "-",
                    "-",
                    "-"
                ]);
            }
        }
    }
    table.printstd();
}

fn print_mode_histogram(mode: &ModeReport, bins: usize) {
    let buckets = histogram(&mode.samples, bins);
    if buckets.is_empty() {
        println!("\n{}: no admissible values to plot", mode.mode);
        return;
    }

    let peak = buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1);
    println!("\n📊 {} critical-rate distribution", mode.mode);
    for bucket in &buckets {
        let width = bucket.count * 40 / peak;
        println!(
            "{:>8} – {:>8} | {:<40} {}",
            percent(bucket.lower),
            percent(bucket.upper),
            "█".repeat(width),
            bucket.count
        );
    }
}

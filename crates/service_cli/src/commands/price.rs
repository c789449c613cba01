//! The `price` command: simulate, price, and cross-check a call/put pair.

use anyhow::{bail, Context};
use tracing::info;

use pathwise_models::analytical::BlackScholes;
use pathwise_pricing::{EnsembleConfig, Instrument, Path, PathEnsemble, Payoff};

/// Arguments for the `price` command.
pub struct PriceArgs {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub model: String,
    pub paths: usize,
    pub steps: usize,
    pub bootstrap: usize,
    pub seed: Option<u64>,
    pub format: String,
}

/// Runs the pricing scenario and prints the report.
pub fn run(args: PriceArgs) -> anyhow::Result<()> {
    info!(
        spot = args.spot,
        strike = args.strike,
        maturity = args.maturity,
        rate = args.rate,
        volatility = args.volatility,
        model = %args.model,
        paths = args.paths,
        steps = args.steps,
        "starting pricing run"
    );

    let mut builder = EnsembleConfig::builder()
        .n_paths(args.paths)
        .total_time(args.maturity)
        .delta_t(args.maturity / args.steps as f64)
        .model_name(&args.model)
        .drift(args.rate)
        .volatility(args.volatility)
        .rate(args.rate);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().context("invalid simulation parameters")?;

    let mut ensemble = PathEnsemble::new(config).context("failed to set up ensemble")?;
    ensemble
        .generate(args.spot)
        .context("path generation failed")?;
    info!(
        n_periods = ensemble.time_grid().n_periods(),
        "generated ensemble"
    );

    let call = Instrument::new(&ensemble, Payoff::call(args.strike));
    let put = Instrument::new(&ensemble, Payoff::put(args.strike));
    let call_interval = call.price(args.bootstrap).context("call pricing failed")?;
    let put_interval = put.price(args.bootstrap).context("put pricing failed")?;

    // Closed form needs strictly positive volatility; zero-vol validation
    // runs still report the Monte Carlo side.
    let closed_form = BlackScholes::new(args.spot, args.rate, args.volatility)
        .ok()
        .map(|bs| {
            (
                bs.price_call(args.strike, args.maturity),
                bs.price_put(args.strike, args.maturity),
            )
        });

    let mean_terminal: f64 = ensemble
        .paths()
        .iter()
        .map(Path::last_value)
        .sum::<f64>()
        / args.paths as f64;
    let forward = args.spot * (args.rate * args.maturity).exp();

    match args.format.as_str() {
        "table" => {
            println!(
                "Call price: {:.4}  (95% CI [{:.4}, {:.4}])",
                call_interval.point, call_interval.lower, call_interval.upper
            );
            println!(
                "Put price:  {:.4}  (95% CI [{:.4}, {:.4}])",
                put_interval.point, put_interval.lower, put_interval.upper
            );
            if let Some((call_bs, put_bs)) = closed_form {
                println!("Closed form call: {call_bs:.4}");
                println!("Closed form put:  {put_bs:.4}");
            }
            println!("Mean terminal value: {mean_terminal:.4} (forward: {forward:.4})");
        }
        "json" => {
            let report = serde_json::json!({
                "call": call_interval,
                "put": put_interval,
                "closed_form": closed_form.map(|(call_bs, put_bs)| {
                    serde_json::json!({ "call": call_bs, "put": put_bs })
                }),
                "mean_terminal": mean_terminal,
                "forward": forward,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => bail!("unknown output format '{other}' (expected table or json)"),
    }

    Ok(())
}

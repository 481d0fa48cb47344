//! Sample command: repeated draws from one named distribution.

use clap::Args;

use crate::{CliError, Result};
use variate_core::{Sampler, DEFAULT_GAMMA_MAX};

/// Arguments for the `sample` command.
///
/// Parameter flags that a distribution does not use are ignored; flags it
/// does use fall back to the same defaults the demo command prints with.
#[derive(Args)]
pub struct SampleArgs {
    /// Distribution to draw from (uniform, gaussian, exponential,
    /// logarithmic, poisson, bernoulli, binomial, beta, gamma)
    #[arg(short, long)]
    pub distribution: String,

    /// Number of values to draw
    #[arg(short, long, default_value = "1")]
    pub count: usize,

    /// Lower bound (uniform)
    #[arg(long)]
    pub min: Option<i64>,

    /// Upper bound (uniform, exponential, poisson, gamma)
    #[arg(long)]
    pub max: Option<i64>,

    /// Mean (gaussian)
    #[arg(long)]
    pub mean: Option<f64>,

    /// Standard deviation (gaussian)
    #[arg(long)]
    pub stddev: Option<f64>,

    /// Rate parameter lambda (exponential, poisson)
    #[arg(long)]
    pub lambda: Option<f64>,

    /// Integer rate (logarithmic)
    #[arg(long)]
    pub rate: Option<i64>,

    /// Probability (bernoulli, binomial)
    #[arg(long)]
    pub proba: Option<f64>,

    /// Number of trials (binomial)
    #[arg(long)]
    pub trials: Option<u32>,

    /// Shape parameter alpha (beta, gamma)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Shape parameter beta (beta, gamma)
    #[arg(long)]
    pub beta: Option<f64>,
}

/// Draws `count` values from the named distribution and prints one per
/// line.
pub fn run(seed: Option<u64>, args: &SampleArgs) -> Result<()> {
    let mut sampler = super::build_sampler(seed);

    for _ in 0..args.count {
        let value = draw(&mut sampler, args)?;
        println!("{}", value);
    }

    Ok(())
}

/// Dispatches one draw to the operation named by `args.distribution`.
fn draw(sampler: &mut Sampler, args: &SampleArgs) -> Result<f64> {
    let value = match args.distribution.as_str() {
        "uniform" => sampler.uniform(args.min.unwrap_or(0), args.max.unwrap_or(100))?,
        "gaussian" => sampler.gaussian(args.mean.unwrap_or(50.0), args.stddev.unwrap_or(10.0)),
        "exponential" => {
            sampler.exponential(args.lambda.unwrap_or(2.0), args.max.unwrap_or(5))?
        }
        "logarithmic" => sampler.logarithmic(args.rate.unwrap_or(4))?,
        "poisson" => sampler.poisson(args.lambda.unwrap_or(10.0), args.max.unwrap_or(10))?,
        "bernoulli" => sampler.bernoulli(args.proba.unwrap_or(0.5))?,
        "binomial" => sampler.binomial(args.trials.unwrap_or(10), args.proba.unwrap_or(0.5)),
        "beta" => sampler.beta(args.alpha.unwrap_or(2.0), args.beta.unwrap_or(2.0))?,
        "gamma" => sampler.gamma(
            args.alpha.unwrap_or(4.0),
            args.beta.unwrap_or(2.5),
            args.max.unwrap_or(DEFAULT_GAMMA_MAX),
        )?,
        other => return Err(CliError::UnknownDistribution(other.to_string())),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(distribution: &str) -> SampleArgs {
        SampleArgs {
            distribution: distribution.to_string(),
            count: 1,
            min: None,
            max: None,
            mean: None,
            stddev: None,
            lambda: None,
            rate: None,
            proba: None,
            trials: None,
            alpha: None,
            beta: None,
        }
    }

    #[test]
    fn test_draw_dispatches_every_distribution() {
        let mut sampler = Sampler::from_seed(42);
        for name in [
            "uniform",
            "gaussian",
            "exponential",
            "logarithmic",
            "poisson",
            "bernoulli",
            "binomial",
            "beta",
            "gamma",
        ] {
            assert!(draw(&mut sampler, &args_for(name)).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_draw_rejects_unknown_distribution() {
        let mut sampler = Sampler::from_seed(42);
        let err = draw(&mut sampler, &args_for("cauchy")).unwrap_err();
        assert!(matches!(err, CliError::UnknownDistribution(_)));
    }

    #[test]
    fn test_draw_surfaces_domain_errors() {
        let mut sampler = Sampler::from_seed(42);
        let mut args = args_for("exponential");
        args.lambda = Some(-1.0);
        let err = draw(&mut sampler, &args).unwrap_err();
        assert!(matches!(err, CliError::Domain(_)));
    }
}

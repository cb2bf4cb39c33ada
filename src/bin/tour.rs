//! Walks through every idiom in the library once, logging each result.
//!
//! Usage: tour [-v...] [config.toml]

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use collection_idioms::generator::{count_up_to, span};
use collection_idioms::pipeline::{
    below, label_below, multiples_of, pair_up, scale, total, unzip_pairs, zip_keys, zip_longest,
};
use collection_idioms::task::run_delayed;
use collection_idioms::{
    divmod, letter_counts, set_default, BoundedCounter, ChainMap, OrderedMap, Result, Step,
    TourConfig,
};

/// Walk through every collection idiom once, logging each result
#[derive(Parser, Debug)]
#[command(name = "tour", version)]
struct Args {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML settings file; defaults apply when omitted
    config: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn run(config: &TourConfig) -> Result<()> {
    // Counter: two full traversals of the same instance
    let mut counter = BoundedCounter::new(config.maximum)?;
    let first: Vec<u64> = counter.begin_traversal().collect();
    let mut traversal = counter.begin_traversal();
    let mut second = Vec::new();
    while let Step::Value(value) = traversal.produce_next() {
        second.push(value);
    }
    log::info!("counter: {first:?} then {second:?}");

    let mut generated = count_up_to(config.maximum.unsigned_abs());
    let head = generated.next();
    log::info!("generator: first {head:?}, rest {:?}", generated.collect::<Vec<_>>());
    log::info!("span: first of 7..90 is {:?}", span(7, 90).next());

    let result = divmod(45, 6)?;
    log::info!("divmod: quotient {} remainder {}", result.quotient, result.remainder);

    let mut pets = HashMap::from([("pet", "Dog"), ("animal", "lion")]);
    set_default(&mut pets, "fruit", "grapes");
    set_default(&mut pets, "fruit", "apple");
    log::info!("set_default: fruit = {}", pets["fruit"]);

    let mut greetings: OrderedMap<&str, &str> = OrderedMap::new();
    for key in ["hi", "hi1", "hi2", "hi3"] {
        greetings.insert(key, "hello");
    }
    log::info!("ordered keys: {:?}", greetings.keys().collect::<Vec<_>>());

    let counts = letter_counts(&config.word);
    log::info!("letter counts of {:?}: {:?}", config.word, counts.most_common(counts.len()));

    let numbers: OrderedMap<&str, &str> = [("one", "1"), ("two", "2")].into_iter().collect();
    let letters: OrderedMap<&str, &str> = [("a", "A"), ("b", "B")].into_iter().collect();
    let chain = ChainMap::new(vec![numbers.clone(), letters.clone()]);
    log::info!("chain lookup a = {:?}", chain.get(&"a"));
    log::info!("zipped keys: {:?}", zip_keys(&numbers, &letters));

    let scaled = scale(&[56, 7, 33], 8)?;
    log::info!("scaled {scaled:?}, below 400 {:?}", below(&scaled, 400));
    log::info!("labelled {:?}", label_below(&scaled, 400));

    let scores = [85, 90, 88];
    log::info!("total {:?}, multiples of 5 {:?}", total(&scores)?, multiples_of(&scores, 5)?);

    let zipped = pair_up(["Alice", "Bob"], [85, 92, 78]);
    let (names, paired_scores) = unzip_pairs(zipped);
    log::info!("unzipped {names:?} {paired_scores:?}");
    log::info!(
        "zip_longest {:?}",
        zip_longest([1, 2], [85, 92, 78], config.fill)
    );

    let message = run_delayed("task 1 completed", config.delay())?;
    log::info!("async: {message}");

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    TourConfig::load(args.config.as_deref())
        .and_then(|config| run(&config))
        .inspect_err(|err| log::error!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_idioms::Error;

    #[test]
    fn test_parses_repeated_verbose_and_config_path() {
        let args = Args::try_parse_from(["tour", "-vv", "x.toml"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_long_verbose_flag_is_not_a_config_path() {
        let args = Args::try_parse_from(["tour", "--verbose"]).unwrap();
        assert_eq!(args.verbose, 1);
        assert_eq!(args.config, None);

        let args = Args::try_parse_from(["tour", "--verbose", "--verbose", "-v"]).unwrap();
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["tour"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["tour", "--colour"]).is_err());
    }

    #[test]
    fn test_run_fails_on_invalid_bound() {
        let config = TourConfig {
            maximum: 0,
            ..TourConfig::default()
        };
        assert!(matches!(run(&config), Err(Error::InvalidBound { maximum: 0 })));
    }

    #[test]
    fn test_run_succeeds_with_defaults() {
        let config = TourConfig {
            delay_ms: 1,
            ..TourConfig::default()
        };
        assert!(run(&config).is_ok());
    }
}

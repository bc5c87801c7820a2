use std::collections::BTreeSet;
use std::time::Duration;

use tracing::error;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    /// Overrides the persisted minimum click interval
    pub click_interval: Option<Duration>,
    pub datapath: Option<String>,
    pub debug: bool,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--debug" {
                res.debug = true;
            } else if arg == "--click-interval-ms" {
                i += 1;
                let Some(ms) = args.get(i) else {
                    error!("click-interval-ms argument missing?");
                    continue;
                };

                match ms.parse::<u64>() {
                    Ok(ms) => res.click_interval = Some(Duration::from_millis(ms)),
                    Err(err) => error!("failed to parse click-interval-ms '{ms}': {err}"),
                }
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }
}

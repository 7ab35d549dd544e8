// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cmd line of the validator

use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(about = "FRRConfiguration validator", long_about = None)]
pub(crate) struct Cmdline {
    #[arg(
        long,
        value_name = "FRRConfiguration path",
        help = "File with the FRRConfiguration in JSON or YAML. Read from stdin if unset"
    )]
    pub file: Option<String>,

    #[arg(
        long,
        value_name = "Log level",
        default_value_t = Level::WARN,
        help = "Level of the logs written to stderr"
    )]
    pub log_level: Level,
}

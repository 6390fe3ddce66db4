use clap::{value_parser, Parser};
use nvd_cpe_report::application::dto::OutputFormat;
use nvd_cpe_report::config::CliOverrides;
use nvd_cpe_report::cve_report::domain::feed_year::{FIRST_FEED_YEAR, LAST_FEED_YEAR};
use std::path::PathBuf;

/// Generate a CVE report for one CPE from the NVD yearly JSON feed
#[derive(Parser, Debug)]
#[command(name = "nvd-cpe-report")]
#[command(version)]
#[command(
    about = "Generate a CVE report for one CPE from the NVD yearly JSON feed",
    long_about = None
)]
pub struct Args {
    /// Feed year (e.g. 2020); may also come from the config file
    #[arg(
        short,
        long,
        value_parser = value_parser!(u16).range(FIRST_FEED_YEAR as i64..=LAST_FEED_YEAR as i64)
    )]
    pub year: Option<u16>,

    /// CPE prefix to match, with or without the leading "cpe:2.3:" (e.g. a:microsoft:edge)
    #[arg(short, long)]
    pub cpe: Option<String>,

    /// Output format: markdown (md) or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of the output directory
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the report to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Directory holding (or receiving) nvdcve-1.1-{year}.json [default: ./input]
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory the report file is written to [default: ./output]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Never download; fail if the feed is not in the input directory
    #[arg(long)]
    pub offline: bool,

    /// Path to a config file (default: ./nvd-cpe-report.config.yml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            year: self.year,
            cpe: self.cpe.clone(),
            format: self.format,
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            offline: self.offline,
        }
    }
}

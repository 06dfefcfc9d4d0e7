use clap::Parser;
use srcset_shim::probe::FixedProbe;
use srcset_shim::{dom, Result};
use std::path::PathBuf;
use url::Url;

/// Scan an HTML file for `img[srcset]` elements and print the source
/// rewrite plan a srcset-less runtime would apply.
#[derive(Parser, Debug)]
#[command(name = "srcset-shim", version, about)]
struct Args {
    /// HTML file to scan
    file: PathBuf,

    /// Viewport width in device-independent pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in device-independent pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Device pixel ratio; when omitted, falls back to a screen-width
    /// estimate and then 1.0
    #[arg(long)]
    dpr: Option<f32>,

    /// Physical screen width, used to estimate the pixel ratio when --dpr
    /// is not given
    #[arg(long)]
    screen_width: Option<u32>,

    /// Base URL to resolve relative candidate sources against
    #[arg(long)]
    base: Option<Url>,
}

fn run(args: Args) -> Result<()> {
    let html = std::fs::read_to_string(&args.file)?;

    let probe = FixedProbe {
        native_srcset: false,
        width: args.width,
        height: args.height,
        screen_width: args.screen_width,
        device_pixel_ratio: args.dpr,
    };

    let rewrites = dom::scan_with_probe(&probe, &html, args.base.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&rewrites)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("srcset-shim: {}", e);
        std::process::exit(1);
    }
}

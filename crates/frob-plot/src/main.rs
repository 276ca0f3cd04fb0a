// File: crates/frob-plot/src/main.rs
// Summary: Renders the Frobenius-norm and per-pixel error charts for rank-k image approximations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use log::info;

use chart_core::{theme, RenderOptions};

mod builtin;
mod data;
mod plan;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot rank-k approximation errors per image", long_about = None)]
struct CliArgs {
    /// Directory the charts are written to; must already exist.
    #[arg(short = 'o', long, value_name = "DIR", default_value = "../figs")]
    out_dir: PathBuf,

    /// CSV (`series,x,y`) replacing the built-in Frobenius norm table.
    #[arg(long, value_name = "CSV")]
    frobenius: Option<PathBuf>,

    /// CSV (`series,x,y`) replacing the built-in error-per-pixel table.
    #[arg(long = "per-pixel", value_name = "CSV")]
    per_pixel: Option<PathBuf>,

    /// Output resolution in dots per inch.
    #[arg(long, default_value_t = chart_core::types::DPI)]
    dpi: f32,

    /// Figure width in inches.
    #[arg(long, default_value_t = chart_core::types::FIGURE_WIDTH_IN)]
    width: f32,

    /// Figure height in inches.
    #[arg(long, default_value_t = chart_core::types::FIGURE_HEIGHT_IN)]
    height: f32,

    /// Color theme, one of the built-in presets.
    #[arg(long, default_value = "light", value_parser = theme_names())]
    theme: String,

    /// Also write an SVG next to each PNG.
    #[arg(long)]
    svg: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn theme_names() -> PossibleValuesParser {
    PossibleValuesParser::new(theme::presets().into_iter().map(|t| t.name))
}

impl CliArgs {
    fn render_options(&self) -> Result<RenderOptions> {
        let theme = theme::find(&self.theme).with_context(|| format!("unknown theme '{}'", self.theme))?;
        Ok(RenderOptions {
            width_in: self.width,
            height_in: self.height,
            dpi: self.dpi,
            theme,
            ..RenderOptions::default()
        })
    }

    fn sources(&self) -> plan::Sources {
        plan::Sources { frobenius: self.frobenius.clone(), per_pixel: self.per_pixel.clone() }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let opts = args.render_options()?;
    let (w, h) = opts.pixel_size();
    info!("canvas {}x{} px, theme {}, output dir {}", w, h, opts.theme.name, args.out_dir.display());

    for (name, request) in plan::requests(&args.sources(), &args.out_dir)? {
        request
            .render(&opts)
            .with_context(|| format!("rendering {} chart", name))?;
        println!("Wrote {}", request.output.display());

        if args.svg {
            let svg = request.output.with_extension("svg");
            request
                .chart()
                .render_to_svg(&opts, &svg)
                .with_context(|| format!("rendering {} chart as SVG", name))?;
            println!("Wrote {}", svg.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduces_defaults() {
        let args = CliArgs::try_parse_from(["frob-plot"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("../figs"));
        let opts = args.render_options().unwrap();
        assert_eq!(opts.pixel_size(), (1600, 1000));
        assert_eq!(opts.theme.name, "light");
        assert!(!args.svg);
    }

    #[test]
    fn flags_map_onto_render_options() {
        let args = CliArgs::try_parse_from([
            "frob-plot", "-o", "out", "--dpi", "100", "--width", "4", "--theme", "dark", "--svg", "-vv",
        ])
        .unwrap();
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert_eq!(args.verbose, 2);
        let opts = args.render_options().unwrap();
        assert_eq!(opts.pixel_size(), (400, 500));
        assert_eq!(opts.theme.name, "dark");
    }

    #[test]
    fn every_preset_theme_is_accepted() {
        for preset in theme::presets() {
            let args = CliArgs::try_parse_from(["frob-plot", "--theme", preset.name]).unwrap();
            assert_eq!(args.render_options().unwrap().theme.name, preset.name);
        }
    }

    #[test]
    fn unknown_theme_is_rejected_by_parser() {
        assert!(CliArgs::try_parse_from(["frob-plot", "--theme", "neon"]).is_err());
    }
}

extern crate whitted_raytracer as root;

use root::parsing::{get_settings, Config, RendererType};
use root::prelude::*;
use root::renderer::{NaiveRenderer, Renderer};

#[cfg(feature = "preview")]
use root::renderer::PreviewRenderer;

#[macro_use]
extern crate tracing;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(long, default_value = "output")]
    pub output_dir: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn construct_renderer(config: &Config, opts: &Opt) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new(&opts.output_dir)),
        #[cfg(feature = "preview")]
        RendererType::Preview => Box::new(PreviewRenderer::new()),
        #[cfg(not(feature = "preview"))]
        RendererType::Preview => {
            warn!("built without the preview feature, falling back to the naive renderer");
            Box::new(NaiveRenderer::new(&opts.output_dir))
        }
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = get_settings(&opts.config_file)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.render_settings.threads as usize)
        .build_global()
        .context("failed to build the rayon thread pool")?;

    let world = World::default_scene();
    let camera = World::default_camera();
    let renderer = construct_renderer(&config, &opts);

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    renderer.render(world, camera, &config)
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&opts.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_an_error() {
        let opts = Opt {
            config_file: "does/not/exist.toml".to_string(),
            output_dir: "output".to_string(),
            dry_run: true,
            log_level: "info".to_string(),
        };
        let error = run(opts).unwrap_err();
        assert!(format!("{:?}", error).contains("does/not/exist.toml"));
    }
}

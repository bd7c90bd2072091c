// SPDX-License-Identifier: MPL-2.0
use lightbox_dismiss::app::{self, script, App};
use lightbox_dismiss::config::{self, Config};
use lightbox_dismiss::domain::media::MediaId;
use lightbox_dismiss::error::{Error, Result};
use lightbox_dismiss::infrastructure::{TomlCatalog, TracingHost};
use lightbox_dismiss::logging;
use lightbox_dismiss::ui::gallery;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
Usage: lightbox_dismiss [OPTIONS]

Options:
  --config PATH   Settings file (default: user config directory)
  --catalog PATH  Media catalog to load
  --query TEXT    Filter the gallery
  --open ID       Open an item in the viewer
  --script PATH   Replay an input script against the open viewer
  -h, --help      Print this help
";

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    catalog: Option<PathBuf>,
    query: Option<String>,
    open: Option<String>,
    script: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        config: args.opt_value_from_str("--config")?,
        catalog: args.opt_value_from_str("--catalog")?,
        query: args.opt_value_from_str("--query")?,
        open: args.opt_value_from_str("--open")?,
        script: args.opt_value_from_str("--script")?,
    }))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    logging::init(config.log_filter());

    let catalog_path = args
        .catalog
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| Error::Config("no catalog given (use --catalog)".into()))?;

    let host = Arc::new(TracingHost::new());
    let mut app = App::new(host.clone(), &config);
    app.load(&TomlCatalog::new(catalog_path));

    if let Some(query) = args.query {
        app.update(app::Message::Gallery(gallery::Message::QueryChanged(query)));
    }

    match app.gallery().status() {
        gallery::Status::Ready => {
            for item in app.gallery().visible() {
                println!("{}\t{}", item.id(), item.title());
            }
        }
        status => println!("Gallery: {status:?}"),
    }

    let Some(id) = args.open else {
        return Ok(());
    };
    app.update(app::Message::Open(MediaId::new(id)));

    if let Some(path) = args.script {
        let script = script::load(&path)?;
        script::run(&script, app.driver_mut()).await;
    }

    let viewer = app.viewer();
    let feedback = viewer.feedback();
    println!("State: {:?}", viewer.state());
    println!(
        "Feedback: progress={:.3} overlay={:.3} translate=({:.1}, {:.1}) scale={:.3} opacity={:.3}",
        feedback.progress.value(),
        feedback.overlay_alpha,
        feedback.translate_x,
        feedback.translate_y,
        feedback.scale,
        feedback.content_opacity,
    );
    println!(
        "Host: scroll locked={} cancel key={}",
        host.is_scroll_locked(),
        host.is_listening()
    );

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

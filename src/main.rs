use clap::Parser;
use page_report::utils::report_file_name;
use page_report::{PageReport, ReportConfig, ReportError, render_report, save_report};

mod args;
use args::{Args, convert_format};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging, RUST_LOG still takes precedence
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args).await {
        ::log::error!("Page report for {} failed: {}", args.url, e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: &Args) -> Result<(), ReportError> {
    let config = match &args.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    let config = args.apply_overrides(config);
    let format = convert_format(args.format);

    let start_time = std::time::Instant::now();
    let report = PageReport::new(&args.url)
        .with_config(config.clone())
        .generate()
        .await?;
    ::log::debug!(
        "Analysed {} in {:.2} seconds",
        args.url,
        start_time.elapsed().as_secs_f64()
    );

    let rendered = render_report(&report, format, &config.render)?;

    if let Some(path) = &args.output {
        save_report(&rendered, path)?;
    } else if args.save {
        save_report(&rendered, report_file_name(&args.url, format))?;
    } else {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

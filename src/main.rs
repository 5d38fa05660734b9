use asn_netblock_summary::config::Config;
use asn_netblock_summary::input::{read_discovered_names, read_text_facts};
use asn_netblock_summary::output::{desired_addr_types, output_line_parts, Palette};
use asn_netblock_summary::{generate_report, Report};
use colored::Colorize;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

const LOG_CONFIG: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(log::LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let lines = match &config.records_file {
        Some(path) => read_text_facts(path)?,
        None => Vec::new(),
    };
    let mut names = match &config.names_file {
        Some(path) => read_discovered_names(path)?,
        None => Vec::new(),
    };
    for name in names.iter_mut() {
        name.addresses = desired_addr_types(&name.addresses, config.ipv4, config.ipv6);
    }

    let report = Arc::new(Report::new(&lines, &names));

    let mut stdout = std::io::stdout().lock();
    for name in &names {
        let (name, ips) = output_line_parts(name, true, config.demo);
        writeln!(stdout, "{name} {ips}")?;
    }
    drop(stdout);

    let saved = tokio::task::spawn_blocking(move || {
        let date = chrono::Local::now().date_naive();
        let mut stderr = std::io::stderr().lock();
        generate_report(
            report,
            &mut stderr,
            Palette::new(config.color),
            config.demo,
            &config.output_dir,
            &config.target,
            date,
        )
    })
    .await?;

    match saved {
        Ok(path) => eprintln!("{}", format!("\n[+] Details saved to {}", path.display()).green()),
        Err(e) => eprintln!("{}", format!("\n[!] Error saving file: {e}").red()),
    }

    log::info!("#End main()");
    Ok(())
}

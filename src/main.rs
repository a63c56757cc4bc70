use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use cropkit::utils::logger::Logger;
use cropkit::commands::{CommandFactory, CropkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CropKit")
        .version("0.1")
        .about("Detect and crop regions of interest in raster images")
        .arg(
            Arg::new("input")
                .help("Input image file (or directory in batch mode)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract the detected region to an image file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Process every matching image in the input directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Output directory for batch extraction")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("detector")
                .long("detector")
                .help("Detector used to locate regions (contour or manual)")
                .value_name("NAME")
                .default_value("contour")
                .required(false),
        )
        .arg(
            Arg::new("fallback")
                .long("fallback")
                .help("Secondary detector tried when the primary finds nothing")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Manual region for the manual detector (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .required(false),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("Extraction profile (default, tight, wide)")
                .value_name("NAME")
                .default_value("default")
                .required(false),
        )
        .arg(
            Arg::new("padding")
                .long("padding")
                .help("Padding as a fraction of the region width (overrides the profile)")
                .value_name("RATIO")
                .required(false),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Extract every detected region to numbered output files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .help("Regex for selecting files in batch mode")
                .value_name("REGEX")
                .required(false),
        )
        .get_matches();

    let log_file = "cropkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    if let Err(e) = Logger::init_global_logger("cropkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CropkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

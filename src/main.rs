// src/main.rs

use std::env;
use std::error::Error;

use log::info;

use pose_log_render::body_parts::CoordinateFrame;
use pose_log_render::config::RunConfig;
use pose_log_render::plot_functions::render_all_plots;
use pose_log_render::process_take;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <take_dir> [file_prefix] [max_frames] [pix|cam|rob]");
    eprintln!("  file_prefix  substring of the take's log file names (default: \"raw \")");
    eprintln!("  max_frames   number of log files analysed (default: 10)");
    eprintln!("  pix|cam|rob  coordinate frame used for axis labels (default: cam)");
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 5 || args[1] == "-h" || args[1] == "--help" {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut config = RunConfig::new(&args[1]);
    if let Some(prefix) = args.get(2) {
        config = config.with_file_prefix(prefix.as_str());
    }
    if let Some(max_frames) = args.get(3) {
        let max_frames: usize = max_frames
            .parse()
            .map_err(|e| format!("Invalid max_frames '{max_frames}': {e}"))?;
        config = config.with_max_frames(max_frames);
    }
    if let Some(postfix) = args.get(4) {
        let frame = CoordinateFrame::from_postfix(postfix).ok_or_else(|| {
            format!("Invalid coordinate frame '{postfix}': expected pix, cam or rob")
        })?;
        config = config.with_coordinate_frame(frame);
    }

    let (scan, analysis) = process_take(&config)?;
    render_all_plots(&config, &analysis)?;

    info!(
        "Done: {} frame(s) from '{}'.",
        scan.frames_processed,
        config.take_dir().display()
    );
    Ok(())
}

// src/main.rs

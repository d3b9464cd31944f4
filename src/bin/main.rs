use clap::Parser;
use css_layer_split::{layer_file_name, split_layers, write_layers};
use std::io::Read;
use std::path::PathBuf;

/// Split a stylesheet read from stdin into one .scss file per @layer block
#[derive(Parser)]
#[command(name = "css-layer-split")]
#[command(version)]
#[command(about = "Split a stylesheet read from stdin into one .scss file per @layer block")]
struct Cli {
    /// Directory the <layer>.scss files are written to (must exist)
    out_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut css = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut css) {
        eprintln!("Error: Failed to read stylesheet from stdin: {}", e);
        std::process::exit(1);
    }
    log::debug!("Read {} bytes from stdin", css.len());

    let split = match split_layers(&css) {
        Ok(split) => split,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(diagnostic) = split.diagnostic() {
        eprintln!("Warning: {}", diagnostic);
    }

    let written = write_layers(&split.layers, &cli.out_dir, |key, _| {
        println!("Generated file: {}", layer_file_name(key));
    });
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

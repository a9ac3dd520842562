use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");

    // Copy config.toml next to the built binary so the exe-dir config
    // lookup finds it
    let config_path = Path::new("config.toml");
    let dest_path = Path::new(&out_dir)
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .expect("unexpected OUT_DIR layout")
        .join("config.toml");

    fs::copy(config_path, dest_path).expect("failed to copy config.toml");

    println!("cargo:rerun-if-changed=config.toml");
}

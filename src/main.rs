//! Vagrant Box Bundler - repackages VirtualBox OVF exports as Vagrant boxes.
//!
//! Reads the base MAC address from the OVF, renders a Vagrantfile around it,
//! and archives everything into a `.box` at the requested output path.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match vagrant_box_bundler::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

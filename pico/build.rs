//! Build script for life-pico
//!
//! Puts `memory.x` on the linker search path and adds the cortex-m-rt,
//! defmt and RP2350 link scripts.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::{env, io};

fn main() -> io::Result<()> {
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());
    File::create(out.join("memory.x"))?.write_all(include_bytes!("memory.x"))?;
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    // Only the firmware target links against the RP2350 scripts
    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() == "arm" {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
    Ok(())
}

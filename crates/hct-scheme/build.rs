use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear, scaled to 0..=100
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    let linear = if srgb <= 0.040449936 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    };
    linear * 100.0
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value
    writeln!(file, "/// Linearized sRGB channel values (0..=100), indexed by 8-bit value").unwrap();
    writeln!(file, "pub static SRGB_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let linear = srgb_to_linear_exact(i as f64 / 255.0);
        writeln!(file, "    {linear:?},").unwrap();
    }
    writeln!(file, "];").unwrap();

    writeln!(file).unwrap();

    // Linear values halfway between adjacent 8-bit codes. The HCT solver
    // bisects along these planes, since no two of them round to the same byte.
    writeln!(file, "/// Linear values (0..=100) of the planes between adjacent 8-bit codes").unwrap();
    writeln!(file, "pub static CRITICAL_PLANES: [f64; 255] = [").unwrap();
    for i in 0..255 {
        let linear = srgb_to_linear_exact((i as f64 + 0.5) / 255.0);
        writeln!(file, "    {linear:?},").unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}

use serde_json::json;
use std::path::PathBuf;
use vmd_motion::{CameraRig, MorphImportSettings, MotionData};

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut positional = Vec::<String>::new();
    let mut rig = CameraRig::default();
    let mut max_time: f32 = f32::MAX;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--distance-scale" => {
                rig.distance_scale_bias = parse_arg(&args, i + 1, "--distance-scale");
                i += 2;
            }
            "--fov-scale" => {
                rig.fov_scale_bias = parse_arg(&args, i + 1, "--fov-scale");
                i += 2;
            }
            "--max-time" => {
                max_time = parse_arg(&args, i + 1, "--max-time");
                i += 2;
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let Some(path) = positional.first().map(PathBuf::from) else {
        eprintln!(
            "usage: vmd_dump <file.vmd> [--distance-scale N] [--fov-scale N] [--max-time SECONDS]"
        );
        std::process::exit(2);
    };

    let motion = match MotionData::from_path(&path) {
        Ok(motion) => motion,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            std::process::exit(1);
        }
    };
    let camera_keys = match motion.camera_keys(&rig) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            std::process::exit(1);
        }
    };
    let morph_curves = MorphImportSettings::default().morph_curves(&motion, max_time);

    let out = json!({
        "path": path.display().to_string(),
        "target_model_name": &motion.target_model_name,
        "max_frame": motion.max_frame(),
        "rig": rig,
        "camera_keys": camera_keys,
        "morph_curves": morph_curves,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).expect("serialize dump")
    );
}

fn parse_arg(args: &[String], index: usize, flag: &str) -> f32 {
    args.get(index)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| panic!("{flag} expects a number"))
}

use argh::FromArgs;
use lanedet::lane::{steering_q, steering_word, LaneLine, LanePair};
use lanedet::trig::COS_TABLE;
use lanedet::{Geometry, THETAS};
use lanedet_cli::{hexio, init_tracing};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;
use tracing::info;

const NUM_SAMPLES: usize = 1000;
const RNG_SEED: u64 = 12345;

/// Draws a theta index whose quantized cosine is non-zero. Theta 90 is
/// rejected up front: the hardware bench never drives a singular cosine.
fn theta_with_cosine(rng: &mut SmallRng) -> u32 {
    loop {
        let theta = rng.gen_range(0..THETAS);
        if COS_TABLE[theta] != 0 {
            return theta as u32;
        }
    }
}

/// Generate fixed-seed (rho, theta) index vectors for the steering unit and
/// the golden steering outputs to compare a hardware run against.
#[derive(FromArgs)]
struct Cli {
    /// directory the vector files are written into
    #[argh(option, default = "String::from(\".\")")]
    out_dir: String,
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = argh::from_env();
    if let Err(error) = run(cli) {
        tracing::error!("{error}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new(&cli.out_dir);
    fs::create_dir_all(out_dir)?;

    let geom = Geometry::LOW_RES;
    let mut rng = SmallRng::seed_from_u64(RNG_SEED);

    let mut left_rho = Vec::with_capacity(NUM_SAMPLES);
    let mut right_rho = Vec::with_capacity(NUM_SAMPLES);
    let mut left_theta = Vec::with_capacity(NUM_SAMPLES);
    let mut right_theta = Vec::with_capacity(NUM_SAMPLES);
    for _ in 0..NUM_SAMPLES {
        left_rho.push(rng.gen_range(0..geom.rhos) as u32);
        right_rho.push(rng.gen_range(0..geom.rhos) as u32);
        left_theta.push(theta_with_cosine(&mut rng));
        right_theta.push(theta_with_cosine(&mut rng));
    }

    hexio::write_column(&out_dir.join("left_rho_in.txt"), &left_rho)?;
    hexio::write_column(&out_dir.join("right_rho_in.txt"), &right_rho)?;
    hexio::write_column(&out_dir.join("left_theta_in.txt"), &left_theta)?;
    hexio::write_column(&out_dir.join("right_theta_in.txt"), &right_theta)?;
    info!("wrote {NUM_SAMPLES} input vectors to {}", out_dir.display());

    // Read the vectors back so the golden outputs are derived from the files
    // the bench will consume, not from program state.
    let left_rho = hexio::read_column(&out_dir.join("left_rho_in.txt"))?;
    let right_rho = hexio::read_column(&out_dir.join("right_rho_in.txt"))?;
    let left_theta = hexio::read_column(&out_dir.join("left_theta_in.txt"))?;
    let right_theta = hexio::read_column(&out_dir.join("right_theta_in.txt"))?;
    for &value in left_theta.iter().chain(&right_theta) {
        if value as usize >= THETAS {
            return Err(format!("theta index {value:x} out of range").into());
        }
    }
    for &value in left_rho.iter().chain(&right_rho) {
        if value as usize >= geom.rhos {
            return Err(format!("rho index {value:x} out of range").into());
        }
    }

    let samples = left_rho
        .len()
        .min(right_rho.len())
        .min(left_theta.len())
        .min(right_theta.len());
    let mut steering = Vec::with_capacity(samples);
    for i in 0..samples {
        let lanes = LanePair {
            left: LaneLine {
                rho_idx: left_rho[i] as i32,
                theta_idx: left_theta[i] as usize,
            },
            right: LaneLine {
                rho_idx: right_rho[i] as i32,
                theta_idx: right_theta[i] as usize,
            },
        };
        let word = match steering_q(&geom, &lanes) {
            Ok(q) => steering_word(q),
            Err(_) => 0,
        };
        steering.push(u32::from(word));
    }

    hexio::write_column(&out_dir.join("steering_cmp.txt"), &steering)?;
    info!(
        "wrote {} golden steering words to {}",
        steering.len(),
        out_dir.display()
    );
    Ok(())
}

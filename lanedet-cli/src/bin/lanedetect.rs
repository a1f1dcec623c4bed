use argh::FromArgs;
use lanedet::pipeline::{analyze_frame, PipelineConfig};
use lanedet_cli::{bmp, draw, hexio, init_tracing, output_dir};
use std::fs;
use std::path::Path;
use tracing::info;

/// Detect lane lines in a 24-bit BMP frame and emit the debug images and
/// hardware comparison vectors next to it, under out/<stem>/.
#[derive(FromArgs)]
struct Cli {
    /// the input frame (24-bit BMP, 160x120 or 720x540)
    #[argh(positional)]
    input: String,
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
    let input = Path::new(&cli.input);

    let frame = bmp::read(input)?;
    info!("loaded {}: {}x{}", input.display(), frame.width, frame.height);

    let config = match (frame.width, frame.height) {
        (160, 120) => PipelineConfig::hardware(),
        (720, 540) => PipelineConfig::high_res(),
        (w, h) => return Err(format!("unsupported frame dimensions {w}x{h}").into()),
    };

    let out = output_dir(input);
    fs::create_dir_all(&out)?;

    let analysis = analyze_frame(&config, &frame.data)?;

    for (name, buffer) in [
        ("grayscale.bmp", &analysis.grayscale),
        ("blurred.bmp", &analysis.blurred),
        ("edges.bmp", &analysis.edges),
        ("nms.bmp", &analysis.nms),
        ("thresholded.bmp", &analysis.thresholded),
        ("roi.bmp", &analysis.roi),
    ] {
        bmp::write_gray(&out.join(name), &frame.header, buffer)?;
    }

    let mut overlay = frame.data.clone();
    let indices = match &analysis.lanes {
        Ok(lanes) => {
            for line in [&lanes.left, &lanes.right] {
                let endpoints = draw::lane_endpoints(&config.geometry, line);
                draw::draw_line(
                    &mut overlay,
                    frame.width,
                    frame.height,
                    endpoints,
                    [0, 0, 255],
                );
            }
            [
                lanes.left.rho_idx,
                lanes.left.theta_idx as i32,
                lanes.right.rho_idx,
                lanes.right.theta_idx as i32,
            ]
        }
        Err(error) => {
            info!("no lane estimate: {error}");
            [-1; 4]
        }
    };
    bmp::write_color(&out.join("overlay.bmp"), &frame.header, &overlay)?;

    for (name, value) in [
        ("left_rho_idx_cmp.txt", indices[0]),
        ("left_theta_idx_cmp.txt", indices[1]),
        ("right_rho_idx_cmp.txt", indices[2]),
        ("right_theta_idx_cmp.txt", indices[3]),
    ] {
        hexio::write_column(&out.join(name), &[value as u32])?;
    }
    hexio::write_column(&out.join("steering_cmp.txt"), &[analysis.steering.into()])?;

    info!(
        "wrote artifacts to {}, steering word {:#05x}",
        out.display(),
        analysis.steering
    );
    Ok(())
}

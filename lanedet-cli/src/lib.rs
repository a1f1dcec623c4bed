//! Harness pieces shared by the `lanedetect` and `lanevec` binaries: BMP
//! reading and writing, hex-column vector files, debug-line rasterization
//! and output-directory layout. The detection core never sees any of this.

use std::path::{Path, PathBuf};

pub mod bmp;
pub mod draw;
pub mod hexio;

/// Output directory for a given input frame: a sibling `out/<stem>/`.
pub fn output_dir(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut dir = match input.parent() {
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::new(),
    };
    dir.push("out");
    dir.push(stem);
    dir
}

/// Installs the fmt subscriber, filtered by `RUST_LOG` with an `info` floor.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_is_a_sibling_of_the_input() {
        assert_eq!(
            output_dir(Path::new("frames/testlane1.bmp")),
            Path::new("frames/out/testlane1")
        );
        assert_eq!(output_dir(Path::new("lane.bmp")), Path::new("out/lane"));
        assert_eq!(
            output_dir(Path::new("/data/run7/frame.bmp")),
            Path::new("/data/run7/out/frame")
        );
    }
}

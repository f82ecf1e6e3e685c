use clap::Args;

use gasket_winit_glutin::logging::LoggingConfig;

/// Options common to both demos.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Window width in pixels
    #[arg(long, default_value_t = 500)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Log filter in env_logger syntax (falls back to RUST_LOG, then "info")
    #[arg(long)]
    pub log: Option<String>,
}

impl WindowArgs {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..LoggingConfig::default()
        }
    }
}

fn parse_num_points(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("at least one point is required".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Sierpinski gasket drawn with randomly generated points
#[derive(clap::Parser, Debug)]
#[command(name = "gasket")]
pub struct GasketArgs {
    /// Number of points generated at startup
    #[arg(long, default_value_t = gasket_gl_core::gasket::DEFAULT_NUM_POINT,
          value_parser = parse_num_points)]
    pub num_points: usize,

    /// Seed of the random vertex choice; entropy from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub window: WindowArgs,
}

/// Wireframe drone with spinning rotors
#[derive(clap::Parser, Debug)]
#[command(name = "drone")]
pub struct DroneArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn gasket_defaults() {
        let args = GasketArgs::try_parse_from(["gasket"]).unwrap();
        assert_eq!(args.num_points, 1000);
        assert_eq!(args.seed, None);
        assert_eq!((args.window.width, args.window.height), (500, 500));
        assert!(args.window.logging_config().env_filter.is_none());
    }

    #[test]
    fn gasket_overrides() {
        let args = GasketArgs::try_parse_from([
            "gasket",
            "--num-points",
            "16",
            "--seed",
            "9",
            "--width",
            "800",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.num_points, 16);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.window.width, 800);
        assert_eq!(
            args.window.logging_config().env_filter.as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn zero_points_is_rejected() {
        assert!(GasketArgs::try_parse_from(["gasket", "--num-points", "0"]).is_err());
    }

    #[test]
    fn drone_defaults() {
        let args = DroneArgs::try_parse_from(["drone"]).unwrap();
        assert_eq!(args.window.height, 500);
    }
}

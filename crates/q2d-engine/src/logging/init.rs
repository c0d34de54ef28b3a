use std::sync::Once;

/// Options for [`init_logging`].
///
/// `env_filter` takes `env_logger` directives. `"q2d_engine=trace"` shows
/// every clipped-away draw, `"q2d_engine=warn"` only misuse such as
/// unbalanced pops.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the process logger, at most once.
///
/// The filter comes from `config.env_filter`, else `RUST_LOG`, else `info`.
/// Later calls do nothing. If the host already installed a logger it is
/// left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("q2d_engine=warn".into()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());

        // Engine warnings after init must not disturb drawing.
        let mut canvas = crate::canvas::Canvas::new(2, 2).unwrap();
        canvas.pop_clip();
        canvas.pop_sub_image();
        assert_eq!(canvas.depth(), 1);
    }
}
